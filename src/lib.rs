//! A segment-wise radix tree for routing paths with named parameters.
//!
//! ```rust
//! use segmatch::Node;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut tree = Node::new();
//! tree.insert("home", "Welcome!");
//! tree.insert("users/:id", "A User");
//!
//! let matched = tree.at("users/978")?;
//! assert_eq!(matched.params.get("id"), Some("978"));
//! assert_eq!(*matched.value, "A User");
//! # Ok(())
//! # }
//! ```
//!
//! # Parameters
//!
//! Patterns are split on `/`. A segment starting with `:` is a named
//! parameter and matches any single segment at that position:
//!
//! ```rust
//! # use segmatch::Node;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut tree = Node::new();
//! tree.insert("users/:id", true);
//!
//! assert!(*tree.at("users/1")?.value);
//! assert!(*tree.at("users/23")?.value);
//! assert!(tree.at("users").is_err());
//! assert!(tree.at("users/1/posts").is_err());
//! # Ok(())
//! # }
//! ```
//!
//! No normalization happens: `/users/:id` has an empty first segment and
//! only matches paths that also start with `/`.
//!
//! # Routing Priority
//!
//! At every segment a literal child is preferred over the parameter slot.
//! Matching is a single forward pass and never backtracks, so an earlier
//! literal choice is final even if a parameter branch would have matched the
//! rest of the path:
//!
//! ```rust
//! # use segmatch::Node;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut tree = Node::new();
//! tree.insert("users/:id", "A User");
//! tree.insert("users/new", "New User");
//! tree.insert("a/:x/c", "param");
//! tree.insert("a/b/d", "literal");
//!
//! assert_eq!(*tree.at("users/new")?.value, "New User");
//! assert_eq!(*tree.at("users/7")?.value, "A User");
//! assert!(tree.at("a/b/c").is_err());
//! # Ok(())
//! # }
//! ```
//!
//! # Merging
//!
//! Two independently built trees can be combined with [`Node::merge`]. Where
//! both trees define a value or a parameter name at the same position, the
//! receiver wins.
#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod error;
mod params;
mod tree;

pub use error::MatchError;
pub use params::{Params, ParamsIter};
pub use tree::{Match, Node};
