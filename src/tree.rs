use crate::{MatchError, Params};

use std::mem;

/// Separates the segments of patterns and paths.
const SEPARATOR: char = '/';

/// Marks a pattern segment as a named parameter.
const PARAM_MARKER: char = ':';

/// A successfully matched route.
#[derive(Debug)]
pub struct Match<'k, 'v, V> {
    /// The value stored under the matched pattern.
    pub value: V,
    /// The route parameters. See [parameters](crate::Params) for more details.
    pub params: Params<'k, 'v>,
}

/// A node in the segment tree.
///
/// The root node is the tree. Every other node is reached through exactly
/// one literal label or through its parent's parameter slot.
#[derive(Debug, Clone)]
pub struct Node<T> {
    value: Option<T>,
    // Literal children, in the order their labels were first inserted.
    statics: Vec<(String, Node<T>)>,
    // The single child matching any segment not found in `statics`.
    wildcard: Option<Box<Wildcard<T>>>,
}

#[derive(Debug, Clone)]
struct Wildcard<T> {
    // The parameter name, without the leading marker. May be empty.
    name: String,
    node: Node<T>,
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self {
            value: None,
            statics: Vec::new(),
            wildcard: None,
        }
    }
}

impl<T> Node<T> {
    /// Construct an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value under the given pattern.
    ///
    /// The pattern is split on `/`, and every segment starting with `:` is a
    /// named parameter. If a value was already stored under the exact same
    /// pattern it is replaced and returned.
    ///
    /// ```rust
    /// use segmatch::Node;
    ///
    /// let mut tree = Node::new();
    /// assert_eq!(tree.insert("users/:id", 1), None);
    /// assert_eq!(tree.insert("users/:id", 2), Some(1));
    /// ```
    pub fn insert(&mut self, pattern: impl AsRef<str>, value: T) -> Option<T> {
        let pattern = pattern.as_ref();
        let mut current = self;

        for segment in pattern.split(SEPARATOR) {
            current = match segment.strip_prefix(PARAM_MARKER) {
                Some(name) => current.wildcard_or_insert(name),
                None => current.static_or_insert(segment),
            };
        }

        let replaced = current.value.replace(value);
        if replaced.is_some() {
            tracing::trace!(pattern, "replaced existing value");
        }

        replaced
    }

    /// Tries to find a value in the tree that matches the given path.
    ///
    /// ```rust
    /// use segmatch::Node;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut tree = Node::new();
    /// tree.insert("home", "Welcome!");
    ///
    /// let matched = tree.at("home")?;
    /// assert_eq!(*matched.value, "Welcome!");
    /// # Ok(())
    /// # }
    /// ```
    pub fn at<'k, 'v>(&'k self, path: &'v str) -> Result<Match<'k, 'v, &'k T>, MatchError> {
        let mut params = Params::new();
        let mut current = self;

        for segment in path.split(SEPARATOR) {
            current = match current.statics.iter().find(|(label, _)| label == segment) {
                Some((_, child)) => child,
                None => {
                    let wildcard = current.wildcard.as_deref().ok_or(MatchError::NotFound)?;
                    if !wildcard.name.is_empty() {
                        params.insert(&wildcard.name, segment);
                    }
                    &wildcard.node
                }
            };
        }

        let value = current.value.as_ref().ok_or(MatchError::NotFound)?;
        Ok(Match { value, params })
    }

    /// Tries to find a value in the tree that matches the given path,
    /// returning a mutable reference.
    ///
    /// ```rust
    /// use segmatch::Node;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut tree = Node::new();
    /// tree.insert("users/:id", 0);
    ///
    /// *tree.at_mut("users/1")?.value += 1;
    /// *tree.at_mut("users/2")?.value += 1;
    ///
    /// assert_eq!(*tree.at("users/3")?.value, 2);
    /// # Ok(())
    /// # }
    /// ```
    pub fn at_mut<'k, 'v>(
        &'k mut self,
        path: &'v str,
    ) -> Result<Match<'k, 'v, &'k mut T>, MatchError> {
        let mut params = Params::new();
        let mut current = self;

        for segment in path.split(SEPARATOR) {
            let Node {
                statics, wildcard, ..
            } = current;

            current = match statics.iter_mut().find(|(label, _)| label == segment) {
                Some((_, child)) => child,
                None => {
                    let Wildcard { name, node } =
                        wildcard.as_deref_mut().ok_or(MatchError::NotFound)?;
                    if !name.is_empty() {
                        params.insert(name, segment);
                    }
                    node
                }
            };
        }

        let value = current.value.as_mut().ok_or(MatchError::NotFound)?;
        Ok(Match { value, params })
    }

    /// Merge another tree into this one, returning the combined tree.
    ///
    /// The result matches every path either tree matched. Where both trees
    /// store a value at the same position, or name the same parameter slot
    /// differently, this tree wins. Subtrees present in only one tree are
    /// moved over unchanged.
    ///
    /// ```rust
    /// use segmatch::Node;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut users = Node::new();
    /// users.insert("users/:id", "user");
    ///
    /// let mut posts = Node::new();
    /// posts.insert("users/:name", "ignored");
    /// posts.insert("users/:name/posts", "posts");
    ///
    /// let tree = users.merge(posts);
    ///
    /// let matched = tree.at("users/1")?;
    /// assert_eq!(*matched.value, "user");
    ///
    /// let matched = tree.at("users/1/posts")?;
    /// assert_eq!(*matched.value, "posts");
    /// assert_eq!(matched.params.get("id"), Some("1"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn merge(self, other: Node<T>) -> Node<T> {
        let Node {
            value,
            mut statics,
            wildcard,
        } = self;

        for (label, theirs) in other.statics {
            match statics.iter().position(|(existing, _)| *existing == label) {
                Some(i) => {
                    let ours = mem::take(&mut statics[i].1);
                    statics[i].1 = ours.merge(theirs);
                }
                None => statics.push((label, theirs)),
            }
        }

        let wildcard = match (wildcard, other.wildcard) {
            (Some(ours), Some(theirs)) => {
                if ours.name != theirs.name {
                    tracing::debug!(
                        kept = %ours.name,
                        dropped = %theirs.name,
                        "conflicting parameter names in merge"
                    );
                }

                let Wildcard { name, node } = *ours;
                Some(Box::new(Wildcard {
                    name,
                    node: node.merge(theirs.node),
                }))
            }
            (ours, None) => ours,
            (None, theirs) => theirs,
        };

        Node {
            value: value.or(other.value),
            statics,
            wildcard,
        }
    }

    // Returns the literal child with the given label, creating it if absent.
    fn static_or_insert(&mut self, label: &str) -> &mut Node<T> {
        let i = match self.statics.iter().position(|(existing, _)| existing == label) {
            Some(i) => i,
            None => {
                tracing::trace!(label, "inserting literal node");
                self.statics.push((label.to_owned(), Node::new()));
                self.statics.len() - 1
            }
        };

        &mut self.statics[i].1
    }

    // Returns the parameter child, creating it if absent. An existing slot
    // keeps the name it was created with.
    fn wildcard_or_insert(&mut self, name: &str) -> &mut Node<T> {
        let wildcard = self.wildcard.get_or_insert_with(|| {
            tracing::trace!(name, "inserting parameter node");
            Box::new(Wildcard {
                name: name.to_owned(),
                node: Node::new(),
            })
        });

        &mut wildcard.node
    }
}

/// Test helpers.
#[cfg(feature = "__test_helpers")]
impl<T> Node<T> {
    /// Checks that literal labels are unique per node and that none of them
    /// could have been parsed as a parameter. Returns the path of the first
    /// offending label.
    pub fn check_labels(&self) -> Result<(), String> {
        self.check_labels_at(String::new())
    }

    fn check_labels_at(&self, prefix: String) -> Result<(), String> {
        for (i, (label, child)) in self.statics.iter().enumerate() {
            let path = format!("{}{}{}", prefix, label, SEPARATOR);

            if label.starts_with(PARAM_MARKER)
                || self.statics[..i].iter().any(|(seen, _)| seen == label)
            {
                return Err(path);
            }

            child.check_labels_at(path)?;
        }

        if let Some(wildcard) = &self.wildcard {
            let path = format!("{}{}{}{}", prefix, PARAM_MARKER, wildcard.name, SEPARATOR);
            wildcard.node.check_labels_at(path)?;
        }

        Ok(())
    }
}
