/// A failed match attempt.
///
/// ```
/// use segmatch::{MatchError, Node};
///
/// let mut tree = Node::new();
/// tree.insert("home", "Welcome!");
/// tree.insert("blog/:post", "Our blog.");
///
/// // no routes match
/// if let Err(err) = tree.at("foobar") {
///     assert_eq!(err, MatchError::NotFound);
/// }
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy, thiserror::Error)]
pub enum MatchError {
    /// No matching route was found.
    #[error("matching route not found")]
    NotFound,
}
