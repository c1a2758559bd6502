use std::{fmt, slice};

/// A single captured parameter, consisting of a key and a value.
#[derive(PartialEq, Eq, Clone, Copy)]
struct Param<'k, 'v> {
    // The key borrows from the tree, the value from the matched path.
    key: &'k str,
    value: &'v str,
}

/// The parameters captured by a route match.
///
/// Each name appears at most once. If a pattern reuses a name, the capture
/// furthest along the path wins.
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// # let mut tree = segmatch::Node::new();
/// # tree.insert("users/:id", true);
/// let matched = tree.at("users/1")?;
///
/// // Iterate through the keys and values.
/// for (key, value) in matched.params.iter() {
///     println!("key: {}, value: {}", key, value);
/// }
///
/// // Get a specific value by name.
/// let id = matched.params.get("id");
/// assert_eq!(id, Some("1"));
/// # Ok(())
/// # }
/// ```
#[derive(PartialEq, Eq, Clone, Default)]
pub struct Params<'k, 'v> {
    list: Vec<Param<'k, 'v>>,
}

impl<'k, 'v> Params<'k, 'v> {
    pub(crate) fn new() -> Self {
        Self { list: Vec::new() }
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if no parameters were captured.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the value captured under the given name.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&'v str> {
        let key = key.as_ref();
        self.list
            .iter()
            .find(|param| param.key == key)
            .map(|param| param.value)
    }

    /// Returns an iterator over the parameters, in the order their names
    /// were first captured.
    pub fn iter(&self) -> ParamsIter<'_, 'k, 'v> {
        ParamsIter {
            inner: self.list.iter(),
        }
    }

    // Records a capture, replacing the value of an existing key in place.
    pub(crate) fn insert(&mut self, key: &'k str, value: &'v str) {
        match self.list.iter_mut().find(|param| param.key == key) {
            Some(param) => param.value = value,
            None => self.list.push(Param { key, value }),
        }
    }
}

impl fmt::Debug for Params<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'ps, 'k, 'v> IntoIterator for &'ps Params<'k, 'v> {
    type Item = (&'k str, &'v str);
    type IntoIter = ParamsIter<'ps, 'k, 'v>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the keys and values of a route's [parameters](crate::Params).
pub struct ParamsIter<'ps, 'k, 'v> {
    inner: slice::Iter<'ps, Param<'k, 'v>>,
}

impl<'ps, 'k, 'v> Iterator for ParamsIter<'ps, 'k, 'v> {
    type Item = (&'k str, &'v str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|p| (p.key, p.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for ParamsIter<'_, '_, '_> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let vec = vec![
            ("hello", "hello"),
            ("world", "world"),
            ("foo", "foo"),
            ("bar", "bar"),
            ("baz", "baz"),
        ];

        let mut params = Params::new();
        for (key, value) in vec.clone() {
            params.insert(key, value);
            assert_eq!(params.get(key), Some(value));
        }

        assert_eq!(params.len(), 5);
        assert!(params.iter().eq(vec));
    }

    #[test]
    fn overwrite_keeps_position() {
        let mut params = Params::new();
        params.insert("id", "1");
        params.insert("name", "ferris");
        params.insert("id", "2");

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("id"), Some("2"));
        assert!(params.iter().eq(vec![("id", "2"), ("name", "ferris")]));
    }

    #[test]
    fn empty() {
        let params = Params::new();
        assert!(params.is_empty());
        assert!(params.get("").is_none());
        assert_eq!(params.iter().len(), 0);
    }

    #[test]
    fn debug_as_map() {
        let mut params = Params::new();
        params.insert("id", "42");
        assert_eq!(format!("{:?}", params), r#"{"id": "42"}"#);
    }
}
