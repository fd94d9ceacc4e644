//! Read-only multi-value view of a request's parameters.

use std::collections::HashMap;

use super::Field;

/// A request's raw parameters: `key -> [values]`, repeated keys kept in
/// arrival order.
///
/// Built once per request from the query string (and, for form posts,
/// the urlencoded body), then read field by field during binding. The
/// map is never mutated after construction.
#[derive(Debug, Clone, Default)]
pub struct ParamMap {
    entries: HashMap<String, Vec<String>>,
}

impl ParamMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a query string (without the leading `?`), percent-decoding
    /// keys and values.
    pub fn parse(query: &str) -> Self {
        let mut map = Self::new();
        map.extend_urlencoded(query.as_bytes());
        map
    }

    /// Build from already-decoded pairs, mainly for tests and non-HTTP
    /// callers.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = Self::new();
        for (key, value) in pairs {
            map.entries.entry(key.into()).or_default().push(value.into());
        }
        map
    }

    /// Append pairs from a `application/x-www-form-urlencoded` payload.
    /// Values for keys already present are appended after the existing
    /// ones, matching how servlet containers merge query and body.
    pub fn extend_urlencoded(&mut self, input: &[u8]) {
        for (key, value) in form_urlencoded::parse(input) {
            self.entries
                .entry(key.into_owned())
                .or_default()
                .push(value.into_owned());
        }
    }

    /// All values supplied for `key`, in arrival order.
    pub fn values(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// The first value supplied for `key`.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.values(key)?.first().map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Start a binding-table row for the struct field `name`. The field
    /// name doubles as the lookup key unless overridden with
    /// [`Field::key`].
    pub fn field(&self, name: &'static str) -> Field<'_> {
        Field::new(self, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_preserves_repeated_keys_in_order() {
        let p = ParamMap::parse("tag=a&x=1&tag=b&tag=c");
        assert_eq!(p.values("tag").unwrap(), ["a", "b", "c"]);
        assert_eq!(p.first("x"), Some("1"));
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn parse_percent_decodes() {
        let p = ParamMap::parse("name=hello%20world&plus=a%2Bb");
        assert_eq!(p.first("name"), Some("hello world"));
        assert_eq!(p.first("plus"), Some("a+b"));
    }

    #[test]
    fn extend_appends_after_existing_values() {
        let mut p = ParamMap::parse("k=query");
        p.extend_urlencoded(b"k=body&other=1");
        assert_eq!(p.values("k").unwrap(), ["query", "body"]);
        assert!(p.contains_key("other"));
    }

    #[test]
    fn missing_key_is_none() {
        let p = ParamMap::parse("a=1");
        assert_eq!(p.values("b"), None);
        assert_eq!(p.first("b"), None);
    }

    #[test]
    fn empty_query_is_empty_map() {
        assert!(ParamMap::parse("").is_empty());
    }
}
