//! URL query-string access for the routing collaborator seam
//!
//! The overlay controller mutates the URL through the [`QueryState`] trait
//! so the same operations run against the browser router in the app and an
//! in-memory query in tests. [`QueryPairs`] keeps segments verbatim, so
//! parameters the shell never touches round-trip byte for byte.

/// Read/write access to the current URL's query parameters
pub trait QueryState {
    /// Value for `key`, if present
    fn get(&self, key: &str) -> Option<String>;

    /// Set `key` to `value`, replacing an existing entry
    fn insert(&mut self, key: &str, value: &str);

    /// Remove every entry for `key`
    fn remove(&mut self, key: &str);
}

/// Ordered key/value pairs parsed from a query string.
///
/// Tolerant of malformed input: empty segments are skipped and a segment
/// without `=` is kept as a key with an empty value. No error is ever
/// raised for a malformed query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPairs {
    pairs: Vec<(String, String)>,
}

impl QueryPairs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a query string, with or without the leading `?`.
    pub fn parse(search: &str) -> Self {
        let trimmed = search.strip_prefix('?').unwrap_or(search);
        let pairs = trimmed
            .split('&')
            .filter(|segment| !segment.is_empty())
            .map(|segment| match segment.split_once('=') {
                Some((key, value)) => (key.to_string(), value.to_string()),
                None => (segment.to_string(), String::new()),
            })
            .collect();
        Self { pairs }
    }

    /// Serialize back to a query string (`""` when empty, else `?k=v&…`).
    pub fn to_query_string(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }
        let joined = self
            .pairs
            .iter()
            .map(|(key, value)| {
                if value.is_empty() {
                    key.clone()
                } else {
                    format!("{}={}", key, value)
                }
            })
            .collect::<Vec<_>>()
            .join("&");
        format!("?{}", joined)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Empty query for events where the shell never consults the URL
/// ([`NavEvent::touches_url`] is `false`). Lets hot-path callers, scroll
/// above all, apply an event without parsing the current query string.
///
/// [`NavEvent::touches_url`]: crate::NavEvent::touches_url
#[derive(Debug, Clone, Copy, Default)]
pub struct NoQuery;

impl QueryState for NoQuery {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn insert(&mut self, _key: &str, _value: &str) {}

    fn remove(&mut self, _key: &str) {}
}

impl QueryState for QueryPairs {
    fn get(&self, key: &str) -> Option<String> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    fn insert(&mut self, key: &str, value: &str) {
        if let Some(entry) = self.pairs.iter_mut().find(|(k, _)| k == key) {
            entry.1 = value.to_string();
        } else {
            self.pairs.push((key.to_string(), value.to_string()));
        }
    }

    fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }
}
