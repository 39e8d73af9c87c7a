//! URL record entity representing a shortened URL mapping.

/// A persisted mapping between a sequential short identifier and the
/// original URL.
///
/// `original_url` is stored exactly as submitted (no normalization) and
/// `short_url` is always a positive integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub original_url: String,
    pub short_url: i64,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(original_url: impl Into<String>, short_url: i64) -> Self {
        Self {
            original_url: original_url.into(),
            short_url,
        }
    }
}
