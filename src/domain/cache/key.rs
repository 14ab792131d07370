//! Composite cache keys for memoized loads

use std::fmt;

/// Cache key composed of an optional identifier and a semantic bucket name.
///
/// Route loads use an empty identifier and the route's semantic name as the
/// bucket (for example `chinese-stocks-us`); ticker-scoped loads put the
/// ticker in the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    identifier: String,
    bucket: String,
}

impl CacheKey {
    pub fn new(identifier: impl Into<String>, bucket: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            bucket: bucket.into(),
        }
    }

    /// Key scoped only by bucket name.
    pub fn bucket(bucket: impl Into<String>) -> Self {
        Self::new("", bucket)
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.identifier.is_empty() {
            write!(f, "{}", self.bucket)
        } else {
            write!(f, "{}:{}", self.identifier, self.bucket)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_only_key() {
        let key = CacheKey::bucket("german-stocks-us");
        assert_eq!(key.to_string(), "german-stocks-us");
    }

    #[test]
    fn test_identifier_prefixes_bucket() {
        let key = CacheKey::new("AAPL", "one-day-price");
        assert_eq!(key.to_string(), "AAPL:one-day-price");
    }

    #[test]
    fn test_keys_with_different_identifiers_differ() {
        let a = CacheKey::new("AAPL", "profile");
        let b = CacheKey::new("TSLA", "profile");
        assert_ne!(a.to_string(), b.to_string());
    }
}
