//! Instrument identifiers.

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// International Securities Identification Number.
///
/// Used as the topic key of the tick store. No checksum validation is
/// performed; the upstream feed is trusted to deliver well-formed codes.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Into, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Isin(String);

impl Isin {
    /// Creates a new identifier.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Isin {
    fn from(code: &str) -> Self {
        Self(code.to_owned())
    }
}

impl Borrow<str> for Isin {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Isin {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_display_and_conversions() {
        let isin = Isin::from("XE0866287E25");
        assert_eq!(isin.to_string(), "XE0866287E25");
        assert_eq!(isin.as_str(), "XE0866287E25");

        let raw: String = isin.into();
        assert_eq!(raw, "XE0866287E25");
    }

    #[test]
    fn test_lookup_by_str() {
        let mut set = HashSet::new();
        set.insert(Isin::new("IA5E35112712"));
        assert!(set.contains("IA5E35112712"));
        assert!(!set.contains("SJ3124P43460"));
    }

    #[test]
    fn test_serde_transparent() {
        let isin = Isin::new("SJ3124P43460");
        assert_eq!(serde_json::to_string(&isin).unwrap(), "\"SJ3124P43460\"");
    }
}
