//! Typed ID wrappers for domain entities.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::num::ParseIntError;

/// A strongly-typed wrapper for bounded context record IDs.
///
/// Identifiers are assigned by the store on creation and immutable
/// thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ContextId(pub i32);

impl ContextId {
    /// Creates a context ID from a raw integer.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Parses a context ID from a string.
    pub fn parse(s: &str) -> Result<Self, ParseIntError> {
        Ok(Self(s.parse()?))
    }

    /// Returns the inner integer.
    #[must_use]
    pub const fn into_inner(self) -> i32 {
        self.0
    }
}

impl Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for ContextId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<ContextId> for i32 {
    fn from(id: ContextId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_id_parsing() {
        let id = ContextId::parse("1").unwrap();
        assert_eq!(id, ContextId::new(1));
        assert_eq!(id.to_string(), "1");
    }

    #[test]
    fn test_context_id_parse_rejects_non_integer() {
        assert!(ContextId::parse("abc").is_err());
        assert!(ContextId::parse("1.5").is_err());
        assert!(ContextId::parse("").is_err());
    }

    #[test]
    fn test_context_id_conversions() {
        let id: ContextId = 42.into();
        assert_eq!(id.into_inner(), 42);
        assert_eq!(i32::from(id), 42);
    }

    #[test]
    fn test_context_id_serde_transparent() {
        let json = serde_json::to_string(&ContextId::new(7)).unwrap();
        assert_eq!(json, "7");
        let id: ContextId = serde_json::from_str("7").unwrap();
        assert_eq!(id, ContextId::new(7));
    }
}
