//! Reference data collaborator contract.

use async_trait::async_trait;
use kontext_core::KontextResult;
use serde::{Deserialize, Serialize};

/// A `{id, label}` pair returned by the reference data service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectItemDto {
    pub id: i32,
    pub label: String,
}

impl SelectItemDto {
    /// Creates a select item.
    #[must_use]
    pub fn from(id: i32, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

/// Remote reference data lookup.
///
/// Returns the `{id, label}` pairs for a given category and set of codes.
/// The read path consumes this collaborator by injection only; narrow
/// contract, external mechanism.
#[async_trait]
pub trait ReferenceDataClient: Send + Sync {
    /// Resolves the labels for `codes` within `category`.
    async fn select(&self, category: i32, codes: &[i32]) -> KontextResult<Vec<SelectItemDto>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_item_construction() {
        let item = SelectItemDto::from(2, "Passport");
        assert_eq!(item.id, 2);
        assert_eq!(item.label, "Passport");
    }

    #[test]
    fn test_select_item_serialization() {
        let item = SelectItemDto::from(3, "Trusted");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["label"], "Trusted");
    }
}
