//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Maximum title length, mirrored by the backend validation
pub const TITLE_MAX: usize = 35;
/// Maximum description length, mirrored by the backend validation
pub const DESCRIPTION_MAX: usize = 250;

/// Entry data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub created_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_matches_backend_wire_shape() {
        let json = r#"{"id":7,"title":"Hooks","description":"Learned about hooks","created_at":1754600000}"#;
        let entry: Entry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.id, 7);
        assert_eq!(entry.title, "Hooks");
        assert_eq!(entry.description, "Learned about hooks");
        assert_eq!(entry.created_at, 1754600000);
    }
}
