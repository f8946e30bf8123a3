//! Domain Layer
//!
//! Core entities. This layer knows nothing about HTTP or SQL.

use serde::{Deserialize, Serialize};

/// Maximum title length in characters
pub const TITLE_MAX: usize = 35;
/// Maximum description length in characters
pub const DESCRIPTION_MAX: usize = 250;

/// A single recorded learning entry
///
/// Entries are append-only: once stored they are never updated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier, assigned by the database
    pub id: i64,
    /// Short headline of what was learned
    pub title: String,
    /// Free-form text describing the learning
    pub description: String,
    /// Unix seconds, stamped by the server at insertion time
    pub created_at: i64,
}
