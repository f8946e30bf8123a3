//! Repository Layer - Core Trait
//!
//! Defines the abstract interface the HTTP layer talks to.
//! Implementations can use SQLite, in-memory, etc.

use async_trait::async_trait;

use crate::domain::Entry;
use crate::error::StorageError;

/// Persistence operations for learning entries
///
/// The store is append-only: there is no update and no delete.
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Insert a new entry stamped with the current server time
    ///
    /// Returns the stored row, including its assigned id. No validation
    /// happens here; the HTTP layer rejects bad input before it reaches
    /// the store.
    async fn create(&self, title: &str, description: &str) -> Result<Entry, StorageError>;

    /// Every stored entry, in no particular order
    ///
    /// Ordering is a presentation concern; callers sort. A failing read
    /// propagates as an error, never as a partial or empty result.
    async fn list_all(&self) -> Result<Vec<Entry>, StorageError>;
}
