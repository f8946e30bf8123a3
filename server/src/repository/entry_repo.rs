//! Entry Repository
//!
//! SQLite-backed implementation of the entry store.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use libsql::Connection;
use tokio::sync::Mutex;

use super::traits::EntryStore;
use crate::domain::Entry;
use crate::error::StorageError;

/// SQLite implementation of [`EntryStore`]
pub struct EntryRepository {
    conn: Arc<Mutex<Connection>>,
}

impl EntryRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }
}

fn row_to_entry(row: &libsql::Row) -> Result<Entry, StorageError> {
    Ok(Entry {
        id: row.get::<i64>(0)?,
        title: row.get::<String>(1)?,
        description: row.get::<String>(2)?,
        created_at: row.get::<i64>(3)?,
    })
}

#[async_trait]
impl EntryStore for EntryRepository {
    async fn create(&self, title: &str, description: &str) -> Result<Entry, StorageError> {
        let conn = self.conn.lock().await;
        let created_at = Utc::now().timestamp();

        conn.execute(
            "INSERT INTO entries (title, description, created_at) VALUES (?, ?, ?)",
            libsql::params![title, description, created_at],
        )
        .await?;

        let id = conn.last_insert_rowid();
        let mut rows = conn
            .query(
                "SELECT id, title, description, created_at FROM entries WHERE id = ?",
                libsql::params![id],
            )
            .await?;

        match rows.next().await? {
            Some(row) => row_to_entry(&row),
            None => Err(StorageError::MissingRow(id)),
        }
    }

    async fn list_all(&self) -> Result<Vec<Entry>, StorageError> {
        let conn = self.conn.lock().await;

        let mut rows = conn
            .query("SELECT id, title, description, created_at FROM entries", ())
            .await?;

        let mut entries = Vec::new();
        while let Some(row) = rows.next().await? {
            entries.push(row_to_entry(&row)?);
        }
        Ok(entries)
    }
}
