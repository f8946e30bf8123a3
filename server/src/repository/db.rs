//! Database Connection and Setup
//!
//! Manages the SQLite connection and schema migrations.

use libsql::{Builder, Connection, Database};

use crate::error::StorageError;

/// Database state wrapper
///
/// Keeps the [`Database`] handle alive for as long as connections are
/// handed out.
pub struct DbState {
    _db: Database,
    conn: Connection,
}

impl DbState {
    /// Get a connection to the opened database
    pub fn connection(&self) -> Connection {
        self.conn.clone()
    }
}

/// Open (or create) the database at `path` and run migrations
///
/// `:memory:` is accepted, which the tests use.
pub async fn init_db(path: &str) -> Result<DbState, StorageError> {
    let db = Builder::new_local(path).build().await?;
    let conn = db.connect()?;

    run_migrations(&conn).await?;

    Ok(DbState { _db: db, conn })
}

/// Run database migrations
async fn run_migrations(conn: &Connection) -> Result<(), StorageError> {
    // Entries table - create if not exists
    conn.execute(
        "CREATE TABLE IF NOT EXISTS entries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            created_at INTEGER NOT NULL
        )",
        (),
    )
    .await?;

    Ok(())
}
