//! Record Store for SmartWeb.
//!
//! Implements `RecordStoreTrait`: CRUD for saved web apps, backed by SQLite via `rusqlite`.
//! The store owns its connection. `initialize()` opens it, `shutdown()` releases it.
//!
//! `upsert` is a select-then-write pair keyed by `id`. It runs inside one transaction on the
//! store's own connection, but it is not atomic against a second process writing the same
//! file. The application is single-user and writes are serialized by the UI.

use std::path::PathBuf;

use rusqlite::{params, OptionalExtension};
use tracing::{debug, error, info};

use crate::database::Database;
use crate::types::bookmark::{Bookmark, UpsertOutcome};
use crate::types::errors::StoreError;

/// Trait defining record store operations.
pub trait RecordStoreTrait {
    fn initialize(&mut self) -> Result<(), StoreError>;
    fn list_all(&self) -> Result<Vec<Bookmark>, StoreError>;
    fn get(&self, id: &str) -> Result<Option<Bookmark>, StoreError>;
    fn search(&self, query: &str) -> Result<Vec<Bookmark>, StoreError>;
    fn upsert(&mut self, record: &Bookmark) -> Result<UpsertOutcome, StoreError>;
    fn delete(&mut self, id: &str) -> Result<(), StoreError>;
    fn clear(&mut self) -> Result<(), StoreError>;
    fn shutdown(&mut self);
}

/// Where the store keeps its table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    File(PathBuf),
    InMemory,
}

/// Record store backed by a SQLite connection it owns.
pub struct RecordStore {
    location: StoreLocation,
    db: Option<Database>,
}

impl RecordStore {
    /// Creates a store for the given location. Nothing is opened until `initialize()`.
    pub fn new(location: StoreLocation) -> Self {
        Self { location, db: None }
    }

    /// Convenience constructor for a file-backed store.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self::new(StoreLocation::File(path.into()))
    }

    /// Convenience constructor for an in-memory store.
    pub fn in_memory() -> Self {
        Self::new(StoreLocation::InMemory)
    }

    pub fn location(&self) -> &StoreLocation {
        &self.location
    }

    pub fn is_initialized(&self) -> bool {
        self.db.is_some()
    }

    fn db(&self) -> Result<&Database, StoreError> {
        self.db.as_ref().ok_or_else(|| {
            StoreError::StorageUnavailable("record store is not initialized".to_string())
        })
    }

    /// Reads a single row into a `Bookmark`. Columns: id, title, url.
    ///
    /// `title`/`url` are nullable in the schema; NULL reads back as an empty string.
    fn row_to_bookmark(row: &rusqlite::Row) -> rusqlite::Result<Bookmark> {
        Ok(Bookmark {
            id: row.get(0)?,
            name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            url: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        })
    }

    fn query_bookmarks(
        &self,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> Result<Vec<Bookmark>, StoreError> {
        let conn = self.db()?.connection();
        let mut stmt = conn.prepare(sql).map_err(query_failed)?;
        let rows = stmt
            .query_map(params, Self::row_to_bookmark)
            .map_err(query_failed)?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row.map_err(query_failed)?);
        }
        Ok(results)
    }
}

fn query_failed(e: rusqlite::Error) -> StoreError {
    error!(error = %e, "web_apps query failed");
    StoreError::QueryFailed(e.to_string())
}

fn write_failed(e: rusqlite::Error) -> StoreError {
    error!(error = %e, "web_apps write failed");
    StoreError::WriteFailed(e.to_string())
}

/// Escapes `%`, `_` and `\` so user input matches literally inside a LIKE pattern.
fn like_pattern(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len() + 2);
    escaped.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

impl RecordStoreTrait for RecordStore {
    /// Opens the engine if needed and ensures the table exists.
    fn initialize(&mut self) -> Result<(), StoreError> {
        if let Some(db) = &self.db {
            return db
                .run_migrations()
                .map_err(|e| StoreError::StorageUnavailable(e.to_string()));
        }

        let opened = match &self.location {
            StoreLocation::File(path) => Database::open(path),
            StoreLocation::InMemory => Database::open_in_memory(),
        };
        let db = opened.map_err(|e| {
            error!(location = ?self.location, error = %e, "failed to open record store");
            StoreError::StorageUnavailable(e.to_string())
        })?;

        info!(location = ?self.location, "record store initialized");
        self.db = Some(db);
        Ok(())
    }

    /// Returns every stored record in storage-engine order.
    fn list_all(&self) -> Result<Vec<Bookmark>, StoreError> {
        let items = self.query_bookmarks("SELECT id, title, url FROM web_apps", [])?;
        debug!(count = items.len(), "listed web apps");
        Ok(items)
    }

    fn get(&self, id: &str) -> Result<Option<Bookmark>, StoreError> {
        self.db()?
            .connection()
            .query_row(
                "SELECT id, title, url FROM web_apps WHERE id = ?1",
                params![id],
                Self::row_to_bookmark,
            )
            .optional()
            .map_err(query_failed)
    }

    /// Case-insensitive substring match over name and URL.
    fn search(&self, query: &str) -> Result<Vec<Bookmark>, StoreError> {
        let pattern = like_pattern(query);
        self.query_bookmarks(
            "SELECT id, title, url FROM web_apps \
             WHERE title LIKE ?1 ESCAPE '\\' OR url LIKE ?1 ESCAPE '\\'",
            params![pattern],
        )
    }

    /// Updates `title`/`url` of the row with `record.id`, or inserts it if absent.
    fn upsert(&mut self, record: &Bookmark) -> Result<UpsertOutcome, StoreError> {
        let conn = self.db()?.connection();
        debug!(id = %record.id, name = %record.name, url = %record.url, "upserting web app");

        let tx = conn.unchecked_transaction().map_err(write_failed)?;

        let existing: Option<String> = tx
            .query_row(
                "SELECT id FROM web_apps WHERE id = ?1",
                params![record.id],
                |row| row.get(0),
            )
            .optional()
            .map_err(write_failed)?;

        let outcome = if existing.is_some() {
            tx.execute(
                "UPDATE web_apps SET title = ?1, url = ?2 WHERE id = ?3",
                params![record.name, record.url, record.id],
            )
            .map_err(write_failed)?;
            UpsertOutcome::Updated
        } else {
            tx.execute(
                "INSERT INTO web_apps (id, title, url) VALUES (?1, ?2, ?3)",
                params![record.id, record.name, record.url],
            )
            .map_err(write_failed)?;
            UpsertOutcome::Inserted
        };

        tx.commit().map_err(write_failed)?;
        debug!(id = %record.id, ?outcome, "upsert completed");
        Ok(outcome)
    }

    /// Removes the row with `id`. Missing rows are not an error.
    fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        let affected = self
            .db()?
            .connection()
            .execute("DELETE FROM web_apps WHERE id = ?1", params![id])
            .map_err(write_failed)?;

        if affected == 0 {
            debug!(%id, "delete matched no web app");
        } else {
            debug!(%id, "deleted web app");
        }
        Ok(())
    }

    /// Removes every row.
    fn clear(&mut self) -> Result<(), StoreError> {
        let affected = self
            .db()?
            .connection()
            .execute("DELETE FROM web_apps", [])
            .map_err(write_failed)?;
        info!(removed = affected, "cleared web apps");
        Ok(())
    }

    /// Drops the connection. Later calls fail with `StorageUnavailable`.
    fn shutdown(&mut self) {
        if self.db.take().is_some() {
            info!(location = ?self.location, "record store shut down");
        }
    }
}
