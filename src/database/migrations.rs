//! Schema setup for the SmartWeb SQLite database.
//!
//! There is exactly one table and no versioning: the schema is created if missing
//! and otherwise left alone.

use rusqlite::Connection;

/// Name of the table holding saved web apps.
pub const WEB_APPS_TABLE: &str = "web_apps";

/// Creates the `web_apps` table if it does not exist.
///
/// Safe to call on every startup.
///
/// # Errors
/// Returns `rusqlite::Error` if the SQL statement fails.
pub fn run_all(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS web_apps (
             id TEXT PRIMARY KEY,
             title TEXT,
             url TEXT
         );",
    )
}
