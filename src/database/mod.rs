//! SQLite storage for saved web apps.
//!
//! [`Database`] owns the connection and creates the `web_apps` table on open. Callers
//! normally go through `managers::record_store::RecordStore`, which opens a `Database`
//! in `initialize` and maps `rusqlite` errors to `StoreError`.
//!
//! ```no_run
//! use smartweb::managers::record_store::{RecordStore, RecordStoreTrait};
//! use smartweb::types::bookmark::Bookmark;
//!
//! # fn main() -> Result<(), smartweb::types::errors::StoreError> {
//! let mut store = RecordStore::at_path("smartweb.db");
//! store.initialize()?;
//! store.upsert(&Bookmark::new("a1b2c3d4", "News", "https://news.example.com"))?;
//! for app in store.list_all()? {
//!     println!("{} {}", app.name, app.url);
//! }
//! # Ok(())
//! # }
//! ```

pub mod connection;
pub mod migrations;

pub use connection::Database;
