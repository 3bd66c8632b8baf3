use serde::{Deserialize, Serialize};

/// A saved web app shortcut.
///
/// `name` is persisted in the `title` column of the `web_apps` table.
/// Equality is by `id` only: two values with the same `id` denote the same record
/// even when their `name`/`url` differ.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: String,
    pub name: String,
    pub url: String,
}

impl Bookmark {
    pub fn new(id: impl Into<String>, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: url.into(),
        }
    }
}

impl PartialEq for Bookmark {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Bookmark {}

/// Which branch an upsert took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
}
