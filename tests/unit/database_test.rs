//! Unit tests for the SmartWeb database layer (connection + migrations).

use smartweb::database::migrations::WEB_APPS_TABLE;
use smartweb::database::Database;
use tempfile::TempDir;

fn web_apps_columns(db: &Database) -> Vec<(String, String)> {
    let conn = db.connection();
    let mut stmt = conn
        .prepare(&format!("PRAGMA table_info({})", WEB_APPS_TABLE))
        .unwrap();
    stmt.query_map([], |row| Ok((row.get::<_, String>(1)?, row.get::<_, String>(2)?)))
        .unwrap()
        .map(|r| r.unwrap())
        .collect()
}

#[test]
fn test_open_in_memory_succeeds() {
    let db = Database::open_in_memory();
    assert!(db.is_ok(), "open_in_memory should succeed");
}

#[test]
fn test_migrations_create_web_apps_table() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    let columns = web_apps_columns(&db);
    assert_eq!(
        columns,
        vec![
            ("id".to_string(), "TEXT".to_string()),
            ("title".to_string(), "TEXT".to_string()),
            ("url".to_string(), "TEXT".to_string()),
        ]
    );
}

#[test]
fn test_id_is_primary_key() {
    let db = Database::open_in_memory().unwrap();
    let conn = db.connection();
    conn.execute("INSERT INTO web_apps (id, title, url) VALUES ('a', 'A', 'a.com')", [])
        .unwrap();
    let dup = conn.execute("INSERT INTO web_apps (id, title, url) VALUES ('a', 'B', 'b.com')", []);
    assert!(dup.is_err(), "duplicate id must violate the primary key");
}

#[test]
fn test_migrations_are_idempotent() {
    let db = Database::open_in_memory().unwrap();
    db.connection()
        .execute("INSERT INTO web_apps (id, title, url) VALUES ('a', 'A', 'a.com')", [])
        .unwrap();

    db.run_migrations().expect("second migration run should succeed");

    let count: i64 = db
        .connection()
        .query_row("SELECT COUNT(*) FROM web_apps", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1, "re-running migrations must keep existing rows");
}

#[test]
fn test_open_creates_parent_directories_and_persists() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("smartweb.db");

    {
        let db = Database::open(&path).expect("open should create parent dirs");
        db.connection()
            .execute("INSERT INTO web_apps (id, title, url) VALUES ('x', 'X', 'x.com')", [])
            .unwrap();
    }
    assert!(path.exists());

    let reopened = Database::open(&path).unwrap();
    let title: String = reopened
        .connection()
        .query_row("SELECT title FROM web_apps WHERE id = 'x'", [], |row| row.get(0))
        .unwrap();
    assert_eq!(title, "X");
}

#[test]
fn test_open_fails_when_parent_is_a_file() {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let blocker = tmp.path().join("not_a_dir");
    std::fs::write(&blocker, b"x").unwrap();

    let result = Database::open(blocker.join("smartweb.db"));

    assert!(result.is_err(), "directory creation failure surfaces as an open error");
}
