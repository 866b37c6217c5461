use rusqlite::{Connection, OptionalExtension};
use std::path::Path;

/// Cache keys mirror the browser-era localStorage layout so exported data
/// stays interchangeable with the old front end.
pub const KEY_SCHEDULE: &str = "curriculumSchedule";
pub const KEY_CUSTOM_QUESTIONS: &str = "customBoardQuestions";
pub const KEY_DELETED_DEFAULT_QUESTION_IDS: &str = "deletedDefaultQuestionIds";
pub const KEY_IMAGE_BANK: &str = "imageBank";

pub fn open_cache(workspace: &Path) -> anyhow::Result<Connection> {
    std::fs::create_dir_all(workspace)?;
    let db_path = workspace.join("curriculum.sqlite3");
    let conn = Connection::open(db_path)?;
    init_schema(&conn)?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> anyhow::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS cache(
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        [],
    )?;
    Ok(())
}

pub fn get_json(conn: &Connection, key: &str) -> anyhow::Result<Option<serde_json::Value>> {
    let raw: Option<String> = conn
        .query_row("SELECT value FROM cache WHERE key = ?", [key], |r| r.get(0))
        .optional()?;
    match raw {
        Some(text) => Ok(Some(serde_json::from_str(&text)?)),
        None => Ok(None),
    }
}

pub fn set_json(conn: &Connection, key: &str, value: &serde_json::Value) -> anyhow::Result<()> {
    let text = serde_json::to_string(value)?;
    conn.execute(
        "INSERT INTO cache(key, value) VALUES(?, ?)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        (key, &text),
    )?;
    Ok(())
}

/// Convenience for the list-shaped keys: missing or non-array values read as
/// an empty list rather than an error.
pub fn get_array(conn: &Connection, key: &str) -> Vec<serde_json::Value> {
    get_json(conn, key)
        .ok()
        .flatten()
        .and_then(|v| v.as_array().cloned())
        .unwrap_or_default()
}
