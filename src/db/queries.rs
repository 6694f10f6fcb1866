use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::entry::Entry;
use rusqlite::{OptionalExtension, Result, Row, params};

pub fn map_row(row: &Row) -> Result<Entry> {
    Ok(Entry {
        id: row.get("id")?,
        project: row.get("project")?,
        year: row.get("year")?,
        month: row.get("month")?,
        up_at: row.get("up_at")?,
        down_at: row.get("down_at")?,
    })
}

pub fn insert_entry(pool: &DbPool, entry: &Entry) -> AppResult<()> {
    pool.conn.execute(
        "INSERT INTO record (id, project, year, month, up_at, down_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            entry.id,
            entry.project,
            entry.year,
            entry.month,
            entry.up_at,
            entry.down_at,
        ],
    )?;
    Ok(())
}

pub fn find_entry(pool: &DbPool, id: u32) -> AppResult<Option<Entry>> {
    let entry = pool
        .conn
        .query_row(
            "SELECT id, project, year, month, up_at, down_at FROM record WHERE id = ?1",
            [id],
            map_row,
        )
        .optional()?;
    Ok(entry)
}

pub fn entry_exists(pool: &DbPool, id: u32) -> AppResult<bool> {
    let found: Option<i64> = pool
        .conn
        .query_row("SELECT 1 FROM record WHERE id = ?1", [id], |row| row.get(0))
        .optional()?;
    Ok(found.is_some())
}

/// Set `down_at` on an open entry. Returns the number of rows touched,
/// which is 0 when the entry is missing or already closed.
pub fn close_entry(pool: &DbPool, id: u32, down_at: i64) -> AppResult<usize> {
    let n = pool.conn.execute(
        "UPDATE record SET down_at = ?1 WHERE id = ?2 AND down_at IS NULL",
        params![down_at, id],
    )?;
    Ok(n)
}

/// Open entries of a project, oldest first.
pub fn open_entries(pool: &DbPool, project: &str) -> AppResult<Vec<Entry>> {
    let mut stmt = pool.conn.prepare(
        "SELECT id, project, year, month, up_at, down_at FROM record
         WHERE project = ?1 AND down_at IS NULL
         ORDER BY up_at ASC, id ASC",
    )?;

    let rows = stmt.query_map([project], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
