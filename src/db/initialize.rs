use crate::errors::AppResult;
use rusqlite::Connection;

/// Ensure the `record` table exists. Safe to run on every startup.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS record (
            id       INTEGER NOT NULL PRIMARY KEY,
            project  VARCHAR(120),
            year     INTEGER,
            month    INTEGER,
            up_at    INTEGER,
            down_at  INTEGER
        );
        "#,
    )?;
    log::debug!("schema ensured");
    Ok(())
}
