#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rusqlite::{Connection, params};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const PROJECT: &str = "acme";

/// A scratch working directory holding `stats.yaml` and `work.db`.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let ws = Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        };
        ws.write_config(&format!("db: {}\nproject: {PROJECT}\n", ws.db_path().display()));
        ws
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn db_path(&self) -> PathBuf {
        self.path().join("work.db")
    }

    pub fn config_path(&self) -> PathBuf {
        self.path().join("stats.yaml")
    }

    pub fn write_config(&self, yaml: &str) {
        fs::write(self.config_path(), yaml).expect("write config");
    }

    pub fn read_config(&self) -> String {
        fs::read_to_string(self.config_path()).expect("read config")
    }

    /// hourstats command running inside the workspace.
    pub fn hs(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("hourstats");
        cmd.current_dir(self.path());
        cmd
    }

    pub fn conn(&self) -> Connection {
        let conn = Connection::open(self.db_path()).expect("open db");
        hourstats::db::initialize::init_db(&conn).expect("init db");
        conn
    }

    /// Insert a row directly, bypassing the cursor.
    pub fn seed(&self, id: u32, year: i32, month: u32, up_at: i64, down_at: Option<i64>) {
        self.conn()
            .execute(
                "INSERT INTO record (id, project, year, month, up_at, down_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![id, PROJECT, year, month, up_at, down_at],
            )
            .expect("seed row");
    }

    pub fn count(&self, sql: &str) -> i64 {
        self.conn()
            .query_row(sql, [], |r| r.get(0))
            .expect("count rows")
    }
}
