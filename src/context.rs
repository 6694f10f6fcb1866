//! Per-invocation application context, built once in `run()` and handed to
//! every command handler.

use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::{DateTime, Local};
use std::path::PathBuf;

pub struct AppContext {
    /// Configuration as read from disk. Only `cursor` is ever changed.
    pub config: Config,
    pub config_path: PathBuf,
    pub pool: DbPool,
    /// Clock snapshot taken at startup; every timestamp of this run uses it.
    pub now: DateTime<Local>,
}

impl AppContext {
    /// Open the record store (honouring a `--db` override) and ensure the schema.
    pub fn open(config: Config, config_path: PathBuf, db_override: Option<&str>) -> AppResult<Self> {
        let db_path = db_override.unwrap_or(config.db.as_str()).to_string();
        let pool = DbPool::new(&db_path)?;
        Self::with_pool(config, config_path, pool)
    }

    pub fn with_pool(config: Config, config_path: PathBuf, pool: DbPool) -> AppResult<Self> {
        init_db(&pool.conn)?;
        Ok(Self {
            config,
            config_path,
            pool,
            now: Local::now(),
        })
    }

    pub fn now_ts(&self) -> i64 {
        self.now.timestamp()
    }
}
