//! Up/down state machine around the session cursor stored in the config.
//!
//! CLOSED: cursor is 0, or points to an entry with `down_at` set.
//! OPEN:   cursor points to an entry whose `down_at` is NULL.

use crate::config::NO_CURSOR;
use crate::context::AppContext;
use crate::db::pool::DbPool;
use crate::db::queries::{close_entry, entry_exists, find_entry, insert_entry, open_entries};
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::ui::messages::warning;
use crate::utils::period::Period;
use uuid::Uuid;

pub struct SessionLogic;

impl SessionLogic {
    /// Open a new session for the configured project.
    ///
    /// Order matters: check the cursor, insert the row, then persist the config.
    /// Nothing is written when the check fails.
    pub fn up(ctx: &mut AppContext, period: Period) -> AppResult<Entry> {
        if period.all_months() {
            return Err(AppError::InvalidPeriod(
                "a session needs a concrete month (1-12), not 0".into(),
            ));
        }

        Self::ensure_previous_closed(ctx)?;

        let stray = open_entries(&ctx.pool, &ctx.config.project)?;
        if !stray.is_empty() {
            return Err(AppError::PreconditionViolation(format!(
                "cannot start: project '{}' already has open session(s) {:?} not tracked by the cursor",
                ctx.config.project,
                stray.iter().map(|e| e.id).collect::<Vec<_>>()
            )));
        }

        let id = Self::new_id(&ctx.pool)?;
        let entry = Entry::open(
            id,
            &ctx.config.project,
            period.year,
            period.month,
            ctx.now_ts(),
        );
        insert_entry(&ctx.pool, &entry)?;

        ctx.config.cursor = id;
        ctx.config.save(&ctx.config_path)?;

        log::info!(
            "session {} opened for '{}' ({}-{:02})",
            id,
            entry.project,
            entry.year,
            entry.month
        );
        Ok(entry)
    }

    /// Close the session the cursor points to. The cursor itself is left
    /// untouched; the next `up` sees the closed entry and proceeds.
    pub fn down(ctx: &AppContext) -> AppResult<Entry> {
        if !ctx.config.has_cursor() {
            return Err(AppError::NoOpenSession);
        }

        let id = ctx.config.cursor;
        let entry = match find_entry(&ctx.pool, id)? {
            None => {
                return Err(AppError::PreconditionViolation(format!(
                    "cannot stop: session {id} referenced by the cursor does not exist"
                )));
            }
            Some(e) if !e.is_open() => {
                return Err(AppError::PreconditionViolation(format!(
                    "cannot stop: session {id} is already closed"
                )));
            }
            Some(e) => e,
        };

        let down_at = ctx.now_ts();
        if close_entry(&ctx.pool, id, down_at)? == 0 {
            return Err(AppError::PreconditionViolation(format!(
                "cannot stop: session {id} was closed concurrently"
            )));
        }

        log::info!("session {} closed", id);
        Ok(Entry {
            down_at: Some(down_at),
            ..entry
        })
    }

    fn ensure_previous_closed(ctx: &AppContext) -> AppResult<()> {
        let cursor = ctx.config.cursor;
        if cursor == NO_CURSOR {
            return Ok(());
        }

        match find_entry(&ctx.pool, cursor)? {
            Some(prev) if prev.is_open() => Err(AppError::PreconditionViolation(format!(
                "cannot start: previous session {cursor} not closed"
            ))),
            Some(_) => Ok(()),
            None => {
                warning(format!(
                    "Cursor {cursor} points to no session; treating it as closed"
                ));
                Ok(())
            }
        }
    }

    /// 32-bit id taken from a random UUID; never 0 and never already stored.
    fn new_id(pool: &DbPool) -> AppResult<u32> {
        loop {
            let b = Uuid::new_v4().into_bytes();
            let id = u32::from_be_bytes([b[0], b[1], b[2], b[3]]);
            if id != NO_CURSOR && !entry_exists(pool, id)? {
                return Ok(id);
            }
        }
    }
}
