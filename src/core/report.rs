//! List and aggregate queries over the `record` table.
//!
//! Every shape is a fixed, fully parameterized statement selected through
//! [`ReportMode`]; nothing user-supplied is spliced into SQL text.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::report::{AggregateReport, AggregateRow, ListReport, ListRow};
use crate::utils::period::Period;
use rusqlite::params;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    List,
    AggregateByYear,
    AggregateByMonth,
}

impl ReportMode {
    /// Aggregate shape for a period: month 0 groups by year only.
    pub fn aggregate_for(period: Period) -> Self {
        if period.all_months() {
            ReportMode::AggregateByYear
        } else {
            ReportMode::AggregateByMonth
        }
    }

    fn sql(self) -> &'static str {
        match self {
            // ?3 = 0 disables the month filter
            ReportMode::List => {
                "SELECT project, year, month, up_at, IFNULL(down_at, 0)
                 FROM record
                 WHERE project = ?1 AND year = ?2 AND (?3 = 0 OR month = ?3)
                 ORDER BY up_at ASC, id ASC"
            }
            ReportMode::AggregateByYear => {
                "SELECT project, year, SUM(down_at - up_at)
                 FROM record
                 WHERE project = ?1 AND year = ?2 AND down_at IS NOT NULL
                 GROUP BY project, year
                 ORDER BY year"
            }
            ReportMode::AggregateByMonth => {
                "SELECT project, year, month, SUM(down_at - up_at)
                 FROM record
                 WHERE project = ?1 AND year = ?2 AND month = ?3 AND down_at IS NOT NULL
                 GROUP BY project, year, month
                 ORDER BY year, month"
            }
        }
    }
}

/// Seconds to hours with two decimals, rounded like C's `%.2f`.
pub fn format_hours(secs: i64) -> String {
    format!("{:.2}", secs as f64 / 3600.0)
}

pub struct ReportLogic;

impl ReportLogic {
    /// One row per entry of `project` in the period, open entries included.
    pub fn list(pool: &DbPool, project: &str, period: Period) -> AppResult<ListReport> {
        log::debug!("list query: project={project} period={period:?}");

        let mut stmt = pool.conn.prepare(ReportMode::List.sql())?;
        let rows = stmt.query_map(params![project, period.year, period.month], |row| {
            Ok(ListRow {
                project: row.get(0)?,
                year: row.get(1)?,
                month: row.get(2)?,
                up_at: row.get(3)?,
                down_at: row.get(4)?,
            })
        })?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(ListReport { rows: out })
    }

    /// Summed hours of closed entries, grouped by year or by month.
    pub fn aggregate(pool: &DbPool, project: &str, period: Period) -> AppResult<AggregateReport> {
        let mode = ReportMode::aggregate_for(period);
        log::debug!("aggregate query: mode={mode:?} project={project} period={period:?}");

        let mut stmt = pool.conn.prepare(mode.sql())?;
        let mut out = Vec::new();

        match mode {
            ReportMode::AggregateByMonth => {
                let rows = stmt.query_map(params![project, period.year, period.month], |row| {
                    Ok(AggregateRow {
                        project: row.get(0)?,
                        year: row.get(1)?,
                        month: Some(row.get(2)?),
                        hours: format_hours(row.get(3)?),
                    })
                })?;
                for r in rows {
                    out.push(r?);
                }
            }
            _ => {
                let rows = stmt.query_map(params![project, period.year], |row| {
                    Ok(AggregateRow {
                        project: row.get(0)?,
                        year: row.get(1)?,
                        month: None,
                        hours: format_hours(row.get(2)?),
                    })
                })?;
                for r in rows {
                    out.push(r?);
                }
            }
        }

        Ok(AggregateReport {
            by_month: mode == ReportMode::AggregateByMonth,
            rows: out,
        })
    }
}
