//! Year/month filter resolution.

use chrono::{DateTime, Datelike, TimeZone};

/// Month value meaning "every month of the year".
pub const ALL_MONTHS: u32 = 0;

/// Calendar bucket used to filter and to stamp new entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

impl Period {
    /// Fill missing flags from the clock: current year, current month.
    pub fn resolve<Tz: TimeZone>(year: Option<i32>, month: Option<u32>, now: &DateTime<Tz>) -> Self {
        Self {
            year: year.unwrap_or_else(|| now.year()),
            month: month.unwrap_or_else(|| now.month()),
        }
    }

    pub fn all_months(&self) -> bool {
        self.month == ALL_MONTHS
    }
}
