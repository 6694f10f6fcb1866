/// One recorded work session (a row of the `record` table).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: u32,
    pub project: String, // ⇔ record.project (VARCHAR(120))
    pub year: i32,       // ⇔ record.year, fixed at creation
    pub month: u32,      // ⇔ record.month, fixed at creation
    pub up_at: i64,      // ⇔ record.up_at (unix seconds)
    pub down_at: Option<i64>, // ⇔ record.down_at, NULL while open
}

impl Entry {
    /// New open session starting at `up_at`.
    pub fn open(id: u32, project: &str, year: i32, month: u32, up_at: i64) -> Self {
        Self {
            id,
            project: project.to_string(),
            year,
            month,
            up_at,
            down_at: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.down_at.is_none()
    }

    /// Elapsed seconds, or `None` while the session is still open.
    /// A `down_at` before `up_at` yields a negative value.
    pub fn elapsed_secs(&self) -> Option<i64> {
        self.down_at.map(|down| down - self.up_at)
    }
}
