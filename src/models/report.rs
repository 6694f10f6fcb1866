//! Typed result rows and the column-agnostic presenter interface.

/// Anything that can be shown as a header plus ordered rows of cells.
///
/// Every record must have exactly `headers().len()` cells; both the console
/// table and the CSV writer rely on it.
pub trait Tabular {
    fn headers(&self) -> Vec<&'static str>;
    fn records(&self) -> Vec<Vec<String>>;
}

pub const LIST_HEADERS: [&str; 5] = ["Project", "Year", "Month", "Up", "Down"];

/// One session, as returned by list mode. `down_at` is 0 for open sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub project: String,
    pub year: i32,
    pub month: u32,
    pub up_at: i64,
    pub down_at: i64,
}

impl ListRow {
    fn cells(&self) -> Vec<String> {
        vec![
            self.project.clone(),
            self.year.to_string(),
            self.month.to_string(),
            self.up_at.to_string(),
            self.down_at.to_string(),
        ]
    }
}

/// Summed hours for one project/year(/month) group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateRow {
    pub project: String,
    pub year: i32,
    /// Present only when grouping by month.
    pub month: Option<u32>,
    /// Hours with exactly two decimals, e.g. "3.00".
    pub hours: String,
}

#[derive(Debug, Default)]
pub struct ListReport {
    pub rows: Vec<ListRow>,
}

impl Tabular for ListReport {
    fn headers(&self) -> Vec<&'static str> {
        LIST_HEADERS.to_vec()
    }

    fn records(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(ListRow::cells).collect()
    }
}

#[derive(Debug, Default)]
pub struct AggregateReport {
    pub by_month: bool,
    pub rows: Vec<AggregateRow>,
}

impl Tabular for AggregateReport {
    fn headers(&self) -> Vec<&'static str> {
        if self.by_month {
            vec!["Project", "Year", "Month", "Hours"]
        } else {
            vec!["Project", "Year", "Hours"]
        }
    }

    fn records(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| {
                let mut cells = vec![r.project.clone(), r.year.to_string()];
                if self.by_month {
                    cells.push(r.month.map(|m| m.to_string()).unwrap_or_default());
                }
                cells.push(r.hours.clone());
                cells
            })
            .collect()
    }
}
