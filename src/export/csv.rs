// src/export/csv.rs

use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::report::Tabular;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// UTF-8 byte-order mark written before the header row.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Export file for a project: `<project>.csv` inside `dir`.
pub fn csv_file_name(dir: &Path, project: &str) -> PathBuf {
    dir.join(format!("{project}.csv"))
}

/// Write `source` as CSV: BOM, header row, one row per record.
///
/// The file is truncated on every call. The csv writer refuses records whose
/// length differs from the header, so ragged rows end the export with an error.
pub fn export_csv<T: Tabular>(source: &T, path: &Path) -> AppResult<usize> {
    let mut file = File::create(path)?;
    file.write_all(UTF8_BOM)?;

    let mut wtr = ::csv::Writer::from_writer(file);
    wtr.write_record(source.headers())?;

    let records = source.records();
    for record in &records {
        wtr.write_record(record)?;
    }
    wtr.flush()?;

    log::info!("wrote {} rows to {}", records.len(), path.display());
    notify_export_success("CSV", path, records.len());
    Ok(records.len())
}
