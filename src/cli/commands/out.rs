use crate::context::AppContext;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;
use crate::export::{csv_file_name, export_csv};
use crate::utils::period::Period;
use std::path::Path;

/// Export the session list to `<project>.csv` in the working directory.
pub fn handle(ctx: &AppContext, period: Period) -> AppResult<()> {
    let report = ReportLogic::list(&ctx.pool, &ctx.config.project, period)?;
    let path = csv_file_name(Path::new("."), &ctx.config.project);
    export_csv(&report, &path)?;
    Ok(())
}
