use crate::context::AppContext;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;
use crate::utils::period::Period;

/// Print one row per session of the configured project.
pub fn handle(ctx: &AppContext, period: Period) -> AppResult<()> {
    let report = ReportLogic::list(&ctx.pool, &ctx.config.project, period)?;
    super::stats::print_report(&report);
    Ok(())
}
