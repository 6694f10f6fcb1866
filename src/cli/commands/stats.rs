use crate::context::AppContext;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;
use crate::models::report::Tabular;
use crate::ui::messages::info;
use crate::utils::period::Period;
use crate::utils::table::Table;

/// Default command: summed hours of closed sessions.
pub fn handle(ctx: &AppContext, period: Period) -> AppResult<()> {
    let report = ReportLogic::aggregate(&ctx.pool, &ctx.config.project, period)?;
    print_report(&report);
    Ok(())
}

pub(crate) fn print_report<T: Tabular>(report: &T) {
    let mut table = Table::from_tabular(report);
    if std::env::var_os("NO_COLOR").is_some() {
        table = table.plain();
    }
    let empty = table.rows.is_empty();
    print!("{}", table.render());
    if empty {
        info("No records found");
    }
}
