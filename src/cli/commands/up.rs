use crate::context::AppContext;
use crate::core::session::SessionLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::period::Period;

/// Start a new session stamped with the resolved year/month.
pub fn handle(ctx: &mut AppContext, period: Period) -> AppResult<()> {
    let entry = SessionLogic::up(ctx, period)?;
    success(format!(
        "Session {} started for '{}' at {} ({}-{:02})",
        entry.id,
        entry.project,
        ctx.now.format("%Y-%m-%d %H:%M:%S"),
        entry.year,
        entry.month
    ));
    Ok(())
}
