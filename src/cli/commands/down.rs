use crate::context::AppContext;
use crate::core::report::format_hours;
use crate::core::session::SessionLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Stop the session the cursor points to.
pub fn handle(ctx: &AppContext) -> AppResult<()> {
    let entry = SessionLogic::down(ctx)?;
    success(format!(
        "Session {} stopped for '{}' after {} h",
        entry.id,
        entry.project,
        format_hours(entry.elapsed_secs().unwrap_or(0))
    ));
    Ok(())
}
