use crate::bootstrap::AppContext;
use crate::output::output;

pub async fn handle(ctx: &AppContext) -> anyhow::Result<()> {
    let target = ctx.service.locator().resolve_target().await?;
    output(&target)
}
