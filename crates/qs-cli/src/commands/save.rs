use qs_core::{BridgeRequest, QuizCapture};

use crate::bootstrap::AppContext;
use crate::cli::SaveArgs;
use crate::output::output;

/// Push one capture through the bridge and the privileged save path.
pub async fn handle(args: &SaveArgs, ctx: AppContext) -> anyhow::Result<()> {
    let capture = QuizCapture::new(&args.question, &args.answer, args.explanation.as_deref())?;

    let (client, server) = qs_bridge::channel(1);
    let saver = tokio::spawn(server.serve(ctx.service));

    let response = client.send(BridgeRequest::SaveQuiz(capture)).await;
    drop(client);
    saver.await?;

    output(&response)?;
    if !response.success {
        anyhow::bail!("save failed: {}", response.error.unwrap_or_default());
    }
    Ok(())
}
