use std::sync::Arc;

use anyhow::Context;
use qs_watch::{
    AutoConsentUi, ConsentUi, ExtractionMachine, QuizSelectors, TerminalUi, Watcher,
    forward_jsonl,
};
use tokio::io::BufReader;
use tokio::sync::mpsc;

use crate::bootstrap::AppContext;
use crate::cli::WatchArgs;
use crate::output::output;

const FEED_BUFFER: usize = 64;

/// Run the full pipeline over a JSON Lines change feed and print a summary.
pub async fn handle(args: &WatchArgs, ctx: AppContext) -> anyhow::Result<()> {
    let feed_path = args.feed_path();
    if feed_path.is_none() && !args.yes {
        anyhow::bail!("prompts need the terminal; pass --feed PATH or --yes when piping the feed");
    }

    let watch = &ctx.config.watch;
    let selectors =
        QuizSelectors::from_config(&watch.selectors).context("invalid watch.selectors")?;
    let ui: Arc<dyn ConsentUi> = if args.yes {
        Arc::new(AutoConsentUi::accepting())
    } else {
        Arc::new(TerminalUi::new(watch.notification_lifetime()))
    };

    let (client, server) = qs_bridge::channel(1);
    let saver = tokio::spawn(server.serve(Arc::clone(&ctx.service)));

    let (feed_tx, feed_rx) = mpsc::channel(FEED_BUFFER);
    let feed = match feed_path {
        Some(path) => {
            let file = tokio::fs::File::open(&path)
                .await
                .with_context(|| format!("failed to open feed {}", path.display()))?;
            tokio::spawn(forward_jsonl(BufReader::new(file), feed_tx))
        }
        None => tokio::spawn(forward_jsonl(BufReader::new(tokio::io::stdin()), feed_tx)),
    };

    let report = Watcher::new(ExtractionMachine::new(selectors), ui, client)
        .with_recheck_delay(watch.recheck_delay())
        .run(feed_rx)
        .await;

    let batches = feed.await?.context("change feed failed")?;
    let saves = saver.await?;
    tracing::info!(batches, saves, "watch finished");

    output(&report)
}
