use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod output;

// Single-threaded: the watcher, its prompts and the saver share one thread.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("qsv error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = bootstrap::load_config()?;
    let ctx = bootstrap::AppContext::init(config)?;

    match cli.command {
        cli::Commands::Watch(args) => commands::watch::handle(&args, ctx).await,
        cli::Commands::Save(args) => commands::save::handle(&args, ctx).await,
        cli::Commands::Target => commands::target::handle(&ctx).await,
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("QUIZSAVER_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // stdout carries command output.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
