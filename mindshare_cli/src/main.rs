mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mindshare_lib::{CheckConfig, MindshareChecker};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "mindshare")]
#[command(about = "Check where a user ranks on the mindshare leaderboard")]
struct Cli {
    /// Output format: table, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Leaderboard endpoint (overrides MINDSHARE_UPSTREAM_URL)
    #[arg(long, global = true)]
    upstream_url: Option<String>,

    /// Maximum pages fetched per timeframe (overrides MINDSHARE_MAX_PAGES)
    #[arg(long, global = true)]
    max_pages: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up one user's standing on every timeframe
    Check(commands::check::CheckArgs),
    /// Serve the lookup over HTTP
    Serve(commands::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mindshare=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.output);

    let mut config = CheckConfig::from_env();
    if let Some(url) = cli.upstream_url {
        config.upstream_url = url;
    }
    if let Some(max_pages) = cli.max_pages {
        config.max_pages = max_pages;
    }
    let checker = MindshareChecker::from_config(config);

    match &cli.command {
        Commands::Check(args) => commands::check::run(args, &checker, &format).await?,
        Commands::Serve(args) => commands::serve::run(args, checker).await?,
    }

    Ok(())
}
