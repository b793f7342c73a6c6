use anyhow::Result;
use clap::Args;
use mindshare_lib::{Client, MindshareChecker};

use crate::output::{
    print_json, print_standing_csv, print_standing_markdown, print_standing_table, OutputFormat,
};

#[derive(Args)]
pub struct CheckArgs {
    /// Username to look up (a leading @ is ignored)
    pub username: String,
}

pub async fn run(
    args: &CheckArgs,
    checker: &MindshareChecker<Client>,
    format: &OutputFormat,
) -> Result<()> {
    let resp = checker.check(&args.username).await?;

    let found = resp.results.values().filter(|r| r.found).count();
    eprintln!(
        "@{} found on {}/{} leaderboards",
        resp.username,
        found,
        resp.results.len()
    );

    match format {
        OutputFormat::Table => print_standing_table(&resp),
        OutputFormat::Json => print_json(&resp),
        OutputFormat::Csv => print_standing_csv(&resp)?,
        OutputFormat::Markdown => print_standing_markdown(&resp),
    }

    Ok(())
}
