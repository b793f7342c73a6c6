use anyhow::Result;
use mindshare_lib::CheckResponse;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Self {
        match s {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "md" | "markdown" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
struct StandingRow {
    #[tabled(rename = "Timeframe")]
    #[serde(rename = "Timeframe")]
    timeframe: String,
    #[tabled(rename = "Window")]
    #[serde(rename = "Window")]
    window: String,
    #[tabled(rename = "Fetched")]
    #[serde(rename = "Fetched")]
    fetched: usize,
    #[tabled(rename = "Rank 100")]
    #[serde(rename = "Rank 100")]
    rank100: String,
    #[tabled(rename = "Found")]
    #[serde(rename = "Found")]
    found: bool,
    #[tabled(rename = "Rank")]
    #[serde(rename = "Rank")]
    rank: String,
    #[tabled(rename = "Mindshare")]
    #[serde(rename = "Mindshare")]
    mindshare: String,
    #[tabled(rename = "Needed")]
    #[serde(rename = "Needed")]
    needed: String,
}

fn build_standing_rows(resp: &CheckResponse) -> Vec<StandingRow> {
    resp.results
        .iter()
        .map(|(timeframe, result)| {
            let position = result.position.as_ref();
            StandingRow {
                timeframe: timeframe.to_string(),
                window: timeframe.label().to_string(),
                fetched: result.total_fetched,
                rank100: format_score(result.rank100_mindshare),
                found: result.found,
                rank: position
                    .map(|p| format_score(Some(p.rank)))
                    .unwrap_or_else(|| "-".to_string()),
                mindshare: format_score(position.and_then(|p| p.mindshare)),
                needed: format_score(position.and_then(|p| p.needed_mindshare)),
            }
        })
        .collect()
}

// -- Table output --

pub fn print_standing_table(resp: &CheckResponse) {
    println!("Standing for @{}", resp.username);
    println!("{}", Table::new(build_standing_rows(resp)));
}

// -- Markdown output --

pub fn print_standing_markdown(resp: &CheckResponse) {
    let mut table = Table::new(build_standing_rows(resp));
    table.with(Style::markdown());
    println!("{}", table);
}

// -- CSV output --

pub fn print_standing_csv(resp: &CheckResponse) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_standing_rows(resp) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_score(value: Option<f64>) -> String {
    match value {
        None => "-".to_string(),
        Some(v) if v.fract() == 0.0 => format!("{:.0}", v),
        Some(v) => {
            let s = format!("{:.4}", v);
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
    }
}
