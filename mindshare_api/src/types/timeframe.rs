use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Rolling window the upstream leaderboard is computed over.
///
/// Ordering follows [`Timeframe::ALL`], so a `BTreeMap<Timeframe, _>` keeps
/// the reporting order stable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "24h")]
    Day,
    #[serde(rename = "7d")]
    Week,
    #[serde(rename = "month", alias = "30d")]
    Month,
}

impl Timeframe {
    /// Every timeframe, in reporting order.
    pub const ALL: [Timeframe; 3] = [Timeframe::Day, Timeframe::Week, Timeframe::Month];

    /// Value sent as the `timeframe` query parameter.
    pub fn as_param(&self) -> &'static str {
        match self {
            Timeframe::Day => "24h",
            Timeframe::Week => "7d",
            Timeframe::Month => "month",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::Day => "Last 24 hours",
            Timeframe::Week => "Last 7 days",
            Timeframe::Month => "Last 30 days",
        }
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_param())
    }
}

impl FromStr for Timeframe {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "24h" => Ok(Timeframe::Day),
            "7d" => Ok(Timeframe::Week),
            "month" | "30d" => Ok(Timeframe::Month),
            other => Err(format!("unknown timeframe '{}'", other)),
        }
    }
}
