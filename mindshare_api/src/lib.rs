//! HTTP client for the mindshare leaderboard API.
//!
//! The upstream response shape is not fixed, so pages are returned as raw
//! [`serde_json::Value`] bodies; [`types::extract_records`] pulls the record
//! list out of whatever envelope the endpoint happens to use.

mod client;
mod errors;
mod query;
pub mod types;
pub use self::client::{Client, DEFAULT_BASE_URL};
pub use self::errors::Error;
pub use self::query::{LeaderboardQuery, Query, SortBy};
pub use self::types::Timeframe;
