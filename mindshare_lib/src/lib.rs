//! Library layer for mindshare lookups: record normalization, cached
//! pagination, the rank-100 threshold and per-user standing.
//!
//! Wraps the `mindshare_api` client with schema inference over arbitrary
//! upstream records and an in-memory TTL cache per timeframe.

pub mod aggregate;
pub mod cache;
pub mod checker;
pub mod config;
pub mod error;
pub mod normalize;
pub mod resolver;
pub mod standing;
pub mod validation;

pub use mindshare_api;
pub use mindshare_api::{Client, Timeframe};

pub use aggregate::{fetch_all_pages, LeaderboardSource};
pub use cache::{Clock, ManualClock, SystemClock, TtlCache};
pub use checker::{CheckResponse, Leaderboard, MindshareChecker};
pub use config::CheckConfig;
pub use error::MindshareError;
pub use normalize::{normalize, NormalizedEntry, RecordPosition};
pub use resolver::{find_rank100, resolve_rank100, Rank100Source};
pub use standing::{compute_standing, TimeframeResult, UserPosition};
