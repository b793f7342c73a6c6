mod common;
pub use self::common::Query;

mod leaderboard;
pub use self::leaderboard::{LeaderboardQuery, SortBy};
