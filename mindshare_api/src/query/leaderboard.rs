use url::Url;

use crate::types::Timeframe;

use super::Query;

/// One page request against the leaderboard endpoint.
#[derive(Clone, Copy, Debug)]
pub struct LeaderboardQuery {
    pub timeframe: Timeframe,
    pub sort_by: SortBy,
    /// Page number (1-indexed). Defaults to 1.
    pub page: u32,
}

impl Default for LeaderboardQuery {
    fn default() -> Self {
        Self {
            timeframe: Timeframe::Day,
            sort_by: SortBy::Mindshare,
            page: 1,
        }
    }
}

impl Query for LeaderboardQuery {
    fn page_mut(&mut self) -> &mut u32 {
        &mut self.page
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("timeframe", self.timeframe.as_param())
            .append_pair("sortBy", &self.sort_by.to_string())
            .append_pair("page", &self.page.to_string());
        url
    }
}

impl LeaderboardQuery {
    pub fn new(timeframe: Timeframe) -> Self {
        Self::default().with_timeframe(timeframe)
    }

    pub fn with_timeframe(mut self, timeframe: Timeframe) -> Self {
        self.timeframe = timeframe;
        self
    }

    pub fn with_sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }
}

/// Leaderboard ordering. The endpoint only ranks by mindshare.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortBy {
    #[default]
    Mindshare,
}

impl std::fmt::Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortBy::Mindshare => write!(f, "mindshare"),
        }
    }
}
