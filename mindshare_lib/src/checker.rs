//! Request orchestration: three timeframes, one cache, one response.

use std::collections::BTreeMap;
use std::sync::Arc;

use mindshare_api::{Client, Timeframe};
use serde::Serialize;

use crate::aggregate::{fetch_all_pages, LeaderboardSource};
use crate::cache::{Clock, SystemClock, TtlCache};
use crate::config::CheckConfig;
use crate::error::MindshareError;
use crate::normalize::NormalizedEntry;
use crate::standing::{compute_standing, TimeframeResult};
use crate::validation::normalize_username;

/// A timeframe's normalized entries, shared between the cache and readers.
pub type Leaderboard = Arc<Vec<NormalizedEntry>>;

/// Full answer for one username.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CheckResponse {
    /// Lower-cased, without a leading `@`.
    pub username: String,
    /// Keyed by timeframe wire value, in `24h`, `7d`, `month` order.
    pub results: BTreeMap<Timeframe, TimeframeResult>,
}

/// Looks up a user's standing on every timeframe's leaderboard.
///
/// Each timeframe's entry list is cached under `tf:<timeframe>` for
/// [`CheckConfig::cache_ttl`]. Cache misses racing on the same key each fetch
/// upstream; the last one to finish is what stays cached.
pub struct MindshareChecker<S, C = SystemClock> {
    source: S,
    cache: TtlCache<Leaderboard, C>,
    config: CheckConfig,
}

impl MindshareChecker<Client> {
    /// Checker talking to `config.upstream_url` with a system-clock cache.
    pub fn from_config(config: CheckConfig) -> Self {
        let client = Client::with_base_url(&config.upstream_url);
        Self::new(client, config)
    }
}

impl<S: LeaderboardSource> MindshareChecker<S> {
    pub fn new(source: S, config: CheckConfig) -> Self {
        Self::with_cache(source, TtlCache::new(), config)
    }
}

impl<S: LeaderboardSource, C: Clock> MindshareChecker<S, C> {
    pub fn with_cache(source: S, cache: TtlCache<Leaderboard, C>, config: CheckConfig) -> Self {
        Self {
            source,
            cache,
            config,
        }
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    pub fn cache(&self) -> &TtlCache<Leaderboard, C> {
        &self.cache
    }

    /// Returns the cached entry list for `timeframe`, fetching it on a miss.
    pub async fn leaderboard(&self, timeframe: Timeframe) -> Leaderboard {
        let key = cache_key(timeframe);
        let source = &self.source;
        let CheckConfig {
            max_pages,
            page_size_hint,
            cache_ttl,
            ..
        } = self.config;
        self.cache
            .get_or_compute(&key, cache_ttl, move || async move {
                let entries = fetch_all_pages(source, timeframe, max_pages, page_size_hint).await;
                Arc::new(entries)
            })
            .await
    }

    /// Validates `raw_username`, then computes the user's standing for every
    /// timeframe. Upstream failures never surface here; they shorten the
    /// affected timeframe's list instead.
    pub async fn check(&self, raw_username: &str) -> Result<CheckResponse, MindshareError> {
        let username = normalize_username(raw_username)?;
        tracing::info!("Checking mindshare standing for {}", username);

        let [day, week, month] = Timeframe::ALL;
        let (day_entries, week_entries, month_entries) = tokio::join!(
            self.leaderboard(day),
            self.leaderboard(week),
            self.leaderboard(month)
        );

        let results = [(day, day_entries), (week, week_entries), (month, month_entries)]
            .into_iter()
            .map(|(timeframe, entries)| (timeframe, compute_standing(&entries, &username)))
            .collect();

        Ok(CheckResponse { username, results })
    }
}

/// Cache key for a timeframe's entry list.
pub fn cache_key(timeframe: Timeframe) -> String {
    format!("tf:{}", timeframe.as_param())
}
