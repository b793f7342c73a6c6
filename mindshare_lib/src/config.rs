//! Runtime settings, read from the environment with typed fallbacks.

use std::time::Duration;

use mindshare_api::DEFAULT_BASE_URL;

pub const DEFAULT_MAX_PAGES: u32 = 20;
pub const DEFAULT_PAGE_SIZE_HINT: u32 = 100;
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckConfig {
    /// Leaderboard endpoint.
    pub upstream_url: String,
    /// Hard cap on pages fetched per timeframe.
    pub max_pages: u32,
    /// Page size assumed when synthesizing ranks.
    pub page_size_hint: u32,
    /// Lifetime of a cached timeframe list.
    pub cache_ttl: Duration,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            upstream_url: DEFAULT_BASE_URL.to_string(),
            max_pages: DEFAULT_MAX_PAGES,
            page_size_hint: DEFAULT_PAGE_SIZE_HINT,
            cache_ttl: DEFAULT_CACHE_TTL,
        }
    }
}

impl CheckConfig {
    pub fn from_env() -> Self {
        Self {
            upstream_url: std::env::var("MINDSHARE_UPSTREAM_URL")
                .ok()
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            max_pages: env_u32("MINDSHARE_MAX_PAGES", DEFAULT_MAX_PAGES),
            page_size_hint: env_u32("MINDSHARE_PAGE_SIZE", DEFAULT_PAGE_SIZE_HINT),
            cache_ttl: Duration::from_secs(env_u64(
                "MINDSHARE_CACHE_TTL_SECS",
                DEFAULT_CACHE_TTL.as_secs(),
            )),
        }
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    parse_or(std::env::var(key).ok().as_deref(), key, default)
}

fn env_u32(key: &str, default: u32) -> u32 {
    parse_or(std::env::var(key).ok().as_deref(), key, default)
}

fn parse_or<T>(raw: Option<&str>, key: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    match raw {
        None => default,
        Some(val) => val.trim().parse::<T>().unwrap_or_else(|_| {
            tracing::warn!("Invalid {} value {:?}, using default {}", key, val, default);
            default
        }),
    }
}
