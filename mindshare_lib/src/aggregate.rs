//! Sequential page walk for one timeframe.

use std::future::Future;

use mindshare_api::types::extract_records;
use mindshare_api::{Client, LeaderboardQuery, Query, Timeframe};
use serde_json::Value;

use crate::normalize::{normalize, NormalizedEntry, RecordPosition};

/// Anything that can hand back one raw leaderboard page.
pub trait LeaderboardSource: Send + Sync {
    fn fetch_page(
        &self,
        timeframe: Timeframe,
        page: u32,
    ) -> impl Future<Output = Result<Value, mindshare_api::Error>> + Send;
}

impl LeaderboardSource for Client {
    fn fetch_page(
        &self,
        timeframe: Timeframe,
        page: u32,
    ) -> impl Future<Output = Result<Value, mindshare_api::Error>> + Send {
        let query = LeaderboardQuery::new(timeframe).with_page(page);
        async move { self.get_leaderboard_page(&query).await }
    }
}

/// Counters for one pagination run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FetchStats {
    pub pages: u32,
    pub kept: usize,
    /// Records that were not JSON objects.
    pub dropped_malformed: usize,
    /// Objects with no recoverable username.
    pub dropped_anonymous: usize,
    /// Whether pagination stopped on a failed page.
    pub aborted: bool,
}

/// Walks pages `1..=max_pages` for `timeframe` and returns every entry that
/// has a username, in upstream page and in-page order.
///
/// An empty or list-less page ends the walk. A failed page also ends it; the
/// entries gathered so far are returned and the failure is only logged.
pub async fn fetch_all_pages<S: LeaderboardSource>(
    source: &S,
    timeframe: Timeframe,
    max_pages: u32,
    page_size_hint: u32,
) -> Vec<NormalizedEntry> {
    let (entries, _) = fetch_all_pages_with_stats(source, timeframe, max_pages, page_size_hint).await;
    entries
}

/// Same as [`fetch_all_pages`], also returning the run's [`FetchStats`].
pub async fn fetch_all_pages_with_stats<S: LeaderboardSource>(
    source: &S,
    timeframe: Timeframe,
    max_pages: u32,
    page_size_hint: u32,
) -> (Vec<NormalizedEntry>, FetchStats) {
    let mut entries = Vec::new();
    let mut stats = FetchStats::default();

    for page in 1..=max_pages {
        let body = match source.fetch_page(timeframe, page).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("fetch page error ({} page {}): {}", timeframe, page, e);
                stats.aborted = true;
                break;
            }
        };

        let records = extract_records(&body);
        if records.is_empty() {
            tracing::debug!("{} page {} is empty, stopping", timeframe, page);
            break;
        }
        stats.pages += 1;

        for (index, record) in records.iter().enumerate() {
            let position = RecordPosition {
                page,
                index,
                page_size_hint,
            };
            match normalize(record, position) {
                Some(entry) if entry.username.is_some() => entries.push(entry),
                Some(_) => {
                    stats.dropped_anonymous += 1;
                    tracing::debug!("{} page {} record {} has no username", timeframe, page, index);
                }
                None => {
                    stats.dropped_malformed += 1;
                    tracing::debug!("{} page {} record {} is not an object", timeframe, page, index);
                }
            }
        }
    }

    stats.kept = entries.len();
    tracing::info!(
        "{}: {} entries from {} pages ({} malformed, {} without username dropped){}",
        timeframe,
        stats.kept,
        stats.pages,
        stats.dropped_malformed,
        stats.dropped_anonymous,
        if stats.aborted { ", stopped early on a failed page" } else { "" }
    );
    (entries, stats)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Scripted pages; `None` answers with an upstream 500.
    pub(crate) struct ScriptedSource {
        pages: Vec<Option<Value>>,
        pub(crate) calls: AtomicUsize,
        pub(crate) requested: Mutex<Vec<(Timeframe, u32)>>,
    }

    impl ScriptedSource {
        pub(crate) fn new(pages: Vec<Option<Value>>) -> Self {
            Self {
                pages,
                calls: AtomicUsize::new(0),
                requested: Mutex::new(Vec::new()),
            }
        }
    }

    impl LeaderboardSource for ScriptedSource {
        fn fetch_page(
            &self,
            timeframe: Timeframe,
            page: u32,
        ) -> impl Future<Output = Result<Value, mindshare_api::Error>> + Send {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.requested.lock().unwrap().push((timeframe, page));
            let result = match self.pages.get(page as usize - 1) {
                Some(Some(body)) => Ok(body.clone()),
                Some(None) => Err(mindshare_api::Error::HttpStatus {
                    status: 500,
                    body: "boom".to_string(),
                }),
                None => Ok(json!({"data": []})),
            };
            async move { result }
        }
    }

    fn names(entries: &[NormalizedEntry]) -> Vec<&str> {
        entries
            .iter()
            .map(|e| e.username.as_deref().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn walks_pages_until_empty() {
        let source = ScriptedSource::new(vec![
            Some(json!({"data": [{"user": "a"}, {"user": "b"}]})),
            Some(json!([{"user": "c"}])),
        ]);
        let entries = fetch_all_pages(&source, Timeframe::Day, 20, 100).await;

        assert_eq!(names(&entries), vec!["a", "b", "c"]);
        assert_eq!(entries[2].rank, 101.0);
        assert_eq!(source.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn stops_at_max_pages() {
        let page = Some(json!({"items": [{"user": "x"}]}));
        let source = ScriptedSource::new(vec![page.clone(), page.clone(), page]);
        let entries = fetch_all_pages(&source, Timeframe::Week, 2, 100).await;

        assert_eq!(entries.len(), 2);
        assert_eq!(
            *source.requested.lock().unwrap(),
            vec![(Timeframe::Week, 1), (Timeframe::Week, 2)]
        );
    }

    #[tokio::test]
    async fn failure_keeps_partial_results() {
        let source = ScriptedSource::new(vec![
            Some(json!({"data": [{"user": "a"}]})),
            None,
            Some(json!({"data": [{"user": "never"}]})),
        ]);
        let (entries, stats) = fetch_all_pages_with_stats(&source, Timeframe::Month, 20, 100).await;

        assert_eq!(names(&entries), vec!["a"]);
        assert!(stats.aborted);
        assert_eq!(stats.pages, 1);
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn drops_anonymous_and_malformed_records() {
        let source = ScriptedSource::new(vec![Some(json!({"data": [
            {"user": "a", "score": 1},
            {"score": 2},
            "garbage",
            {"user": "b", "score": 3}
        ]}))]);
        let (entries, stats) = fetch_all_pages_with_stats(&source, Timeframe::Day, 20, 100).await;

        assert_eq!(names(&entries), vec!["a", "b"]);
        assert_eq!(entries[1].rank, 4.0, "rank keeps the in-page position");
        assert_eq!(stats.dropped_anonymous, 1);
        assert_eq!(stats.dropped_malformed, 1);
        assert_eq!(stats.kept, 2);
    }

    #[tokio::test]
    async fn list_less_body_ends_pagination() {
        let source = ScriptedSource::new(vec![Some(json!({"message": "no data"}))]);
        let entries = fetch_all_pages(&source, Timeframe::Day, 20, 100).await;

        assert!(entries.is_empty());
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }
}
