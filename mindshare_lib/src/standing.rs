//! Per-timeframe standing of the queried user.

use serde::{Serialize, Serializer};

use crate::normalize::NormalizedEntry;
use crate::resolver::{find_rank100, TARGET_RANK};

/// Result for one timeframe, serialized with the field names clients expect.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TimeframeResult {
    #[serde(rename = "totalFetched")]
    pub total_fetched: usize,
    #[serde(serialize_with = "serialize_opt_number")]
    pub rank100_mindshare: Option<f64>,
    pub found: bool,
    /// Present only when `found` is true.
    #[serde(flatten)]
    pub position: Option<UserPosition>,
}

/// Where the user sits and how far they are from rank 100.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UserPosition {
    #[serde(serialize_with = "serialize_number")]
    pub rank: f64,
    #[serde(serialize_with = "serialize_opt_number")]
    pub mindshare: Option<f64>,
    #[serde(serialize_with = "serialize_opt_number")]
    pub needed_mindshare: Option<f64>,
}

/// Combines the rank-100 threshold with the user's own entry.
///
/// `username` must already be lower-cased; matching is an exact,
/// case-insensitive comparison against each entry's username.
pub fn compute_standing(entries: &[NormalizedEntry], username: &str) -> TimeframeResult {
    let rank100 = find_rank100(entries);
    match &rank100 {
        Some(found) => tracing::debug!(
            "rank {} threshold from {:?} (entry rank {}, mindshare {:?})",
            TARGET_RANK,
            found.source,
            found.entry.rank,
            found.mindshare()
        ),
        None => tracing::debug!(
            "only {} entries, no rank {} threshold",
            entries.len(),
            TARGET_RANK
        ),
    }
    let rank100_mindshare = rank100.and_then(|found| found.mindshare());
    let you = entries.iter().find(|e| {
        e.username
            .as_deref()
            .is_some_and(|name| name.to_lowercase() == username)
    });

    let position = you.map(|entry| UserPosition {
        rank: entry.rank,
        mindshare: entry.mindshare,
        needed_mindshare: needed_mindshare(rank100_mindshare, entry.mindshare),
    });

    TimeframeResult {
        total_fetched: entries.len(),
        rank100_mindshare,
        found: position.is_some(),
        position,
    }
}

/// Distance to the threshold, clamped at zero. `None` unless both values are finite.
pub fn needed_mindshare(threshold: Option<f64>, own: Option<f64>) -> Option<f64> {
    match (threshold, own) {
        (Some(t), Some(o)) if t.is_finite() && o.is_finite() => Some((t - o).max(0.0)),
        _ => None,
    }
}

/// Whole numbers serialize as JSON integers (`2`, not `2.0`).
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

fn serialize_opt_number<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => serialize_number(v, serializer),
        None => serializer.serialize_none(),
    }
}
