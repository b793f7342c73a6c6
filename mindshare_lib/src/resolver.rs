//! Mindshare threshold for reaching rank 100.

use crate::normalize::NormalizedEntry;

/// The rank the threshold is computed for.
pub const TARGET_RANK: usize = 100;

/// How the rank-100 entry was located.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rank100Source {
    /// An entry reported `rank == 100` itself.
    ExplicitRank,
    /// 100th entry after sorting the entries that carry a mindshare, highest first.
    MindshareOrder,
    /// 100th entry after sorting every entry by rank, lowest first.
    RankOrder,
}

/// The entry standing at rank 100 and the tier that found it.
#[derive(Clone, Copy, Debug)]
pub struct Rank100<'a> {
    pub entry: &'a NormalizedEntry,
    pub source: Rank100Source,
}

impl Rank100<'_> {
    pub fn mindshare(&self) -> Option<f64> {
        self.entry.mindshare
    }
}

/// Locates the rank-100 entry, first tier that applies wins.
///
/// An explicit `rank == 100` entry is returned even when its mindshare is
/// absent; the later tiers only run when no such entry exists.
pub fn find_rank100(entries: &[NormalizedEntry]) -> Option<Rank100<'_>> {
    if let Some(entry) = entries.iter().find(|e| e.rank == TARGET_RANK as f64) {
        return Some(Rank100 {
            entry,
            source: Rank100Source::ExplicitRank,
        });
    }

    let mut scored: Vec<(&NormalizedEntry, f64)> = entries
        .iter()
        .filter_map(|e| e.mindshare.map(|ms| (e, ms)))
        .collect();
    if scored.len() >= TARGET_RANK {
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        return Some(Rank100 {
            entry: scored[TARGET_RANK - 1].0,
            source: Rank100Source::MindshareOrder,
        });
    }

    if entries.len() >= TARGET_RANK {
        let mut by_rank: Vec<&NormalizedEntry> = entries.iter().collect();
        by_rank.sort_by(|a, b| a.rank.total_cmp(&b.rank));
        return Some(Rank100 {
            entry: by_rank[TARGET_RANK - 1],
            source: Rank100Source::RankOrder,
        });
    }

    None
}

/// Mindshare of the rank-100 entry, or `None` when there is not enough data
/// (or the rank-100 entry carries no mindshare).
pub fn resolve_rank100(entries: &[NormalizedEntry]) -> Option<f64> {
    find_rank100(entries).and_then(|r| r.mindshare())
}
