//! `RepositionTable` — per-occupancy candidate stations derived from a policy.
//!
//! A policy is a flat, ordered list of station numbers, one per ambulance.
//! Entry `i` of the table is the policy's first `i` stations: the fewer
//! ambulances are free, the shorter the list a freed unit chooses from.
//!
//! ```text
//! policy  = [5, 2, 9]
//! table   = [[], [5], [5, 2], [5, 2, 9]]
//! ```

use ems_core::StationId;

/// Used whenever a table entry (or its valid subset) is empty.
pub const FALLBACK_STATIONS: [StationId; 3] = [StationId(1), StationId(2), StationId(3)];

/// Immutable prefix table built once per evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepositionTable {
    entries: Vec<Vec<StationId>>,
}

impl RepositionTable {
    /// Build `len(policy) + 1` prefix entries.
    ///
    /// Station numbers are taken as-is; out-of-range values are filtered at
    /// decision time rather than rejected here.
    pub fn build(policy: &[u32]) -> Self {
        let entries = (0..=policy.len())
            .map(|i| policy[..i].iter().copied().map(StationId).collect())
            .collect();
        Self { entries }
    }

    /// Number of entries (`len(policy) + 1`).
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: even an empty policy yields one (empty) entry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw entry `i`, if it exists.
    pub fn entry(&self, i: usize) -> Option<&[StationId]> {
        self.entries.get(i).map(Vec::as_slice)
    }

    /// Candidate stations when `available_count` units are free.
    ///
    /// Counts beyond the policy length clamp to the full policy.  An empty
    /// entry yields [`FALLBACK_STATIONS`].
    pub fn candidates(&self, available_count: usize) -> &[StationId] {
        let idx = available_count.min(self.entries.len().saturating_sub(1));
        match self.entries.get(idx) {
            Some(entry) if !entry.is_empty() => entry,
            _ => &FALLBACK_STATIONS,
        }
    }
}
