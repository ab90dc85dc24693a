//! Post-call repositioning.

use ems_core::{GeoPoint, StationId};

use crate::table::FALLBACK_STATIONS;
use crate::{DecisionContext, RepositionTable};

/// Decides where a just-freed ambulance should wait for its next call.
///
/// Called after the unit has been marked available, with
/// `available_count` already including it.  Returning `None` leaves the
/// unit where it is (the scene or hospital of its last call).  A returned
/// station must exist in `ctx.area`; the run teleports the unit there at no
/// time cost.
pub trait RepositionPolicy: Send + Sync {
    fn target(
        &self,
        from:            GeoPoint,
        available_count: usize,
        ctx:             &DecisionContext<'_>,
    ) -> Option<StationId>;
}

impl<T: RepositionPolicy + ?Sized> RepositionPolicy for &T {
    fn target(
        &self,
        from:            GeoPoint,
        available_count: usize,
        ctx:             &DecisionContext<'_>,
    ) -> Option<StationId> {
        (**self).target(from, available_count, ctx)
    }
}

// ── NoReposition ──────────────────────────────────────────────────────────────

/// A [`RepositionPolicy`] that never moves anyone.  Useful as a baseline and
/// in tests of the dispatch path alone.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoReposition;

impl RepositionPolicy for NoReposition {
    fn target(&self, _from: GeoPoint, _available: usize, _ctx: &DecisionContext<'_>) -> Option<StationId> {
        None
    }
}

// ── TableReposition ───────────────────────────────────────────────────────────

/// Table-driven repositioning.
///
/// Triggers only while fewer than `threshold` units are available (so a
/// threshold of 0 disables it).  Candidates come from the table entry for
/// the current count, minus any station number the area does not have; if
/// nothing survives, the fallback stations are used, again restricted to
/// the area.  The freed unit goes to the nearest surviving candidate, ties
/// to the earliest in the list.
#[derive(Clone, Debug)]
pub struct TableReposition {
    table:     RepositionTable,
    threshold: usize,
}

impl TableReposition {
    pub fn new(table: RepositionTable, threshold: usize) -> Self {
        Self { table, threshold }
    }

    /// Valid candidates for `available_count` in an area of `station_count`
    /// stations.  Empty only if the area has none of stations 1–3 and the
    /// table entry is entirely out of range.
    pub fn candidates(&self, available_count: usize, station_count: usize) -> Vec<StationId> {
        let valid: Vec<StationId> = self
            .table
            .candidates(available_count)
            .iter()
            .copied()
            .filter(|s| s.is_within(station_count))
            .collect();
        if !valid.is_empty() {
            return valid;
        }
        FALLBACK_STATIONS
            .iter()
            .copied()
            .filter(|s| s.is_within(station_count))
            .collect()
    }
}

impl RepositionPolicy for TableReposition {
    fn target(
        &self,
        from:            GeoPoint,
        available_count: usize,
        ctx:             &DecisionContext<'_>,
    ) -> Option<StationId> {
        if available_count >= self.threshold {
            return None;
        }

        let mut best: Option<(StationId, f64)> = None;
        for id in self.candidates(available_count, ctx.area.station_count()) {
            let Some(station) = ctx.area.station(id) else { continue };
            let d = from.distance_km(station.location);
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((id, d));
            }
        }
        best.map(|(id, _)| id)
    }
}
