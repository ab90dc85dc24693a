//! `FleetState` — the ambulance arena.
//!
//! # Single source of truth
//!
//! Each ambulance carries its own `Availability` flag, and the fleet keeps an
//! `available` counter so dispatch can test "anyone free?" in O(1).  Both are
//! private and only change together inside [`FleetState::dispatch`] and
//! [`FleetState::release`], so the counter always equals the number of
//! `Available` flags.  [`FleetState::is_consistent`] re-derives the count for
//! tests and debug assertions.
//!
//! `dispatch` on an already-busy unit and `release` on an already-available
//! unit are no-ops for the counter; this keeps the invariant even if a caller
//! falls back to picking from the whole fleet.

use ems_core::{AmbulanceId, EmsError, EmsResult, GeoPoint};

// ── Availability ──────────────────────────────────────────────────────────────

/// Whether an ambulance can take a call.
///
/// A third "repositioning" state is deliberately absent: relocation is an
/// instantaneous teleport, so a unit is never observed mid-move.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Availability {
    #[default]
    Available,
    Busy,
}

impl Availability {
    pub fn as_str(self) -> &'static str {
        match self {
            Availability::Available => "available",
            Availability::Busy      => "busy",
        }
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Ambulance ─────────────────────────────────────────────────────────────────

/// One unit of the fleet.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ambulance {
    pub id: AmbulanceId,
    availability: Availability,
    /// Where the unit currently is: home base, last call site, or the
    /// station it was repositioned to.
    pub location: GeoPoint,
    /// Base the unit starts each replication at.
    pub home: GeoPoint,
}

impl Ambulance {
    #[inline]
    pub fn availability(&self) -> Availability {
        self.availability
    }

    #[inline]
    pub fn is_available(&self) -> bool {
        self.availability == Availability::Available
    }
}

// ── FleetState ────────────────────────────────────────────────────────────────

/// All ambulances of one replication, indexed by `AmbulanceId`.
#[derive(Clone, Debug)]
pub struct FleetState {
    ambulances: Vec<Ambulance>,
    available:  usize,
}

impl FleetState {
    /// Build a fleet with one available ambulance per home base, ids in
    /// order.
    pub fn from_homes(homes: &[GeoPoint]) -> Self {
        let ambulances: Vec<Ambulance> = homes
            .iter()
            .enumerate()
            .map(|(i, &home)| Ambulance {
                id:           AmbulanceId(i as u32),
                availability: Availability::Available,
                location:     home,
                home,
            })
            .collect();
        let available = ambulances.len();
        Self { ambulances, available }
    }

    /// Number of ambulances.
    #[inline]
    pub fn len(&self) -> usize {
        self.ambulances.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ambulances.is_empty()
    }

    /// Number of ambulances currently `Available`.
    #[inline]
    pub fn available_count(&self) -> usize {
        self.available
    }

    pub fn get(&self, id: AmbulanceId) -> Option<&Ambulance> {
        self.ambulances.get(id.index())
    }

    /// All ambulances in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Ambulance> + '_ {
        self.ambulances.iter()
    }

    /// Available ambulances in ascending id order.
    pub fn available(&self) -> impl Iterator<Item = &Ambulance> + '_ {
        self.ambulances.iter().filter(|a| a.is_available())
    }

    /// Send `id` to a call at `site`: mark busy and snap its location to the
    /// scene.
    pub fn dispatch(&mut self, id: AmbulanceId, site: GeoPoint) -> EmsResult<()> {
        let amb = self.slot_mut(id)?;
        let was_available = amb.is_available();
        amb.availability = Availability::Busy;
        amb.location = site;
        if was_available {
            self.available -= 1;
        }
        Ok(())
    }

    /// Return `id` to service.  Returns the new available count.
    pub fn release(&mut self, id: AmbulanceId) -> EmsResult<usize> {
        let amb = self.slot_mut(id)?;
        let was_busy = !amb.is_available();
        amb.availability = Availability::Available;
        if was_busy {
            self.available += 1;
        }
        Ok(self.available)
    }

    /// Teleport `id` to `to` without touching its availability.
    pub fn relocate(&mut self, id: AmbulanceId, to: GeoPoint) -> EmsResult<()> {
        self.slot_mut(id)?.location = to;
        Ok(())
    }

    /// `true` if the cached counter agrees with the per-unit flags.
    pub fn is_consistent(&self) -> bool {
        self.available().count() == self.available
    }

    fn slot_mut(&mut self, id: AmbulanceId) -> EmsResult<&mut Ambulance> {
        self.ambulances
            .get_mut(id.index())
            .ok_or(EmsError::AmbulanceNotFound(id))
    }
}
