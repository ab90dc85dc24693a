//! `ems-core` — foundational types for the EMS repositioning-policy evaluator.
//!
//! This crate is a dependency of every other `ems-*` crate.  It intentionally
//! has no `ems-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`ids`]    | `AmbulanceId`, `StationId`, `HospitalId`                   |
//! | [`geo`]    | `GeoPoint`, haversine distance, `TravelTimeModel`          |
//! | [`time`]   | `SimTime` (simulated minutes), day/minute constants        |
//! | [`config`] | `SimConfig` — seed, replications, warm-up, thresholds      |
//! | [`rng`]    | `SimRng` (per-replication deterministic RNG)               |
//! | [`error`]  | `EmsError`, `EmsResult`                                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{EmsError, EmsResult};
pub use geo::{GeoPoint, TravelTimeModel, travel_time_minutes};
pub use ids::{AmbulanceId, HospitalId, StationId};
pub use rng::SimRng;
pub use time::SimTime;
