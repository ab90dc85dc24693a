//! `ems-fleet` — ambulance fleet state and the service-area geography.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                   |
//! |-----------|------------------------------------------------------------|
//! | [`store`] | `FleetState` arena, `Ambulance`, `Availability`            |
//! | [`area`]  | `Station`, `Hospital`, `ServiceArea`, `ServiceAreaBuilder` |
//!
//! A `ServiceArea` is immutable for a whole evaluation; a `FleetState` is
//! rebuilt from it at the start of every replication with
//! [`ServiceArea::fleet`].

pub mod area;
pub mod store;

#[cfg(test)]
mod tests;

pub use area::{Hospital, ServiceArea, ServiceAreaBuilder, Station};
pub use store::{Ambulance, Availability, FleetState};
