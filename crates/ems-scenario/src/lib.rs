//! `ems-scenario` — where calls and service areas come from.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                     |
//! |-----------|--------------------------------------------------------------|
//! | [`calls`] | `CallSource` trait, `SyntheticCalls`, `RecordedCalls`        |
//! | [`area`]  | `AreaSource` trait, `EdmontonArea` station/hospital fixture  |
//!
//! Both traits are consulted once per replication, so every replication
//! gets a fresh call stream and a fresh service area.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on the generator settings. |

pub mod area;
pub mod calls;


pub use area::{AreaSource, EdmontonArea};
pub use calls::{BoundingBox, CallSource, RecordedCalls, SyntheticCalls};
