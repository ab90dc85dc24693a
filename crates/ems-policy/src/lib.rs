//! `ems-policy` — dispatch and repositioning decisions.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`table`]      | `RepositionTable`, `FALLBACK_STATIONS`                    |
//! | [`context`]    | `DecisionContext<'a>` — read-only view for every decision |
//! | [`dispatch`]   | `Dispatcher` trait, `NearestAvailable`, `ResponsePlanner` |
//! | [`reposition`] | `RepositionPolicy` trait, `TableReposition`, `NoReposition` |
//!
//! # Design notes
//!
//! Policies only read.  Each decision returns a value (`Selection`,
//! `Option<StationId>`) and ems-sim applies it to the fleet, which keeps the
//! policies `Send + Sync` and trivially shareable across parallel
//! replications.

pub mod context;
pub mod dispatch;
pub mod reposition;
pub mod table;

#[cfg(test)]
mod tests;

pub use context::DecisionContext;
pub use dispatch::{Dispatcher, NearestAvailable, Response, ResponsePlanner, Selection};
pub use reposition::{NoReposition, RepositionPolicy, TableReposition};
pub use table::{FALLBACK_STATIONS, RepositionTable};
