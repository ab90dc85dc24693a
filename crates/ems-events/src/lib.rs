//! `ems-events` — event types, the event queue, and call-stream loading.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`event`]  | `CallEvent`, `FreeEvent`, `Event` (tagged union)          |
//! | [`queue`]  | `EventQueue` (`BinaryHeap` keyed by time + insertion seq) |
//! | [`loader`] | `load_calls_csv`, `load_calls_reader`                     |
//! | [`error`]  | `EventError`, `EventResult<T>`                            |
//!
//! # Event model (summary)
//!
//! ```text
//! Call(t)  ── dispatch ──▶ Free(t + scene + treatment [+ hospital + hand-off])
//! Call(t)  ── no unit  ──▶ lost (nothing scheduled)
//! Free(t)  ── release, maybe reposition
//! ```
//!
//! Calls are loaded into the queue up front; free events are pushed while
//! the run drains it.

pub mod error;
pub mod event;
pub mod loader;
pub mod queue;


pub use error::{EventError, EventResult};
pub use event::{CallEvent, Event, FreeEvent};
pub use loader::{load_calls_csv, load_calls_reader};
pub use queue::EventQueue;
