//! `ems-sim` — discrete-event loop for one replication.
//!
//! # Event loop
//!
//! ```text
//! while let Some(event) = queue.pop():           // earliest first, FIFO on ties
//!   Call(c):
//!     no unit available → lost (counted after warm-up)
//!     else              → Dispatcher::select → ResponsePlanner::plan
//!                         → fleet.dispatch, push Free(completes_at)
//!                         → record scene [+ hospital] travel (after warm-up)
//!   Free(f):
//!     fleet.release → RepositionPolicy::target → maybe relocate
//! ```
//!
//! Policies see the world through a read-only
//! [`DecisionContext`][ems_policy::DecisionContext]; only this crate mutates
//! the fleet and the queue.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ems_policy::{NearestAvailable, NoReposition};
//! use ems_sim::{NoopObserver, SimBuilder};
//!
//! let mut run = SimBuilder::new(config, area, calls, NearestAvailable, NoReposition).build()?;
//! run.run(&mut NoopObserver)?;
//! let observations = run.into_observations();
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, RunObserver};
pub use sim::{RunObservations, SimulationRun};
