//! `eco-sim`: the grain/deer/grasshopper ecosystem on a lockstep team.
//!
//! # Three-rendezvous month
//!
//! ```text
//! while calendar < terminal:          (checked by every agent)
//!   ① Compute : each agent reads the shared state and computes the next
//!               value of the field(s) it owns.
//!   ── rendezvous #1
//!   ② Commit  : each agent writes its owned field(s).
//!   ── rendezvous #2
//!   ③ Advance : the watcher reports the month, advances the calendar,
//!               and draws the next month's weather.
//!   ── rendezvous #3
//! ```
//!
//! All compute-phase reads of month t happen before any commit of month t,
//! and every write of month t happens before any read of month t+1.  The
//! barrier is the only synchronisation; there are no per-field locks.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use eco_core::EcoConfig;
//! use eco_sim::{EcoSimBuilder, TracingReporter};
//!
//! let mut sim = EcoSimBuilder::new(EcoConfig::default()).build()?;
//! let summary = sim.run(&mut TracingReporter)?;
//! assert_eq!(summary.rounds, 72);
//! ```

pub mod agent;
pub mod agents;
pub mod builder;
pub mod error;
pub mod lockstep;
pub mod reporter;
pub mod rules;
pub mod sim;
pub mod state;


pub use agent::Agent;
pub use builder::EcoSimBuilder;
pub use error::{SimError, SimResult};
pub use lockstep::{Lockstep, RunSummary};
pub use reporter::{Fanout, NoopReporter, Reporter, TracingReporter};
pub use sim::{AGENT_COUNT, EcoSim};
pub use state::{EcoSnapshot, EcoState, Scalar, ScalarBits};
