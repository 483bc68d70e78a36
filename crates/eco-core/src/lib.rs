//! `eco-core`: foundational types for the `ecosim` lockstep simulation.
//!
//! This crate is a dependency of every other `eco-*` crate.  It intentionally
//! has no `eco-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`time`]   | `Tick`, `Calendar`                                         |
//! | [`rng`]    | `RandomSource` trait, `SimRng` (seeded)                    |
//! | [`config`] | `EcoConfig`, `Climate`, `Growth`, `BarrierKind`, `HopperRule` |
//! | [`error`]  | `EcoError`, `EcoResult`                                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required for loading `EcoConfig` from TOML.                |

pub mod config;
pub mod error;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{BarrierKind, Climate, EcoConfig, Growth, HopperRule, InitialPopulation};
pub use error::{EcoError, EcoResult};
pub use rng::{RandomSource, SimRng};
pub use time::{Calendar, Tick};
