//! Simulation configuration.
//!
//! `EcoConfig::default()` reproduces the classic grain/deer/grasshopper
//! scenario: January 2025 through December 2030, two deer, five inches of
//! grain, no grasshoppers.  Applications typically load overrides from a TOML
//! file (enable the `serde` feature) and pass the result to the simulation
//! builder.

use crate::{Calendar, EcoError, EcoResult};

// ── Enums ─────────────────────────────────────────────────────────────────────

/// Which barrier implementation synchronises the agents.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum BarrierKind {
    /// Mutex + condition variable + generation counter.  Sleeps while waiting.
    #[default]
    Blocking,
    /// Two-phase arrival/departure counters with busy-waiting.
    Spin,
}

/// How the grasshopper swarming rule is applied.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum HopperRule {
    /// Die-off only happens together with swarming (population above the
    /// swarm threshold and below carrying capacity).
    #[default]
    Intended,
    /// Die-off every month regardless of population or capacity; swarm
    /// grazing still needs both conditions.  Reproduces the literal classic
    /// rule.
    AsWritten,
}

// ── Sub-configs ───────────────────────────────────────────────────────────────

/// Seasonal weather model constants.  Temperatures in °F, precipitation in
/// inches per month.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Climate {
    pub avg_precip_per_month: f32,
    /// Plus or minus around the average over the year.
    pub amp_precip_per_month: f32,
    /// Plus or minus uniform noise added each month.
    pub random_precip:        f32,
    pub avg_temp:             f32,
    pub amp_temp:             f32,
    pub random_temp:          f32,
    /// Temperature at which grain grows best.
    pub mid_temp:             f32,
    /// Precipitation at which grain grows best.
    pub mid_precip:           f32,
}

impl Default for Climate {
    fn default() -> Self {
        Self {
            avg_precip_per_month: 7.0,
            amp_precip_per_month: 6.0,
            random_precip:        2.0,
            avg_temp:             60.0,
            amp_temp:             20.0,
            random_temp:          10.0,
            mid_temp:             40.0,
            mid_precip:           10.0,
        }
    }
}

/// Growth and consumption constants for the population rules.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Growth {
    /// Inches of grain growth per month under ideal conditions.
    pub grain_grows_per_month:     f32,
    /// Inches of grain one deer eats per month.
    pub one_deer_eats_per_month:   f32,
    /// Inches of grain one thousand grasshoppers eat per month.
    pub one_hopper_eats_per_month: f32,
    /// Grasshopper population (thousands) above which a hungry population
    /// swarms.
    pub swarm_threshold:           i32,
    pub hopper_rule:               HopperRule,
}

impl Default for Growth {
    fn default() -> Self {
        Self {
            grain_grows_per_month:     15.0,
            one_deer_eats_per_month:   1.0,
            one_hopper_eats_per_month: 0.25,
            swarm_threshold:           10,
            hopper_rule:               HopperRule::Intended,
        }
    }
}

/// Starting populations.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InitialPopulation {
    pub deer:         i32,
    /// Grain height in inches.
    pub grain_height: f32,
    /// Grasshoppers, in thousands.
    pub hoppers:      i32,
}

impl Default for InitialPopulation {
    fn default() -> Self {
        Self { deer: 2, grain_height: 5.0, hoppers: 0 }
    }
}

// ── EcoConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EcoConfig {
    /// Date of the first simulated month.
    pub start:    Calendar,
    /// The run stops once the calendar reaches this date (exclusive).
    pub terminal: Calendar,
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed:     u64,
    pub barrier:  BarrierKind,
    pub initial:  InitialPopulation,
    pub climate:  Climate,
    pub growth:   Growth,
}

impl Default for EcoConfig {
    fn default() -> Self {
        Self {
            start:    Calendar::january(2025),
            terminal: Calendar::january(2031),
            seed:     0,
            barrier:  BarrierKind::Blocking,
            initial:  InitialPopulation::default(),
            climate:  Climate::default(),
            growth:   Growth::default(),
        }
    }
}

impl EcoConfig {
    /// Number of months the run will simulate.
    #[inline]
    pub fn total_ticks(&self) -> u64 {
        self.start.months_until(self.terminal)
    }

    /// Reject dates with out-of-range months, a terminal date before the
    /// start, and negative starting populations.
    pub fn validate(&self) -> EcoResult<()> {
        Calendar::new(self.start.year, self.start.month)?;
        Calendar::new(self.terminal.year, self.terminal.month)?;
        if self.terminal < self.start {
            return Err(EcoError::TerminalBeforeStart {
                start:    self.start,
                terminal: self.terminal,
            });
        }
        if self.initial.deer < 0 || self.initial.hoppers < 0 || self.initial.grain_height < 0.0 {
            return Err(EcoError::Config(format!(
                "initial populations must be non-negative: {:?}",
                self.initial
            )));
        }
        if self.climate.random_temp < 0.0 || self.climate.random_precip < 0.0 {
            return Err(EcoError::Config("climate noise amplitudes must be non-negative".into()));
        }
        Ok(())
    }
}
