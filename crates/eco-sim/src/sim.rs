//! The `EcoSim` struct: four agents, one state, one barrier.

use eco_core::{Calendar, EcoConfig, RandomSource, SimRng};
use eco_sync::{AnyBarrier, Rendezvous};
use tracing::info;

use crate::agents::{DeerAgent, GrainAgent, GrasshopperAgent, WatcherAgent};
use crate::{EcoState, Lockstep, Reporter, RunSummary, SimResult};

/// Grain, deer, grasshoppers, watcher.
pub const AGENT_COUNT: usize = 4;

/// The ecosystem simulation.
///
/// Create via [`EcoSimBuilder`][crate::EcoSimBuilder].  Each call to a `run*`
/// method launches the four agent threads, advances month by month until the
/// calendar reaches the stop date, and joins them.  State persists between
/// calls, so runs can be continued.
pub struct EcoSim<G: RandomSource = SimRng> {
    pub config:  EcoConfig,
    pub state:   EcoState,
    pub barrier: AnyBarrier,
    pub(crate) rng: G,
}

impl<G: RandomSource> EcoSim<G> {
    /// Run until `config.terminal`.
    pub fn run<R: Reporter + ?Sized>(&mut self, reporter: &mut R) -> SimResult<RunSummary> {
        let terminal = self.config.terminal;
        self.run_until(terminal, reporter)
    }

    /// Run exactly `months` more months from the current date (ignores
    /// `config.terminal`).
    pub fn run_months<R: Reporter + ?Sized>(
        &mut self,
        months:   u32,
        reporter: &mut R,
    ) -> SimResult<RunSummary> {
        let terminal = self.state.calendar().plus_months(months);
        self.run_until(terminal, reporter)
    }

    /// Run until the calendar reaches `terminal`.  Returns immediately with
    /// zero rounds (after `on_sim_end`) if it already has.
    pub fn run_until<R: Reporter + ?Sized>(
        &mut self,
        terminal: Calendar,
        reporter: &mut R,
    ) -> SimResult<RunSummary> {
        let Self { config, state, barrier, rng } = self;
        info!(
            from    = %state.calendar(),
            until   = %terminal,
            barrier = ?barrier.kind(),
            parties = barrier.parties(),
            "running ecosystem"
        );

        Lockstep::new(&*state, &*barrier)
            .agent(GrainAgent::new(config.climate.clone(), config.growth.clone()))
            .agent(DeerAgent::new())
            .agent(GrasshopperAgent::new(config.growth.clone()))
            .agent(WatcherAgent::new(config.start, config.climate.clone(), reporter, rng))
            .run(move |s: &EcoState| s.calendar() >= terminal)
    }
}
