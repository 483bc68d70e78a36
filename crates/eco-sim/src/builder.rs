//! Fluent builder for constructing an [`EcoSim`].

use eco_core::{EcoConfig, RandomSource, SimRng};
use eco_sync::AnyBarrier;

use crate::rules::seasonal_weather;
use crate::sim::AGENT_COUNT;
use crate::{EcoSim, EcoState, SimResult};

/// Fluent builder for [`EcoSim<G>`].
///
/// # Optional inputs (have defaults)
///
/// | Method                  | Default                       |
/// |-------------------------|-------------------------------|
/// | `.random_source(g)`     | `SimRng::new(config.seed)`    |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = EcoSimBuilder::new(EcoConfig::default()).build()?;
/// sim.run(&mut TracingReporter)?;
/// ```
pub struct EcoSimBuilder<G: RandomSource = SimRng> {
    config: EcoConfig,
    rng:    G,
}

impl EcoSimBuilder<SimRng> {
    pub fn new(config: EcoConfig) -> Self {
        let rng = SimRng::new(config.seed);
        Self { config, rng }
    }
}

impl<G: RandomSource> EcoSimBuilder<G> {
    /// Replace the weather noise source.
    pub fn random_source<H: RandomSource>(self, rng: H) -> EcoSimBuilder<H> {
        EcoSimBuilder { config: self.config, rng }
    }

    /// Validate the configuration, create the barrier, seed the state, and
    /// draw the first month's weather.
    pub fn build(self) -> SimResult<EcoSim<G>> {
        let config = self.config;
        config.validate()?;

        let barrier = AnyBarrier::new(config.barrier, AGENT_COUNT)?;
        let mut rng = self.rng;
        let state = EcoState::new(&config);
        state.apply_weather(seasonal_weather(config.start.month, &config.climate, &mut rng));

        Ok(EcoSim { config, state, barrier, rng })
    }
}
