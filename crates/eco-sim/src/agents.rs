//! The four ecosystem agents.
//!
//! | Agent              | Owns                                     |
//! |--------------------|------------------------------------------|
//! | [`GrainAgent`]     | grain height                             |
//! | [`DeerAgent`]      | deer                                     |
//! | [`GrasshopperAgent`] | grasshoppers, swarm grazing            |
//! | [`WatcherAgent`]   | calendar and weather; calls the reporter |

use eco_core::{Calendar, Climate, Growth, RandomSource, Tick};

use crate::rules::{self, HopperStep};
use crate::{Agent, EcoState, Reporter};

// ── Grain ─────────────────────────────────────────────────────────────────────

pub struct GrainAgent {
    climate: Climate,
    growth:  Growth,
    next:    f32,
}

impl GrainAgent {
    pub fn new(climate: Climate, growth: Growth) -> Self {
        Self { climate, growth, next: 0.0 }
    }
}

impl Agent<EcoState> for GrainAgent {
    fn name(&self) -> &str {
        "grain"
    }

    fn compute(&mut self, state: &EcoState) {
        self.next = rules::next_grain_height(&state.snapshot(), &self.climate, &self.growth);
    }

    fn commit(&mut self, state: &EcoState) {
        state.grain_height.set(self.next);
    }
}

// ── Deer ──────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct DeerAgent {
    next: i32,
}

impl DeerAgent {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Agent<EcoState> for DeerAgent {
    fn name(&self) -> &str {
        "deer"
    }

    fn compute(&mut self, state: &EcoState) {
        self.next = rules::next_deer(state.deer.get(), state.grain_height.get());
    }

    fn commit(&mut self, state: &EcoState) {
        state.deer.set(self.next);
    }
}

// ── Grasshoppers ──────────────────────────────────────────────────────────────

pub struct GrasshopperAgent {
    growth: Growth,
    next:   HopperStep,
}

impl GrasshopperAgent {
    pub fn new(growth: Growth) -> Self {
        Self { growth, next: HopperStep::default() }
    }
}

impl Agent<EcoState> for GrasshopperAgent {
    fn name(&self) -> &str {
        "grasshoppers"
    }

    fn compute(&mut self, state: &EcoState) {
        self.next = rules::next_hoppers(&state.snapshot(), &self.growth);
    }

    fn commit(&mut self, state: &EcoState) {
        state.hoppers.set(self.next.hoppers);
        state.swarm_grazing.set(self.next.swarm_grazing);
    }
}

// ── Watcher ───────────────────────────────────────────────────────────────────

/// The clock and reporter.  Owns no population; after every commit it reports
/// the month, advances the calendar, and draws the next month's weather.
pub struct WatcherAgent<'a, R: Reporter + ?Sized, G: RandomSource + ?Sized> {
    start:    Calendar,
    climate:  Climate,
    reporter: &'a mut R,
    rng:      &'a mut G,
}

impl<'a, R: Reporter + ?Sized, G: RandomSource + ?Sized> WatcherAgent<'a, R, G> {
    pub fn new(start: Calendar, climate: Climate, reporter: &'a mut R, rng: &'a mut G) -> Self {
        Self { start, climate, reporter, rng }
    }

    fn tick(&self, now: Calendar) -> Tick {
        Tick(self.start.months_until(now))
    }
}

impl<R: Reporter + ?Sized, G: RandomSource + ?Sized> Agent<EcoState> for WatcherAgent<'_, R, G> {
    fn name(&self) -> &str {
        "watcher"
    }

    fn compute(&mut self, _state: &EcoState) {}

    fn commit(&mut self, _state: &EcoState) {}

    fn advance(&mut self, state: &EcoState) {
        let snapshot = state.snapshot();
        let tick = self.tick(snapshot.calendar);
        self.reporter.on_tick(tick, &snapshot);

        let mut calendar = snapshot.calendar;
        calendar.advance();
        state.set_calendar(calendar);
        state.apply_weather(rules::seasonal_weather(calendar.month, &self.climate, &mut *self.rng));
    }

    fn finish(&mut self, state: &EcoState) {
        let snapshot = state.snapshot();
        let tick = self.tick(snapshot.calendar);
        self.reporter.on_sim_end(tick, &snapshot);
    }
}
