//! Reporter trait for per-month progress output.

use eco_core::Tick;
use tracing::info;

use crate::EcoSnapshot;

/// Callbacks invoked by the watcher agent.
///
/// `on_tick` runs once per simulated month, after every agent has committed
/// and before the calendar advances.  `on_sim_end` runs once after the final
/// month with the state at the terminal date.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: month printer
///
/// ```rust,ignore
/// struct MonthPrinter;
///
/// impl Reporter for MonthPrinter {
///     fn on_tick(&mut self, tick: Tick, now: &EcoSnapshot) {
///         println!("{tick} {}: {} deer", now.calendar, now.deer);
///     }
/// }
/// ```
pub trait Reporter: Send {
    fn on_tick(&mut self, _tick: Tick, _snapshot: &EcoSnapshot) {}

    fn on_sim_end(&mut self, _final_tick: Tick, _snapshot: &EcoSnapshot) {}
}

/// A [`Reporter`] that does nothing.
pub struct NoopReporter;

impl Reporter for NoopReporter {}

/// Emits one `info` event per month with every field as structured data.
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn on_tick(&mut self, tick: Tick, s: &EcoSnapshot) {
        info!(
            tick          = tick.0,
            date          = %s.calendar,
            temperature   = s.temperature,
            precipitation = s.precipitation,
            grain_height  = s.grain_height,
            deer          = s.deer,
            hoppers       = s.hoppers,
            "month complete"
        );
    }

    fn on_sim_end(&mut self, final_tick: Tick, s: &EcoSnapshot) {
        info!(ticks = final_tick.0, date = %s.calendar, "simulation finished");
    }
}

/// Forwards every callback to each inner reporter in order.
///
/// Reporters may be borrowed (`&mut R`) so the caller can inspect them after
/// the run.
#[derive(Default)]
pub struct Fanout<'a> {
    reporters: Vec<Box<dyn Reporter + 'a>>,
}

impl<'a> Fanout<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, reporter: impl Reporter + 'a) -> Self {
        self.reporters.push(Box::new(reporter));
        self
    }

    pub fn len(&self) -> usize {
        self.reporters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reporters.is_empty()
    }
}

impl Reporter for Fanout<'_> {
    fn on_tick(&mut self, tick: Tick, snapshot: &EcoSnapshot) {
        for r in &mut self.reporters {
            r.on_tick(tick, snapshot);
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick, snapshot: &EcoSnapshot) {
        for r in &mut self.reporters {
            r.on_sim_end(final_tick, snapshot);
        }
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn on_tick(&mut self, tick: Tick, snapshot: &EcoSnapshot) {
        (**self).on_tick(tick, snapshot);
    }

    fn on_sim_end(&mut self, final_tick: Tick, snapshot: &EcoSnapshot) {
        (**self).on_sim_end(final_tick, snapshot);
    }
}
