//! Plain data row written by output backends.

use eco_core::Tick;
use eco_sim::EcoSnapshot;

/// One simulated month, flattened for tabular output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthRow {
    pub tick:          u64,
    pub year:          i32,
    /// One-based (1 = January).
    pub month:         u8,
    pub temperature:   f32,
    pub precipitation: f32,
    pub grain_height:  f32,
    pub deer:          i32,
    /// Thousands.
    pub hoppers:       i32,
    pub swarm_grazing: f32,
}

impl MonthRow {
    pub fn new(tick: Tick, s: &EcoSnapshot) -> Self {
        Self {
            tick:          tick.0,
            year:          s.calendar.year,
            month:         s.calendar.month + 1,
            temperature:   s.temperature,
            precipitation: s.precipitation,
            grain_height:  s.grain_height,
            deer:          s.deer,
            hoppers:       s.hoppers,
            swarm_grazing: s.swarm_grazing,
        }
    }
}
