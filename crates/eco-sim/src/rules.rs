//! Pure per-month update rules.
//!
//! Each function maps the current ecosystem snapshot to the next value of the
//! field(s) one agent owns.  None of them touch shared state; the agents in
//! [`crate::agents`] call them during the compute phase and store the result
//! until their commit phase.
//!
//! All populations and heights saturate at zero.

use std::f32::consts::PI;

use eco_core::{Climate, Growth, HopperRule, RandomSource};

use crate::EcoSnapshot;

/// Temperature above which grasshoppers hatch.
const HOPPER_HATCH_TEMP: f32 = 65.0;
/// Temperature below which half of the grasshoppers die.
const HOPPER_COLD_TEMP: f32 = 50.0;
/// Temperature below which a further two thirds die.
const HOPPER_FREEZE_TEMP: f32 = 30.0;
/// Warm enough for a bonus hatch when the soil is drying out.
const HOPPER_IDEAL_TEMP: f32 = 70.0;

const HOPPER_HATCH:       i32 = 5;
const HOPPER_IDEAL_HATCH: i32 = 3;
const HOPPER_DIE_OFF:     i32 = 3;

// ── Environment ───────────────────────────────────────────────────────────────

/// One month's exogenous weather.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Weather {
    pub temperature:   f32,
    pub precipitation: f32,
}

/// Seasonal temperature and precipitation for `month` (0 = January) with
/// uniform noise from `rng`.  Precipitation never goes negative.
pub fn seasonal_weather<G: RandomSource + ?Sized>(
    month:   u8,
    climate: &Climate,
    rng:     &mut G,
) -> Weather {
    // Angle of the earth around the sun, mid-month.
    let ang = (30.0 * f32::from(month) + 15.0) * (PI / 180.0);

    let temp = climate.avg_temp - climate.amp_temp * ang.cos();
    let temperature = temp + rng.ranf(-climate.random_temp, climate.random_temp);

    let precip = climate.avg_precip_per_month + climate.amp_precip_per_month * ang.sin();
    let precipitation =
        (precip + rng.ranf(-climate.random_precip, climate.random_precip)).max(0.0);

    Weather { temperature, precipitation }
}

// ── Grain ─────────────────────────────────────────────────────────────────────

#[inline]
fn sqr(x: f32) -> f32 {
    x * x
}

/// Grain grows best near the mid temperature and precipitation and is eaten
/// by deer, grasshoppers, and last month's swarm.
pub fn next_grain_height(now: &EcoSnapshot, climate: &Climate, growth: &Growth) -> f32 {
    let temp_factor = (-sqr((now.temperature - climate.mid_temp) / 10.0)).exp();
    let precip_factor = (-sqr((now.precipitation - climate.mid_precip) / 10.0)).exp();

    let mut height = now.grain_height;
    height += temp_factor * precip_factor * growth.grain_grows_per_month;
    height -= now.deer as f32 * growth.one_deer_eats_per_month;
    height -= now.hoppers as f32 * growth.one_hopper_eats_per_month;
    height -= now.swarm_grazing;
    height.max(0.0)
}

// ── Deer ──────────────────────────────────────────────────────────────────────

/// Carrying capacity in animals (or thousands of insects) supported by
/// `grain_height` inches of grain.
#[inline]
pub fn carrying_capacity(grain_height: f32) -> i32 {
    grain_height as i32
}

/// The herd moves one animal per month toward the carrying capacity.
pub fn next_deer(deer: i32, grain_height: f32) -> i32 {
    let capacity = carrying_capacity(grain_height);
    let next = match deer.cmp(&capacity) {
        std::cmp::Ordering::Less    => deer + 1,
        std::cmp::Ordering::Greater => deer - 1,
        std::cmp::Ordering::Equal   => deer,
    };
    next.max(0)
}

// ── Grasshoppers ──────────────────────────────────────────────────────────────

/// Next grasshopper population plus the grain its swarm eats.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct HopperStep {
    /// Thousands.
    pub hoppers:       i32,
    /// Inches of grain eaten on top of normal consumption.
    pub swarm_grazing: f32,
}

/// Hatching with warmth, die-off with cold, a bonus hatch when a warm month
/// is drier than the last, and swarming when the population is large but
/// still below carrying capacity.
pub fn next_hoppers(now: &EcoSnapshot, growth: &Growth) -> HopperStep {
    let capacity = carrying_capacity(now.grain_height);
    let mut hoppers = now.hoppers;

    if now.temperature > HOPPER_HATCH_TEMP {
        hoppers += HOPPER_HATCH;
    }
    if now.temperature < HOPPER_COLD_TEMP {
        hoppers /= 2;
    }
    if now.temperature < HOPPER_FREEZE_TEMP {
        hoppers /= 3;
    }
    if now.temperature > HOPPER_IDEAL_TEMP && now.precipitation < now.previous_precipitation {
        hoppers += HOPPER_IDEAL_HATCH;
    }

    let swarming = hoppers < capacity && hoppers > growth.swarm_threshold;
    let swarm_grazing = if swarming { (hoppers / 2) as f32 } else { 0.0 };
    let dies_off = match growth.hopper_rule {
        HopperRule::Intended  => swarming,
        HopperRule::AsWritten => true,
    };
    if dies_off {
        hoppers -= HOPPER_DIE_OFF;
    }

    HopperStep { hoppers: hoppers.max(0), swarm_grazing }
}
