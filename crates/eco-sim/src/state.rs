//! Shared simulation state.
//!
//! # Ownership
//!
//! Every field is written by exactly one agent, and only during that agent's
//! commit phase (or, for the watcher, its advance phase):
//!
//! | Field(s)                                            | Writer       |
//! |-----------------------------------------------------|--------------|
//! | `year`, `month`, `temperature`, `precipitation`, `previous_precipitation` | watcher |
//! | `grain_height`                                      | grain        |
//! | `deer`                                              | deer         |
//! | `hoppers`, `swarm_grazing`                          | grasshoppers |
//!
//! Any agent may read any field during its compute phase.  The barrier
//! rendezvous between phases order those reads and writes, so each field is
//! a plain atomic accessed with `Relaxed` ordering: the happens-before edges
//! come from the barrier's own synchronisation, and the atomics only exist to
//! give shared references interior mutability without `unsafe`.

use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};

use eco_core::{Calendar, EcoConfig};

use crate::rules::Weather;

// ── Scalar ────────────────────────────────────────────────────────────────────

/// Types that round-trip losslessly through a `u64` bit pattern.
pub trait ScalarBits: Copy {
    fn to_bits(self) -> u64;
    fn from_bits(bits: u64) -> Self;
}

impl ScalarBits for f32 {
    #[inline]
    fn to_bits(self) -> u64 {
        u64::from(f32::to_bits(self))
    }
    #[inline]
    fn from_bits(bits: u64) -> Self {
        f32::from_bits(bits as u32)
    }
}

impl ScalarBits for i32 {
    #[inline]
    fn to_bits(self) -> u64 {
        u64::from(self as u32)
    }
    #[inline]
    fn from_bits(bits: u64) -> Self {
        bits as u32 as i32
    }
}

impl ScalarBits for u8 {
    #[inline]
    fn to_bits(self) -> u64 {
        u64::from(self)
    }
    #[inline]
    fn from_bits(bits: u64) -> Self {
        bits as u8
    }
}

impl ScalarBits for i64 {
    #[inline]
    fn to_bits(self) -> u64 {
        self as u64
    }
    #[inline]
    fn from_bits(bits: u64) -> Self {
        bits as i64
    }
}

impl ScalarBits for u32 {
    #[inline]
    fn to_bits(self) -> u64 {
        u64::from(self)
    }
    #[inline]
    fn from_bits(bits: u64) -> Self {
        bits as u32
    }
}

/// A single shared scalar with one writer and many readers.
pub struct Scalar<T: ScalarBits> {
    bits:    AtomicU64,
    _marker: PhantomData<T>,
}

impl<T: ScalarBits> Scalar<T> {
    pub fn new(value: T) -> Self {
        Self { bits: AtomicU64::new(value.to_bits()), _marker: PhantomData }
    }

    #[inline]
    pub fn get(&self) -> T {
        T::from_bits(self.bits.load(Ordering::Relaxed))
    }

    #[inline]
    pub fn set(&self, value: T) {
        self.bits.store(value.to_bits(), Ordering::Relaxed);
    }
}

impl<T: ScalarBits + std::fmt::Debug> std::fmt::Debug for Scalar<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.get().fmt(f)
    }
}

// ── EcoSnapshot ───────────────────────────────────────────────────────────────

/// A value copy of the whole ecosystem at one instant.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EcoSnapshot {
    pub calendar:               Calendar,
    /// °F.
    pub temperature:            f32,
    /// Inches of rain this month.
    pub precipitation:          f32,
    /// Inches of rain last month.
    pub previous_precipitation: f32,
    /// Inches.
    pub grain_height:           f32,
    pub deer:                   i32,
    /// Thousands.
    pub hoppers:                i32,
    /// Inches of grain eaten by swarming grasshoppers last month.
    pub swarm_grazing:          f32,
}

// ── EcoState ──────────────────────────────────────────────────────────────────

/// The shared ecosystem, read and written by all four agents.
#[derive(Debug)]
pub struct EcoState {
    pub year:                   Scalar<i32>,
    pub month:                  Scalar<u8>,
    pub temperature:            Scalar<f32>,
    pub precipitation:          Scalar<f32>,
    pub previous_precipitation: Scalar<f32>,
    pub grain_height:           Scalar<f32>,
    pub deer:                   Scalar<i32>,
    pub hoppers:                Scalar<i32>,
    pub swarm_grazing:          Scalar<f32>,
}

impl EcoState {
    /// Initial populations and start date from `config`.  Weather starts at
    /// zero until the first [`apply_weather`][Self::apply_weather].
    pub fn new(config: &EcoConfig) -> Self {
        Self {
            year:                   Scalar::new(config.start.year),
            month:                  Scalar::new(config.start.month),
            temperature:            Scalar::new(0.0),
            precipitation:          Scalar::new(0.0),
            previous_precipitation: Scalar::new(0.0),
            grain_height:           Scalar::new(config.initial.grain_height),
            deer:                   Scalar::new(config.initial.deer),
            hoppers:                Scalar::new(config.initial.hoppers),
            swarm_grazing:          Scalar::new(0.0),
        }
    }

    #[inline]
    pub fn calendar(&self) -> Calendar {
        Calendar { year: self.year.get(), month: self.month.get() }
    }

    /// Watcher only.
    #[inline]
    pub fn set_calendar(&self, calendar: Calendar) {
        self.year.set(calendar.year);
        self.month.set(calendar.month);
    }

    /// Install a new month's weather; the current precipitation becomes the
    /// previous one.  Watcher only.
    pub fn apply_weather(&self, weather: Weather) {
        self.previous_precipitation.set(self.precipitation.get());
        self.temperature.set(weather.temperature);
        self.precipitation.set(weather.precipitation);
    }

    pub fn snapshot(&self) -> EcoSnapshot {
        EcoSnapshot {
            calendar:               self.calendar(),
            temperature:            self.temperature.get(),
            precipitation:          self.precipitation.get(),
            previous_precipitation: self.previous_precipitation.get(),
            grain_height:           self.grain_height.get(),
            deer:                   self.deer.get(),
            hoppers:                self.hoppers.get(),
            swarm_grazing:          self.swarm_grazing.get(),
        }
    }
}
