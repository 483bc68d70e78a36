//! Two-phase spinning barrier.
//!
//! # Protocol
//!
//! ```text
//! lock
//!   at_barrier += 1
//!   if at_barrier == parties:       // leader
//!       gone = 0
//!       at_barrier = 0              // releases the spinners
//!       spin until gone == parties - 1
//!       unlock
//!       return
//! unlock
//! spin until at_barrier == 0
//! gone += 1
//! ```
//!
//! The leader keeps the arrival lock until every other participant has
//! registered its departure, so a participant that immediately calls
//! `arrive_and_wait` again blocks on the lock instead of counting itself into
//! the round that is still draining.
//!
//! Waiting burns CPU.  Prefer [`Barrier`][crate::Barrier] unless the team has
//! dedicated cores.

use std::hint;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::thread;

use tracing::trace;

use crate::{BarrierWaitResult, Rendezvous, SyncError, SyncResult};

/// Busy-wait iterations before yielding the time slice.
const SPINS_BEFORE_YIELD: u32 = 64;

/// N-party reusable barrier with busy-waiting release and drain phases.
#[derive(Debug)]
pub struct SpinBarrier {
    parties:    usize,
    lock:       Mutex<()>,
    at_barrier: AtomicUsize,
    gone:       AtomicUsize,
    generation: AtomicU64,
}

impl SpinBarrier {
    pub fn new(parties: usize) -> SyncResult<Self> {
        if parties == 0 {
            return Err(SyncError::NoParticipants);
        }
        Ok(Self {
            parties,
            lock:       Mutex::new(()),
            at_barrier: AtomicUsize::new(0),
            gone:       AtomicUsize::new(0),
            generation: AtomicU64::new(0),
        })
    }

    /// Rounds completed so far.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }
}

impl Rendezvous for SpinBarrier {
    #[inline]
    fn parties(&self) -> usize {
        self.parties
    }

    fn arrive_and_wait(&self) -> BarrierWaitResult {
        let guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let arrived = self.at_barrier.fetch_add(1, Ordering::AcqRel) + 1;

        if arrived == self.parties {
            self.gone.store(0, Ordering::Relaxed);
            let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
            self.at_barrier.store(0, Ordering::Release);
            trace!(generation, "spin barrier released");

            spin_until(|| self.gone.load(Ordering::Acquire) == self.parties - 1);
            drop(guard);
            return BarrierWaitResult::new(true);
        }
        drop(guard);

        spin_until(|| self.at_barrier.load(Ordering::Acquire) == 0);
        self.gone.fetch_add(1, Ordering::AcqRel);
        BarrierWaitResult::new(false)
    }
}

fn spin_until(mut done: impl FnMut() -> bool) {
    let mut spins = 0u32;
    while !done() {
        if spins < SPINS_BEFORE_YIELD {
            spins += 1;
            hint::spin_loop();
        } else {
            thread::yield_now();
        }
    }
}
