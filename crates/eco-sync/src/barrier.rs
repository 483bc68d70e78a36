//! Blocking generation barrier.
//!
//! # Protocol
//!
//! ```text
//! lock
//!   arrived += 1
//!   if arrived == parties:          // leader
//!       arrived = 0
//!       generation += 1
//!       notify_all
//!   else:
//!       gen = generation
//!       wait on condvar while generation == gen
//! unlock
//! ```
//!
//! Each waiter remembers the generation it arrived in and sleeps until that
//! generation is closed.  A participant that races ahead into round k+1
//! increments `arrived` for the *new* generation only, so it can never release
//! or be released by stragglers still waking up from round k.

use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

use tracing::trace;

use crate::{BarrierWaitResult, Rendezvous, SyncError, SyncResult};

#[derive(Debug, Default)]
struct RoundState {
    /// Participants that have arrived in the current generation.
    arrived:    usize,
    /// Number of completed rounds.
    generation: u64,
}

/// N-party reusable barrier that sleeps while waiting.
#[derive(Debug)]
pub struct Barrier {
    parties: usize,
    state:   Mutex<RoundState>,
    cvar:    Condvar,
}

impl Barrier {
    /// Create a barrier for `parties` participants.
    pub fn new(parties: usize) -> SyncResult<Self> {
        if parties == 0 {
            return Err(SyncError::NoParticipants);
        }
        Ok(Self {
            parties,
            state: Mutex::new(RoundState::default()),
            cvar:  Condvar::new(),
        })
    }

    /// Rounds completed so far.
    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    // The lock never guards user code, so a poisoned mutex still holds
    // consistent counters.
    fn lock(&self) -> MutexGuard<'_, RoundState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Rendezvous for Barrier {
    #[inline]
    fn parties(&self) -> usize {
        self.parties
    }

    fn arrive_and_wait(&self) -> BarrierWaitResult {
        let mut state = self.lock();
        state.arrived += 1;

        if state.arrived == self.parties {
            state.arrived = 0;
            state.generation += 1;
            trace!(generation = state.generation, "barrier released");
            self.cvar.notify_all();
            return BarrierWaitResult::new(true);
        }

        let arrived_in = state.generation;
        let _state = self
            .cvar
            .wait_while(state, |s| s.generation == arrived_in)
            .unwrap_or_else(PoisonError::into_inner);
        BarrierWaitResult::new(false)
    }
}
