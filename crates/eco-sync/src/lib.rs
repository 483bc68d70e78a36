//! `eco-sync`: reusable rendezvous barriers.
//!
//! A barrier lets a fixed team of N threads advance in rounds: every
//! participant calls [`Rendezvous::arrive_and_wait`], the N-th arrival
//! releases all of them, and nobody can complete round k+1 until every
//! participant has left round k.
//!
//! | Type            | Waiting strategy                                    |
//! |-----------------|-----------------------------------------------------|
//! | [`Barrier`]     | Mutex + condvar, generation counter (sleeps)        |
//! | [`SpinBarrier`] | Arrival/departure counters, busy-wait with yield    |
//! | [`AnyBarrier`]  | Runtime choice between the two via `BarrierKind`    |
//!
//! Neither variant supports timeouts or cancellation.  A participant that
//! never arrives blocks the rest of the team forever.

pub mod barrier;
pub mod error;
pub mod spin;

#[cfg(test)]
mod tests;

pub use barrier::Barrier;
pub use error::{SyncError, SyncResult};
pub use spin::SpinBarrier;

use eco_core::BarrierKind;

/// Returned by [`Rendezvous::arrive_and_wait`].  Exactly one participant per
/// round is the leader (the last to arrive).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BarrierWaitResult {
    leader: bool,
}

impl BarrierWaitResult {
    #[inline]
    pub(crate) fn new(leader: bool) -> Self {
        Self { leader }
    }

    #[inline]
    pub fn is_leader(&self) -> bool {
        self.leader
    }
}

/// A reusable N-party rendezvous point.
pub trait Rendezvous: Sync {
    /// Number of participants fixed at construction.
    fn parties(&self) -> usize;

    /// Block until all [`parties`][Self::parties] participants have called
    /// this for the current round.
    fn arrive_and_wait(&self) -> BarrierWaitResult;
}

/// Either barrier variant, chosen at runtime.
#[derive(Debug)]
pub enum AnyBarrier {
    Blocking(Barrier),
    Spin(SpinBarrier),
}

impl AnyBarrier {
    pub fn new(kind: BarrierKind, parties: usize) -> SyncResult<Self> {
        Ok(match kind {
            BarrierKind::Blocking => AnyBarrier::Blocking(Barrier::new(parties)?),
            BarrierKind::Spin     => AnyBarrier::Spin(SpinBarrier::new(parties)?),
        })
    }

    pub fn kind(&self) -> BarrierKind {
        match self {
            AnyBarrier::Blocking(_) => BarrierKind::Blocking,
            AnyBarrier::Spin(_)     => BarrierKind::Spin,
        }
    }
}

impl Rendezvous for AnyBarrier {
    fn parties(&self) -> usize {
        match self {
            AnyBarrier::Blocking(b) => b.parties(),
            AnyBarrier::Spin(b)     => b.parties(),
        }
    }

    #[inline]
    fn arrive_and_wait(&self) -> BarrierWaitResult {
        match self {
            AnyBarrier::Blocking(b) => b.arrive_and_wait(),
            AnyBarrier::Spin(b)     => b.arrive_and_wait(),
        }
    }
}
