//! Concurrency tests for both barrier variants.
//!
//! Every property is checked against the blocking and the spinning barrier
//! through the shared `Rendezvous` trait.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::thread;

use crate::{AnyBarrier, Barrier, Rendezvous, SpinBarrier, SyncError};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn blocking(n: usize) -> Barrier {
    Barrier::new(n).unwrap()
}

fn spinning(n: usize) -> SpinBarrier {
    SpinBarrier::new(n).unwrap()
}

/// All N callers return, and each observes the full arrival count right after
/// release.
fn release_only_after_all_arrive<B: Rendezvous>(barrier: &B) {
    let n = barrier.parties();
    let arrived = AtomicUsize::new(0);
    let observed: Vec<usize> = thread::scope(|s| {
        let handles: Vec<_> = (0..n)
            .map(|_| {
                s.spawn(|| {
                    arrived.fetch_add(1, Ordering::SeqCst);
                    barrier.arrive_and_wait();
                    arrived.load(Ordering::SeqCst)
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(observed.len(), n);
    assert!(observed.iter().all(|&c| c == n), "released early: {observed:?}");
}

/// No participant returns from round k+1 before every participant has
/// returned from round k.  Exits are stamped from a global sequence counter.
fn rounds_do_not_mix<B: Rendezvous>(barrier: &B, rounds: usize) {
    let n = barrier.parties();
    let seq = AtomicU64::new(0);
    let stamps: Vec<Vec<u64>> = thread::scope(|s| {
        let handles: Vec<_> = (0..n)
            .map(|worker| {
                let seq = &seq;
                s.spawn(move || {
                    let mut exits = Vec::with_capacity(rounds);
                    for round in 0..rounds {
                        // Uneven pacing so fast workers try to lap slow ones.
                        if (worker + round) % 3 == 0 {
                            thread::yield_now();
                        }
                        barrier.arrive_and_wait();
                        exits.push(seq.fetch_add(1, Ordering::SeqCst));
                    }
                    exits
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for round in 0..rounds - 1 {
        let last_exit = stamps.iter().map(|w| w[round]).max().unwrap();
        let first_next = stamps.iter().map(|w| w[round + 1]).min().unwrap();
        assert!(
            last_exit < first_next,
            "round {} exit {} overlaps round {} exit {}",
            round, last_exit, round + 1, first_next,
        );
    }
}

/// Exactly one caller per round is told it is the leader.
fn one_leader_per_round<B: Rendezvous>(barrier: &B, rounds: usize) {
    let n = barrier.parties();
    let leaders: Vec<AtomicUsize> = (0..rounds).map(|_| AtomicUsize::new(0)).collect();
    thread::scope(|s| {
        for _ in 0..n {
            s.spawn(|| {
                for counter in &leaders {
                    if barrier.arrive_and_wait().is_leader() {
                        counter.fetch_add(1, Ordering::SeqCst);
                    }
                }
            });
        }
    });
    for (round, counter) in leaders.iter().enumerate() {
        assert_eq!(counter.load(Ordering::SeqCst), 1, "round {round}");
    }
}

// ── Blocking barrier ──────────────────────────────────────────────────────────

#[cfg(test)]
mod blocking_tests {
    use super::*;

    #[test]
    fn zero_parties_rejected() {
        assert!(matches!(Barrier::new(0), Err(SyncError::NoParticipants)));
    }

    #[test]
    fn single_party_never_blocks() {
        let b = blocking(1);
        for _ in 0..10 {
            assert!(b.arrive_and_wait().is_leader());
        }
        assert_eq!(b.generation(), 10);
    }

    #[test]
    fn releases_after_all_arrive() {
        for n in 2..=8 {
            release_only_after_all_arrive(&blocking(n));
        }
    }

    #[test]
    fn round_isolation() {
        rounds_do_not_mix(&blocking(4), 500);
    }

    #[test]
    fn leader_election() {
        one_leader_per_round(&blocking(5), 200);
    }

    #[test]
    fn generation_counts_rounds() {
        let b = blocking(3);
        thread::scope(|s| {
            for _ in 0..3 {
                s.spawn(|| {
                    for _ in 0..25 {
                        b.arrive_and_wait();
                    }
                });
            }
        });
        assert_eq!(b.generation(), 25);
    }
}

// ── Spin barrier ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod spin_tests {
    use super::*;

    #[test]
    fn zero_parties_rejected() {
        assert!(matches!(SpinBarrier::new(0), Err(SyncError::NoParticipants)));
    }

    #[test]
    fn single_party_never_blocks() {
        let b = spinning(1);
        for _ in 0..10 {
            assert!(b.arrive_and_wait().is_leader());
        }
        assert_eq!(b.generation(), 10);
    }

    #[test]
    fn releases_after_all_arrive() {
        for n in 2..=6 {
            release_only_after_all_arrive(&spinning(n));
        }
    }

    #[test]
    fn round_isolation() {
        rounds_do_not_mix(&spinning(4), 300);
    }

    #[test]
    fn leader_election() {
        one_leader_per_round(&spinning(4), 200);
    }
}

// ── Runtime dispatch ──────────────────────────────────────────────────────────

#[cfg(test)]
mod any_barrier_tests {
    use eco_core::BarrierKind;

    use super::*;

    #[test]
    fn kind_round_trips() {
        for kind in [BarrierKind::Blocking, BarrierKind::Spin] {
            let b = AnyBarrier::new(kind, 3).unwrap();
            assert_eq!(b.kind(), kind);
            assert_eq!(b.parties(), 3);
        }
    }

    #[test]
    fn zero_parties_rejected_for_both_kinds() {
        assert!(AnyBarrier::new(BarrierKind::Blocking, 0).is_err());
        assert!(AnyBarrier::new(BarrierKind::Spin, 0).is_err());
    }

    #[test]
    fn dispatch_preserves_round_isolation() {
        rounds_do_not_mix(&AnyBarrier::new(BarrierKind::Blocking, 3).unwrap(), 100);
        rounds_do_not_mix(&AnyBarrier::new(BarrierKind::Spin, 3).unwrap(), 100);
    }
}
