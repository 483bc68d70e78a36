//! The lockstep driver: one named thread per agent, three rendezvous per
//! round, join all.
//!
//! # Loop ownership
//!
//! Every participant must make exactly the same number of barrier calls, or
//! the last caller of the final round waits for a partner that has already
//! left.  Agents never call the barrier themselves: they only supply the
//! phase bodies, and `run_agent` is the single loop every thread runs.
//! The stop condition is checked at the top of the loop, after rendezvous #3,
//! so all agents read the same committed state and leave on the same round.

use std::thread;

use eco_sync::Rendezvous;
use tracing::{debug, info};

use crate::{Agent, SimError, SimResult};

/// Outcome of a completed run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Rounds (months) every agent completed.
    pub rounds: u64,
    /// Team size.
    pub agents: usize,
}

/// A fixed team of agents sharing one state and one barrier.
///
/// ```rust,ignore
/// let summary = Lockstep::new(&state, &barrier)
///     .agent(writer)
///     .agent(reader)
///     .run(|s| s.tick.get() >= 1000)?;
/// ```
///
/// There is no recovery from a participant that stops calling the barrier
/// (a panicking agent, or a spawn failure part-way through the team): the
/// rest of the team, and therefore [`run`][Self::run], block forever.
pub struct Lockstep<'a, S, B: Rendezvous> {
    state:   &'a S,
    barrier: &'a B,
    agents:  Vec<Box<dyn Agent<S> + 'a>>,
}

impl<'a, S: Sync, B: Rendezvous> Lockstep<'a, S, B> {
    pub fn new(state: &'a S, barrier: &'a B) -> Self {
        Self { state, barrier, agents: Vec::new() }
    }

    /// Add one agent to the team.
    pub fn agent(mut self, agent: impl Agent<S> + 'a) -> Self {
        self.agents.push(Box::new(agent));
        self
    }

    /// Spawn every agent, run rounds until `stop` holds at the top of a
    /// round, and join the team.
    pub fn run<F>(self, stop: F) -> SimResult<RunSummary>
    where
        F: Fn(&S) -> bool + Sync,
    {
        let agents = self.agents.len();
        let parties = self.barrier.parties();
        if agents != parties {
            return Err(SimError::PartyMismatch { agents, parties });
        }

        let state = self.state;
        let barrier = self.barrier;
        let stop = &stop;
        info!(agents, "starting lockstep team");

        let rounds = thread::scope(|scope| -> SimResult<Vec<(String, u64)>> {
            let mut handles = Vec::with_capacity(agents);
            for mut agent in self.agents {
                let name = agent.name().to_owned();
                let handle = thread::Builder::new()
                    .name(name.clone())
                    .spawn_scoped(scope, move || run_agent(agent.as_mut(), state, barrier, stop))
                    .map_err(|source| SimError::Spawn { name: name.clone(), source })?;
                handles.push((name, handle));
            }

            // Join every handle before reporting: an unjoined panicked
            // thread makes the scope itself panic.
            let mut rounds = Vec::with_capacity(agents);
            let mut panicked = None;
            for (name, handle) in handles {
                match handle.join() {
                    Ok(n)  => rounds.push((name, n)),
                    Err(_) => {
                        panicked.get_or_insert(name);
                    }
                }
            }
            match panicked {
                Some(name) => Err(SimError::AgentPanicked { name }),
                None       => Ok(rounds),
            }
        })?;

        let completed = rounds.first().map_or(0, |(_, n)| *n);
        if rounds.iter().any(|(_, n)| *n != completed) {
            return Err(SimError::TerminationSkew { rounds });
        }

        info!(rounds = completed, "lockstep team joined");
        Ok(RunSummary { rounds: completed, agents })
    }
}

/// The per-thread loop.  Returns the number of completed rounds.
fn run_agent<S, A, B, F>(agent: &mut A, state: &S, barrier: &B, stop: &F) -> u64
where
    A: Agent<S> + ?Sized,
    B: Rendezvous + ?Sized,
    F: Fn(&S) -> bool,
{
    debug!(agent = agent.name(), "agent started");
    let mut rounds = 0;
    while !stop(state) {
        agent.compute(state);
        barrier.arrive_and_wait(); // all computations done

        agent.commit(state);
        barrier.arrive_and_wait(); // all commits done

        agent.advance(state);
        barrier.arrive_and_wait(); // next round's inputs ready

        rounds += 1;
    }
    agent.finish(state);
    debug!(agent = agent.name(), rounds, "agent finished");
    rounds
}
