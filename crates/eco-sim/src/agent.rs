//! The `Agent` trait: one concurrent role in the lockstep team.

/// A participant in the three-rendezvous lockstep protocol over state `S`.
///
/// The driver, not the agent, owns the loop, so every agent performs the
/// same number of rendezvous per month:
///
/// ```text
/// while !stop(state):
///     compute   (read any field, write nothing)
///     rendezvous #1
///     commit    (write owned fields only)
///     rendezvous #2
///     advance   (clock agent only: report, advance calendar, new weather)
///     rendezvous #3
/// finish
/// ```
///
/// Between `compute` and `commit` an agent holds the value it is about to
/// write; it carries nothing else across months.
pub trait Agent<S>: Send {
    /// Used as the OS thread name.
    fn name(&self) -> &str;

    /// Read the current month's state and remember the next value.
    fn compute(&mut self, state: &S);

    /// Write the value remembered by `compute` into the owned field(s).
    fn commit(&mut self, state: &S);

    /// Runs after every agent has committed.
    fn advance(&mut self, _state: &S) {}

    /// Runs once after the stop condition is observed.
    fn finish(&mut self, _state: &S) {}
}
