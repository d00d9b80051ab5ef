//! Per-call fresh-parameter name generation.
//!
//! The pool is scoped to a single [`crate::matcher::match_eq`] call: there is no
//! process-wide counter, so two calls with identical inputs produce identical
//! output (see the determinism requirement in the solver and matcher specs).

use std::collections::HashSet;

/// Generates variable names of the form `g0`, `g1`, … that do not collide with any
/// name already occurring in the equation being matched.
pub(crate) struct FreshPool {
    next: u64,
    taken: HashSet<String>,
}

impl FreshPool {
    /// Creates a pool that will never hand out a name present in `occupied`.
    pub(crate) fn new<I, S>(occupied: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FreshPool {
            next: 0,
            taken: occupied.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the next name not already taken and not previously handed out by
    /// this pool, advancing the internal counter past every skipped collision.
    pub(crate) fn next_name(&mut self) -> String {
        loop {
            let candidate = format!("g{}", self.next);
            self.next += 1;
            if !self.taken.contains(&candidate) {
                self.taken.insert(candidate.clone());
                return candidate;
            }
        }
    }
}
