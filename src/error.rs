//! Error types for the matcher and unifier boundary.
//!
//! "No solution" is not itself an error — it is the normal, expected outcome of an
//! unsatisfiable matching problem, and is represented as `Option::None` at the public
//! API. [`MatchFailureReason`] is the diagnostic payload a caller can ask for when it
//! wants to know *why* matching failed, not just *that* it failed.

use thiserror::Error;

/// Why [`crate::matcher::match_eq`] reported no solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchFailureReason {
    /// The left side is `0` but the right side is not: there is no way to bind zero
    /// variables to produce a non-zero term.
    LeftSideIsZero,
    /// The reduced linear Diophantine equation has no integer solution, i.e. the gcd
    /// of the left-hand coefficients does not divide every right-hand coefficient.
    Unsolvable,
}

impl std::fmt::Display for MatchFailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchFailureReason::LeftSideIsZero => {
                write!(f, "left side is the identity but right side is not")
            }
            MatchFailureReason::Unsolvable => {
                write!(f, "no integer solution exists for the reduced equation")
            }
        }
    }
}

/// Errors surfaced by this crate's public API.
///
/// Matching failure itself is reported via `Option::None`; this type exists for the
/// rarer case where a caller wants the reason attached, and for genuine programming
/// errors caught at the boundary (e.g. mismatched vector lengths passed to the solver).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiophantineError {
    /// [`crate::solver::solve`] was called with an empty left-hand coefficient list.
    /// The solver's contract requires `n >= 1`.
    #[error("solve() requires at least one left-hand coefficient, got 0")]
    EmptyCoefficients,
}

/// Message carried by the panic raised when [`crate::unifier::unify`] discovers that
/// the matcher reported "no solution" on a homogeneous equation. This can only happen
/// if the solver itself is buggy, since a single homogeneous linear equation always
/// has the trivial all-zero solution.
pub(crate) const UNIFIER_INVARIANT_VIOLATION: &str =
    "unify(): match() reported no solution for a homogeneous equation; this is a bug in solve()";
