//! The thing a matcher or unifier is asked to solve: an equality between two terms.

use crate::term::Term;

/// An equation `lhs = rhs` between two elements of the free Abelian group.
///
/// [`crate::matcher::match_eq`] treats the two sides asymmetrically (`lhs` holds the
/// unknowns, `rhs` the symbols); [`crate::unifier::unify`] treats them symmetrically.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Equation {
    lhs: Term,
    rhs: Term,
}

impl Equation {
    /// Builds the equation `lhs = rhs`.
    pub fn new(lhs: Term, rhs: Term) -> Self {
        Equation { lhs, rhs }
    }

    /// The left-hand side.
    pub fn lhs(&self) -> &Term {
        &self.lhs
    }

    /// The right-hand side.
    pub fn rhs(&self) -> &Term {
        &self.rhs
    }
}
