/*!
Unification and matching in the free Abelian group over a set of variables.

A [`Term`] is an element of that group: a finite sum `Σ cᵢ·xᵢ` of integer-coefficient
variables, canonically represented so that structurally equal terms are `==` and no
stored coefficient is ever zero. [`matcher::match_eq`] solves `lhs =? rhs` for the
variables in `lhs`, treating `rhs`'s variables as constants; [`unifier::unify`] solves
`t0 =? t1` symmetrically by reducing to a match against `0`. Both are built on top of
[`solver::solve`], a standalone solver for a single linear Diophantine equation.

# Example

```
use abelian_unify::{Equation, Term};
use abelian_unify::unifier::unify;
use num_bigint::BigInt;

// 2x =? x + y
let t0 = Term::scale(&BigInt::from(2), &Term::var("x"));
let t1 = Term::add(&Term::var("x"), &Term::var("y"));

let sigma = unify(&Equation::new(t0.clone(), t1.clone()));
assert_eq!(sigma.apply(&t0), sigma.apply(&t1));
```

# Description

The matching and unification algorithms here are a direct specialization of the
classical single-equation AC-matching reduction: a matching or unification problem
over a free Abelian group collapses to a single linear Diophantine equation, whose
most general parametric solution lifts directly into a substitution. This differs
from the general AC-matching problem (which also handles the multiset-selection
structure of repeated constants) in exactly the way a free Abelian group differs from
a free commutative monoid: coefficients here may be negative, and cancellation is
unconditional.
*/

pub mod equation;
pub mod error;
pub(crate) mod fresh;
pub mod matcher;
pub mod solver;
pub mod substitution;
pub mod term;
pub mod unifier;

pub use equation::Equation;
pub use error::{DiophantineError, MatchFailureReason};
pub use substitution::Substitution;
pub use term::Term;
