/*!

Matching: given an equation `lhs =? rhs` where `lhs` holds the unknowns and `rhs` is
built from symbols treated as constants, find the most general substitution `σ` for
the unknowns such that `σ(lhs) == rhs`.

# Example

```
use abelian_unify::{Equation, Term};
use abelian_unify::matcher::match_eq;
use num_bigint::BigInt;

// 2x + y =? 3z
let lhs = Term::add(&Term::scale(&BigInt::from(2), &Term::var("x")), &Term::var("y"));
let rhs = Term::scale(&BigInt::from(3), &Term::var("z"));
let sigma = match_eq(&Equation::new(lhs.clone(), rhs.clone())).expect("solvable");
assert_eq!(sigma.apply(&lhs), rhs);
```

Matching is reduced to solving a single linear Diophantine equation: the left side's
variables become the solver's unknowns, the right side's variables become the
solver's symbols, and the solver's parametric solution is lifted into a
[`crate::substitution::Substitution`] by naming each fresh parameter with a name that
cannot collide with anything already in the equation.
*/

use num_bigint::BigInt;

use crate::equation::Equation;
use crate::error::MatchFailureReason;
use crate::fresh::FreshPool;
use crate::solver::solve;
use crate::substitution::Substitution;
use crate::term::Term;

/// Finds the most general substitution solving `eq.lhs() =? eq.rhs()`, or `None` if
/// none exists.
pub fn match_eq(eq: &Equation) -> Option<Substitution> {
    match_eq_diagnose(eq).ok()
}

/// Like [`match_eq`], but on failure reports *why* no substitution exists.
pub fn match_eq_diagnose(eq: &Equation) -> Result<Substitution, MatchFailureReason> {
    let vars = eq.lhs().assocs();
    let syms = eq.rhs().assocs();
    let _span = tracing::debug_span!("match_eq", vars = vars.len(), syms = syms.len()).entered();

    if vars.is_empty() {
        return if syms.is_empty() {
            tracing::debug!("both sides are zero");
            Ok(Substitution::empty())
        } else {
            tracing::debug!("left side is zero but right side is not");
            Err(MatchFailureReason::LeftSideIsZero)
        };
    }

    let a: Vec<BigInt> = vars.iter().map(|(_, c)| c.clone()).collect();
    let b: Vec<BigInt> = syms.iter().map(|(_, c)| c.clone()).collect();

    let solution = solve(&a, &b)
        .expect("vars is non-empty, so solve() never sees an empty coefficient list")
        .ok_or(MatchFailureReason::Unsolvable)?;

    let occupied = vars
        .iter()
        .map(|(name, _)| name.clone())
        .chain(syms.iter().map(|(name, _)| name.clone()));
    let mut pool = FreshPool::new(occupied);
    let param_names: Vec<String> = (0..solution.num_parameters).map(|_| pool.next_name()).collect();

    let mut sigma = Substitution::empty();
    for (i, (name, _)) in vars.iter().enumerate() {
        let image = match solution.entry_for(i) {
            Some(entry) => {
                let mut term = Term::zero();
                for (factor, param_name) in entry.factors.iter().zip(param_names.iter()) {
                    term = Term::add(&term, &Term::scale(factor, &Term::var(param_name.clone())));
                }
                for (constant, (sym_name, _)) in entry.constants.iter().zip(syms.iter()) {
                    term = Term::add(&term, &Term::scale(constant, &Term::var(sym_name.clone())));
                }
                term
            }
            // a's entries come straight from Term::assocs(), which never stores a
            // zero coefficient, so solve() never actually omits a position here —
            // this arm exists for solve()'s general contract, not a reachable case.
            None => Term::var(pool.next_name()),
        };
        sigma.insert(name.clone(), image);
    }

    tracing::debug!(domain = sigma.domain().count(), "matched");
    Ok(sigma)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bi(n: i64) -> BigInt {
        BigInt::from(n)
    }

    #[test]
    fn both_sides_zero_is_the_empty_substitution() {
        let eq = Equation::new(Term::zero(), Term::zero());
        let sigma = match_eq(&eq).unwrap();
        assert!(sigma.is_empty());
    }

    #[test]
    fn zero_left_nonzero_right_has_no_solution() {
        let eq = Equation::new(Term::zero(), Term::var("a"));
        assert_eq!(match_eq_diagnose(&eq), Err(MatchFailureReason::LeftSideIsZero));
        assert!(match_eq(&eq).is_none());
    }

    #[test]
    fn scenario_2x_plus_y_matches_3z() {
        let lhs = Term::add(&Term::scale(&bi(2), &Term::var("x")), &Term::var("y"));
        let rhs = Term::scale(&bi(3), &Term::var("z"));
        let eq = Equation::new(lhs.clone(), rhs.clone());
        let sigma = match_eq(&eq).unwrap();
        assert_eq!(sigma.apply(&lhs), rhs);
        assert_eq!(sigma.domain().collect::<Vec<_>>(), vec!["x", "y"]);
    }

    #[test]
    fn scenario_2x_does_not_match_x_plus_y() {
        let lhs = Term::scale(&bi(2), &Term::var("x"));
        let rhs = Term::add(&Term::var("x"), &Term::var("y"));
        let eq = Equation::new(lhs, rhs);
        assert_eq!(match_eq_diagnose(&eq), Err(MatchFailureReason::Unsolvable));
    }

    #[test]
    fn scenario_64x_minus_41y_matches_a() {
        let lhs = Term::add(
            &Term::scale(&bi(64), &Term::var("x")),
            &Term::scale(&bi(-41), &Term::var("y")),
        );
        let rhs = Term::var("a");
        let eq = Equation::new(lhs.clone(), rhs.clone());
        let sigma = match_eq(&eq).unwrap();
        assert_eq!(sigma.apply(&lhs), rhs);
    }

    #[test]
    fn x_matches_x() {
        let eq = Equation::new(Term::var("x"), Term::var("x"));
        let sigma = match_eq(&eq).unwrap();
        assert_eq!(sigma.apply(&Term::var("x")), Term::var("x"));
    }

    #[test]
    fn fresh_parameters_never_collide_with_existing_names() {
        // Use g0 as an actual surface variable name to force a collision the pool
        // must route around.
        let lhs = Term::add(&Term::scale(&bi(2), &Term::var("g0")), &Term::var("y"));
        let rhs = Term::scale(&bi(3), &Term::var("z"));
        let eq = Equation::new(lhs.clone(), rhs.clone());
        let sigma = match_eq(&eq).unwrap();
        assert_eq!(sigma.apply(&lhs), rhs);
        for (_, image) in sigma.bindings() {
            assert!(!image.variables().any(|v| v == "g0"));
        }
    }
}
