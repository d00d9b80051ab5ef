/*!

Unification: given two terms `t0` and `t1`, find the most general substitution `σ`
such that `σ(t0) == σ(t1)`.

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

Unification is reduced to matching: `unify(t0, t1) = match(t0 - t1 =? 0)`. The
resulting equation is always homogeneous (right side `0`), and a single homogeneous
linear equation always has at least the trivial all-zero solution, so this call can
never fail — a `None` here would mean the solver itself is broken.
*/

use crate::equation::Equation;
use crate::error::UNIFIER_INVARIANT_VIOLATION;
use crate::matcher::match_eq;
use crate::substitution::Substitution;
use crate::term::Term;

/// Finds the most general unifier of `eq.lhs()` and `eq.rhs()`.
pub fn unify(eq: &Equation) -> Substitution {
    let _span = tracing::debug_span!("unify").entered();
    let difference = Term::add(eq.lhs(), &Term::neg(eq.rhs()));
    let homogeneous = Equation::new(difference, Term::zero());
    let sigma = match_eq(&homogeneous).expect(UNIFIER_INVARIANT_VIOLATION);
    tracing::debug!(domain = sigma.domain().count(), "unified");
    sigma
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    fn bi(n: i64) -> BigInt {
        BigInt::from(n)
    }

    #[test]
    fn identical_terms_unify_to_the_empty_substitution() {
        let t = Term::var("x");
        let sigma = unify(&Equation::new(t.clone(), t.clone()));
        assert!(sigma.is_empty());
    }

    #[test]
    fn scenario_2x_unifies_with_x_plus_y() {
        let t0 = Term::scale(&bi(2), &Term::var("x"));
        let t1 = Term::add(&Term::var("x"), &Term::var("y"));
        let sigma = unify(&Equation::new(t0.clone(), t1.clone()));
        assert_eq!(sigma.apply(&t0), sigma.apply(&t1));
        // x and y both resolve to the same fresh parameter.
        assert_eq!(sigma.get("x"), sigma.get("y"));
    }

    #[test]
    fn scenario_64x_unifies_with_41y_plus_a() {
        let t0 = Term::scale(&bi(64), &Term::var("x"));
        let t1 = Term::add(&Term::scale(&bi(41), &Term::var("y")), &Term::var("a"));
        let sigma = unify(&Equation::new(t0.clone(), t1.clone()));
        assert_eq!(sigma.apply(&t0), sigma.apply(&t1));
    }

    #[test]
    fn unification_is_symmetric_up_to_the_substitution_it_produces() {
        let t0 = Term::add(&Term::scale(&bi(3), &Term::var("x")), &Term::var("y"));
        let t1 = Term::scale(&bi(5), &Term::var("z"));
        let forward = unify(&Equation::new(t0.clone(), t1.clone()));
        let backward = unify(&Equation::new(t1.clone(), t0.clone()));
        assert_eq!(forward.apply(&t0), forward.apply(&t1));
        assert_eq!(backward.apply(&t0), backward.apply(&t1));
    }
}
