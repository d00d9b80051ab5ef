/*!

Canonical representation of elements of the free Abelian group generated by a set of
variables, together with the group operations.

# Example

```
use abelian_unify::Term;
use num_bigint::BigInt;

// 2x + y
let t = Term::add(
    &Term::scale(&BigInt::from(2), &Term::var("x")),
    &Term::var("y"),
);
assert_eq!(t.assocs(), vec![
    ("x".to_string(), BigInt::from(2)),
    ("y".to_string(), BigInt::from(1)),
]);
```

A `Term` is a finite map from variable names to non-zero integer coefficients,
interpreted as `Σ coeff·variable`. The empty map is the identity `0`. No constructor
in this module can produce a map with a stored zero coefficient: sums that cancel a
variable out remove its entry rather than leaving a `0` behind.

*/

use std::collections::BTreeMap;
use std::fmt;

use num_bigint::BigInt;
use num_traits::{One, Zero};

/// True iff `name` satisfies the variable-name grammar: non-empty, first character
/// alphabetic, remaining characters alphanumeric.
///
/// The core's own constructors (`var`, `from_assocs`) never check this; it is exposed
/// for a surface layer that parses variable names from source text.
pub fn is_valid_variable_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() => chars.all(|c| c.is_alphanumeric()),
        _ => false,
    }
}

/// An element of the free Abelian group over a set of variables, represented as the
/// finite map of its non-zero coefficients.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Term {
    coeffs: BTreeMap<String, BigInt>,
}

impl Term {
    /// The identity element `0`.
    pub fn zero() -> Self {
        Term { coeffs: BTreeMap::new() }
    }

    /// The term `1·x` for a variable named `x`.
    ///
    /// The core tolerates any non-empty name; it is the surface layer's
    /// responsibility to only produce names satisfying the variable-name grammar
    /// (and to avoid names that collide with fresh-parameter names, see
    /// [`crate::matcher`]).
    pub fn var(name: impl Into<String>) -> Self {
        let mut coeffs = BTreeMap::new();
        coeffs.insert(name.into(), BigInt::one());
        Term { coeffs }
    }

    /// True iff `self` is the identity `0`.
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Multiplies every coefficient of `t` by `n`.
    ///
    /// Returns `zero()` if `n == 0`. Returns a term structurally equal to `t` if
    /// `n == 1` (no entries are dropped or added).
    pub fn scale(n: &BigInt, t: &Term) -> Self {
        if n.is_zero() {
            return Term::zero();
        }
        let coeffs = t
            .coeffs
            .iter()
            .map(|(name, c)| (name.clone(), c * n))
            .collect();
        Term { coeffs }
    }

    /// Shorthand for `scale(-1, t)`.
    pub fn neg(t: &Term) -> Self {
        Term::scale(&-BigInt::one(), t)
    }

    /// The sum `t + t'`. For each variable `x`, the resulting coefficient is
    /// `cₓ + c'ₓ`; if this sum is zero the key is absent from the result, so no
    /// zero coefficient ever leaks into a `Term`.
    pub fn add(t: &Term, t_prime: &Term) -> Self {
        let mut coeffs = t.coeffs.clone();
        for (name, c_prime) in &t_prime.coeffs {
            match coeffs.get_mut(name) {
                Some(c) => {
                    *c += c_prime;
                    if c.is_zero() {
                        coeffs.remove(name);
                    }
                }
                None => {
                    coeffs.insert(name.clone(), c_prime.clone());
                }
            }
        }
        Term { coeffs }
    }

    /// The entries of `self` in ascending variable order.
    ///
    /// This ordering is observable, not incidental: [`crate::matcher::match_eq`]
    /// relies on it to align variable and symbol positions with the linear solver's
    /// output.
    pub fn assocs(&self) -> Vec<(String, BigInt)> {
        self.coeffs
            .iter()
            .map(|(name, c)| (name.clone(), c.clone()))
            .collect()
    }

    /// Builds a term from a list of `(name, coeff)` pairs, summing duplicate names
    /// and dropping entries whose summed coefficient is zero. Inverse of
    /// [`Term::assocs`] up to reordering and zero-filtering.
    pub fn from_assocs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, BigInt)>,
    {
        let mut coeffs: BTreeMap<String, BigInt> = BTreeMap::new();
        for (name, c) in pairs {
            match coeffs.get_mut(&name) {
                Some(existing) => *existing += c,
                None => {
                    coeffs.insert(name, c);
                }
            }
        }
        coeffs.retain(|_, c| !c.is_zero());
        Term { coeffs }
    }

    /// The coefficient of `name` in `self`, or `0` if `name` does not appear.
    pub fn coefficient(&self, name: &str) -> BigInt {
        self.coeffs.get(name).cloned().unwrap_or_else(BigInt::zero)
    }

    /// The variable names appearing in `self`, in ascending order.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.coeffs.keys().map(String::as_str)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coeffs.is_empty() {
            return write!(f, "0");
        }

        let mut first = true;
        for (name, c) in &self.coeffs {
            if c.is_zero() {
                continue; // unreachable given the invariant, but Display shouldn't panic on it
            }
            if first {
                if c.is_negative_one() {
                    write!(f, "-{name}")?;
                } else if c.is_one() {
                    write!(f, "{name}")?;
                } else {
                    write!(f, "{c}{name}")?;
                }
                first = false;
            } else if c.sign() == num_bigint::Sign::Minus {
                let abs = -c;
                if abs.is_one() {
                    write!(f, " - {name}")?;
                } else {
                    write!(f, " - {abs}{name}")?;
                }
            } else if c.is_one() {
                write!(f, " + {name}")?;
            } else {
                write!(f, " + {c}{name}")?;
            }
        }
        Ok(())
    }
}

trait IsNegativeOne {
    fn is_negative_one(&self) -> bool;
}

impl IsNegativeOne for BigInt {
    fn is_negative_one(&self) -> bool {
        *self == -BigInt::one()
    }
}
