//! Substitutions: finite maps from variable names to terms, and their action on terms.

use std::collections::BTreeMap;
use std::fmt;

use crate::term::Term;

/// A finite map from variable names to terms.
///
/// A variable absent from the map is fixed by [`Substitution::apply`]: applying a
/// substitution to a variable not in its domain returns that variable unchanged. A
/// variable present in the map is replaced by its image, even if that image is `0`
/// or the variable itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Substitution {
    bindings: BTreeMap<String, Term>,
}

impl Substitution {
    /// The substitution with empty domain: the identity on every variable.
    pub fn empty() -> Self {
        Substitution { bindings: BTreeMap::new() }
    }

    /// Builds a substitution from `(name, image)` pairs.
    pub fn from_bindings<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, Term)>,
    {
        Substitution { bindings: pairs.into_iter().collect() }
    }

    /// Binds `name` to `image`, overwriting any previous binding.
    pub fn insert(&mut self, name: impl Into<String>, image: Term) {
        self.bindings.insert(name.into(), image);
    }

    /// The image of `name`, or `None` if `name` is not in the domain.
    pub fn get(&self, name: &str) -> Option<&Term> {
        self.bindings.get(name)
    }

    /// True iff the domain is empty.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// The domain, in ascending order.
    pub fn domain(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    /// The `(name, image)` pairs, in ascending order by name.
    pub fn bindings(&self) -> impl Iterator<Item = (&str, &Term)> {
        self.bindings.iter().map(|(name, t)| (name.as_str(), t))
    }

    /// Applies `self` to `t`: every variable in `t`'s domain is replaced by its image
    /// (scaled by its coefficient in `t`), and every other variable is left unchanged.
    pub fn apply(&self, t: &Term) -> Term {
        let mut result = Term::zero();
        for (name, c) in t.assocs() {
            let image = match self.bindings.get(&name) {
                Some(bound) => Term::scale(&c, bound),
                None => Term::scale(&c, &Term::var(name)),
            };
            result = Term::add(&result, &image);
        }
        result
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, (name, image)) in self.bindings.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name} : {image}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    #[test]
    fn empty_substitution_is_identity() {
        let sigma = Substitution::empty();
        let t = Term::add(&Term::scale(&BigInt::from(2), &Term::var("x")), &Term::var("y"));
        assert_eq!(sigma.apply(&t), t);
    }

    #[test]
    fn applies_bound_variables_and_leaves_others() {
        let mut sigma = Substitution::empty();
        sigma.insert("x", Term::scale(&BigInt::from(3), &Term::var("z")));
        // 2x + y -> 2*(3z) + y = 6z + y
        let t = Term::add(&Term::scale(&BigInt::from(2), &Term::var("x")), &Term::var("y"));
        let expected = Term::add(&Term::scale(&BigInt::from(6), &Term::var("z")), &Term::var("y"));
        assert_eq!(sigma.apply(&t), expected);
    }

    #[test]
    fn binding_to_zero_removes_the_variable() {
        let mut sigma = Substitution::empty();
        sigma.insert("x", Term::zero());
        assert_eq!(sigma.apply(&Term::var("x")), Term::zero());
    }

    #[test]
    fn domain_is_ascending() {
        let mut sigma = Substitution::empty();
        sigma.insert("z", Term::zero());
        sigma.insert("a", Term::zero());
        assert_eq!(sigma.domain().collect::<Vec<_>>(), vec!["a", "z"]);
    }
}
