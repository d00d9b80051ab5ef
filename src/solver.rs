/*!

A solver for a single linear Diophantine equation

```text
a₀·x₀ + a₁·x₁ + … + aₙ₋₁·xₙ₋₁  =  b₀·y₀ + b₁·y₁ + … + bₘ₋₁·yₘ₋₁
```

over the unknowns `xᵢ`, where the `yⱼ` are formal symbols (independent basis elements
whose concrete values are supplied by the caller). The solver returns a *most general
parametric* integer solution: every bound unknown is an affine combination of a
minimal set of fresh integer parameters and the `yⱼ`.

# Example

```
use abelian_unify::solver::solve;
use num_bigint::BigInt;

let a: Vec<BigInt> = vec![2.into(), 1.into()];
let b: Vec<BigInt> = vec![3.into()];
let solution = solve(&a, &b).unwrap().expect("2x + y = 3y0 is solvable");

// x = p0 (one free parameter, no dependence on the right-hand symbol)
let x = solution.entry_for(0).unwrap();
assert_eq!(x.factors, vec![BigInt::from(1)]);
assert_eq!(x.constants, vec![BigInt::from(0)]);

// y = -2*p0 + 3*y0
let y = solution.entry_for(1).unwrap();
assert_eq!(y.factors, vec![BigInt::from(-2)]);
assert_eq!(y.constants, vec![BigInt::from(3)]);
```

# Algorithm

The reduction operates only on the *nonzero* left-hand coefficients (positions with a
zero coefficient are unconstrained from the start and are simply absent from the
solver's output — the caller allocates a fresh parameter for them on demand, see
[`crate::matcher`]). Among the `q` nonzero coefficients, the solver repeatedly:

1. finds the position with minimal nonzero absolute value (ties broken by smallest
   index) and uses it as the pivot for this round;
2. reduces every other nonzero position modulo the pivot, strictly shrinking its
   absolute value (or zeroing it);

until only one nonzero coefficient remains — this is `±gcd` of the nonzero inputs.
Every column operation performed on the coefficient vector is mirrored on a
`q`×`q` unimodular matrix `U`, so that at the end `x = U·z` expresses the original
unknowns in terms of `z`, one of whose components is pinned by the gcd (hence by the
right-hand side) while the remaining `q - 1` are exactly the fresh parameters.
*/

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use crate::error::DiophantineError;

/// One unknown's solution: an affine combination of fresh parameters and right-hand
/// symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParametricEntry {
    /// Coefficient of each fresh parameter `p₀…p_{k-1}`.
    pub factors: Vec<BigInt>,
    /// Coefficient of each right-hand symbol `y₀…y_{m-1}`.
    pub constants: Vec<BigInt>,
}

/// The most general parametric solution to a solvable linear Diophantine equation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParametricSolution {
    /// Number of fresh parameters introduced (`k`); every [`ParametricEntry::factors`]
    /// has exactly this length.
    pub num_parameters: usize,
    /// Number of right-hand symbols (`m`); every [`ParametricEntry::constants`] has
    /// exactly this length.
    pub num_symbols: usize,
    entries: Vec<(usize, ParametricEntry)>,
}

impl ParametricSolution {
    /// The entry for unknown `index`, or `None` if that position is unconstrained
    /// (the caller should allocate a fresh parameter for it).
    pub fn entry_for(&self, index: usize) -> Option<&ParametricEntry> {
        self.entries
            .iter()
            .find(|(i, _)| *i == index)
            .map(|(_, entry)| entry)
    }

    /// All bound entries, sorted by unknown index.
    pub fn entries(&self) -> &[(usize, ParametricEntry)] {
        &self.entries
    }
}

/// Solves `Σ aᵢ·xᵢ = Σ bⱼ·yⱼ` for the unknowns `xᵢ`.
///
/// `a` must be non-empty (`n >= 1`); `b` may be empty (`m == 0`, meaning the
/// right-hand side is the identity `0`). Returns:
///
/// - `Err(DiophantineError::EmptyCoefficients)` if `a` is empty;
/// - `Ok(None)` if the equation has no integer solution (`gcd(a)` does not divide
///   some `bⱼ`, or every `aᵢ` is zero while some `bⱼ` is not);
/// - `Ok(Some(solution))` otherwise.
pub fn solve(a: &[BigInt], b: &[BigInt]) -> Result<Option<ParametricSolution>, DiophantineError> {
    if a.is_empty() {
        return Err(DiophantineError::EmptyCoefficients);
    }
    let n = a.len();
    let m = b.len();
    let _span = tracing::debug_span!("solve", n, m).entered();

    let nonzero_positions: Vec<usize> = (0..n).filter(|&i| !a[i].is_zero()).collect();
    let q = nonzero_positions.len();

    if q == 0 {
        let solvable = b.iter().all(Zero::is_zero);
        tracing::debug!(solvable, "every left-hand coefficient is zero");
        return Ok(solvable.then(|| ParametricSolution {
            num_parameters: 0,
            num_symbols: m,
            entries: Vec::new(),
        }));
    }

    let mut c: Vec<BigInt> = nonzero_positions.iter().map(|&i| a[i].clone()).collect();
    let mut u: Vec<Vec<BigInt>> = identity(q);

    let pivot = reduce_to_single_nonzero(&mut c, &mut u);

    let g = c[pivot].clone();
    for bj in b {
        if !is_exactly_divisible(bj, &g) {
            tracing::debug!(%g, "unsolvable: gcd does not divide a right-hand coefficient");
            return Ok(None);
        }
    }

    let determined: Vec<BigInt> = b.iter().map(|bj| bj / &g).collect();
    let free_positions: Vec<usize> = (0..q).filter(|&t| t != pivot).collect();
    let k = free_positions.len();

    let mut entries: Vec<(usize, ParametricEntry)> = (0..q)
        .map(|local_i| {
            let factors = free_positions.iter().map(|&t| u[local_i][t].clone()).collect();
            let constants = determined
                .iter()
                .map(|d| &u[local_i][pivot] * d)
                .collect();
            (nonzero_positions[local_i], ParametricEntry { factors, constants })
        })
        .collect();
    entries.sort_by_key(|(idx, _)| *idx);

    tracing::debug!(k, q, "solved");
    Ok(Some(ParametricSolution { num_parameters: k, num_symbols: m, entries }))
}

/// Repeatedly picks the minimal-magnitude nonzero pivot and reduces every other
/// nonzero entry modulo it, mirroring each column operation onto `u`, until only
/// one nonzero coefficient remains. Returns the index of that coefficient.
fn reduce_to_single_nonzero(c: &mut [BigInt], u: &mut [Vec<BigInt>]) -> usize {
    loop {
        let pivot = (0..c.len())
            .filter(|&i| !c[i].is_zero())
            .min_by(|&i, &j| c[i].abs().cmp(&c[j].abs()).then(i.cmp(&j)))
            .expect("at least one coefficient is nonzero by construction");

        let nonzero_count = c.iter().filter(|x| !x.is_zero()).count();
        if nonzero_count <= 1 {
            return pivot;
        }

        tracing::trace!(pivot, coeffs = ?c, "reduction step");

        for i in 0..c.len() {
            if i == pivot || c[i].is_zero() {
                continue;
            }
            let (qi, rem) = div_mod_euclid(&c[i], &c[pivot]);
            c[i] = rem;
            for row in u.iter_mut() {
                let delta = &qi * &row[pivot];
                row[i] -= delta;
            }
        }
    }
}

fn identity(q: usize) -> Vec<Vec<BigInt>> {
    (0..q)
        .map(|row| {
            (0..q)
                .map(|col| if row == col { BigInt::one() } else { BigInt::zero() })
                .collect()
        })
        .collect()
}

/// Euclidean division: returns `(q, r)` with `a = q*b + r` and `0 <= r < |b|`.
/// Requires `b != 0`.
fn div_mod_euclid(a: &BigInt, b: &BigInt) -> (BigInt, BigInt) {
    let mut q = a / b;
    let mut r = a - &q * b;
    if r.is_negative() {
        if b.is_positive() {
            r += b;
            q -= BigInt::one();
        } else {
            r -= b;
            q += BigInt::one();
        }
    }
    (q, r)
}

fn is_exactly_divisible(value: &BigInt, divisor: &BigInt) -> bool {
    (value % divisor).is_zero()
}
