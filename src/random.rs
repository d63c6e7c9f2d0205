//! Seeded random number generation.
//!
//! Provides the deterministic seed derivation used by the library's
//! random-number helper, seeded RNG construction, and the uniform
//! `[0, 1)` sampling operation built on top of both.
//!
//! # Seed derivation
//!
//! The seed is computed from two inputs as `(arg1 + arg2)²`, composed
//! through [`crate::arith::add`] and [`crate::arith::mul`]. The map is
//! deliberately simple and **not injective**: any two pairs with the
//! same sum produce the same seed (`(1, 2)` and `(2, 1)`, `(0, 3)` and
//! `(3, 0)`, and so on) and therefore the same sample.
//!
//! # Reproducibility
//!
//! For a fixed input pair, [`random_number`] returns the identical
//! sample on every call. The underlying algorithm (SmallRng) is
//! deterministic for a given seed on the same platform; no global
//! generator state is involved, each call constructs its own.

use rand::Rng;

use crate::arith::{add, mul};

/// Error type for invalid seed-derivation inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum SeedError {
    /// Inputs to the seed derivation must be finite.
    NonFiniteInput(String),
}

impl std::fmt::Display for SeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeedError::NonFiniteInput(msg) => {
                write!(f, "non-finite seed input: {msg}")
            }
        }
    }
}

impl std::error::Error for SeedError {}

/// Derives the deterministic seed from two inputs.
///
/// Computes `sum = add(arg1, arg2)` and returns `mul(sum, sum)`, i.e.
/// `(arg1 + arg2)²`. Squaring keeps the result non-negative (and never
/// `-0.0`), so every mathematical seed has exactly one bit pattern.
///
/// Pairs with equal sums collide by construction; this includes the
/// degenerate case where the sum or its square overflows to infinity,
/// which is deterministic and deliberately not rejected.
///
/// # Errors
/// Returns [`SeedError::NonFiniteInput`] if either argument is NaN or
/// infinite.
///
/// # Examples
/// ```
/// use mathtools::random::derive_seed;
/// assert_eq!(derive_seed(3.0, 5.0).unwrap(), 64.0);
/// // Not injective: equal sums, equal seeds.
/// assert_eq!(derive_seed(1.0, 2.0).unwrap(), 9.0);
/// assert_eq!(derive_seed(2.0, 1.0).unwrap(), 9.0);
/// assert!(derive_seed(f64::NAN, 1.0).is_err());
/// ```
pub fn derive_seed(arg1: f64, arg2: f64) -> Result<f64, SeedError> {
    if !arg1.is_finite() || !arg2.is_finite() {
        return Err(SeedError::NonFiniteInput(format!(
            "seed derivation requires finite inputs, got arg1={arg1}, arg2={arg2}"
        )));
    }
    let sum = add(arg1, arg2);
    Ok(mul(sum, sum))
}

/// Creates a fast, seeded random number generator.
///
/// Uses `SmallRng` (Xoshiro256++) for high performance. The sequence is
/// deterministic for a given seed on the same platform. This is the
/// engine behind [`random_number`]; it is public so callers can draw
/// further samples from the same deterministic stream.
///
/// # Examples
/// ```
/// use mathtools::random::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: f64 = rng.random();
/// assert!(x >= 0.0 && x < 1.0);
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// Returns one uniformly distributed value in `[0, 1)` from a seed
/// derived from the two inputs.
///
/// The seed is [`derive_seed`]`(arg1, arg2)`; its bit pattern
/// (`f64::to_bits`) seeds a fresh generator from [`create_rng`], and a
/// single sample is drawn. Identical input pairs therefore always yield
/// the identical sample, and pairs with equal sums collide (see the
/// module docs).
///
/// # Errors
/// Returns [`SeedError::NonFiniteInput`] if either argument is NaN or
/// infinite.
///
/// # Examples
/// ```
/// use mathtools::random::random_number;
/// let x = random_number(3.0, 5.0).unwrap();
/// assert!(x >= 0.0 && x < 1.0);
/// // Deterministic: same pair, same sample.
/// assert_eq!(x, random_number(3.0, 5.0).unwrap());
/// // Argument order never matters.
/// assert_eq!(
///     random_number(1.0, 2.0).unwrap(),
///     random_number(2.0, 1.0).unwrap(),
/// );
/// ```
pub fn random_number(arg1: f64, arg2: f64) -> Result<f64, SeedError> {
    let seed = derive_seed(arg1, arg2)?;
    let mut rng = create_rng(seed.to_bits());
    Ok(rng.random())
}

// ============================================================================
// Tests
// ============================================================================
