//! Arithmetic primitives.
//!
//! The two helpers in this module are deliberately plain: pure `f64`
//! functions with no validation and no side effects. Non-finite inputs
//! propagate through unmodified under the usual IEEE-754 rules, so NaN
//! in means NaN out. Callers that need input validation get it at the
//! seed-derivation boundary in [`crate::random`], not here.

/// Adds two numbers and returns the result.
///
/// Exactly commutative for all inputs: IEEE-754 addition returns the
/// same value for `add(a, b)` and `add(b, a)`.
///
/// # Examples
/// ```
/// use mathtools::arith::add;
/// assert_eq!(add(3.0, 5.0), 8.0);
/// assert_eq!(add(-1.5, 1.5), 0.0);
/// assert!(add(f64::NAN, 1.0).is_nan());
/// ```
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Multiplies two numbers and returns the result.
///
/// Exactly commutative for all inputs: IEEE-754 multiplication returns
/// the same value for `mul(a, b)` and `mul(b, a)`.
///
/// # Examples
/// ```
/// use mathtools::arith::mul;
/// assert_eq!(mul(8.0, 2.0), 16.0);
/// assert_eq!(mul(0.5, 0.5), 0.25);
/// assert!(mul(f64::INFINITY, 0.0).is_nan());
/// ```
pub fn mul(a: f64, b: f64) -> f64 {
    a * b
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for finite f64 values bounded away from overflow.
    fn finite() -> impl Strategy<Value = f64> {
        prop::num::f64::NORMAL.prop_filter("finite", |x| x.is_finite() && x.abs() < 1e150)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        // --- Commutativity (exact, not approximate) ---
        #[test]
        fn add_commutes(a in finite(), b in finite()) {
            prop_assert_eq!(add(a, b), add(b, a));
        }

        #[test]
        fn mul_commutes(a in finite(), b in finite()) {
            prop_assert_eq!(mul(a, b), mul(b, a));
        }

        // --- Identities (exact under IEEE-754) ---
        #[test]
        fn add_zero_is_identity(a in finite()) {
            prop_assert_eq!(add(a, 0.0), a);
        }

        #[test]
        fn mul_one_is_identity(a in finite()) {
            prop_assert_eq!(mul(a, 1.0), a);
        }

        // --- Doubling: a*2 and a+a are the same float ---
        #[test]
        fn mul_two_equals_self_add(a in finite()) {
            prop_assert_eq!(mul(a, 2.0), add(a, a));
        }

        // --- Squares are never negative (and never -0.0) ---
        #[test]
        fn square_non_negative(a in finite()) {
            let sq = mul(a, a);
            prop_assert!(sq >= 0.0);
            prop_assert!(sq.is_sign_positive());
        }
    }
}
