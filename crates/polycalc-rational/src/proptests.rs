//! Property-based tests for rational arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::Rational;

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn finite() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::new(n, d))
    }

    proptest! {
        // Canonical form

        #[test]
        fn construction_is_canonical(n in small_int(), d in non_zero_int()) {
            let r = Rational::new(n, d);
            let (rn, rd) = (r.numerator().unwrap(), r.denominator().unwrap());
            prop_assert!(rd > 0);
            prop_assert_eq!(num_integer::gcd(rn, rd), 1);
            // same value as the unreduced fraction
            prop_assert_eq!(rn * d, n * rd);
        }

        #[test]
        fn reduction_is_idempotent(n in small_int(), d in non_zero_int()) {
            let r = Rational::new(n, d);
            let again = Rational::new(r.numerator().unwrap(), r.denominator().unwrap());
            prop_assert_eq!(again, r);
        }

        #[test]
        fn display_round_trips(r in finite()) {
            prop_assert_eq!(r.to_string().parse::<Rational>(), Ok(r));
        }

        // Field axioms

        #[test]
        fn rational_add_commutative(a in finite(), b in finite()) {
            prop_assert_eq!(a + b, b + a);
        }

        #[test]
        fn rational_mul_commutative(a in finite(), b in finite()) {
            prop_assert_eq!(a * b, b * a);
        }

        #[test]
        fn rational_distributive(a in finite(), b in finite(), c in finite()) {
            prop_assert_eq!(a * (b + c), a * b + a * c);
        }

        #[test]
        fn rational_additive_inverse(a in finite(), b in finite()) {
            prop_assert_eq!(a + b - b, a);
        }

        #[test]
        fn rational_multiplicative_inverse(n in non_zero_int(), d in non_zero_int()) {
            let a = Rational::new(n, d);
            prop_assert_eq!(a / a, Rational::ONE);
        }

        // Ordering agrees with subtraction

        #[test]
        fn ordering_matches_difference_sign(a in finite(), b in finite()) {
            let diff = a - b;
            prop_assert_eq!(a < b, diff.is_negative());
            prop_assert_eq!(a > b, diff.is_positive());
        }

        #[test]
        fn nan_is_greatest(a in finite()) {
            prop_assert!(Rational::NAN > a);
        }

        // NaN absorption

        #[test]
        fn nan_absorbs_arithmetic(a in finite()) {
            prop_assert!((a + Rational::NAN).is_nan());
            prop_assert!((Rational::NAN + a).is_nan());
            prop_assert!((a - Rational::NAN).is_nan());
            prop_assert!((a * Rational::NAN).is_nan());
            prop_assert!((Rational::NAN / a).is_nan());
        }
    }
}
