//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::polynomial::sorted_insert;
    use crate::{Polynomial, Term};
    use polycalc_rational::Rational;

    // Strategy for generating small rational coefficients
    fn small_coeff() -> impl Strategy<Value = Rational> {
        (-20i64..=20i64, 1i64..=6i64).prop_map(|(n, d)| Rational::new(n, d))
    }

    fn small_term() -> impl Strategy<Value = Term> {
        (small_coeff(), 0u32..=6u32).prop_map(|(c, e)| Term::new(c, e))
    }

    // Strategy for generating small polynomials (degree 0-6)
    fn small_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec(small_term(), 0..=5).prop_map(|terms| {
            terms
                .into_iter()
                .fold(Polynomial::zero(), |acc, t| acc.add(&Polynomial::from_term(t)))
        })
    }

    // Strategy for generating non-zero polynomials
    fn nonzero_poly() -> impl Strategy<Value = Polynomial> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    fn is_canonical(terms: &[Term]) -> bool {
        terms.iter().all(|t| !t.is_zero())
            && terms.windows(2).all(|w| w[0].exponent() > w[1].exponent())
    }

    proptest! {
        // Canonical form

        #[test]
        fn sorted_insert_keeps_canonical_form(
            inserts in proptest::collection::vec(small_term(), 0..=12)
        ) {
            let mut terms = Vec::new();
            for t in inserts {
                sorted_insert(&mut terms, t);
                prop_assert!(is_canonical(&terms));
            }
        }

        #[test]
        fn operations_keep_canonical_form(a in small_poly(), b in nonzero_poly()) {
            prop_assert!(is_canonical(a.add(&b).terms()));
            prop_assert!(is_canonical(a.mul(&b).terms()));
            prop_assert!(is_canonical(a.div(&b).terms()));
            prop_assert!(is_canonical(a.differentiate().terms()));
        }

        #[test]
        fn format_parse_round_trip(p in small_poly()) {
            prop_assert_eq!(p.to_string().parse::<Polynomial>(), Ok(p));
        }

        // Ring laws

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_additive_inverse(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b).sub(&b), a.clone());
            prop_assert!(a.add(&a.neg()).is_zero());
        }

        // Division

        #[test]
        fn mul_then_div_is_exact(a in small_poly(), b in nonzero_poly()) {
            prop_assert_eq!(a.mul(&b).div(&b), a);
        }

        #[test]
        fn div_remainder_has_lower_degree(a in small_poly(), b in nonzero_poly()) {
            let quotient = a.div(&b);
            let remainder = a.sub(&b.mul(&quotient));
            if let Some(lead) = remainder.leading_term() {
                prop_assert!(lead.exponent() < b.degree());
            }
        }

        // Calculus

        #[test]
        fn antiderivative_of_derivative_restores(p in small_poly(), c in small_coeff()) {
            let constant = Polynomial::from_term(p.term(0));
            let expected = p.sub(&constant).add(&Polynomial::from_term(Term::new(c, 0)));
            prop_assert_eq!(p.differentiate().antiderivative(c), expected);
        }

        #[test]
        fn derivative_of_antiderivative_restores(p in small_poly(), c in small_coeff()) {
            prop_assert_eq!(p.antiderivative(c).differentiate(), p);
        }

        // Evaluation

        #[test]
        fn eval_add(a in small_poly(), b in small_poly(), x in -3i32..=3i32) {
            let x = f64::from(x);
            let sum = a.add(&b).eval(x);
            let expected = a.eval(x) + b.eval(x);
            prop_assert!((sum - expected).abs() <= 1e-6 * (1.0 + expected.abs()));
        }

        // NaN absorption

        #[test]
        fn nan_absorbs_everything(p in small_poly()) {
            let nan = Polynomial::nan();
            prop_assert!(p.add(&nan).is_nan());
            prop_assert!(nan.add(&p).is_nan());
            prop_assert!(p.sub(&nan).is_nan());
            prop_assert!(p.mul(&nan).is_nan());
            prop_assert!(p.div(&nan).is_nan());
            prop_assert!(nan.div(&p).is_nan());
            prop_assert!(nan.neg().is_nan());
            prop_assert!(nan.differentiate().is_nan());
            prop_assert!(p.antiderivative(Rational::NAN).is_nan());
            prop_assert!(nan.eval(1.0).is_nan());
            prop_assert!(nan.integrate(0.0, 1.0).is_nan());
            prop_assert_eq!(p.add(&nan).to_string(), "NaN");
        }
    }
}
