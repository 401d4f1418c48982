//! Sparse univariate polynomials with rational coefficients.
//!
//! This module provides the polynomial value type and the sorted-insert
//! merge that every operation uses to build canonical results.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use num_traits::Zero;
use polycalc_rational::Rational;

use crate::term::Term;
use crate::ParseError;

/// A univariate polynomial with rational coefficients.
///
/// Terms are stored in strictly descending exponent order, with no zero
/// coefficients. A polynomial containing a NaN coefficient is stored as the
/// single term [`Term::NAN`], so all NaN polynomials compare equal.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Polynomial {
    /// Non-zero terms in descending exponent order.
    terms: Vec<Term>,
}

/// Merges `term` into a canonical term sequence.
///
/// Adds the coefficient to an existing term of the same exponent, dropping
/// it if the sum is zero; otherwise inserts the term before the first
/// smaller exponent. Zero terms are ignored.
pub(crate) fn sorted_insert(terms: &mut Vec<Term>, term: Term) {
    if term.is_zero() {
        return;
    }

    match terms.iter().position(|t| t.exponent() <= term.exponent()) {
        Some(i) if terms[i].exponent() == term.exponent() => {
            let merged = Term::new(terms[i].coeff() + term.coeff(), term.exponent());
            if merged.is_zero() {
                terms.remove(i);
            } else {
                terms[i] = merged;
            }
        }
        Some(i) => terms.insert(i, term),
        None => terms.push(term),
    }
}

impl Polynomial {
    /// Builds a polynomial from an already merged term sequence.
    fn from_terms(terms: Vec<Term>) -> Self {
        let poly = if terms.iter().any(Term::is_nan) {
            Self::nan()
        } else {
            Self { terms }
        };
        poly.check_rep();
        poly
    }

    /// Asserts the canonical form in debug builds.
    fn check_rep(&self) {
        debug_assert!(
            self.is_canonical(),
            "polynomial is not in canonical form: {:?}",
            self.terms
        );
    }

    /// Returns true if the terms are non-zero and strictly descending by
    /// exponent. Always true for values built through this API.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        self.terms.iter().all(|t| !t.is_zero())
            && self
                .terms
                .windows(2)
                .all(|w| w[0].exponent() > w[1].exponent())
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self { terms: Vec::new() }
    }

    /// Creates the NaN polynomial.
    #[must_use]
    pub fn nan() -> Self {
        Self {
            terms: vec![Term::NAN],
        }
    }

    /// Creates a polynomial with a single term.
    #[must_use]
    pub fn from_term(term: Term) -> Self {
        let mut terms = Vec::with_capacity(1);
        sorted_insert(&mut terms, term);
        Self::from_terms(terms)
    }

    /// Creates the monomial `coeff * x^exponent`.
    #[must_use]
    pub fn monomial(coeff: i64, exponent: u32) -> Self {
        Self::from_term(Term::new(Rational::from_integer(coeff), exponent))
    }

    /// Returns the terms in descending exponent order.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns true if any coefficient is NaN.
    #[must_use]
    pub fn is_nan(&self) -> bool {
        self.terms.iter().any(Term::is_nan)
    }

    /// Returns the exponent of the leading term, or 0 if there are no terms.
    ///
    /// The zero polynomial and non-zero constants both report degree 0;
    /// use [`Polynomial::leading_term`] to tell them apart.
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.terms.first().map_or(0, Term::exponent)
    }

    /// Returns the leading term, or `None` for the zero polynomial.
    #[must_use]
    pub fn leading_term(&self) -> Option<&Term> {
        self.terms.first()
    }

    /// Returns the term of the given exponent, or [`Term::ZERO`].
    #[must_use]
    pub fn term(&self, exponent: u32) -> Term {
        self.terms
            .iter()
            .find(|t| t.exponent() == exponent)
            .copied()
            .unwrap_or(Term::ZERO)
    }

    /// Returns the additive inverse.
    #[must_use]
    pub fn neg(&self) -> Self {
        if self.is_nan() {
            return Self::nan();
        }
        Self::from_terms(self.terms.iter().map(Term::neg).collect())
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        if self.is_nan() || other.is_nan() {
            return Self::nan();
        }

        let mut terms = self.terms.clone();
        for term in &other.terms {
            sorted_insert(&mut terms, *term);
        }

        Self::from_terms(terms)
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two polynomials term by term.
    ///
    /// # Panics
    ///
    /// Panics if a product term's exponent exceeds `u32::MAX`.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_nan() || other.is_nan() {
            return Self::nan();
        }

        let mut terms = Vec::with_capacity(self.len() + other.len());
        for a in &self.terms {
            for b in &other.terms {
                sorted_insert(&mut terms, a.mul(b));
            }
        }

        Self::from_terms(terms)
    }

    /// Truncating long division; the remainder is discarded.
    ///
    /// Returns NaN if either operand is NaN or the divisor is zero.
    #[must_use]
    pub fn div(&self, divisor: &Self) -> Self {
        if self.is_nan() || divisor.is_nan() {
            return Self::nan();
        }
        let Some(lead) = divisor.leading_term().copied() else {
            return Self::nan();
        };

        let mut quotient = Vec::new();
        let mut remaining = self.clone();

        while let Some(top) = remaining.leading_term().copied() {
            if top.exponent() < lead.exponent() {
                break;
            }

            // the leading term cancels exactly, so the degree strictly drops
            let q = top.div(&lead);
            let next = remaining.sub(&divisor.mul(&Self::from_term(q)));
            debug_assert!(
                next.leading_term()
                    .map_or(true, |t| t.exponent() < top.exponent()),
                "division step did not lower the degree of {remaining}"
            );

            remaining = next;
            sorted_insert(&mut quotient, q);
        }

        Self::from_terms(quotient)
    }

    /// Returns the derivative.
    #[must_use]
    pub fn differentiate(&self) -> Self {
        if self.is_nan() {
            return Self::nan();
        }

        Self::from_terms(
            self.terms
                .iter()
                .map(Term::differentiate)
                .filter(|t| !t.is_zero())
                .collect(),
        )
    }

    /// Returns the antiderivative with the given constant of integration.
    ///
    /// Returns NaN if this polynomial or the constant is NaN.
    ///
    /// # Panics
    ///
    /// Panics if a term already has exponent `u32::MAX`.
    #[must_use]
    pub fn antiderivative(&self, constant: Rational) -> Self {
        if self.is_nan() || constant.is_nan() {
            return Self::nan();
        }

        let mut terms: Vec<Term> = self.terms.iter().map(Term::antiderivative).collect();
        sorted_insert(&mut terms, Term::new(constant, 0));

        Self::from_terms(terms)
    }

    /// Returns the definite integral from `lower` to `upper`.
    ///
    /// Returns `f64::NAN` if this polynomial is NaN or a bound is not finite.
    #[must_use]
    pub fn integrate(&self, lower: f64, upper: f64) -> f64 {
        if self.is_nan() || !lower.is_finite() || !upper.is_finite() {
            return f64::NAN;
        }

        let anti = self.antiderivative(Rational::zero());
        anti.eval(upper) - anti.eval(lower)
    }

    /// Evaluates the polynomial at `x` in floating point.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        if self.is_nan() {
            return f64::NAN;
        }
        self.terms.iter().map(|t| t.eval(x)).sum()
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nan() {
            return write!(f, "NaN");
        }

        let Some((first, rest)) = self.terms.split_first() else {
            return write!(f, "0");
        };

        write!(f, "{first}")?;
        for term in rest {
            if term.coeff().is_negative() {
                write!(f, "{term}")?;
            } else {
                write!(f, "+{term}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Polynomial {
    type Err = ParseError;

    /// Parses signed terms with no whitespace, e.g. `x^2-3/2*x+1`.
    ///
    /// Like exponents are combined, so the input need not be canonical.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::Empty);
        }

        let mut terms = Vec::new();
        let mut pending_sign: Option<(char, usize)> = None;
        let mut last = 0;

        let mut take_term = |text: &str, sign: Option<(char, usize)>| -> Result<(), ParseError> {
            let term: Term = text.parse()?;
            let term = match sign {
                Some(('-', _)) => term.neg(),
                _ => term,
            };
            sorted_insert(&mut terms, term);
            Ok(())
        };

        for (offset, sign) in s.match_indices(|c: char| c == '+' || c == '-') {
            if last < offset {
                take_term(&s[last..offset], pending_sign.take())?;
            } else if let Some((sign, offset)) = pending_sign {
                return Err(ParseError::DanglingSign { sign, offset });
            }
            pending_sign = sign.chars().next().map(|c| (c, offset));
            last = offset + sign.len();
        }

        if last < s.len() {
            take_term(&s[last..], pending_sign.take())?;
        } else if let Some((sign, offset)) = pending_sign {
            return Err(ParseError::DanglingSign { sign, offset });
        }

        Ok(Self::from_terms(terms))
    }
}

// Operator sugar
impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Self) -> Self::Output {
        Polynomial::add(self, rhs)
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Self) -> Self::Output {
        Polynomial::sub(self, rhs)
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Self) -> Self::Output {
        Polynomial::mul(self, rhs)
    }
}

impl Div for &Polynomial {
    type Output = Polynomial;

    fn div(self, rhs: Self) -> Self::Output {
        Polynomial::div(self, rhs)
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Self::Output {
        Polynomial::neg(self)
    }
}

impl From<Term> for Polynomial {
    fn from(term: Term) -> Self {
        Self::from_term(term)
    }
}
