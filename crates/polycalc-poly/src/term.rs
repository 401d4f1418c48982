//! Single polynomial terms.
//!
//! A term is `c*x^e` for a rational coefficient `c` and a non-negative
//! exponent `e`. Zero and NaN terms are canonicalised to exponent 0 so
//! that structural equality is value equality.

use std::fmt;
use std::str::FromStr;

use num_traits::{One, Zero};
use polycalc_rational::Rational;

use crate::ParseError;

/// A single term `coeff * x^exponent`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Term {
    coeff: Rational,
    exponent: u32,
}

impl Term {
    /// The zero term.
    pub const ZERO: Self = Self {
        coeff: Rational::ZERO,
        exponent: 0,
    };

    /// The NaN term.
    pub const NAN: Self = Self {
        coeff: Rational::NAN,
        exponent: 0,
    };

    /// Creates the term `coeff * x^exponent`.
    ///
    /// A zero or NaN coefficient forces the exponent to 0.
    #[must_use]
    pub fn new(coeff: Rational, exponent: u32) -> Self {
        if coeff.is_zero() || coeff.is_nan() {
            Self { coeff, exponent: 0 }
        } else {
            Self { coeff, exponent }
        }
    }

    /// Returns the coefficient.
    #[must_use]
    pub fn coeff(&self) -> Rational {
        self.coeff
    }

    /// Returns the exponent.
    #[must_use]
    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    /// Returns true if the coefficient is NaN.
    #[must_use]
    pub fn is_nan(&self) -> bool {
        self.coeff.is_nan()
    }

    /// Returns true if the coefficient is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeff.is_zero()
    }

    /// Evaluates the term at `x` in floating point.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        if self.is_nan() {
            return f64::NAN;
        }
        self.coeff.to_f64() * x.powf(f64::from(self.exponent))
    }

    /// Negates the coefficient.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::new(-self.coeff, self.exponent)
    }

    /// Adds two terms of the same exponent.
    ///
    /// # Panics
    ///
    /// Panics if both terms are non-zero, non-NaN and have different
    /// exponents.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        if self.is_nan() || other.is_nan() {
            return Self::NAN;
        }
        if self.is_zero() {
            return *other;
        }
        if other.is_zero() {
            return *self;
        }
        assert_eq!(
            self.exponent, other.exponent,
            "cannot add terms with different exponents"
        );
        Self::new(self.coeff + other.coeff, self.exponent)
    }

    /// Subtracts two terms of the same exponent.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`Term::add`].
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two terms; exponents add.
    ///
    /// # Panics
    ///
    /// Panics if a non-zero product's exponent exceeds `u32::MAX`.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_nan() || other.is_nan() {
            return Self::NAN;
        }
        let coeff = self.coeff * other.coeff;
        if coeff.is_zero() || coeff.is_nan() {
            return Self::new(coeff, 0);
        }
        let exponent = self
            .exponent
            .checked_add(other.exponent)
            .unwrap_or_else(|| panic!("{self} * {other} overflows the exponent"));
        Self::new(coeff, exponent)
    }

    /// Divides two terms; exponents subtract.
    ///
    /// Dividing by the zero term yields NaN.
    ///
    /// # Panics
    ///
    /// Panics if a non-zero quotient would need a negative exponent.
    #[must_use]
    pub fn div(&self, other: &Self) -> Self {
        if self.is_nan() || other.is_nan() {
            return Self::NAN;
        }
        let coeff = self.coeff / other.coeff;
        if coeff.is_zero() || coeff.is_nan() {
            return Self::new(coeff, 0);
        }
        let exponent = self
            .exponent
            .checked_sub(other.exponent)
            .unwrap_or_else(|| panic!("{self} / {other} has a negative exponent"));
        Self::new(coeff, exponent)
    }

    /// Returns the derivative `c*e*x^(e-1)`.
    #[must_use]
    pub fn differentiate(&self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        let factor = Rational::from_integer(i64::from(self.exponent));
        Self::new(self.coeff * factor, self.exponent.saturating_sub(1))
    }

    /// Returns the antiderivative `c/(e+1)*x^(e+1)` with no constant.
    ///
    /// # Panics
    ///
    /// Panics if a non-zero term already has exponent `u32::MAX`.
    #[must_use]
    pub fn antiderivative(&self) -> Self {
        if self.is_nan() || self.is_zero() {
            return *self;
        }
        let exponent = self
            .exponent
            .checked_add(1)
            .unwrap_or_else(|| panic!("antiderivative of {self} overflows the exponent"));
        let divisor = Rational::from_integer(i64::from(exponent));
        Self::new(self.coeff / divisor, exponent)
    }
}

impl Default for Term {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nan() {
            return write!(f, "NaN");
        }

        let mut coeff = self.coeff;
        if coeff.is_negative() {
            write!(f, "-")?;
            coeff = -coeff;
        }

        match (self.exponent, coeff.is_one()) {
            (0, _) => write!(f, "{coeff}"),
            (1, true) => write!(f, "x"),
            (e, true) => write!(f, "x^{e}"),
            (1, false) => write!(f, "{coeff}*x"),
            (e, false) => write!(f, "{coeff}*x^{e}"),
        }
    }
}

impl FromStr for Term {
    type Err = ParseError;

    /// Parses `NaN`, `A`, `A*x`, `A*x^B`, `x`, `x^B`, `-x` or `-x^B`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::Empty);
        }

        let Some(x_pos) = s.find('x') else {
            return Ok(Self::new(s.parse()?, 0));
        };
        let (head, tail) = (&s[..x_pos], &s[x_pos + 1..]);

        let coeff = match head {
            "" => Rational::ONE,
            "-" => -Rational::ONE,
            _ => head
                .strip_suffix('*')
                .ok_or_else(|| ParseError::MalformedTerm(s.to_owned()))?
                .parse()?,
        };

        let exponent = if tail.is_empty() {
            1
        } else {
            tail.strip_prefix('^')
                .filter(|digits| !digits.starts_with('+'))
                .ok_or_else(|| ParseError::MalformedTerm(s.to_owned()))?
                .parse::<u32>()
                .map_err(|source| ParseError::Exponent {
                    term: s.to_owned(),
                    source,
                })?
        };

        Ok(Self::new(coeff, exponent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(n: i64, d: i64, e: u32) -> Term {
        Term::new(Rational::new(n, d), e)
    }

    #[test]
    fn test_zero_and_nan_are_canonical() {
        assert_eq!(term(0, 1, 5), Term::ZERO);
        assert_eq!(term(0, 1, 5).exponent(), 0);
        assert_eq!(term(3, 0, 7), Term::NAN);
        assert!(Term::NAN.is_nan());
        assert!(!Term::NAN.is_zero());
    }

    #[test]
    fn test_add_and_sub() {
        assert_eq!(term(1, 2, 3).add(&term(1, 3, 3)), term(5, 6, 3));
        assert_eq!(term(1, 2, 3).sub(&term(1, 2, 3)), Term::ZERO);
        // zero operands carry no exponent constraint
        assert_eq!(Term::ZERO.add(&term(4, 1, 2)), term(4, 1, 2));
        assert_eq!(term(4, 1, 2).sub(&Term::ZERO), term(4, 1, 2));
        assert!(term(1, 1, 1).add(&Term::NAN).is_nan());
    }

    #[test]
    #[should_panic(expected = "different exponents")]
    fn test_add_mismatched_exponents_panics() {
        let _ = term(1, 1, 1).add(&term(1, 1, 2));
    }

    #[test]
    fn test_mul_and_div() {
        assert_eq!(term(2, 3, 2).mul(&term(3, 4, 5)), term(1, 2, 7));
        assert_eq!(term(1, 1, 3).div(&term(3, 1, 2)), term(1, 3, 1));
        assert!(term(1, 1, 3).div(&Term::NAN).is_nan());
        assert!(term(1, 1, 3).div(&Term::ZERO).is_nan());
        assert_eq!(Term::ZERO.div(&term(2, 1, 4)), Term::ZERO);
    }

    #[test]
    #[should_panic(expected = "negative exponent")]
    fn test_div_negative_exponent_panics() {
        let _ = term(1, 1, 1).div(&term(1, 1, 2));
    }

    #[test]
    fn test_largest_exponent() {
        let top = term(1, 1, u32::MAX);
        assert_eq!(top.mul(&term(2, 1, 0)), term(2, 1, u32::MAX));
        assert_eq!(top.mul(&Term::ZERO), Term::ZERO);
        assert_eq!(top.differentiate().exponent(), u32::MAX - 1);
    }

    #[test]
    #[should_panic(expected = "overflows the exponent")]
    fn test_mul_exponent_overflow_panics() {
        let _ = term(1, 1, u32::MAX).mul(&term(1, 1, 1));
    }

    #[test]
    #[should_panic(expected = "overflows the exponent")]
    fn test_antiderivative_exponent_overflow_panics() {
        let _ = term(1, 1, u32::MAX).antiderivative();
    }

    #[test]
    fn test_calculus() {
        assert_eq!(term(3, 1, 4).differentiate(), term(12, 1, 3));
        assert_eq!(term(5, 1, 0).differentiate(), Term::ZERO);
        assert_eq!(term(3, 1, 2).antiderivative(), term(1, 1, 3));
        assert_eq!(term(1, 1, 0).antiderivative(), term(1, 1, 1));
        assert!(Term::NAN.differentiate().is_nan());
        assert!(Term::NAN.antiderivative().is_nan());
    }

    #[test]
    fn test_eval() {
        assert!((term(2, 1, 3).eval(-2.0) + 16.0).abs() < 1e-12);
        assert!((term(1, 2, 0).eval(10.0) - 0.5).abs() < 1e-12);
        assert!(Term::NAN.eval(1.0).is_nan());
    }

    #[test]
    fn test_display() {
        assert_eq!(Term::NAN.to_string(), "NaN");
        assert_eq!(Term::ZERO.to_string(), "0");
        assert_eq!(term(1, 1, 1).to_string(), "x");
        assert_eq!(term(-1, 1, 1).to_string(), "-x");
        assert_eq!(term(1, 1, 4).to_string(), "x^4");
        assert_eq!(term(-1, 1, 4).to_string(), "-x^4");
        assert_eq!(term(1, 1, 0).to_string(), "1");
        assert_eq!(term(-3, 2, 0).to_string(), "-3/2");
        assert_eq!(term(2, 1, 1).to_string(), "2*x");
        assert_eq!(term(-3, 2, 5).to_string(), "-3/2*x^5");
    }

    #[test]
    fn test_parse() {
        assert_eq!("NaN".parse::<Term>(), Ok(Term::NAN));
        assert_eq!("7".parse::<Term>(), Ok(term(7, 1, 0)));
        assert_eq!("x".parse::<Term>(), Ok(term(1, 1, 1)));
        assert_eq!("-x".parse::<Term>(), Ok(term(-1, 1, 1)));
        assert_eq!("x^3".parse::<Term>(), Ok(term(1, 1, 3)));
        assert_eq!("-x^3".parse::<Term>(), Ok(term(-1, 1, 3)));
        assert_eq!("3/2*x".parse::<Term>(), Ok(term(3, 2, 1)));
        assert_eq!("-3/2*x^5".parse::<Term>(), Ok(term(-3, 2, 5)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Term>(), Err(ParseError::Empty));
        assert!(matches!("2x".parse::<Term>(), Err(ParseError::MalformedTerm(_))));
        assert!(matches!("x2".parse::<Term>(), Err(ParseError::MalformedTerm(_))));
        assert!(matches!("x^y".parse::<Term>(), Err(ParseError::Exponent { .. })));
        assert!(matches!("a*x".parse::<Term>(), Err(ParseError::Coefficient(_))));
        // a sign only ever separates terms
        assert!(matches!("x^+3".parse::<Term>(), Err(ParseError::MalformedTerm(_))));
        assert!(matches!("+3*x".parse::<Term>(), Err(ParseError::Coefficient(_))));
        assert!(matches!("+3".parse::<Term>(), Err(ParseError::Coefficient(_))));
    }
}
