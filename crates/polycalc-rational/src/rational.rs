//! Fixed-width rational numbers.
//!
//! This module provides exact rational arithmetic for polynomial
//! coefficients, together with a NaN sentinel that absorbs failures.

use num_integer::Integer as _;
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::num::ParseIntError;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use thiserror::Error;

/// Internal representation of a [`Rational`].
///
/// Every NaN is the same variant, so the derived `Eq` and `Hash` treat
/// all NaNs as one value regardless of how they were produced.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum Repr {
    /// `numer / denom` with `denom > 0` and `gcd(|numer|, denom) == 1`.
    Finite { numer: i64, denom: i64 },
    NaN,
}

/// A rational number in lowest terms, or NaN.
///
/// Rationals are always stored in lowest terms with a positive denominator.
/// A zero denominator never survives construction: it becomes NaN.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational(Repr);

/// Errors produced when parsing a [`Rational`] from text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseRationalError {
    /// The input was empty.
    #[error("empty rational literal")]
    Empty,

    /// A numerator or denominator was not a valid integer.
    #[error("invalid integer `{token}` in rational literal")]
    InvalidInteger {
        /// The offending token.
        token: String,
        /// The underlying integer parse failure.
        #[source]
        source: ParseIntError,
    },

    /// A numerator or denominator carried a leading `+`.
    #[error("unexpected `+` in rational literal `{0}`")]
    ExplicitPlus(String),
}

impl Rational {
    /// The rational 0.
    pub const ZERO: Self = Self::from_integer(0);

    /// The rational 1.
    pub const ONE: Self = Self::from_integer(1);

    /// The NaN sentinel.
    pub const NAN: Self = Self(Repr::NaN);

    /// Creates a new rational from numerator and denominator.
    ///
    /// The result is reduced to lowest terms and its sign moved to the
    /// numerator. A zero denominator yields NaN, whatever the numerator.
    #[must_use]
    pub fn new(numerator: i64, denominator: i64) -> Self {
        Self::from_wide(i128::from(numerator), i128::from(denominator))
    }

    /// Reduces a widened fraction and narrows it back to `i64`.
    ///
    /// Products of two `i64` values and sums of two such products fit in
    /// `i128`, so arithmetic is exact up to this point. A reduced result
    /// that still does not fit in `i64` is NaN.
    fn from_wide(numerator: i128, denominator: i128) -> Self {
        if denominator == 0 {
            return Self::NAN;
        }

        // gcd is at least 1 because the denominator is non-zero
        let g = numerator.gcd(&denominator);
        let (mut numer, mut denom) = (numerator / g, denominator / g);
        if denom < 0 {
            numer = -numer;
            denom = -denom;
        }

        match (i64::try_from(numer), i64::try_from(denom)) {
            (Ok(numer), Ok(denom)) => Self(Repr::Finite { numer, denom }),
            _ => Self::NAN,
        }
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub const fn from_integer(n: i64) -> Self {
        Self(Repr::Finite { numer: n, denom: 1 })
    }

    /// Returns the numerator, or `None` for NaN.
    #[must_use]
    pub fn numerator(&self) -> Option<i64> {
        match self.0 {
            Repr::Finite { numer, .. } => Some(numer),
            Repr::NaN => None,
        }
    }

    /// Returns the denominator, or `None` for NaN.
    #[must_use]
    pub fn denominator(&self) -> Option<i64> {
        match self.0 {
            Repr::Finite { denom, .. } => Some(denom),
            Repr::NaN => None,
        }
    }

    /// Returns true if this is the NaN sentinel.
    #[must_use]
    pub fn is_nan(&self) -> bool {
        matches!(self.0, Repr::NaN)
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denominator() == Some(1)
    }

    /// Returns the sign: -1, 0, or 1. NaN has sign 0.
    #[must_use]
    pub fn signum(&self) -> i8 {
        match self.0 {
            Repr::Finite { numer, .. } if numer > 0 => 1,
            Repr::Finite { numer, .. } if numer < 0 => -1,
            _ => 0,
        }
    }

    /// Returns true if strictly less than zero. NaN is neither sign.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.signum() < 0
    }

    /// Returns true if strictly greater than zero. NaN is neither sign.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.signum() > 0
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            -*self
        } else {
            *self
        }
    }

    /// Converts to the nearest `f64`; NaN maps to `f64::NAN`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(&self) -> f64 {
        match self.0 {
            Repr::Finite { numer, denom } => numer as f64 / denom as f64,
            Repr::NaN => f64::NAN,
        }
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::ONE
    }

    fn is_one(&self) -> bool {
        *self == Self::ONE
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Repr::Finite { numer, denom: 1 } => write!(f, "{numer}"),
            Repr::Finite { numer, denom } => write!(f, "{numer}/{denom}"),
            Repr::NaN => write!(f, "NaN"),
        }
    }
}

fn parse_integer(token: &str) -> Result<i64, ParseRationalError> {
    if token.starts_with('+') {
        return Err(ParseRationalError::ExplicitPlus(token.to_owned()));
    }
    token
        .parse::<i64>()
        .map_err(|source| ParseRationalError::InvalidInteger {
            token: token.to_owned(),
            source,
        })
}

impl FromStr for Rational {
    type Err = ParseRationalError;

    /// Parses `NaN`, `n` or `n/d`. A zero denominator parses to NaN.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseRationalError::Empty);
        }
        if s == "NaN" {
            return Ok(Self::NAN);
        }

        match s.split_once('/') {
            Some((numer, denom)) => Ok(Self::new(parse_integer(numer)?, parse_integer(denom)?)),
            None => Ok(Self::from_integer(parse_integer(s)?)),
        }
    }
}

/// NaN sorts above every finite value; finite values compare exactly.
impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.0, other.0) {
            (Repr::NaN, Repr::NaN) => Ordering::Equal,
            (Repr::NaN, Repr::Finite { .. }) => Ordering::Greater,
            (Repr::Finite { .. }, Repr::NaN) => Ordering::Less,
            (Repr::Finite { numer: a, denom: b }, Repr::Finite { numer: c, denom: d }) => {
                // denominators are positive, so the sign of a*d - c*b decides
                (i128::from(a) * i128::from(d)).cmp(&(i128::from(c) * i128::from(b)))
            }
        }
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn widen(a: i64, b: i64, c: i64, d: i64) -> (i128, i128, i128, i128) {
    (i128::from(a), i128::from(b), i128::from(c), i128::from(d))
}

// Arithmetic operations
impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        match (self.0, rhs.0) {
            (Repr::Finite { numer: a, denom: b }, Repr::Finite { numer: c, denom: d }) => {
                let (a, b, c, d) = widen(a, b, c, d);
                Self::from_wide(a * d + c * b, b * d)
            }
            _ => Self::NAN,
        }
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + -rhs
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self.0, rhs.0) {
            (Repr::Finite { numer: a, denom: b }, Repr::Finite { numer: c, denom: d }) => {
                let (a, b, c, d) = widen(a, b, c, d);
                Self::from_wide(a * c, b * d)
            }
            _ => Self::NAN,
        }
    }
}

/// Division keeps the calculator's historical contract: dividing by NaN
/// yields zero, dividing by zero yields NaN.
impl Div for Rational {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        match (self.0, rhs.0) {
            (Repr::NaN, _) => Self::NAN,
            (_, Repr::NaN) => Self::ZERO,
            (Repr::Finite { numer: a, denom: b }, Repr::Finite { numer: c, denom: d }) => {
                // c == 0 gives a zero denominator, which from_wide() turns into NaN
                let (a, b, c, d) = widen(a, b, c, d);
                Self::from_wide(a * d, b * c)
            }
        }
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self.0 {
            Repr::Finite { numer, denom } => match numer.checked_neg() {
                Some(numer) => Self(Repr::Finite { numer, denom }),
                None => Self::NAN,
            },
            Repr::NaN => Self::NAN,
        }
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(i64::from(n))
    }
}
