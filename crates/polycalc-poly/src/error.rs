//! Parse errors for terms and polynomials.

use std::num::ParseIntError;

use polycalc_rational::ParseRationalError;
use thiserror::Error;

/// Errors that can occur while parsing a [`Term`](crate::Term) or
/// [`Polynomial`](crate::Polynomial).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input, or a term within it, was empty.
    #[error("empty polynomial expression")]
    Empty,

    /// The coefficient was not a valid rational.
    #[error("invalid coefficient: {0}")]
    Coefficient(#[from] ParseRationalError),

    /// The exponent after `^` was not a non-negative integer.
    #[error("invalid exponent in term `{term}`")]
    Exponent {
        /// The term being parsed.
        term: String,
        /// The underlying integer parse failure.
        #[source]
        source: ParseIntError,
    },

    /// The term did not match any of the accepted forms.
    #[error("malformed term `{0}`")]
    MalformedTerm(String),

    /// A `+` or `-` was not followed by a term.
    #[error("`{sign}` at offset {offset} is not followed by a term")]
    DanglingSign {
        /// The sign character.
        sign: char,
        /// Byte offset of the sign in the input.
        offset: usize,
    },
}
