//! # polycalc-poly
//!
//! Exact single-variable polynomial arithmetic over rationals.
//!
//! This crate provides:
//! - Terms `c*x^e` with rational coefficients (`Term`)
//! - Sparse polynomials kept in canonical form (`Polynomial`)
//! - Truncating long division, differentiation and integration
//! - The textual grammar shared by parsing and formatting
//!
//! ## Canonical Form
//!
//! A polynomial stores its non-zero terms in strictly descending exponent
//! order. Every operation builds its result by merging terms one at a time
//! into such a sequence, so the form is preserved throughout. Any NaN
//! coefficient collapses the whole polynomial to the NaN sentinel.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod polynomial;
pub mod term;

#[cfg(test)]
mod proptests;

pub use error::ParseError;
pub use polynomial::Polynomial;
pub use term::Term;
