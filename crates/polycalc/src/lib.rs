//! # polycalc
//!
//! Exact rational polynomial arithmetic with a stack calculator.
//!
//! ## Features
//!
//! - **Exact Rationals**: lowest-terms fractions with an absorbing NaN
//! - **Canonical Polynomials**: sparse, sorted, no zero terms
//! - **Calculus**: derivatives, antiderivatives, definite integrals
//! - **Stack Calculator**: postfix command language over polynomials
//!
//! ## Quick Start
//!
//! ```rust
//! use polycalc::prelude::*;
//!
//! let p: Polynomial = "x^3+x-1".parse().unwrap();
//! assert_eq!(p.differentiate().to_string(), "3*x^2+1");
//!
//! let mut calc = Calculator::new();
//! calc.execute_line("x+1 x-1 mul").unwrap();
//! assert_eq!(calc.stack().peek().unwrap().to_string(), "x^2-1");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use polycalc_poly as poly;
pub use polycalc_rational as rational;
pub use polycalc_stack as stack;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use polycalc_poly::{ParseError, Polynomial, Term};
    pub use polycalc_rational::Rational;
    pub use polycalc_stack::{CalcError, Calculator, Command, Output, PolyStack, StackError};
}
