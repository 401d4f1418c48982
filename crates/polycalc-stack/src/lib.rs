//! # polycalc-stack
//!
//! A stack machine over rational polynomials.
//!
//! This crate provides:
//! - `PolyStack`, a LIFO stack with the calculator's arithmetic operations
//! - `Command`, the whitespace-separated command language
//! - `Calculator`, which executes command lines against a stack
//!
//! Algebraic failures (division by zero, NaN operands) stay in-band as NaN
//! polynomials. Misuse, such as popping an empty stack or a malformed
//! literal, is reported through [`CalcError`] and leaves the stack as it was.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod calculator;
pub mod command;
pub mod error;
pub mod stack;

pub use calculator::{Calculator, Output};
pub use command::Command;
pub use error::{CalcError, StackError};
pub use stack::PolyStack;

pub use polycalc_poly::Polynomial;
