//! # polycalc-rational
//!
//! Exact rational arithmetic for the polycalc polynomial calculator.
//!
//! This crate provides:
//! - Fixed-width rationals (`Rational`) kept in lowest terms
//! - A NaN sentinel that absorbs every arithmetic operation
//! - The textual form `n`, `n/d` or `NaN` (`Display` / `FromStr`)
//!
//! ## Overflow
//!
//! Numerators and denominators are `i64`. Intermediate products are formed
//! in `i128` and reduced before narrowing, so only a result whose lowest
//! terms do not fit in `i64` is lost; it becomes NaN.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod rational;

#[cfg(test)]
mod proptests;

pub use rational::{ParseRationalError, Rational};
