//! Error types for the stack and the command language.

use std::num::ParseFloatError;

use polycalc_poly::ParseError;
use thiserror::Error;

/// Errors raised by [`PolyStack`](crate::PolyStack) operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StackError {
    /// An operation needed more polynomials than the stack holds.
    #[error("stack underflow: needs {needed} element(s), has {available}")]
    Underflow {
        /// Operands the operation takes.
        needed: usize,
        /// Polynomials on the stack.
        available: usize,
    },

    /// An index from the top was past the bottom of the stack.
    #[error("index {index} is out of range for a stack of {len}")]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// Stack depth.
        len: usize,
    },
}

/// Errors raised while parsing or executing calculator commands.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum CalcError {
    /// A stack operation failed.
    #[error(transparent)]
    Stack(#[from] StackError),

    /// A word was neither a command nor a valid polynomial.
    #[error("cannot parse `{text}`: {source}")]
    Polynomial {
        /// The offending word.
        text: String,
        /// Why it failed to parse.
        #[source]
        source: ParseError,
    },

    /// A numeric argument was not a valid float.
    #[error("invalid number `{token}`")]
    Number {
        /// The offending argument.
        token: String,
        /// The float parse failure.
        #[source]
        source: ParseFloatError,
    },

    /// A command ran out of arguments.
    #[error("`{command}` expects {expected} argument(s)")]
    MissingArgument {
        /// The command keyword.
        command: &'static str,
        /// Arguments it takes.
        expected: usize,
    },
}
