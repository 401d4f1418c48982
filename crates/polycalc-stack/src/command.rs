//! The calculator command language.
//!
//! A command line is a whitespace-separated sequence of words, read left
//! to right in postfix order. Anything after `#` is a comment. A word that
//! is not a keyword is parsed as a polynomial literal and pushed, so
//! `x+1 x-1 mul` leaves `x^2-1` on the stack.

use std::str::FromStr;

use polycalc_poly::Polynomial;

use crate::CalcError;

/// A single calculator instruction.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Push a polynomial.
    Push(Polynomial),
    /// Pop two, push `second + top`.
    Add,
    /// Pop two, push `second - top`.
    Sub,
    /// Pop two, push `second * top`.
    Mul,
    /// Pop two, push the truncated quotient `second / top`.
    Div,
    /// Replace the top with its derivative.
    Differentiate,
    /// Replace the top with its antiderivative, constant 0.
    Integrate,
    /// Duplicate the top.
    Dup,
    /// Swap the top two.
    Swap,
    /// Drop the top.
    Pop,
    /// Empty the stack.
    Clear,
    /// Evaluate the top at a point, leaving the stack unchanged.
    Eval(f64),
    /// Definite integral of the top between two bounds.
    DefiniteIntegral(f64, f64),
    /// Show the top.
    Print,
    /// Show the whole stack.
    Stack,
}

impl Command {
    /// Parses every command on a line.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError`] for a malformed literal, a missing argument or
    /// an invalid number. No commands are returned in that case.
    pub fn parse_line(line: &str) -> Result<Vec<Self>, CalcError> {
        let code = line.split('#').next().unwrap_or_default();
        let mut words = code.split_whitespace();
        let mut commands = Vec::new();

        while let Some(word) = words.next() {
            commands.push(Self::from_words(word, &mut words)?);
        }

        Ok(commands)
    }

    /// Parses one command, consuming its arguments from `rest`.
    fn from_words<'a>(
        word: &'a str,
        rest: &mut impl Iterator<Item = &'a str>,
    ) -> Result<Self, CalcError> {
        let command = match word {
            "add" | "+" => Self::Add,
            "sub" | "-" => Self::Sub,
            "mul" | "*" => Self::Mul,
            "div" | "/" => Self::Div,
            "diff" | "d" => Self::Differentiate,
            "integ" | "i" => Self::Integrate,
            "dup" => Self::Dup,
            "swap" => Self::Swap,
            "pop" => Self::Pop,
            "clear" => Self::Clear,
            "print" | "p" => Self::Print,
            "stack" | "s" => Self::Stack,
            "push" => {
                let text = rest.next().ok_or(CalcError::MissingArgument {
                    command: "push",
                    expected: 1,
                })?;
                Self::Push(parse_poly(text)?)
            }
            "eval" => {
                let [x] = numbers::<1>("eval", rest)?;
                Self::Eval(x)
            }
            "defint" => {
                let [lower, upper] = numbers::<2>("defint", rest)?;
                Self::DefiniteIntegral(lower, upper)
            }
            literal => Self::Push(parse_poly(literal)?),
        };
        Ok(command)
    }
}

impl FromStr for Command {
    type Err = CalcError;

    /// Parses a single command with its arguments.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let first = words.next().ok_or(CalcError::MissingArgument {
            command: "command",
            expected: 1,
        })?;
        Self::from_words(first, &mut words)
    }
}

fn parse_poly(text: &str) -> Result<Polynomial, CalcError> {
    text.parse().map_err(|source| CalcError::Polynomial {
        text: text.to_owned(),
        source,
    })
}

fn numbers<'a, const N: usize>(
    command: &'static str,
    rest: &mut impl Iterator<Item = &'a str>,
) -> Result<[f64; N], CalcError> {
    let mut values = [0.0; N];
    for value in &mut values {
        let token = rest.next().ok_or(CalcError::MissingArgument {
            command,
            expected: N,
        })?;
        *value = token.parse().map_err(|source| CalcError::Number {
            token: token.to_owned(),
            source,
        })?;
    }
    Ok(values)
}
