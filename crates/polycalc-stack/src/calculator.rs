//! Executes calculator commands against a [`PolyStack`].

use std::fmt;

use polycalc_poly::Polynomial;
use tracing::debug;

use crate::{CalcError, Command, PolyStack};

/// Something a command produced for display.
#[derive(Clone, Debug, PartialEq)]
pub enum Output {
    /// A polynomial, usually the top of the stack.
    Poly(Polynomial),
    /// A floating-point value from evaluation or integration.
    Number(f64),
    /// The whole stack, bottom first.
    Stack(Vec<Polynomial>),
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Poly(p) => write!(f, "{p}"),
            Self::Number(x) => write!(f, "{x}"),
            Self::Stack(polys) if polys.is_empty() => write!(f, "(empty)"),
            Self::Stack(polys) => {
                // top of the stack first, numbered from 0
                for (i, p) in polys.iter().rev().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{i}: {p}")?;
                }
                Ok(())
            }
        }
    }
}

/// A stack calculator driven by [`Command`]s.
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    stack: PolyStack,
}

impl Calculator {
    /// Creates a calculator with an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the underlying stack.
    #[must_use]
    pub fn stack(&self) -> &PolyStack {
        &self.stack
    }

    /// Executes a single command.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::Stack`] if the stack holds too few operands; the
    /// stack is left unchanged.
    pub fn execute(&mut self, command: Command) -> Result<Option<Output>, CalcError> {
        debug!(?command, depth = self.stack.len(), "execute");
        match command {
            Command::Push(p) => self.stack.push(p),
            Command::Add => self.stack.add()?,
            Command::Sub => self.stack.sub()?,
            Command::Mul => self.stack.mul()?,
            Command::Div => self.stack.div()?,
            Command::Differentiate => self.stack.differentiate()?,
            Command::Integrate => self.stack.integrate()?,
            Command::Dup => self.stack.dup()?,
            Command::Swap => self.stack.swap()?,
            Command::Pop => {
                self.stack.pop()?;
            }
            Command::Clear => self.stack.clear(),
            Command::Eval(x) => return Ok(Some(Output::Number(self.stack.peek()?.eval(x)))),
            Command::DefiniteIntegral(lower, upper) => {
                let value = self.stack.peek()?.integrate(lower, upper);
                return Ok(Some(Output::Number(value)));
            }
            Command::Print => return Ok(Some(Output::Poly(self.stack.peek()?.clone()))),
            Command::Stack => return Ok(Some(Output::Stack(self.stack.iter().cloned().collect()))),
        }
        Ok(None)
    }

    /// Parses and executes every command on a line, collecting outputs.
    ///
    /// Parsing happens before anything runs, so a malformed line has no
    /// effect. An execution error stops the line at the failing command.
    ///
    /// # Errors
    ///
    /// Returns the first parse or execution error.
    pub fn execute_line(&mut self, line: &str) -> Result<Vec<Output>, CalcError> {
        let mut outputs = Vec::new();
        for command in Command::parse_line(line)? {
            if let Some(output) = self.execute(command)? {
                outputs.push(output);
            }
        }
        Ok(outputs)
    }
}
