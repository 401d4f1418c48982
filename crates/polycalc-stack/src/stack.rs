//! The calculator's polynomial stack.
//!
//! Elements are addressed from the top: index 0 is the most recently
//! pushed polynomial. Binary operations take the element below the top as
//! their left operand, so pushing `p` then `q` and subtracting yields
//! `p - q`.

use polycalc_poly::Polynomial;
use polycalc_rational::Rational;
use tracing::{debug, trace};

use crate::StackError;

/// A LIFO stack of polynomials.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PolyStack {
    /// Bottom of the stack first.
    polys: Vec<Polynomial>,
}

impl PolyStack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of polynomials on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.polys.len()
    }

    /// Returns true if the stack is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polys.is_empty()
    }

    /// Pushes a polynomial onto the top.
    pub fn push(&mut self, p: Polynomial) {
        trace!(poly = %p, depth = self.polys.len() + 1, "push");
        self.polys.push(p);
        self.check_rep();
    }

    /// Removes and returns the top polynomial.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Underflow`] if the stack is empty.
    pub fn pop(&mut self) -> Result<Polynomial, StackError> {
        let [top] = self.take::<1>()?;
        self.check_rep();
        Ok(top)
    }

    /// Returns the top polynomial without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Underflow`] if the stack is empty.
    pub fn peek(&self) -> Result<&Polynomial, StackError> {
        self.polys.last().ok_or(StackError::Underflow {
            needed: 1,
            available: 0,
        })
    }

    /// Returns the polynomial `index` elements below the top.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::OutOfRange`] if `index >= self.len()`.
    pub fn nth_from_top(&self, index: usize) -> Result<&Polynomial, StackError> {
        let len = self.polys.len();
        len.checked_sub(index + 1)
            .and_then(|i| self.polys.get(i))
            .ok_or(StackError::OutOfRange { index, len })
    }

    /// Duplicates the top polynomial.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Underflow`] if the stack is empty.
    pub fn dup(&mut self) -> Result<(), StackError> {
        let top = self.peek()?.clone();
        self.push(top);
        Ok(())
    }

    /// Swaps the top two polynomials.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Underflow`] if fewer than two are present.
    pub fn swap(&mut self) -> Result<(), StackError> {
        let [second, first] = self.take::<2>()?;
        self.polys.push(first);
        self.polys.push(second);
        self.check_rep();
        Ok(())
    }

    /// Removes every polynomial.
    pub fn clear(&mut self) {
        debug!(dropped = self.polys.len(), "clear");
        self.polys.clear();
        self.check_rep();
    }

    /// Replaces the top two polynomials with their sum.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Underflow`] if fewer than two are present.
    pub fn add(&mut self) -> Result<(), StackError> {
        self.binary("add", Polynomial::add)
    }

    /// Replaces the top two polynomials with `second - top`.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Underflow`] if fewer than two are present.
    pub fn sub(&mut self) -> Result<(), StackError> {
        self.binary("sub", Polynomial::sub)
    }

    /// Replaces the top two polynomials with their product.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Underflow`] if fewer than two are present.
    pub fn mul(&mut self) -> Result<(), StackError> {
        self.binary("mul", Polynomial::mul)
    }

    /// Replaces the top two polynomials with the truncated `second / top`.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Underflow`] if fewer than two are present.
    pub fn div(&mut self) -> Result<(), StackError> {
        self.binary("div", Polynomial::div)
    }

    /// Replaces the top polynomial with its derivative.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Underflow`] if the stack is empty.
    pub fn differentiate(&mut self) -> Result<(), StackError> {
        self.unary("differentiate", Polynomial::differentiate)
    }

    /// Replaces the top polynomial with its antiderivative (constant 0).
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Underflow`] if the stack is empty.
    pub fn integrate(&mut self) -> Result<(), StackError> {
        self.unary("integrate", |p| p.antiderivative(Rational::ZERO))
    }

    /// Iterates from the bottom of the stack to the top.
    pub fn iter(&self) -> std::slice::Iter<'_, Polynomial> {
        self.polys.iter()
    }

    /// Pops the top `N` elements, bottom-most first, or fails untouched.
    fn take<const N: usize>(&mut self) -> Result<[Polynomial; N], StackError> {
        let available = self.polys.len();
        let underflow = StackError::Underflow {
            needed: N,
            available,
        };
        if available < N {
            return Err(underflow);
        }
        self.polys
            .split_off(available - N)
            .try_into()
            .map_err(|_| underflow)
    }

    fn unary(
        &mut self,
        name: &str,
        op: impl FnOnce(&Polynomial) -> Polynomial,
    ) -> Result<(), StackError> {
        let [p] = self.take::<1>()?;
        let result = op(&p);
        debug!(op = name, arg = %p, result = %result, "unary operation");
        self.push(result);
        Ok(())
    }

    fn binary(
        &mut self,
        name: &str,
        op: impl FnOnce(&Polynomial, &Polynomial) -> Polynomial,
    ) -> Result<(), StackError> {
        let [second, first] = self.take::<2>()?;
        let result = op(&second, &first);
        debug!(op = name, lhs = %second, rhs = %first, result = %result, "binary operation");
        self.push(result);
        Ok(())
    }

    fn check_rep(&self) {
        debug_assert!(
            self.polys.iter().all(Polynomial::is_canonical),
            "stack holds a non-canonical polynomial"
        );
    }
}

impl<'a> IntoIterator for &'a PolyStack {
    type Item = &'a Polynomial;
    type IntoIter = std::slice::Iter<'a, Polynomial>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
