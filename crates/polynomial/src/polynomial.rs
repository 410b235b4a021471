// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Polynomial arithmetic implementation.

use crate::errors::{PolynomialError, PolynomialResult};
use crate::utils::{pow_unsigned, reduce, reduce_and_center};
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Signed, Zero};
use std::fmt;
use tracing::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A univariate polynomial with arbitrary precision integer coefficients.
///
/// Coefficients are stored in ascending order of degree, so index `i` holds the
/// coefficient of `x^i`:
/// `a_0 + a_1 * x + ... + a_n * x^n`
///
/// Every value is kept normalized: there is always at least one coefficient, and
/// the highest one is non-zero unless the polynomial is the zero polynomial `[0]`.
/// Equality therefore compares coefficient sequences directly.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "Vec<BigInt>", into = "Vec<BigInt>")
)]
pub struct Polynomial {
    /// Coefficients in ascending order (constant term first).
    pub(crate) coefficients: Vec<BigInt>,
}

/// Renders the polynomial highest degree first, e.g. `x^3 + 5x - 4 `.
///
/// Every printed term is followed by a single space and the zero polynomial is
/// rendered as `0 `.
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0 ");
        }

        let leading = self.degree();
        for (degree, coeff) in self.coefficients.iter().enumerate().rev() {
            if coeff.is_zero() {
                continue;
            }

            if coeff.is_positive() && degree != leading {
                write!(f, "+ ")?;
            }
            if coeff.is_negative() {
                write!(f, "-")?;
                if degree != leading {
                    write!(f, " ")?;
                }
            }

            let abs_coeff = coeff.abs();
            if degree == 0 || !abs_coeff.is_one() {
                write!(f, "{abs_coeff}")?;
            }

            match degree {
                0 => write!(f, " ")?,
                1 => write!(f, "x ")?,
                _ => write!(f, "x^{degree} ")?,
            }
        }

        Ok(())
    }
}

impl Default for Polynomial {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Vec<BigInt>> for Polynomial {
    fn from(coefficients: Vec<BigInt>) -> Self {
        Self::new(coefficients)
    }
}

impl From<Polynomial> for Vec<BigInt> {
    fn from(poly: Polynomial) -> Self {
        poly.coefficients
    }
}

impl Polynomial {
    /// Creates a new polynomial from a vector of coefficients.
    ///
    /// An empty vector yields the zero polynomial. Trailing zero coefficients are
    /// dropped.
    ///
    /// # Arguments
    ///
    /// * `coefficients` - Vector of coefficients in ascending order of degree.
    pub fn new(coefficients: Vec<BigInt>) -> Self {
        let mut poly = Self { coefficients };
        poly.normalize();
        poly
    }

    /// Creates a polynomial by copying a slice of coefficients.
    ///
    /// # Arguments
    ///
    /// * `coefficients` - Coefficients in ascending order of degree.
    pub fn from_slice(coefficients: &[BigInt]) -> Self {
        Self::new(coefficients.to_vec())
    }

    /// Creates a polynomial from coefficients in descending order format.
    ///
    /// This method converts from descending order (highest degree first) to this
    /// library's ordering (constant term first).
    ///
    /// # Arguments
    ///
    /// * `descending_coefficients` - Vector of coefficients in descending order.
    pub fn from_descending_coefficients(descending_coefficients: Vec<BigInt>) -> Self {
        let mut coefficients = descending_coefficients;
        coefficients.reverse();
        Self::new(coefficients)
    }

    /// Converts the polynomial to descending order coefficient format.
    ///
    /// # Returns
    ///
    /// Vector of coefficients with the highest degree first.
    pub fn to_descending_coefficients(&self) -> Vec<BigInt> {
        let mut coefficients = self.coefficients.clone();
        coefficients.reverse();
        coefficients
    }

    /// Replaces the coefficients of `self` with a copy of `coefficients`.
    pub fn assign(&mut self, coefficients: &[BigInt]) {
        self.coefficients.clear();
        self.coefficients.extend_from_slice(coefficients);
        self.normalize();
    }

    /// The zero polynomial.
    pub fn zero() -> Self {
        Self {
            coefficients: vec![BigInt::zero()],
        }
    }

    /// The constant polynomial `1`.
    pub fn one() -> Self {
        Self::constant(BigInt::one())
    }

    /// Creates a constant polynomial.
    ///
    /// # Arguments
    ///
    /// * `constant` - The constant value.
    pub fn constant(constant: BigInt) -> Self {
        Self {
            coefficients: vec![constant],
        }
    }

    /// Creates the single term `coefficient * x^degree`.
    pub fn monomial(coefficient: BigInt, degree: usize) -> Self {
        if coefficient.is_zero() {
            return Self::zero();
        }
        let mut coefficients = vec![BigInt::zero(); degree + 1];
        coefficients[degree] = coefficient;
        Self { coefficients }
    }

    /// Returns the coefficients of the polynomial, constant term first.
    pub fn coefficients(&self) -> &[BigInt] {
        &self.coefficients
    }

    /// Returns a copy of the coefficient of `x^index`.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::IndexOutOfRange` if `index` is past the stored
    /// coefficients.
    pub fn coefficient(&self, index: usize) -> PolynomialResult<BigInt> {
        self.coefficients
            .get(index)
            .cloned()
            .ok_or(PolynomialError::IndexOutOfRange {
                index,
                len: self.coefficients.len(),
            })
    }

    /// Returns the degree of the polynomial.
    ///
    /// The degree of the zero polynomial is 0.
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Checks if the polynomial is zero.
    pub fn is_zero(&self) -> bool {
        self.coefficients.len() == 1 && self.coefficients[0].is_zero()
    }

    /// Returns the coefficient of the highest degree term.
    pub fn leading_coefficient(&self) -> &BigInt {
        &self.coefficients[self.degree()]
    }

    /// Removes insignificant high degree zeros, keeping at least one coefficient.
    fn normalize(&mut self) {
        while self.coefficients.len() > 1
            && self.coefficients.last().is_some_and(|c| c.is_zero())
        {
            self.coefficients.pop();
        }
        if self.coefficients.is_empty() {
            self.coefficients.push(BigInt::zero());
        }
    }

    /// Adds two polynomials together.
    ///
    /// Missing high degree terms of the shorter operand count as zero.
    ///
    /// # Arguments
    ///
    /// * `other` - A reference to the polynomial to add to `self`.
    ///
    /// # Returns
    ///
    /// A new polynomial containing the sum of the two polynomials.
    pub fn add(&self, other: &Self) -> Self {
        let max_length = std::cmp::max(self.coefficients.len(), other.coefficients.len());
        let mut result = vec![BigInt::zero(); max_length];

        for (slot, coeff) in result.iter_mut().zip(&self.coefficients) {
            *slot += coeff;
        }
        for (slot, coeff) in result.iter_mut().zip(&other.coefficients) {
            *slot += coeff;
        }

        Polynomial::new(result)
    }

    /// Subtracts one polynomial from another.
    ///
    /// # Arguments
    ///
    /// * `other` - A reference to the polynomial to subtract from `self`.
    ///
    /// # Returns
    ///
    /// A new polynomial containing the difference.
    pub fn sub(&self, other: &Self) -> Self {
        let max_length = std::cmp::max(self.coefficients.len(), other.coefficients.len());
        let mut result = vec![BigInt::zero(); max_length];

        for (slot, coeff) in result.iter_mut().zip(&self.coefficients) {
            *slot += coeff;
        }
        for (slot, coeff) in result.iter_mut().zip(&other.coefficients) {
            *slot -= coeff;
        }

        Polynomial::new(result)
    }

    /// Negates all coefficients of the polynomial.
    pub fn neg(&self) -> Self {
        Polynomial::new(self.coefficients.iter().map(|x| -x).collect())
    }

    /// Multiplies two polynomials using the schoolbook algorithm.
    ///
    /// # Arguments
    ///
    /// * `other` - A reference to the polynomial to multiply with `self`.
    ///
    /// # Returns
    ///
    /// A new polynomial containing the product.
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Polynomial::zero();
        }

        let product_len = self.coefficients.len() + other.coefficients.len() - 1;
        let mut product = vec![BigInt::zero(); product_len];

        for (i, a) in self.coefficients.iter().enumerate() {
            for (j, b) in other.coefficients.iter().enumerate() {
                product[i + j] += a * b;
            }
        }

        Polynomial::new(product)
    }

    /// Multiplies each coefficient of the polynomial by a scalar.
    ///
    /// # Arguments
    ///
    /// * `scalar` - A `BigInt` scalar to multiply with each coefficient.
    pub fn scalar_mul(&self, scalar: &BigInt) -> Self {
        Polynomial::new(self.coefficients.iter().map(|x| x * scalar).collect())
    }

    /// Reduces every coefficient modulo `modulus`.
    ///
    /// Reduction uses floored division, so each coefficient takes the sign of the
    /// modulus (`[0, modulus)` for a positive modulus).
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::DivisionByZero` if `modulus` is zero.
    pub fn reduce_coefficients(&self, modulus: &BigInt) -> PolynomialResult<Self> {
        let reduced = self
            .coefficients
            .iter()
            .map(|x| reduce(x, modulus))
            .collect::<PolynomialResult<Vec<_>>>()?;
        trace!(%modulus, degree = self.degree(), "reduced polynomial coefficients");
        Ok(Polynomial::new(reduced))
    }

    /// Reduces coefficients modulo a positive modulus and centers them around zero.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::InvalidModulus` if `modulus` is not positive.
    pub fn reduce_and_center(&self, modulus: &BigInt) -> PolynomialResult<Self> {
        let reduced = self
            .coefficients
            .iter()
            .map(|x| reduce_and_center(x, modulus))
            .collect::<PolynomialResult<Vec<_>>>()?;
        Ok(Polynomial::new(reduced))
    }

    /// Divides one polynomial by another, returning the quotient and remainder.
    ///
    /// Each quotient coefficient is the truncating integer quotient of the running
    /// leading coefficient by the divisor's leading coefficient. When that division
    /// is inexact the quotient is not the rational one, but
    /// `quotient * divisor + remainder == self` always holds.
    ///
    /// # Arguments
    ///
    /// * `divisor` - A reference to the divisor polynomial.
    ///
    /// # Returns
    ///
    /// A result containing a tuple of (quotient, remainder) or an error.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::DivisionByZero` if the divisor is zero.
    pub fn quo_rem(&self, divisor: &Self) -> PolynomialResult<(Self, Self)> {
        if divisor.is_zero() {
            debug!(dividend = %self, "refusing to divide by the zero polynomial");
            return Err(PolynomialError::DivisionByZero);
        }

        let a_deg = self.degree();
        let b_deg = divisor.degree();
        trace!(a_deg, b_deg, "polynomial long division");

        if a_deg < b_deg {
            return Ok((Polynomial::zero(), self.clone()));
        }

        let lead = divisor.leading_coefficient();
        let mut quotient = vec![BigInt::zero(); a_deg - b_deg + 1];
        let mut remainder = self.coefficients.clone();

        for i in (b_deg..=a_deg).rev() {
            let q = &remainder[i] / lead;
            if !(&remainder[i] % lead).is_zero() {
                trace!(degree = i, "inexact leading coefficient division");
            }

            for (j, b) in divisor.coefficients.iter().enumerate().rev() {
                remainder[i - b_deg + j] -= &q * b;
            }
            quotient[i - b_deg] = q;
        }

        Ok((Polynomial::new(quotient), Polynomial::new(remainder)))
    }

    /// Evaluates the polynomial at a given point.
    ///
    /// Computes `sum(a_i * x^i)` directly, raising `x` to each degree by repeated
    /// squaring.
    ///
    /// # Arguments
    ///
    /// * `x` - The point at which to evaluate the polynomial.
    ///
    /// # Returns
    ///
    /// The value of the polynomial at the given point.
    pub fn evaluate(&self, x: &BigInt) -> BigInt {
        self.coefficients
            .iter()
            .enumerate()
            .filter(|(_, coeff)| !coeff.is_zero())
            .map(|(degree, coeff)| coeff * pow_unsigned(x, &BigUint::from(degree)))
            .sum()
    }

    /// Renders the coefficients highest degree first as `P:(c_n ... c_0)`.
    pub fn to_coefficient_string(&self) -> String {
        let terms = self
            .coefficients
            .iter()
            .rev()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        format!("P:({terms})")
    }
}
