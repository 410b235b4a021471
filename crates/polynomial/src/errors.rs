// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for polynomial operations.

use num_bigint::BigInt;
use thiserror::Error;

/// Errors that can occur during polynomial operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolynomialError {
    /// Division by the zero polynomial, or reduction by a zero modulus
    #[error("Division by zero")]
    DivisionByZero,

    /// Exponentiation with a negative exponent
    #[error("Negative exponent: {exponent}")]
    NegativeExponent { exponent: BigInt },

    /// Coefficient access past the stored coefficients
    #[error("Coefficient index {index} out of range for polynomial with {len} coefficients")]
    IndexOutOfRange { index: usize, len: usize },

    /// Modulus not usable for the requested reduction
    #[error("Invalid modulus: {modulus}")]
    InvalidModulus { modulus: BigInt },
}

/// Result type alias for polynomial operations
pub type PolynomialResult<T> = Result<T, PolynomialError>;
