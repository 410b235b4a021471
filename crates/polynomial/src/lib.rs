// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # zpoly
//!
//! Exact arithmetic on univariate polynomials with arbitrary precision integer
//! coefficients, i.e. the ring `Z[x]`.
//!
//! ## Features
//!
//! - Uses `num-bigint` for coefficient representation.
//! - Ring operations: addition, subtraction, schoolbook multiplication.
//! - Long division with remainder using truncating integer steps.
//! - Coefficient-wise modular reduction, plain or centered.
//! - Evaluation at integer points with a repeated-squaring power helper.
//! - Canonical rendering (`x^3 + 5x - 4 `) and a coefficient form (`P:(1 0 5 -4)`).
//! - Serialization: Optional serde support with bincode integration.
//!
//! ## Representation
//!
//! Coefficients are stored constant term first and always normalized: no zero
//! coefficient above the leading term, and the zero polynomial is the single
//! coefficient `0`. All operations borrow their operands and return new values.

pub mod errors;
pub mod polynomial;
pub mod utils;

pub use errors::{PolynomialError, PolynomialResult};
pub use polynomial::Polynomial;
pub use utils::pow;
