// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Scalar helpers shared by the polynomial operations.

use crate::errors::{PolynomialError, PolynomialResult};
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Raises `base` to a non-negative integer power by repeated squaring.
///
/// The bits of `exponent` are visited from least to most significant. The base is
/// squared on every step and folded into the accumulator whenever the current bit
/// is set.
///
/// # Arguments
///
/// * `base` - The value to exponentiate.
/// * `exponent` - The power, which must be zero or positive.
///
/// # Errors
///
/// Returns `PolynomialError::NegativeExponent` if `exponent` is negative.
pub fn pow(base: &BigInt, exponent: &BigInt) -> PolynomialResult<BigInt> {
    if exponent.sign() == Sign::Minus {
        return Err(PolynomialError::NegativeExponent {
            exponent: exponent.clone(),
        });
    }
    Ok(pow_unsigned(base, exponent.magnitude()))
}

/// Unchecked variant of [`pow`] for exponents that cannot be negative.
pub(crate) fn pow_unsigned(base: &BigInt, exponent: &BigUint) -> BigInt {
    let mut result = BigInt::one();
    let mut square = base.clone();
    let mut bits = exponent.clone();

    while !bits.is_zero() {
        if bits.is_odd() {
            result *= &square;
        }
        bits >>= 1u32;
        if !bits.is_zero() {
            square = &square * &square;
        }
    }

    result
}

/// Reduces a number modulo a modulus using floored division.
///
/// The result carries the sign of the modulus: it lies in `[0, modulus)` for a
/// positive modulus and in `(modulus, 0]` for a negative one.
///
/// # Errors
///
/// Returns `PolynomialError::DivisionByZero` if `modulus` is zero.
pub fn reduce(x: &BigInt, modulus: &BigInt) -> PolynomialResult<BigInt> {
    if modulus.is_zero() {
        return Err(PolynomialError::DivisionByZero);
    }
    Ok(x.mod_floor(modulus))
}

/// Reduces a number modulo a positive modulus and centers it.
///
/// After reduction the number is moved into the symmetric range
/// `[-(modulus-1)/2, (modulus-1)/2]` for odd moduli and `[-modulus/2, modulus/2)`
/// for even ones.
///
/// # Errors
///
/// Returns `PolynomialError::InvalidModulus` if `modulus` is not positive.
pub fn reduce_and_center(x: &BigInt, modulus: &BigInt) -> PolynomialResult<BigInt> {
    if !modulus.is_positive() {
        return Err(PolynomialError::InvalidModulus {
            modulus: modulus.clone(),
        });
    }

    let half_modulus = modulus / 2;
    let mut r = x.mod_floor(modulus);

    if modulus.is_odd() {
        if r > half_modulus {
            r -= modulus;
        }
    } else if r >= half_modulus {
        r -= modulus;
    }

    Ok(r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    #[test]
    fn test_pow_small_exponents() {
        let base = BigInt::from(3);
        assert_eq!(pow(&base, &BigInt::from(0)).unwrap(), BigInt::from(1));
        assert_eq!(pow(&base, &BigInt::from(1)).unwrap(), BigInt::from(3));
        assert_eq!(pow(&base, &BigInt::from(5)).unwrap(), BigInt::from(243));
        assert_eq!(pow(&base, &BigInt::from(8)).unwrap(), BigInt::from(6561));
    }

    #[test]
    fn test_pow_negative_base() {
        let base = BigInt::from(-2);
        assert_eq!(pow(&base, &BigInt::from(3)).unwrap(), BigInt::from(-8));
        assert_eq!(pow(&base, &BigInt::from(10)).unwrap(), BigInt::from(1024));
    }

    #[test]
    fn test_pow_zero_base() {
        let zero = BigInt::from(0);
        assert_eq!(pow(&zero, &BigInt::from(0)).unwrap(), BigInt::from(1));
        assert_eq!(pow(&zero, &BigInt::from(7)).unwrap(), BigInt::from(0));
    }

    #[test]
    fn test_pow_matches_num_traits() {
        let base = BigInt::from(12345);
        for e in 0u32..40 {
            assert_eq!(
                pow(&base, &BigInt::from(e)).unwrap(),
                num_traits::pow(base.clone(), e as usize)
            );
        }
    }

    #[test]
    fn test_pow_rejects_negative_exponent() {
        let result = pow(&BigInt::from(2), &BigInt::from(-1));
        assert_eq!(
            result,
            Err(PolynomialError::NegativeExponent {
                exponent: BigInt::from(-1)
            })
        );
    }

    #[test]
    fn test_reduce_follows_modulus_sign() {
        let modulus = BigInt::from(7);
        assert_eq!(reduce(&BigInt::from(10), &modulus).unwrap(), BigInt::from(3));
        assert_eq!(reduce(&BigInt::from(-10), &modulus).unwrap(), BigInt::from(4));
        assert_eq!(reduce(&BigInt::from(-14), &modulus).unwrap(), BigInt::from(0));

        let negative = BigInt::from(-7);
        assert_eq!(
            reduce(&BigInt::from(10), &negative).unwrap(),
            BigInt::from(-4)
        );
        assert_eq!(
            reduce(&BigInt::from(-10), &negative).unwrap(),
            BigInt::from(-3)
        );
    }

    #[test]
    fn test_reduce_by_zero() {
        assert_eq!(
            reduce(&BigInt::from(5), &BigInt::from(0)),
            Err(PolynomialError::DivisionByZero)
        );
    }

    #[test]
    fn test_reduce_and_center() {
        let modulus = BigInt::from(7);

        // Test positive number
        assert_eq!(
            reduce_and_center(&BigInt::from(10), &modulus).unwrap(),
            BigInt::from(3)
        );

        // Test negative number
        assert_eq!(
            reduce_and_center(&BigInt::from(-3), &modulus).unwrap(),
            BigInt::from(-3)
        );

        // Test number greater than half modulus
        assert_eq!(
            reduce_and_center(&BigInt::from(6), &modulus).unwrap(),
            BigInt::from(-1)
        );
    }

    #[test]
    fn test_reduce_and_center_even_modulus() {
        let modulus = BigInt::from(8);
        assert_eq!(
            reduce_and_center(&BigInt::from(4), &modulus).unwrap(),
            BigInt::from(-4)
        );
        assert_eq!(
            reduce_and_center(&BigInt::from(3), &modulus).unwrap(),
            BigInt::from(3)
        );
    }

    #[test]
    fn test_reduce_and_center_rejects_non_positive_modulus() {
        assert!(matches!(
            reduce_and_center(&BigInt::from(3), &BigInt::from(0)),
            Err(PolynomialError::InvalidModulus { .. })
        ));
        assert!(matches!(
            reduce_and_center(&BigInt::from(3), &BigInt::from(-5)),
            Err(PolynomialError::InvalidModulus { .. })
        ));
    }
}
