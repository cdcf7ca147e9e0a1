//! Protocol constraints on RSA moduli and public exponents.
//!
//! These are the policy constants the key managers enforce before any key is
//! generated or accepted into use. They are deliberately plain constants
//! rather than runtime configuration.

use num_bigint::BigUint;
use num_integer::Integer;

use crate::errors::{Error, Result};

/// Smallest modulus size in bits accepted for generation and validation.
pub const MIN_MODULUS_BITS: usize = 2048;

/// Smallest accepted public exponent. Exponents must also be odd.
pub const MIN_PUBLIC_EXPONENT: u64 = 65537;

/// Largest accepted public exponent bit length.
///
/// The RSA engine refuses exponents wider than this; checking up front turns
/// what would be an engine failure into an argument error.
pub const MAX_PUBLIC_EXPONENT_BITS: usize = 33;

/// Checks that a modulus bit length meets [`MIN_MODULUS_BITS`].
pub fn validate_modulus_size(bits: usize) -> Result<()> {
    if bits < MIN_MODULUS_BITS {
        return Err(Error::ModulusTooSmall { bits });
    }
    Ok(())
}

/// Checks that `e` is a valid RSA public exponent: odd, at least
/// [`MIN_PUBLIC_EXPONENT`], and at most [`MAX_PUBLIC_EXPONENT_BITS`] wide.
pub fn validate_public_exponent(e: &BigUint) -> Result<()> {
    if e.is_even() {
        return Err(Error::PublicExponentEven);
    }
    if *e < BigUint::from(MIN_PUBLIC_EXPONENT) {
        return Err(Error::PublicExponentTooSmall);
    }
    if e.bits() > MAX_PUBLIC_EXPONENT_BITS {
        return Err(Error::PublicExponentTooLarge);
    }
    Ok(())
}
