//! Error types.

use core::fmt;

use crate::policy::{MAX_PUBLIC_EXPONENT_BITS, MIN_MODULUS_BITS, MIN_PUBLIC_EXPONENT};
use crate::KEY_VERSION;

/// Alias for [`core::result::Result`] with the `jwt-rsa-keys` [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Error types.
///
/// The first group of variants ([`UnsupportedAlgorithm`] through
/// [`VersionMismatch`]) reports malformed or policy-violating input: these are
/// caller errors and retrying with the same input will fail again.
/// [`Engine`] and [`SigningFailed`] surface failures of the underlying RSA
/// engine, e.g. key material it cannot assemble into a working key.
///
/// [`UnsupportedAlgorithm`]: Error::UnsupportedAlgorithm
/// [`VersionMismatch`]: Error::VersionMismatch
/// [`Engine`]: Error::Engine
/// [`SigningFailed`]: Error::SigningFailed
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// Algorithm is not one of the supported RS*/PS* variants.
    UnsupportedAlgorithm,

    /// Modulus size is below the supported minimum.
    ModulusTooSmall {
        /// Bit length of the offending modulus (or requested modulus size).
        bits: usize,
    },

    /// Public exponent is below the supported minimum.
    PublicExponentTooSmall,

    /// Public exponent is even.
    PublicExponentEven,

    /// Public exponent exceeds the supported maximum.
    PublicExponentTooLarge,

    /// Key version differs from the version this crate supports.
    VersionMismatch {
        /// Version carried by the rejected key.
        version: u32,
    },

    /// The RSA engine rejected the operation or the key material.
    Engine(rsa::Error),

    /// The RSA engine failed to produce a signature.
    SigningFailed(signature::Error),

    /// Signature verification failed.
    Verification,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedAlgorithm => write!(f, "unsupported JWT RSA signature algorithm"),
            Error::ModulusTooSmall { bits } => write!(
                f,
                "modulus size is {} bits, want at least {} bits",
                bits, MIN_MODULUS_BITS
            ),
            Error::PublicExponentTooSmall => write!(
                f,
                "public exponent must be greater than {}",
                MIN_PUBLIC_EXPONENT - 1
            ),
            Error::PublicExponentEven => write!(f, "public exponent must be odd"),
            Error::PublicExponentTooLarge => write!(
                f,
                "public exponent must fit in {} bits",
                MAX_PUBLIC_EXPONENT_BITS
            ),
            Error::VersionMismatch { version } => write!(
                f,
                "key has version {}, want version {}",
                version, KEY_VERSION
            ),
            Error::Engine(err) => write!(f, "RSA engine error: {}", err),
            Error::SigningFailed(err) => write!(f, "signing failed: {}", err),
            Error::Verification => write!(f, "verification error"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Engine(err) => Some(err),
            Error::SigningFailed(err) => Some(err),
            _ => None,
        }
    }
}

impl From<rsa::Error> for Error {
    fn from(err: rsa::Error) -> Self {
        Error::Engine(err)
    }
}
