//! Key manager for the public half of JWT RSA signature keys.

use num_bigint::BigUint;

use crate::algorithm::{Algorithm, HashType};
use crate::errors::{Error, Result};
use crate::key::{KeyMaterialType, PublicKey, KEY_VERSION};
use crate::policy;
use crate::primitive::Verifier;

/// Manager for JWT RSA signature public keys.
///
/// Owns public-key validation, the algorithm → hash binding, and
/// construction of [`Verifier`] primitives. Stateless; all methods are safe
/// to call concurrently.
#[derive(Debug, Default, Clone, Copy)]
pub struct VerifyKeyManager;

impl VerifyKeyManager {
    /// Stable type identifier for the public-key kind this manager handles.
    pub const KEY_TYPE: &'static str = "jwt.rsa.signature.PublicKey";

    /// Creates a manager.
    pub const fn new() -> Self {
        VerifyKeyManager
    }

    /// Stable type identifier, for registry lookup.
    pub fn key_type(&self) -> &'static str {
        Self::KEY_TYPE
    }

    /// Key version this manager accepts.
    pub fn version(&self) -> u32 {
        KEY_VERSION
    }

    /// Registry flag: this manager handles asymmetric public key material.
    pub fn key_material_type(&self) -> KeyMaterialType {
        KeyMaterialType::AsymmetricPublic
    }

    /// Accepts exactly the supported RS*/PS* variants; everything else,
    /// [`Algorithm::Unknown`] included, is an argument error.
    pub fn validate_algorithm(&self, algorithm: Algorithm) -> Result<()> {
        algorithm.params().map(|_| ())
    }

    /// Returns the message digest bound to `algorithm`.
    ///
    /// Shares its mapping with the signing side (see [`Algorithm::params`]),
    /// so a key generated for signing verifies under the same algorithm tag.
    pub fn hash_for_algorithm(&self, algorithm: Algorithm) -> Result<HashType> {
        algorithm.hash()
    }

    /// Checks an existing public key: version, modulus size, public
    /// exponent, algorithm.
    ///
    /// Structural checks run before the algorithm check so the caller gets
    /// the most specific error for a given key.
    pub fn validate_key(&self, key: &PublicKey) -> Result<()> {
        if key.version() != KEY_VERSION {
            return Err(Error::VersionMismatch {
                version: key.version(),
            });
        }
        let n = BigUint::from_bytes_be(key.n());
        policy::validate_modulus_size(n.bits())?;
        let e = BigUint::from_bytes_be(key.e());
        policy::validate_public_exponent(&e)?;
        self.validate_algorithm(key.algorithm())
    }

    /// Builds a [`Verifier`] bound to `key` and the parameters its algorithm
    /// implies: the digest from [`hash_for_algorithm`], and for PSS variants
    /// the matching MGF1 hash and a salt length equal to the digest length.
    ///
    /// [`hash_for_algorithm`]: VerifyKeyManager::hash_for_algorithm
    pub fn verifier(&self, key: &PublicKey) -> Result<Verifier> {
        Verifier::new(key)
    }
}
