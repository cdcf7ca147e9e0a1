//! Key manager for the private half of JWT RSA signature keys.

use num_bigint::BigUint;
use num_traits::One;
use rand_core::CryptoRngCore;
use rsa::traits::{PrivateKeyParts, PublicKeyParts};

use crate::engine;
use crate::errors::{Error, Result};
use crate::key::{KeyFormat, KeyMaterialType, PrivateKey, PublicKey, KEY_VERSION};
use crate::policy;
use crate::primitive::Signer;
use crate::verify::VerifyKeyManager;

/// Manager for JWT RSA signature private keys.
///
/// Owns the private-key side of the key lifecycle: format validation, key
/// generation, key validation, public-key derivation, and construction of
/// [`Signer`] primitives. The manager itself is stateless; all methods are
/// safe to call concurrently.
#[derive(Debug, Default, Clone, Copy)]
pub struct SignKeyManager;

impl SignKeyManager {
    /// Stable type identifier for the private-key kind this manager handles.
    pub const KEY_TYPE: &'static str = "jwt.rsa.signature.PrivateKey";

    /// Creates a manager.
    pub const fn new() -> Self {
        SignKeyManager
    }

    /// Stable type identifier, for registry lookup.
    pub fn key_type(&self) -> &'static str {
        Self::KEY_TYPE
    }

    /// Key version this manager produces and accepts.
    pub fn version(&self) -> u32 {
        KEY_VERSION
    }

    /// Registry flag: this manager handles asymmetric private key material.
    pub fn key_material_type(&self) -> KeyMaterialType {
        KeyMaterialType::AsymmetricPrivate
    }

    /// Checks a generation request against the key policy.
    ///
    /// Fails if the algorithm is unknown, the modulus size is below
    /// [`policy::MIN_MODULUS_BITS`], or the public exponent is not a valid
    /// RSA public exponent.
    pub fn validate_key_format(&self, format: &KeyFormat) -> Result<()> {
        format.algorithm().params()?;
        policy::validate_modulus_size(format.modulus_size_in_bits())?;
        let e = BigUint::from_bytes_be(format.public_exponent());
        policy::validate_public_exponent(&e)
    }

    /// Generates a fresh private key for the given format.
    ///
    /// The format is revalidated first. Generation blocks while the engine
    /// searches for primes, with cost growing in the modulus size; the
    /// caller-supplied secure random source guarantees independent key
    /// material on every call.
    pub fn create_key<R: CryptoRngCore>(
        &self,
        rng: &mut R,
        format: &KeyFormat,
    ) -> Result<PrivateKey> {
        self.validate_key_format(format)?;

        let e = BigUint::from_bytes_be(format.public_exponent());
        let engine_key = engine::generate_key_pair(rng, format.modulus_size_in_bits(), &e)?;

        let primes = engine_key.primes();
        let p = &primes[0];
        let q = &primes[1];
        let d = engine_key.d();
        let one = BigUint::one();
        let dp = d % (p - &one);
        let dq = d % (q - &one);

        let public_key = PublicKey::new(
            KEY_VERSION,
            format.algorithm(),
            engine_key.n().to_bytes_be(),
            // The stored exponent keeps the caller's encoding, byte for byte.
            format.public_exponent().to_vec(),
        );
        Ok(PrivateKey::new(
            KEY_VERSION,
            public_key,
            d.to_bytes_be(),
            p.to_bytes_be(),
            q.to_bytes_be(),
            dp.to_bytes_be(),
            dq.to_bytes_be(),
        ))
    }

    /// Checks an existing private key: version, then the embedded public key
    /// under the verify-side rules.
    pub fn validate_key(&self, key: &PrivateKey) -> Result<()> {
        if key.version() != KEY_VERSION {
            return Err(Error::VersionMismatch {
                version: key.version(),
            });
        }
        VerifyKeyManager::new().validate_key(key.public_key())
    }

    /// Returns the public key embedded in `key`, unchanged.
    pub fn public_key(&self, key: &PrivateKey) -> Result<PublicKey> {
        Ok(key.public_key().clone())
    }

    /// Builds a [`Signer`] bound to `key` and the parameters its algorithm
    /// implies. Fails if the key material is structurally invalid for the
    /// engine or the algorithm is [`Algorithm::Unknown`](crate::Algorithm::Unknown).
    pub fn signer(&self, key: &PrivateKey) -> Result<Signer> {
        Signer::new(key)
    }
}
