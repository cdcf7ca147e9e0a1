//! Boundary to the external RSA engine (the [`rsa`] crate).
//!
//! Everything that touches modular arithmetic, prime search, or padding goes
//! through here; the managers only ever see byte strings and [`BigUint`]s.

use num_bigint::BigUint;
use rand_core::CryptoRngCore;
use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::errors::{Error, Result};
use crate::key::{PrivateKey, PublicKey};

/// Generates a fresh RSA key pair of the given modulus size and public
/// exponent. Blocks while the engine searches for primes.
pub(crate) fn generate_key_pair<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    modulus_size_in_bits: usize,
    public_exponent: &BigUint,
) -> Result<RsaPrivateKey> {
    RsaPrivateKey::new_with_exp(rng, modulus_size_in_bits, public_exponent).map_err(Error::Engine)
}

/// Rebuilds an engine private key from stored key material.
///
/// The engine validates the components (primes multiply to the modulus, the
/// exponents are consistent), so structurally broken material fails here.
pub(crate) fn rsa_private_key(key: &PrivateKey) -> Result<RsaPrivateKey> {
    let n = BigUint::from_bytes_be(key.public_key().n());
    let e = BigUint::from_bytes_be(key.public_key().e());
    let d = BigUint::from_bytes_be(key.d());
    let p = BigUint::from_bytes_be(key.p());
    let q = BigUint::from_bytes_be(key.q());
    RsaPrivateKey::from_components(n, e, d, vec![p, q]).map_err(Error::Engine)
}

/// Rebuilds an engine public key from stored key material.
pub(crate) fn rsa_public_key(key: &PublicKey) -> Result<RsaPublicKey> {
    let n = BigUint::from_bytes_be(key.n());
    let e = BigUint::from_bytes_be(key.e());
    RsaPublicKey::new(n, e).map_err(Error::Engine)
}
