//! Key material model: generation requests, public keys, private keys.
//!
//! All arbitrary-precision fields are big-endian byte strings; parsing and
//! arithmetic on them is the engine's business. Keys are plain immutable
//! values: they are built once (by [`SignKeyManager::create_key`] or by a
//! deserializer) and never mutated afterwards.
//!
//! [`SignKeyManager::create_key`]: crate::SignKeyManager::create_key

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::algorithm::Algorithm;

/// Key version produced and accepted by the managers in this crate.
pub const KEY_VERSION: u32 = 0;

/// Registry flag describing which half of an asymmetric key a manager handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMaterialType {
    /// Private key material.
    AsymmetricPrivate,
    /// Public key material.
    AsymmetricPublic,
}

/// Request for a new RSA signature key pair.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyFormat {
    algorithm: Algorithm,
    modulus_size_in_bits: usize,
    public_exponent: Vec<u8>,
}

impl KeyFormat {
    /// Creates a generation request. `public_exponent` is a big-endian byte
    /// string.
    pub fn new(
        algorithm: Algorithm,
        modulus_size_in_bits: usize,
        public_exponent: Vec<u8>,
    ) -> Self {
        KeyFormat {
            algorithm,
            modulus_size_in_bits,
            public_exponent,
        }
    }

    /// Creates a generation request with the F4 public exponent (65537).
    pub fn new_f4(algorithm: Algorithm, modulus_size_in_bits: usize) -> Self {
        Self::new(algorithm, modulus_size_in_bits, vec![0x01, 0x00, 0x01])
    }

    /// Requested signature algorithm.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Requested modulus size in bits.
    pub fn modulus_size_in_bits(&self) -> usize {
        self.modulus_size_in_bits
    }

    /// Requested public exponent as a big-endian byte string.
    pub fn public_exponent(&self) -> &[u8] {
        &self.public_exponent
    }
}

/// Public half of an RSA signature key.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PublicKey {
    version: u32,
    algorithm: Algorithm,
    n: Vec<u8>,
    e: Vec<u8>,
}

impl PublicKey {
    /// Assembles a public key from its raw parts. No validation happens here;
    /// pass the result to [`VerifyKeyManager::validate_key`] before use.
    ///
    /// [`VerifyKeyManager::validate_key`]: crate::VerifyKeyManager::validate_key
    pub fn new(version: u32, algorithm: Algorithm, n: Vec<u8>, e: Vec<u8>) -> Self {
        PublicKey {
            version,
            algorithm,
            n,
            e,
        }
    }

    /// Key version.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Signature algorithm this key is bound to.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Modulus as a big-endian byte string.
    pub fn n(&self) -> &[u8] {
        &self.n
    }

    /// Public exponent as a big-endian byte string.
    pub fn e(&self) -> &[u8] {
        &self.e
    }
}

/// RSA signature private key with full CRT representation.
///
/// Owns its embedded [`PublicKey`]. Secret scalars are zeroized when the key
/// is dropped, and the `Debug` impl shows only the public half.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrivateKey {
    version: u32,
    public_key: PublicKey,
    d: Vec<u8>,
    p: Vec<u8>,
    q: Vec<u8>,
    dp: Vec<u8>,
    dq: Vec<u8>,
}

impl PrivateKey {
    /// Assembles a private key from its raw parts. No validation happens
    /// here; pass the result to [`SignKeyManager::validate_key`] before use.
    ///
    /// [`SignKeyManager::validate_key`]: crate::SignKeyManager::validate_key
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        version: u32,
        public_key: PublicKey,
        d: Vec<u8>,
        p: Vec<u8>,
        q: Vec<u8>,
        dp: Vec<u8>,
        dq: Vec<u8>,
    ) -> Self {
        PrivateKey {
            version,
            public_key,
            d,
            p,
            q,
            dp,
            dq,
        }
    }

    /// Key version.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// The embedded public key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Private exponent `d` as a big-endian byte string.
    pub fn d(&self) -> &[u8] {
        &self.d
    }

    /// First prime factor `p`.
    pub fn p(&self) -> &[u8] {
        &self.p
    }

    /// Second prime factor `q`.
    pub fn q(&self) -> &[u8] {
        &self.q
    }

    /// CRT exponent `dp = d mod (p - 1)`.
    pub fn dp(&self) -> &[u8] {
        &self.dp
    }

    /// CRT exponent `dq = d mod (q - 1)`.
    pub fn dq(&self) -> &[u8] {
        &self.dq
    }
}

impl From<&PrivateKey> for PublicKey {
    fn from(private_key: &PrivateKey) -> Self {
        private_key.public_key.clone()
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.d.zeroize();
        self.p.zeroize();
        self.q.zeroize();
        self.dp.zeroize();
        self.dq.zeroize();
    }
}

impl ZeroizeOnDrop for PrivateKey {}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("version", &self.version)
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}
