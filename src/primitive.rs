//! Bound sign/verify primitives.
//!
//! A [`Signer`] or [`Verifier`] is a key joined with the digest and padding
//! parameters its algorithm tag implies. Construction goes through the
//! managers, which pick the engine primitive matching the algorithm family:
//! RSASSA-PKCS1-v1_5 for `RS*`, blinded RSASSA-PSS for `PS*`.

use core::fmt;

use rand_core::CryptoRngCore;
use rsa::{pkcs1v15, pss};
use sha2::{Sha256, Sha384, Sha512};
use signature::{RandomizedSigner, SignatureEncoding};

use crate::algorithm::Algorithm;
use crate::engine;
use crate::errors::{Error, Result};
use crate::key::{PrivateKey, PublicKey};

enum SignerInner {
    Rs256(pkcs1v15::SigningKey<Sha256>),
    Rs384(pkcs1v15::SigningKey<Sha384>),
    Rs512(pkcs1v15::SigningKey<Sha512>),
    Ps256(pss::BlindedSigningKey<Sha256>),
    Ps384(pss::BlindedSigningKey<Sha384>),
    Ps512(pss::BlindedSigningKey<Sha512>),
}

/// Signing primitive bound to one private key and one algorithm.
pub struct Signer {
    algorithm: Algorithm,
    inner: SignerInner,
}

impl Signer {
    pub(crate) fn new(key: &PrivateKey) -> Result<Self> {
        let algorithm = key.public_key().algorithm();
        // Unknown algorithms fail before any key material is parsed.
        algorithm.params()?;
        let engine_key = engine::rsa_private_key(key)?;
        let inner = match algorithm {
            Algorithm::Rs256 => SignerInner::Rs256(pkcs1v15::SigningKey::new(engine_key)),
            Algorithm::Rs384 => SignerInner::Rs384(pkcs1v15::SigningKey::new(engine_key)),
            Algorithm::Rs512 => SignerInner::Rs512(pkcs1v15::SigningKey::new(engine_key)),
            Algorithm::Ps256 => SignerInner::Ps256(pss::BlindedSigningKey::new(engine_key)),
            Algorithm::Ps384 => SignerInner::Ps384(pss::BlindedSigningKey::new(engine_key)),
            Algorithm::Ps512 => SignerInner::Ps512(pss::BlindedSigningKey::new(engine_key)),
            Algorithm::Unknown => return Err(Error::UnsupportedAlgorithm),
        };
        Ok(Signer { algorithm, inner })
    }

    /// Algorithm this signer is bound to.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Signs `msg`, returning the raw signature bytes.
    ///
    /// The random source feeds the PSS salt and the blinding of the private
    /// key operation; PKCS#1 v1.5 output stays deterministic regardless.
    pub fn sign<R: CryptoRngCore>(&self, rng: &mut R, msg: &[u8]) -> Result<Vec<u8>> {
        let signature = match &self.inner {
            SignerInner::Rs256(key) => key.try_sign_with_rng(rng, msg).map(|s| s.to_vec()),
            SignerInner::Rs384(key) => key.try_sign_with_rng(rng, msg).map(|s| s.to_vec()),
            SignerInner::Rs512(key) => key.try_sign_with_rng(rng, msg).map(|s| s.to_vec()),
            SignerInner::Ps256(key) => key.try_sign_with_rng(rng, msg).map(|s| s.to_vec()),
            SignerInner::Ps384(key) => key.try_sign_with_rng(rng, msg).map(|s| s.to_vec()),
            SignerInner::Ps512(key) => key.try_sign_with_rng(rng, msg).map(|s| s.to_vec()),
        };
        signature.map_err(Error::SigningFailed)
    }
}

impl fmt::Debug for Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signer")
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}

enum VerifierInner {
    Rs256(pkcs1v15::VerifyingKey<Sha256>),
    Rs384(pkcs1v15::VerifyingKey<Sha384>),
    Rs512(pkcs1v15::VerifyingKey<Sha512>),
    Ps256(pss::VerifyingKey<Sha256>),
    Ps384(pss::VerifyingKey<Sha384>),
    Ps512(pss::VerifyingKey<Sha512>),
}

/// Verification primitive bound to one public key and one algorithm.
pub struct Verifier {
    algorithm: Algorithm,
    inner: VerifierInner,
}

impl Verifier {
    pub(crate) fn new(key: &PublicKey) -> Result<Self> {
        let algorithm = key.algorithm();
        algorithm.params()?;
        let engine_key = engine::rsa_public_key(key)?;
        let inner = match algorithm {
            Algorithm::Rs256 => VerifierInner::Rs256(pkcs1v15::VerifyingKey::new(engine_key)),
            Algorithm::Rs384 => VerifierInner::Rs384(pkcs1v15::VerifyingKey::new(engine_key)),
            Algorithm::Rs512 => VerifierInner::Rs512(pkcs1v15::VerifyingKey::new(engine_key)),
            Algorithm::Ps256 => VerifierInner::Ps256(pss::VerifyingKey::new(engine_key)),
            Algorithm::Ps384 => VerifierInner::Ps384(pss::VerifyingKey::new(engine_key)),
            Algorithm::Ps512 => VerifierInner::Ps512(pss::VerifyingKey::new(engine_key)),
            Algorithm::Unknown => return Err(Error::UnsupportedAlgorithm),
        };
        Ok(Verifier { algorithm, inner })
    }

    /// Algorithm this verifier is bound to.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Verifies `signature` over `msg`.
    ///
    /// Returns [`Error::Verification`] for any rejection, malformed signature
    /// encodings included.
    pub fn verify(&self, msg: &[u8], signature: &[u8]) -> Result<()> {
        match &self.inner {
            VerifierInner::Rs256(key) => verify_pkcs1v15(key, msg, signature),
            VerifierInner::Rs384(key) => verify_pkcs1v15(key, msg, signature),
            VerifierInner::Rs512(key) => verify_pkcs1v15(key, msg, signature),
            VerifierInner::Ps256(key) => verify_pss(key, msg, signature),
            VerifierInner::Ps384(key) => verify_pss(key, msg, signature),
            VerifierInner::Ps512(key) => verify_pss(key, msg, signature),
        }
    }
}

impl fmt::Debug for Verifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Verifier")
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}

fn verify_pkcs1v15<V>(key: &V, msg: &[u8], signature: &[u8]) -> Result<()>
where
    V: signature::Verifier<pkcs1v15::Signature>,
{
    let signature = pkcs1v15::Signature::try_from(signature).map_err(|_| Error::Verification)?;
    key.verify(msg, &signature).map_err(|_| Error::Verification)
}

fn verify_pss<V>(key: &V, msg: &[u8], signature: &[u8]) -> Result<()>
where
    V: signature::Verifier<pss::Signature>,
{
    let signature = pss::Signature::try_from(signature).map_err(|_| Error::Verification)?;
    key.verify(msg, &signature).map_err(|_| Error::Verification)
}
