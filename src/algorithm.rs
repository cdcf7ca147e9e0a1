//! JWT RSA signature algorithm identifiers and their digest bindings.

use core::fmt;

use crate::errors::{Error, Result};

/// JWT signature algorithm for RSA keys, as named by [RFC 7518 § 3.1].
///
/// `RS*` variants use RSASSA-PKCS1-v1_5 padding, `PS*` variants use
/// RSASSA-PSS. [`Unknown`] is the sentinel carried by keys whose serialized
/// algorithm tag was out of range; it never validates.
///
/// [RFC 7518 § 3.1]: https://datatracker.ietf.org/doc/html/rfc7518#section-3.1
/// [`Unknown`]: Algorithm::Unknown
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Algorithm {
    /// Unrecognized algorithm. Always fails validation.
    #[default]
    Unknown,
    /// RSASSA-PKCS1-v1_5 with SHA-256.
    Rs256,
    /// RSASSA-PKCS1-v1_5 with SHA-384.
    Rs384,
    /// RSASSA-PKCS1-v1_5 with SHA-512.
    Rs512,
    /// RSASSA-PSS with SHA-256.
    Ps256,
    /// RSASSA-PSS with SHA-384.
    Ps384,
    /// RSASSA-PSS with SHA-512.
    Ps512,
}

/// Message digest bound to an [`Algorithm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HashType {
    /// SHA-256
    Sha256,
    /// SHA-384
    Sha384,
    /// SHA-512
    Sha512,
}

impl HashType {
    /// Returns the length in bytes of a digest.
    pub fn digest_len(self) -> usize {
        match self {
            HashType::Sha256 => 32,
            HashType::Sha384 => 48,
            HashType::Sha512 => 64,
        }
    }
}

/// Signature parameters an [`Algorithm`] variant fixes.
///
/// `mgf1_hash` and `salt_len` are populated exactly for the PSS variants;
/// there the MGF1 hash equals the message digest and the salt length equals
/// the digest output length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureParams {
    /// Message digest.
    pub hash: HashType,
    /// MGF1 mask hash (PSS only).
    pub mgf1_hash: Option<HashType>,
    /// Salt length in bytes (PSS only).
    pub salt_len: Option<usize>,
}

impl SignatureParams {
    const fn pkcs1(hash: HashType) -> Self {
        SignatureParams {
            hash,
            mgf1_hash: None,
            salt_len: None,
        }
    }

    const fn pss(hash: HashType, salt_len: usize) -> Self {
        SignatureParams {
            hash,
            mgf1_hash: Some(hash),
            salt_len: Some(salt_len),
        }
    }
}

impl Algorithm {
    /// Returns the signature parameters bound to this algorithm.
    ///
    /// This mapping is the single source of truth for the algorithm → digest
    /// binding; signing and verification both resolve through it, so a key
    /// generated for signing verifies under the same algorithm tag.
    pub fn params(self) -> Result<SignatureParams> {
        match self {
            Algorithm::Rs256 => Ok(SignatureParams::pkcs1(HashType::Sha256)),
            Algorithm::Rs384 => Ok(SignatureParams::pkcs1(HashType::Sha384)),
            Algorithm::Rs512 => Ok(SignatureParams::pkcs1(HashType::Sha512)),
            Algorithm::Ps256 => Ok(SignatureParams::pss(HashType::Sha256, 32)),
            Algorithm::Ps384 => Ok(SignatureParams::pss(HashType::Sha384, 48)),
            Algorithm::Ps512 => Ok(SignatureParams::pss(HashType::Sha512, 64)),
            Algorithm::Unknown => Err(Error::UnsupportedAlgorithm),
        }
    }

    /// Returns the message digest bound to this algorithm.
    pub fn hash(self) -> Result<HashType> {
        Ok(self.params()?.hash)
    }

    /// Whether this algorithm uses RSASSA-PSS padding.
    pub fn is_pss(self) -> bool {
        matches!(self, Algorithm::Ps256 | Algorithm::Ps384 | Algorithm::Ps512)
    }

    /// RFC 7518 name of the algorithm, e.g. `"RS256"`.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Unknown => "UNKNOWN",
            Algorithm::Rs256 => "RS256",
            Algorithm::Rs384 => "RS384",
            Algorithm::Rs512 => "RS512",
            Algorithm::Ps256 => "PS256",
            Algorithm::Ps384 => "PS384",
            Algorithm::Ps512 => "PS512",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
