#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Design
//!
//! Two stateless managers split the key lifecycle the way the JWT algorithms
//! split it:
//!
//! - [`SignKeyManager`] validates [`KeyFormat`] requests, generates
//!   [`PrivateKey`]s with full CRT representation, derives the embedded
//!   [`PublicKey`], and builds [`Signer`] primitives.
//! - [`VerifyKeyManager`] validates [`PublicKey`]s, owns the algorithm →
//!   digest binding, and builds [`Verifier`] primitives.
//!
//! All big-number arithmetic, prime search, and padding is delegated to the
//! [`rsa`] crate; key material crosses the boundary as big-endian byte
//! strings. Randomness is injected per call as a
//! [`rand_core::CryptoRngCore`], so the managers hold no RNG state and
//! concurrent generations are independent.
//!
//! The modulus-size and public-exponent policy lives in [`policy`] as named
//! constants.

pub use num_bigint::BigUint;
pub use rand_core;
pub use signature;

pub mod errors;
pub mod policy;

mod algorithm;
mod engine;
mod key;
mod primitive;
mod sign;
mod verify;

pub use crate::{
    algorithm::{Algorithm, HashType, SignatureParams},
    errors::{Error, Result},
    key::{KeyFormat, KeyMaterialType, PrivateKey, PublicKey, KEY_VERSION},
    primitive::{Signer, Verifier},
    sign::SignKeyManager,
    verify::VerifyKeyManager,
};
