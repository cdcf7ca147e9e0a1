//! Tests for [`VerifyKeyManager`]: algorithm/hash binding, public-key
//! validation, and verification behavior.

use jwt_rsa_keys::{
    Algorithm, Error, HashType, KeyFormat, KeyMaterialType, PublicKey, SignKeyManager,
    VerifyKeyManager, KEY_VERSION,
};
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

const SUPPORTED: [Algorithm; 6] = [
    Algorithm::Rs256,
    Algorithm::Rs384,
    Algorithm::Rs512,
    Algorithm::Ps256,
    Algorithm::Ps384,
    Algorithm::Ps512,
];

fn test_rng() -> ChaCha8Rng {
    ChaCha8Rng::from_seed([13; 32])
}

fn generated_public_key(algorithm: Algorithm) -> PublicKey {
    let mut rng = test_rng();
    let format = KeyFormat::new_f4(algorithm, 2048);
    let private_key = SignKeyManager::new()
        .create_key(&mut rng, &format)
        .unwrap();
    private_key.public_key().clone()
}

#[test]
fn basic() {
    let manager = VerifyKeyManager::new();
    assert_eq!(manager.version(), 0);
    assert_eq!(
        manager.key_material_type(),
        KeyMaterialType::AsymmetricPublic
    );
    assert_eq!(manager.key_type(), "jwt.rsa.signature.PublicKey");
}

#[test]
fn validate_algorithm_accepts_supported_set() {
    let manager = VerifyKeyManager::new();
    for algorithm in SUPPORTED {
        assert!(manager.validate_algorithm(algorithm).is_ok());
    }
}

#[test]
fn validate_algorithm_rejects_unknown() {
    assert!(matches!(
        VerifyKeyManager::new().validate_algorithm(Algorithm::Unknown),
        Err(Error::UnsupportedAlgorithm)
    ));
}

#[test]
fn hash_for_algorithm_binding() {
    let manager = VerifyKeyManager::new();
    assert_eq!(
        manager.hash_for_algorithm(Algorithm::Rs256).unwrap(),
        HashType::Sha256
    );
    assert_eq!(
        manager.hash_for_algorithm(Algorithm::Rs384).unwrap(),
        HashType::Sha384
    );
    assert_eq!(
        manager.hash_for_algorithm(Algorithm::Rs512).unwrap(),
        HashType::Sha512
    );
    assert_eq!(
        manager.hash_for_algorithm(Algorithm::Ps256).unwrap(),
        HashType::Sha256
    );
    assert_eq!(
        manager.hash_for_algorithm(Algorithm::Ps384).unwrap(),
        HashType::Sha384
    );
    assert_eq!(
        manager.hash_for_algorithm(Algorithm::Ps512).unwrap(),
        HashType::Sha512
    );
    assert!(manager.hash_for_algorithm(Algorithm::Unknown).is_err());
}

#[test]
fn validate_generated_key() {
    let public_key = generated_public_key(Algorithm::Rs256);
    assert!(VerifyKeyManager::new().validate_key(&public_key).is_ok());
}

#[test]
fn validate_key_rejects_other_version() {
    let public_key = generated_public_key(Algorithm::Rs256);
    let bumped = PublicKey::new(
        7,
        public_key.algorithm(),
        public_key.n().to_vec(),
        public_key.e().to_vec(),
    );
    assert!(matches!(
        VerifyKeyManager::new().validate_key(&bumped),
        Err(Error::VersionMismatch { version: 7 })
    ));
}

#[test]
fn validate_key_rejects_small_modulus() {
    // 512-bit modulus.
    let key = PublicKey::new(
        KEY_VERSION,
        Algorithm::Rs256,
        vec![0xff; 64],
        vec![0x01, 0x00, 0x01],
    );
    assert!(matches!(
        VerifyKeyManager::new().validate_key(&key),
        Err(Error::ModulusTooSmall { bits: 512 })
    ));
}

#[test]
fn validate_key_rejects_bad_exponent() {
    let public_key = generated_public_key(Algorithm::Rs256);
    let manager = VerifyKeyManager::new();

    let small = PublicKey::new(
        KEY_VERSION,
        public_key.algorithm(),
        public_key.n().to_vec(),
        vec![0x03],
    );
    assert!(matches!(
        manager.validate_key(&small),
        Err(Error::PublicExponentTooSmall)
    ));

    let even = PublicKey::new(
        KEY_VERSION,
        public_key.algorithm(),
        public_key.n().to_vec(),
        vec![0x01, 0x00, 0x00],
    );
    assert!(matches!(
        manager.validate_key(&even),
        Err(Error::PublicExponentEven)
    ));
}

#[test]
fn validate_key_rejects_unknown_algorithm() {
    let public_key = generated_public_key(Algorithm::Rs256);
    let retagged = PublicKey::new(
        KEY_VERSION,
        Algorithm::Unknown,
        public_key.n().to_vec(),
        public_key.e().to_vec(),
    );
    assert!(matches!(
        VerifyKeyManager::new().validate_key(&retagged),
        Err(Error::UnsupportedAlgorithm)
    ));
}

#[test]
fn verifier_rejects_unknown_algorithm() {
    let public_key = generated_public_key(Algorithm::Rs256);
    let retagged = PublicKey::new(
        KEY_VERSION,
        Algorithm::Unknown,
        public_key.n().to_vec(),
        public_key.e().to_vec(),
    );
    assert!(VerifyKeyManager::new().verifier(&retagged).is_err());
}

#[test]
fn verifier_rejects_tampered_input() {
    let mut rng = test_rng();
    let sign_manager = SignKeyManager::new();
    let format = KeyFormat::new_f4(Algorithm::Ps256, 2048);
    let private_key = sign_manager.create_key(&mut rng, &format).unwrap();

    let signer = sign_manager.signer(&private_key).unwrap();
    let signature = signer.sign(&mut rng, b"Some message").unwrap();
    let verifier = VerifyKeyManager::new()
        .verifier(private_key.public_key())
        .unwrap();

    assert!(verifier.verify(b"Some message", &signature).is_ok());

    // Tampered message.
    assert!(matches!(
        verifier.verify(b"Some Message", &signature),
        Err(Error::Verification)
    ));

    // Tampered signature.
    let mut flipped = signature.clone();
    flipped[0] ^= 0x01;
    assert!(matches!(
        verifier.verify(b"Some message", &flipped),
        Err(Error::Verification)
    ));

    // Truncated signature.
    assert!(matches!(
        verifier.verify(b"Some message", &signature[1..]),
        Err(Error::Verification)
    ));
}

#[test]
fn verifier_reports_bound_algorithm() {
    let public_key = generated_public_key(Algorithm::Ps384);
    let verifier = VerifyKeyManager::new().verifier(&public_key).unwrap();
    assert_eq!(verifier.algorithm(), Algorithm::Ps384);
}
