//! Property-based tests for the key-format policy.

use jwt_rsa_keys::{Algorithm, KeyFormat, SignKeyManager};
use proptest::prelude::*;

fn format(modulus_size_in_bits: usize, public_exponent: u64) -> KeyFormat {
    KeyFormat::new(
        Algorithm::Rs256,
        modulus_size_in_bits,
        public_exponent.to_be_bytes().to_vec(),
    )
}

proptest! {
    #[test]
    fn valid_formats_accepted(
        bits in 2048usize..=8192,
        e in (65536u64..(1 << 33)).prop_map(|e| e | 1),
    ) {
        prop_assert!(SignKeyManager::new().validate_key_format(&format(bits, e)).is_ok());
    }

    #[test]
    fn small_moduli_rejected(bits in 0usize..2048) {
        prop_assert!(SignKeyManager::new().validate_key_format(&format(bits, 65537)).is_err());
    }

    #[test]
    fn even_exponents_rejected(e in (0u64..(1 << 33)).prop_map(|e| e & !1)) {
        prop_assert!(SignKeyManager::new().validate_key_format(&format(2048, e)).is_err());
    }

    #[test]
    fn small_exponents_rejected(e in 0u64..=65536) {
        prop_assert!(SignKeyManager::new().validate_key_format(&format(2048, e)).is_err());
    }

    #[test]
    fn unknown_algorithm_rejected_at_any_size(bits in 0usize..=8192) {
        let format = KeyFormat::new_f4(Algorithm::Unknown, bits);
        prop_assert!(SignKeyManager::new().validate_key_format(&format).is_err());
    }
}
