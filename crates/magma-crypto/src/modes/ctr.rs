//! CTR (gamma) mode of operation.
//!
//! The keystream is produced by encrypting a counter block seeded from the
//! stored 4-byte IV. Encryption and decryption are the same operation, so
//! a single [`ctr_crypt`] serves both directions.

use crate::magma::{Magma, MAGMA_BLOCK_SIZE, MAGMA_CTR_IV_SIZE};
use magma_types::CipherError;

/// Increment the counter block, read as a little-endian 64-bit integer,
/// by 1 with wraparound.
fn increment_counter(counter: &mut [u8; MAGMA_BLOCK_SIZE]) {
    let next = u64::from_le_bytes(*counter).wrapping_add(1);
    *counter = next.to_le_bytes();
}

/// Encrypt or decrypt data in place using CTR mode.
///
/// Requires a stored 4-byte IV. Any positive data length is accepted; the
/// final partial keystream block is truncated to the bytes that remain.
pub fn ctr_crypt(cipher: &Magma, data: &mut [u8]) -> Result<(), CipherError> {
    let iv = cipher.iv();
    if iv.is_empty() {
        return Err(CipherError::IvNotSet);
    }
    if iv.len() != MAGMA_CTR_IV_SIZE {
        return Err(CipherError::InvalidIvLength);
    }
    if data.is_empty() {
        return Err(CipherError::InvalidDataLength);
    }

    // Counter block: four zero bytes, then the IV in the high half.
    let mut counter = [0u8; MAGMA_BLOCK_SIZE];
    counter[MAGMA_CTR_IV_SIZE..].copy_from_slice(iv);

    for chunk in data.chunks_mut(MAGMA_BLOCK_SIZE) {
        let mut keystream = counter;
        cipher.encrypt_block(&mut keystream)?;
        for (d, &k) in chunk.iter_mut().zip(keystream.iter()) {
            *d ^= k;
        }
        increment_counter(&mut counter);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::magma::STANDARD_SBOX;

    fn hex_to_bytes(s: &str) -> Vec<u8> {
        (0..s.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
            .collect()
    }

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    fn ctr_cipher() -> Magma {
        let mut cipher = Magma::new();
        cipher.set_sbox(&STANDARD_SBOX).unwrap();
        cipher
            .set_key(&hex_to_bytes(
                "fffefdfcfbfaf9f8f7f6f5f4f3f2f1f000112233445566778899aabbccddeeff",
            ))
            .unwrap();
        cipher.set_iv(&hex_to_bytes("78563412"));
        cipher
    }

    // GOST R 34.13-2015 control example (little-endian byte convention).
    #[test]
    fn test_ctr_control_example() {
        let cipher = ctr_cipher();
        let pt = hex_to_bytes(
            "590a133c6bf0de92209d18f804c754db4c02a8672efb984a417eb5179b401289",
        );
        let expected = "3cb9b7970c11984e695de8d6930d253eefdbb20788866d132da152ab80b68e56";

        let mut data = pt.clone();
        ctr_crypt(&cipher, &mut data).unwrap();
        assert_eq!(hex(&data), expected);

        // Decrypt (same operation)
        ctr_crypt(&cipher, &mut data).unwrap();
        assert_eq!(data, pt);
    }

    #[test]
    fn test_ctr_partial_block() {
        let cipher = ctr_cipher();
        let pt = b"Hello";

        let mut data = pt.to_vec();
        ctr_crypt(&cipher, &mut data).unwrap();
        assert_ne!(data, pt.as_slice());
        ctr_crypt(&cipher, &mut data).unwrap();
        assert_eq!(data, pt);
    }

    #[test]
    fn test_ctr_unaligned_length_roundtrip() {
        let cipher = ctr_cipher();
        let pt: Vec<u8> = (0u8..13).collect();

        let mut data = pt.clone();
        ctr_crypt(&cipher, &mut data).unwrap();
        ctr_crypt(&cipher, &mut data).unwrap();
        assert_eq!(data, pt);
    }

    #[test]
    fn test_ctr_prefix_keystream_consistency() {
        // A shorter message must be encrypted with a prefix of the same
        // keystream.
        let cipher = ctr_cipher();
        let long: Vec<u8> = (0u8..24).collect();

        let mut full = long.clone();
        ctr_crypt(&cipher, &mut full).unwrap();

        let mut short = long[..10].to_vec();
        ctr_crypt(&cipher, &mut short).unwrap();
        assert_eq!(short, full[..10]);
    }

    #[test]
    fn test_ctr_empty_data_rejected() {
        let cipher = ctr_cipher();
        let mut data = vec![];
        assert!(matches!(
            ctr_crypt(&cipher, &mut data),
            Err(CipherError::InvalidDataLength)
        ));
    }

    #[test]
    fn test_ctr_missing_iv_rejected() {
        let mut cipher = ctr_cipher();
        cipher.set_iv(&[]);
        let mut data = vec![0u8; 16];
        assert!(matches!(
            ctr_crypt(&cipher, &mut data),
            Err(CipherError::IvNotSet)
        ));
    }

    #[test]
    fn test_ctr_invalid_iv_length_rejected() {
        let mut data = vec![0u8; 16];
        for len in [1usize, 3, 5, 8] {
            let mut cipher = ctr_cipher();
            cipher.set_iv(&vec![0u8; len]);
            assert!(matches!(
                ctr_crypt(&cipher, &mut data),
                Err(CipherError::InvalidIvLength)
            ));
        }
    }

    #[test]
    fn test_ctr_rejection_leaves_data_untouched() {
        let mut cipher = ctr_cipher();
        cipher.set_iv(&[0u8; 8]);
        let original: Vec<u8> = (0u8..16).collect();
        let mut data = original.clone();
        assert!(ctr_crypt(&cipher, &mut data).is_err());
        assert_eq!(data, original);
    }
}
