//! Known-answer self-tests.
//!
//! Each test runs one mode of operation over the control examples of
//! GOST R 34.13-2015 (a documented key, IV, and plaintext/ciphertext pair,
//! little-endian byte convention) and verifies the output byte-for-byte in
//! both directions.

use magma_types::SelfTestError;

use crate::magma::{Magma, STANDARD_SBOX};
use crate::modes::ctr::ctr_crypt;
use crate::modes::ecb::{ecb_decrypt, ecb_encrypt};

fn hex(s: &str) -> Vec<u8> {
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
        .collect()
}

const KAT_KEY: &str = "fffefdfcfbfaf9f8f7f6f5f4f3f2f1f000112233445566778899aabbccddeeff";
const KAT_IV: &str = "78563412";
const KAT_PLAINTEXT: &str = "590a133c6bf0de92209d18f804c754db4c02a8672efb984a417eb5179b401289";
const KAT_ECB_CIPHERTEXT: &str =
    "a072f394043f072b486e55d315e770de1ebccfeae9d9d811fb7ec6960926687c";
const KAT_CTR_CIPHERTEXT: &str =
    "3cb9b7970c11984e695de8d6930d253eefdbb20788866d132da152ab80b68e56";

fn kat_cipher() -> Result<Magma, SelfTestError> {
    let mut cipher = Magma::new();
    cipher
        .set_sbox(&STANDARD_SBOX)
        .map_err(|e| SelfTestError::KatFailure(format!("set_sbox: {e}")))?;
    cipher
        .set_key(&hex(KAT_KEY))
        .map_err(|e| SelfTestError::KatFailure(format!("set_key: {e}")))?;
    Ok(cipher)
}

/// Run all known-answer self-tests. Returns on first failure.
pub fn run_all() -> Result<(), SelfTestError> {
    kat_ecb()?;
    kat_ctr()?;
    Ok(())
}

/// ECB known-answer test.
pub fn kat_ecb() -> Result<(), SelfTestError> {
    let cipher = kat_cipher()?;
    let plaintext = hex(KAT_PLAINTEXT);
    let expected = hex(KAT_ECB_CIPHERTEXT);

    let ciphertext = ecb_encrypt(&cipher, &plaintext)
        .map_err(|e| SelfTestError::KatFailure(format!("ECB encrypt: {e}")))?;
    if ciphertext != expected {
        return Err(SelfTestError::KatFailure("ECB ciphertext mismatch".into()));
    }

    let decrypted = ecb_decrypt(&cipher, &ciphertext)
        .map_err(|e| SelfTestError::KatFailure(format!("ECB decrypt: {e}")))?;
    if decrypted != plaintext {
        return Err(SelfTestError::KatFailure("ECB plaintext mismatch".into()));
    }
    Ok(())
}

/// CTR known-answer test.
pub fn kat_ctr() -> Result<(), SelfTestError> {
    let mut cipher = kat_cipher()?;
    cipher.set_iv(&hex(KAT_IV));
    cipher
        .set_gamma_period(8)
        .map_err(|e| SelfTestError::KatFailure(format!("set_gamma_period: {e}")))?;

    let plaintext = hex(KAT_PLAINTEXT);
    let expected = hex(KAT_CTR_CIPHERTEXT);

    let mut data = plaintext.clone();
    ctr_crypt(&cipher, &mut data)
        .map_err(|e| SelfTestError::KatFailure(format!("CTR encrypt: {e}")))?;
    if data != expected {
        return Err(SelfTestError::KatFailure("CTR ciphertext mismatch".into()));
    }

    ctr_crypt(&cipher, &mut data)
        .map_err(|e| SelfTestError::KatFailure(format!("CTR decrypt: {e}")))?;
    if data != plaintext {
        return Err(SelfTestError::KatFailure("CTR plaintext mismatch".into()));
    }
    Ok(())
}
