//! ECB (Electronic Codebook) mode of operation.
//!
//! **Security warning**: ECB mode does not provide semantic security.
//! Identical plaintext blocks under the same key produce identical
//! ciphertext blocks. It is provided for conformance and specific
//! low-level use cases only.

use crate::magma::{Magma, MAGMA_BLOCK_SIZE};
use magma_types::CipherError;

/// Encrypt data using ECB mode.
/// Input must be a positive multiple of 8 bytes (no padding).
pub fn ecb_encrypt(cipher: &Magma, plaintext: &[u8]) -> Result<Vec<u8>, CipherError> {
    if plaintext.is_empty() || plaintext.len() % MAGMA_BLOCK_SIZE != 0 {
        return Err(CipherError::InvalidDataLength);
    }
    let mut output = plaintext.to_vec();
    for chunk in output.chunks_mut(MAGMA_BLOCK_SIZE) {
        cipher.encrypt_block(chunk)?;
    }
    Ok(output)
}

/// Decrypt data using ECB mode.
/// Input must be a positive multiple of 8 bytes.
pub fn ecb_decrypt(cipher: &Magma, ciphertext: &[u8]) -> Result<Vec<u8>, CipherError> {
    if ciphertext.is_empty() || ciphertext.len() % MAGMA_BLOCK_SIZE != 0 {
        return Err(CipherError::InvalidDataLength);
    }
    let mut output = ciphertext.to_vec();
    for chunk in output.chunks_mut(MAGMA_BLOCK_SIZE) {
        cipher.decrypt_block(chunk)?;
    }
    Ok(output)
}
