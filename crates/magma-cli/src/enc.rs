//! Symmetric file encryption/decryption command.
//!
//! Supported modes: magma-ecb, magma-ctr

use std::fs;

use magma_crypto::magma::{Magma, MAGMA_CTR_IV_SIZE, MAGMA_KEY_SIZE, STANDARD_SBOX};
use magma_crypto::modes::{ctr, ecb};

pub fn run(
    mode: &str,
    decrypt: bool,
    key_hex: &str,
    iv_hex: Option<&str>,
    input: &str,
    output: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let op = if decrypt { "Decrypting" } else { "Encrypting" };
    eprintln!("{op} {input} -> {output} with {mode}");

    let key = parse_hex(key_hex)?;
    if key.len() != MAGMA_KEY_SIZE {
        return Err(format!("key must be {MAGMA_KEY_SIZE} bytes, got {}", key.len()).into());
    }

    let mut cipher = Magma::new();
    cipher.set_sbox(&STANDARD_SBOX)?;
    cipher.set_key(&key)?;

    let data = fs::read(input)?;

    let result = match mode.to_lowercase().as_str() {
        "magma-ecb" => {
            if decrypt {
                ecb::ecb_decrypt(&cipher, &data)?
            } else {
                ecb::ecb_encrypt(&cipher, &data)?
            }
        }
        "magma-ctr" => {
            let iv_hex = iv_hex.ok_or("magma-ctr requires --iv")?;
            let iv = parse_hex(iv_hex)?;
            if iv.len() != MAGMA_CTR_IV_SIZE {
                return Err(format!("iv must be {MAGMA_CTR_IV_SIZE} bytes, got {}", iv.len()).into());
            }
            cipher.set_iv(&iv);
            let mut buf = data;
            ctr::ctr_crypt(&cipher, &mut buf)?;
            buf
        }
        _ => {
            return Err(format!(
                "mode '{mode}' not supported. Supported: magma-ecb, magma-ctr"
            )
            .into())
        }
    };

    fs::write(output, &result)?;
    Ok(())
}

fn parse_hex(s: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if s.len() % 2 != 0 {
        return Err("hex string must have an even number of digits".into());
    }
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).map_err(Into::into))
        .collect()
}
