//! GOST R 34.12-2015 64-bit block cipher ("Magma").
//!
//! A 32-round Feistel network over 64-bit blocks with a 256-bit key and a
//! configurable substitution table of eight 4-bit S-boxes. Byte order is
//! little-endian throughout: a block's low half is its first four bytes,
//! its high half the last four, and key words are read little-endian. This
//! is the convention fixed by the GOST R 34.13-2015 control examples that
//! the self-tests run. For modes of operation (ECB, CTR) see the
//! [`modes`](crate::modes) module.

use magma_types::CipherError;
use zeroize::Zeroize;

/// Magma block size in bytes (64 bits).
pub const MAGMA_BLOCK_SIZE: usize = 8;

/// Magma key size in bytes (256 bits).
pub const MAGMA_KEY_SIZE: usize = 32;

/// Substitution table size: eight S-boxes of sixteen nibble entries.
pub const MAGMA_SBOX_SIZE: usize = 128;

/// IV size required by CTR (gamma) mode, in bytes.
pub const MAGMA_CTR_IV_SIZE: usize = 4;

/// Substitution table from GOST R 34.12-2015 (id-tc26-gost-28147-param-Z).
///
/// S-box `k` occupies entries `16*k..16*(k + 1)` and substitutes nibble `k`
/// of the round value, counting from the least significant nibble.
pub const STANDARD_SBOX: [u8; MAGMA_SBOX_SIZE] = [
    0xc, 0x4, 0x6, 0x2, 0xa, 0x5, 0xb, 0x9, 0xe, 0x8, 0xd, 0x7, 0x0, 0x3, 0xf, 0x1,
    0x6, 0x8, 0x2, 0x3, 0x9, 0xa, 0x5, 0xc, 0x1, 0xe, 0x4, 0x7, 0xb, 0xd, 0x0, 0xf,
    0xb, 0x3, 0x5, 0x8, 0x2, 0xf, 0xa, 0xd, 0xe, 0x1, 0x7, 0x4, 0xc, 0x9, 0x6, 0x0,
    0xc, 0x8, 0x2, 0x1, 0xd, 0x4, 0xf, 0x6, 0x7, 0x0, 0xa, 0x5, 0x3, 0xe, 0x9, 0xb,
    0x7, 0xf, 0x5, 0xa, 0x8, 0x1, 0x6, 0xd, 0x0, 0x9, 0x3, 0xe, 0xb, 0x4, 0x2, 0xc,
    0x5, 0xd, 0xf, 0x6, 0x9, 0x2, 0xc, 0xa, 0xb, 0x7, 0x8, 0x1, 0x4, 0x3, 0xe, 0x0,
    0x8, 0xe, 0x2, 0x5, 0x6, 0x9, 0x1, 0xc, 0xf, 0x4, 0xb, 0x0, 0xd, 0xa, 0x3, 0x7,
    0x1, 0x7, 0xe, 0xd, 0x0, 0x5, 0x8, 0x3, 0x4, 0xf, 0xa, 0x6, 0x9, 0xc, 0xb, 0x2,
];

/// Round-key application order for the Feistel iteration.
#[derive(Clone, Copy)]
enum KeyOrder {
    /// Rounds 0-23 cycle the schedule forward, rounds 24-31 reversed.
    Encrypt,
    /// Rounds 0-7 cycle forward, rounds 8-31 reversed.
    Decrypt,
}

impl KeyOrder {
    fn key_index(self, round: usize) -> usize {
        let forward = match self {
            KeyOrder::Encrypt => round < 24,
            KeyOrder::Decrypt => round < 8,
        };
        if forward {
            round % 8
        } else {
            7 - round % 8
        }
    }
}

/// A Magma cipher context: substitution table, round keys, and CTR state.
///
/// A fresh context is zeroed; configure the table, key, and (for CTR mode)
/// IV and gamma period in any order before use. The context is a plain
/// mutable resource for a single owner; share across threads only behind
/// external synchronization.
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct Magma {
    sbox: [u8; MAGMA_SBOX_SIZE],
    round_keys: [u32; 8],
    iv: Vec<u8>,
    gamma_period: u8,
}

impl Magma {
    /// Create a zeroed cipher context.
    pub fn new() -> Self {
        Magma {
            sbox: [0; MAGMA_SBOX_SIZE],
            round_keys: [0; 8],
            iv: Vec::new(),
            gamma_period: 0,
        }
    }

    /// Configure the substitution table.
    ///
    /// `table` must hold eight contiguous 16-entry groups, each a
    /// permutation of `0..=15`. On rejection the previously configured
    /// table stays in effect.
    pub fn set_sbox(&mut self, table: &[u8]) -> Result<(), CipherError> {
        if table.len() != MAGMA_SBOX_SIZE {
            return Err(CipherError::InvalidArg);
        }
        for (group, entries) in table.chunks(16).enumerate() {
            let mut present = 0u16;
            for &value in entries {
                if value > 0xf {
                    return Err(CipherError::MalformedTable { group });
                }
                present |= 1 << value;
            }
            if present != 0xffff {
                return Err(CipherError::MalformedTable { group });
            }
        }
        self.sbox.copy_from_slice(table);
        Ok(())
    }

    /// Set the 256-bit key and derive the round-key schedule.
    ///
    /// The key is read as eight little-endian 32-bit words; schedule word
    /// `i` is key word `7 - i`. Any 32-byte value is accepted.
    pub fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        if key.len() != MAGMA_KEY_SIZE {
            return Err(CipherError::InvalidKeyLength {
                expected: MAGMA_KEY_SIZE,
                got: key.len(),
            });
        }
        for (i, rk) in self.round_keys.iter_mut().enumerate() {
            let w = 4 * (7 - i);
            *rk = u32::from_le_bytes(key[w..w + 4].try_into().unwrap());
        }
        Ok(())
    }

    /// Store the initialization vector, replacing any previous one.
    ///
    /// The length is validated at use: CTR mode requires exactly
    /// [`MAGMA_CTR_IV_SIZE`] bytes.
    pub fn set_iv(&mut self, iv: &[u8]) {
        self.iv = iv.to_vec();
    }

    /// The stored IV; empty when unset.
    pub fn iv(&self) -> &[u8] {
        &self.iv
    }

    /// Configure the keystream block period in bytes (1..=8).
    ///
    /// The value records configured intent for CTR use; the keystream
    /// computation itself always works in full 8-byte blocks.
    pub fn set_gamma_period(&mut self, period: u8) -> Result<(), CipherError> {
        if period == 0 || period as usize > MAGMA_BLOCK_SIZE {
            return Err(CipherError::InvalidGammaPeriod);
        }
        self.gamma_period = period;
        Ok(())
    }

    /// The configured gamma period; 0 when unset.
    pub fn gamma_period(&self) -> u8 {
        self.gamma_period
    }

    /// Encrypt a single 8-byte block in place.
    pub fn encrypt_block(&self, block: &mut [u8]) -> Result<(), CipherError> {
        self.transform_block(block, KeyOrder::Encrypt)
    }

    /// Decrypt a single 8-byte block in place.
    pub fn decrypt_block(&self, block: &mut [u8]) -> Result<(), CipherError> {
        self.transform_block(block, KeyOrder::Decrypt)
    }

    /// 32-round Feistel iteration over one block.
    ///
    /// The final round leaves the halves unswapped, per the standard.
    fn transform_block(&self, block: &mut [u8], order: KeyOrder) -> Result<(), CipherError> {
        if block.len() != MAGMA_BLOCK_SIZE {
            return Err(CipherError::InvalidArg);
        }
        let mut low = u32::from_le_bytes(block[..4].try_into().unwrap());
        let mut high = u32::from_le_bytes(block[4..].try_into().unwrap());

        for round in 0..32 {
            let key = self.round_keys[order.key_index(round)];
            let t = self.round(low, key) ^ high;
            if round < 31 {
                high = low;
                low = t;
            } else {
                high = t;
            }
        }

        block[..4].copy_from_slice(&low.to_le_bytes());
        block[4..].copy_from_slice(&high.to_le_bytes());
        Ok(())
    }

    /// Round function: add a round key mod 2^32, substitute each nibble,
    /// rotate left by 11.
    fn round(&self, half: u32, key: u32) -> u32 {
        self.substitute(half.wrapping_add(key)).rotate_left(11)
    }

    fn substitute(&self, value: u32) -> u32 {
        let mut out = 0u32;
        for k in 0..8 {
            let nibble = (value >> (4 * k)) & 0xf;
            out |= u32::from(self.sbox[16 * k + nibble as usize]) << (4 * k);
        }
        out
    }
}

impl Default for Magma {
    fn default() -> Self {
        Self::new()
    }
}
