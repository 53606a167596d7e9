/// Cipher configuration and operation errors.
#[derive(Debug, thiserror::Error)]
pub enum CipherError {
    #[error("invalid argument")]
    InvalidArg,
    #[error("invalid key length: expected {expected}, got {got}")]
    InvalidKeyLength { expected: usize, got: usize },
    #[error("substitution table group {group} is not a permutation of 0..=15")]
    MalformedTable { group: usize },
    #[error("data length must be a positive multiple of the block size")]
    InvalidDataLength,
    #[error("invalid iv length")]
    InvalidIvLength,
    #[error("iv not set")]
    IvNotSet,
    #[error("gamma period out of range")]
    InvalidGammaPeriod,
}

/// Self-test errors.
#[derive(Debug, thiserror::Error)]
pub enum SelfTestError {
    #[error("known-answer test failure: {0}")]
    KatFailure(String),
}
