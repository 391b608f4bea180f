use rug::Integer;

/// Failure taxonomy for key generation, encryption and homomorphic
/// operations. Nothing is clamped or defaulted; every out-of-contract input
/// surfaces as one of these at the call that detected it.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum Error {
    /// Prime/invertibility search exhausted its retry budget. Retryable by
    /// the caller with fresh randomness.
    #[error("key generation failed: {0}")]
    KeyGeneration(&'static str),
    /// Plaintext outside `[0, n)`. A caller bug, not retryable.
    #[error("plaintext {value} outside [0, {modulus})")]
    PlaintextRange { value: Integer, modulus: Integer },
    /// Malformed or out-of-range ciphertext; decryption is never attempted
    /// partially.
    #[error("invalid ciphertext: {0}")]
    InvalidCiphertext(&'static str),
    /// Scheme tags or moduli differ across an operation's operands.
    #[error("scheme mismatch: {0}")]
    SchemeMismatch(String),
}

pub type Result<T> = std::result::Result<T, Error>;
