//! bqcrypto: partially homomorphic ciphers for the blind-query engine.
//!
//! Two schemes behind one ciphertext type: a Paillier-style additive cipher
//! (homomorphic add, plaintext-scalar multiply) and a textbook-RSA
//! multiplicative cipher (homomorphic multiply).
//!
//! SECURITY NOTE: the multiplicative cipher is **deterministic** (textbook
//! RSA). Equal plaintexts encrypt to equal ciphertexts, so it leaks plaintext
//! equality and offers no semantic security. The additive cipher is
//! randomized per call.

use std::fmt;

use rug::Integer;
use serde::{Deserialize, Serialize};

pub mod additive;
pub mod bigint;
mod error;
pub mod keygen;
mod keys;
pub mod multiplicative;

pub use error::{Error, Result};
pub use keygen::{
    generate_additive_keypair, generate_multiplicative_keypair, PUBLIC_EXPONENT,
};
pub use keys::{
    AdditiveKeyPair, AdditivePrivateKey, AdditivePublicKey, MultiplicativeKeyPair,
    MultiplicativePrivateKey, MultiplicativePublicKey, PublicKey,
};

/// Which cipher a key or ciphertext belongs to. Operations refuse operands
/// whose tag does not match the key; there is no implicit coercion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scheme {
    Additive,
    Multiplicative,
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::Additive => f.write_str("additive"),
            Scheme::Multiplicative => f.write_str("multiplicative"),
        }
    }
}

/// An opaque ciphertext. Immutable once produced; every homomorphic operation
/// returns a fresh one. Carries the scheme tag and the fingerprint of the
/// public modulus it was produced under so mismatched operands are caught
/// before any arithmetic happens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ciphertext {
    pub scheme: Scheme,
    pub modulus_fingerprint: String,
    #[serde(with = "serde_bytes")]
    pub value: Vec<u8>,
}

impl Ciphertext {
    pub fn value_int(&self) -> Integer {
        bigint::int_from_be(&self.value)
    }

    /// Short human-readable tag, e.g. `additive/1f8c02ab`.
    pub fn tag(&self) -> String {
        format!("{}/{}", self.scheme, short_fp(&self.modulus_fingerprint))
    }
}

/// blake3 hex digest of a public modulus, big-endian bytes.
pub fn fingerprint(modulus_be: &[u8]) -> String {
    let mut h = blake3::Hasher::new();
    h.update(modulus_be);
    h.finalize().to_hex().to_string()
}

fn short_fp(fp: &str) -> &str {
    &fp[..fp.len().min(8)]
}

pub(crate) fn check_operand(c: &Ciphertext, scheme: Scheme, fp: &str) -> Result<()> {
    if c.scheme != scheme || c.modulus_fingerprint != fp {
        return Err(Error::SchemeMismatch(format!(
            "operation expects {}/{} ciphertexts, got {}",
            scheme,
            short_fp(fp),
            c.tag(),
        )));
    }
    Ok(())
}

// --- Simple JSON (de)serialization helpers for key files ---

pub fn save_json<T: Serialize>(path: &str, value: &T) -> anyhow::Result<()> {
    std::fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}

pub fn load_json<T: for<'de> Deserialize<'de>>(path: &str) -> anyhow::Result<T> {
    let data = std::fs::read(path)?;
    Ok(serde_json::from_slice(&data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_stable_and_distinct() {
        let a = fingerprint(&[1, 2, 3]);
        let b = fingerprint(&[1, 2, 3]);
        let c = fingerprint(&[1, 2, 4]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn mismatched_operand_is_rejected() {
        let ct = Ciphertext {
            scheme: Scheme::Multiplicative,
            modulus_fingerprint: fingerprint(&[9, 9]),
            value: vec![1],
        };
        let err = check_operand(&ct, Scheme::Additive, &fingerprint(&[9, 9])).unwrap_err();
        assert!(matches!(err, Error::SchemeMismatch(_)));
    }
}
