//! Key material for both schemes. Integers are stored as big-endian bytes so
//! the structs serialize without exposing `rug` types on the wire; accessor
//! methods rehydrate them on demand.

use rug::Integer;
use serde::{Deserialize, Serialize};

use crate::bigint::int_from_be;
use crate::{fingerprint, Scheme};

/// Paillier public key `(n, g)` with `g = n + 1`. Safe to hand to any party.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditivePublicKey {
    #[serde(with = "serde_bytes")]
    pub n: Vec<u8>,
    #[serde(with = "serde_bytes")]
    pub n2: Vec<u8>,
}

impl AdditivePublicKey {
    pub fn n(&self) -> Integer {
        int_from_be(&self.n)
    }
    pub fn n2(&self) -> Integer {
        int_from_be(&self.n2)
    }
    /// `g = n + 1`, the simplified-Paillier generator.
    pub fn g(&self) -> Integer {
        self.n() + 1u32
    }
    pub fn fingerprint(&self) -> String {
        fingerprint(&self.n)
    }
}

/// Paillier private key `(lambda, mu)`. Held exclusively by the client role;
/// never serialized toward the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditivePrivateKey {
    #[serde(with = "serde_bytes")]
    pub lambda: Vec<u8>,
    #[serde(with = "serde_bytes")]
    pub mu: Vec<u8>,
    #[serde(with = "serde_bytes")]
    pub n: Vec<u8>,
    #[serde(with = "serde_bytes")]
    pub n2: Vec<u8>,
}

impl AdditivePrivateKey {
    pub fn lambda(&self) -> Integer {
        int_from_be(&self.lambda)
    }
    pub fn mu(&self) -> Integer {
        int_from_be(&self.mu)
    }
    pub fn n(&self) -> Integer {
        int_from_be(&self.n)
    }
    pub fn n2(&self) -> Integer {
        int_from_be(&self.n2)
    }
    pub fn fingerprint(&self) -> String {
        fingerprint(&self.n)
    }
}

/// RSA-style public key `(n, e)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiplicativePublicKey {
    #[serde(with = "serde_bytes")]
    pub n: Vec<u8>,
    #[serde(with = "serde_bytes")]
    pub e: Vec<u8>,
}

impl MultiplicativePublicKey {
    pub fn n(&self) -> Integer {
        int_from_be(&self.n)
    }
    pub fn e(&self) -> Integer {
        int_from_be(&self.e)
    }
    pub fn fingerprint(&self) -> String {
        fingerprint(&self.n)
    }
}

/// RSA-style private key `(n, d)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiplicativePrivateKey {
    #[serde(with = "serde_bytes")]
    pub n: Vec<u8>,
    #[serde(with = "serde_bytes")]
    pub d: Vec<u8>,
}

impl MultiplicativePrivateKey {
    pub fn n(&self) -> Integer {
        int_from_be(&self.n)
    }
    pub fn d(&self) -> Integer {
        int_from_be(&self.d)
    }
    pub fn fingerprint(&self) -> String {
        fingerprint(&self.n)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditiveKeyPair {
    pub public: AdditivePublicKey,
    pub private: AdditivePrivateKey,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiplicativeKeyPair {
    pub public: MultiplicativePublicKey,
    pub private: MultiplicativePrivateKey,
}

/// Public key of either scheme, the only key material a server role ever
/// receives.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PublicKey {
    Additive(AdditivePublicKey),
    Multiplicative(MultiplicativePublicKey),
}

impl PublicKey {
    pub fn scheme(&self) -> Scheme {
        match self {
            PublicKey::Additive(_) => Scheme::Additive,
            PublicKey::Multiplicative(_) => Scheme::Multiplicative,
        }
    }

    pub fn fingerprint(&self) -> String {
        match self {
            PublicKey::Additive(pk) => pk.fingerprint(),
            PublicKey::Multiplicative(pk) => pk.fingerprint(),
        }
    }
}
