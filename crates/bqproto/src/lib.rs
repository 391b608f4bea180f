//! External encodings for key material and ciphertexts.
//!
//! Big integers travel as decimal strings so records stay readable and
//! implementation-agnostic; compact framing uses bincode on top. Private-key
//! records exist for client-side storage only and are never placed on the
//! wire in the intended deployment.

use rug::Integer;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use bqcrypto::bigint::int_to_be;
use bqcrypto::{
    AdditivePrivateKey, AdditivePublicKey, Ciphertext, MultiplicativePrivateKey,
    MultiplicativePublicKey, PublicKey, Scheme,
};

pub const PROTO_VER: u32 = 1;

#[derive(thiserror::Error, Debug)]
pub enum ProtoError {
    #[error("malformed decimal integer in record: {0:?}")]
    BadInteger(String),
    #[error("record inconsistent with declared scheme: {0}")]
    BadRecord(&'static str),
    #[error(transparent)]
    Crypto(#[from] bqcrypto::Error),
    #[error("frame error: {0}")]
    Frame(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, ProtoError>;

/// `{scheme, n, g_or_e}` with decimal-string integers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKeyRecord {
    pub scheme: Scheme,
    pub n: String,
    pub g_or_e: String,
}

/// Client-side private-key record. `mu` is present for the additive scheme
/// only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateKeyRecord {
    pub scheme: Scheme,
    pub n: String,
    pub lambda_or_d: String,
    pub mu: Option<String>,
}

/// `{scheme, n_fingerprint, value}`; opaque to any holder without the
/// matching private key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CiphertextRecord {
    pub scheme: Scheme,
    pub n_fingerprint: String,
    pub value: String,
}

fn parse_decimal(s: &str) -> Result<Integer> {
    let i = Integer::from_str_radix(s, 10).map_err(|_| ProtoError::BadInteger(s.to_string()))?;
    if i.is_negative() {
        return Err(ProtoError::BadInteger(s.to_string()));
    }
    Ok(i)
}

impl PublicKeyRecord {
    pub fn from_key(key: &PublicKey) -> Self {
        match key {
            PublicKey::Additive(pk) => PublicKeyRecord {
                scheme: Scheme::Additive,
                n: pk.n().to_string(),
                g_or_e: pk.g().to_string(),
            },
            PublicKey::Multiplicative(pk) => PublicKeyRecord {
                scheme: Scheme::Multiplicative,
                n: pk.n().to_string(),
                g_or_e: pk.e().to_string(),
            },
        }
    }

    pub fn to_key(&self) -> Result<PublicKey> {
        let n = parse_decimal(&self.n)?;
        let g_or_e = parse_decimal(&self.g_or_e)?;
        match self.scheme {
            Scheme::Additive => {
                if g_or_e != Integer::from(&n + 1u32) {
                    return Err(ProtoError::BadRecord("additive record requires g = n + 1"));
                }
                let n2 = Integer::from(&n * &n);
                Ok(PublicKey::Additive(AdditivePublicKey {
                    n: int_to_be(&n),
                    n2: int_to_be(&n2),
                }))
            }
            Scheme::Multiplicative => Ok(PublicKey::Multiplicative(MultiplicativePublicKey {
                n: int_to_be(&n),
                e: int_to_be(&g_or_e),
            })),
        }
    }
}

impl PrivateKeyRecord {
    pub fn from_additive(sk: &AdditivePrivateKey) -> Self {
        PrivateKeyRecord {
            scheme: Scheme::Additive,
            n: sk.n().to_string(),
            lambda_or_d: sk.lambda().to_string(),
            mu: Some(sk.mu().to_string()),
        }
    }

    pub fn from_multiplicative(sk: &MultiplicativePrivateKey) -> Self {
        PrivateKeyRecord {
            scheme: Scheme::Multiplicative,
            n: sk.n().to_string(),
            lambda_or_d: sk.d().to_string(),
            mu: None,
        }
    }

    pub fn to_additive(&self) -> Result<AdditivePrivateKey> {
        if self.scheme != Scheme::Additive {
            return Err(ProtoError::BadRecord("not an additive private key"));
        }
        let mu = self
            .mu
            .as_deref()
            .ok_or(ProtoError::BadRecord("additive record requires mu"))?;
        let n = parse_decimal(&self.n)?;
        let n2 = Integer::from(&n * &n);
        Ok(AdditivePrivateKey {
            lambda: int_to_be(&parse_decimal(&self.lambda_or_d)?),
            mu: int_to_be(&parse_decimal(mu)?),
            n: int_to_be(&n),
            n2: int_to_be(&n2),
        })
    }

    pub fn to_multiplicative(&self) -> Result<MultiplicativePrivateKey> {
        if self.scheme != Scheme::Multiplicative {
            return Err(ProtoError::BadRecord("not a multiplicative private key"));
        }
        Ok(MultiplicativePrivateKey {
            n: int_to_be(&parse_decimal(&self.n)?),
            d: int_to_be(&parse_decimal(&self.lambda_or_d)?),
        })
    }
}

impl CiphertextRecord {
    pub fn from_ciphertext(c: &Ciphertext) -> Self {
        CiphertextRecord {
            scheme: c.scheme,
            n_fingerprint: c.modulus_fingerprint.clone(),
            value: c.value_int().to_string(),
        }
    }

    pub fn to_ciphertext(&self) -> Result<Ciphertext> {
        let value = parse_decimal(&self.value)?;
        Ok(Ciphertext {
            scheme: self.scheme,
            modulus_fingerprint: self.n_fingerprint.clone(),
            value: int_to_be(&value),
        })
    }
}

// --- bincode framing helpers ---

pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    Ok(bincode::serialize(value)?)
}

pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    Ok(bincode::deserialize(bytes)?)
}
