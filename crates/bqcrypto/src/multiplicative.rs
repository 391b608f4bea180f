//! Textbook-RSA multiplicative cipher: `c = m^e mod n`, homomorphic under
//! multiplication.
//!
//! Deliberately weaker than the additive cipher: encryption is deterministic,
//! so equal plaintexts yield equal ciphertexts and plaintext equality leaks.
//! Callers needing hiding against chosen-plaintext analysis must not reuse
//! plaintexts under this scheme.

use rug::Integer;

use crate::bigint::int_to_be;
use crate::check_operand;
use crate::error::{Error, Result};
use crate::keys::{MultiplicativePrivateKey, MultiplicativePublicKey};
use crate::{Ciphertext, Scheme};

/// Encrypt `m` in `[0, n)`: `c = m^e mod n`. Deterministic, no randomness.
pub fn encrypt(pk: &MultiplicativePublicKey, m: &Integer) -> Result<Ciphertext> {
    let n = pk.n();
    if m.is_negative() || *m >= n {
        return Err(Error::PlaintextRange {
            value: m.clone(),
            modulus: n,
        });
    }
    // exponent is non-negative, pow_mod cannot fail
    let c = m.clone().pow_mod(&pk.e(), &n).unwrap();
    Ok(Ciphertext {
        scheme: Scheme::Multiplicative,
        modulus_fingerprint: pk.fingerprint(),
        value: int_to_be(&c),
    })
}

/// Decrypt: `m = c^d mod n`.
pub fn decrypt(sk: &MultiplicativePrivateKey, c: &Ciphertext) -> Result<Integer> {
    check_operand(c, Scheme::Multiplicative, &sk.fingerprint())?;
    let n = sk.n();
    let cv = c.value_int();
    if cv.is_negative() || cv >= n {
        return Err(Error::InvalidCiphertext("value outside [0, n)"));
    }
    Ok(cv.pow_mod(&sk.d(), &n).unwrap())
}

/// Homomorphic multiply: `c1 * c2 mod n`.
pub fn mul(
    pk: &MultiplicativePublicKey,
    c1: &Ciphertext,
    c2: &Ciphertext,
) -> Result<Ciphertext> {
    let fp = pk.fingerprint();
    check_operand(c1, Scheme::Multiplicative, &fp)?;
    check_operand(c2, Scheme::Multiplicative, &fp)?;
    let c = (c1.value_int() * c2.value_int()) % pk.n();
    Ok(Ciphertext {
        scheme: Scheme::Multiplicative,
        modulus_fingerprint: fp,
        value: int_to_be(&c),
    })
}
