//! Paillier-style additive cipher: `c = g^m * r^n mod n^2` with a fresh unit
//! `r` per call, so the same plaintext encrypts to a different ciphertext
//! every time. Supports homomorphic add and plaintext-scalar multiply.

use rand::RngCore;
use rug::ops::RemRounding;
use rug::Integer;

use crate::bigint::{int_to_be, rand_unit};
use crate::check_operand;
use crate::error::{Error, Result};
use crate::keys::{AdditivePrivateKey, AdditivePublicKey};
use crate::{Ciphertext, Scheme};

/// `L(x) = (x - 1) / n`, defined on `x = 1 mod n`.
pub(crate) fn l_function(x: &Integer, n: &Integer) -> Integer {
    Integer::from(x - 1u32) / n
}

/// Encrypt `m` in `[0, n)`. Randomized: samples a fresh `r` coprime to `n`.
pub fn encrypt(
    pk: &AdditivePublicKey,
    m: &Integer,
    rng: &mut impl RngCore,
) -> Result<Ciphertext> {
    let n = pk.n();
    if m.is_negative() || *m >= n {
        return Err(Error::PlaintextRange {
            value: m.clone(),
            modulus: n,
        });
    }
    let n2 = pk.n2();
    let r = rand_unit(&n, rng);
    // exponents are non-negative, pow_mod cannot fail
    let gm = pk.g().pow_mod(m, &n2).unwrap();
    let rn = r.pow_mod(&n, &n2).unwrap();
    let c = (gm * rn) % n2;
    Ok(Ciphertext {
        scheme: Scheme::Additive,
        modulus_fingerprint: pk.fingerprint(),
        value: int_to_be(&c),
    })
}

/// Decrypt: `m = L(c^lambda mod n^2) * mu mod n`. Rejects ciphertexts outside
/// `[1, n^2)` or sharing a factor with `n^2` before touching the exponent.
pub fn decrypt(sk: &AdditivePrivateKey, c: &Ciphertext) -> Result<Integer> {
    check_operand(c, Scheme::Additive, &sk.fingerprint())?;
    let n = sk.n();
    let n2 = sk.n2();
    let cv = c.value_int();
    if cv < 1 || cv >= n2 {
        return Err(Error::InvalidCiphertext("value outside [1, n^2)"));
    }
    if Integer::from(cv.gcd_ref(&n2)) != 1 {
        return Err(Error::InvalidCiphertext("value shares a factor with n^2"));
    }
    let u = cv.pow_mod(&sk.lambda(), &n2).unwrap();
    Ok((l_function(&u, &n) * sk.mu()) % n)
}

/// Homomorphic add: `c1 * c2 mod n^2`. Both operands must carry the additive
/// tag and `pk`'s modulus fingerprint.
pub fn add(pk: &AdditivePublicKey, c1: &Ciphertext, c2: &Ciphertext) -> Result<Ciphertext> {
    let fp = pk.fingerprint();
    check_operand(c1, Scheme::Additive, &fp)?;
    check_operand(c2, Scheme::Additive, &fp)?;
    let c = (c1.value_int() * c2.value_int()) % pk.n2();
    Ok(Ciphertext {
        scheme: Scheme::Additive,
        modulus_fingerprint: fp,
        value: int_to_be(&c),
    })
}

/// Homomorphic scalar multiply: `c^k mod n^2`. `k` is a cleartext scalar
/// known to the evaluator; negative scalars wrap mod n.
pub fn scalar_mul(pk: &AdditivePublicKey, c: &Ciphertext, k: &Integer) -> Result<Ciphertext> {
    let fp = pk.fingerprint();
    check_operand(c, Scheme::Additive, &fp)?;
    let n2 = pk.n2();
    let k = Integer::from(k.rem_euc(&pk.n()));
    let out = c.value_int().pow_mod(&k, &n2).unwrap();
    Ok(Ciphertext {
        scheme: Scheme::Additive,
        modulus_fingerprint: fp,
        value: int_to_be(&out),
    })
}
