//! Keypair generation for both schemes.
//!
//! Primes come from a bounded search over random odd candidates with the top
//! bit forced, tested with 40 Miller-Rabin rounds (error <= 2^-80 per
//! accepted candidate). The caller supplies the RNG; it must be
//! cryptographically secure (`thread_rng`/`OsRng`).

use rand::RngCore;
use rug::integer::IsPrime;
use rug::Integer;

use crate::additive::l_function;
use crate::bigint::{int_to_be, rand_bits};
use crate::error::{Error, Result};
use crate::keys::{
    AdditiveKeyPair, AdditivePrivateKey, AdditivePublicKey, MultiplicativeKeyPair,
    MultiplicativePrivateKey, MultiplicativePublicKey,
};

/// Fixed RSA public exponent. Coprime to phi(n) for almost every prime pair.
pub const PUBLIC_EXPONENT: u32 = 65537;

/// Candidates examined before a single prime search gives up. Expected cost
/// is ~bits*ln2/2 candidates, so hitting this bound means the RNG is broken.
const PRIME_SEARCH_BUDGET: u32 = 100_000;

/// Prime-pair resamples when `e` is not invertible mod phi(n).
const EXPONENT_RETRY_BUDGET: u32 = 8;

const MILLER_RABIN_REPS: u32 = 40;

fn gen_prime(bits: u32, rng: &mut impl RngCore) -> Result<Integer> {
    for _ in 0..PRIME_SEARCH_BUDGET {
        let mut candidate = rand_bits(bits, rng);
        // force top bit (full bit length) and odd
        candidate.set_bit(bits - 1, true);
        candidate.set_bit(0, true);
        if candidate.is_probably_prime(MILLER_RABIN_REPS) != IsPrime::No {
            return Ok(candidate);
        }
    }
    Err(Error::KeyGeneration("prime search exhausted its candidate budget"))
}

fn gen_prime_pair(bits: u32, rng: &mut impl RngCore) -> Result<(Integer, Integer)> {
    let half = bits / 2;
    let p = gen_prime(half, rng)?;
    let mut q = gen_prime(half, rng)?;
    while q == p {
        q = gen_prime(half, rng)?;
    }
    Ok((p, q))
}

/// Generate a Paillier keypair with a `bits`-bit modulus: `n = p*q`,
/// `g = n+1`, `lambda = lcm(p-1, q-1)`, `mu = L(g^lambda mod n^2)^-1 mod n`.
pub fn generate_additive_keypair(bits: u32, rng: &mut impl RngCore) -> Result<AdditiveKeyPair> {
    let (p, q) = gen_prime_pair(bits, rng)?;
    let n = Integer::from(&p * &q);
    let n2 = Integer::from(&n * &n);

    let p1 = Integer::from(&p - 1u32);
    let q1 = Integer::from(&q - 1u32);
    let lambda = p1.lcm(&q1);

    let g = Integer::from(&n + 1u32);
    // exponent is non-negative, pow_mod cannot fail
    let gl = g.pow_mod(&lambda, &n2).unwrap();
    let mu = l_function(&gl, &n)
        .invert(&n)
        .map_err(|_| Error::KeyGeneration("L(g^lambda) not invertible mod n"))?;

    let public = AdditivePublicKey {
        n: int_to_be(&n),
        n2: int_to_be(&n2),
    };
    let private = AdditivePrivateKey {
        lambda: int_to_be(&lambda),
        mu: int_to_be(&mu),
        n: public.n.clone(),
        n2: public.n2.clone(),
    };
    Ok(AdditiveKeyPair { public, private })
}

/// Generate an RSA-style keypair with a `bits`-bit modulus: `e = 65537`,
/// `d = e^-1 mod phi(n)`. Prime pairs where `e` divides phi(n) are resampled.
pub fn generate_multiplicative_keypair(
    bits: u32,
    rng: &mut impl RngCore,
) -> Result<MultiplicativeKeyPair> {
    let e = Integer::from(PUBLIC_EXPONENT);
    for _ in 0..EXPONENT_RETRY_BUDGET {
        let (p, q) = gen_prime_pair(bits, rng)?;
        let n = Integer::from(&p * &q);
        let phi = Integer::from(&p - 1u32) * Integer::from(&q - 1u32);
        let d = match e.clone().invert(&phi) {
            Ok(d) => d,
            Err(_) => continue,
        };
        let public = MultiplicativePublicKey {
            n: int_to_be(&n),
            e: int_to_be(&e),
        };
        let private = MultiplicativePrivateKey {
            n: public.n.clone(),
            d: int_to_be(&d),
        };
        return Ok(MultiplicativeKeyPair { public, private });
    }
    Err(Error::KeyGeneration("public exponent not invertible for sampled primes"))
}
