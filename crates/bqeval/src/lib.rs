//! Blind evaluation of arithmetic expression trees over ciphertexts.
//!
//! The evaluator reduces a tree bottom-up using only the public homomorphic
//! operations; it never holds or requires private-key material, and there is
//! no bridge between the two schemes. A tree mixing additive and
//! multiplicative ciphertexts fails fast with a scheme mismatch instead of
//! producing a number.

use rug::Integer;
use serde::{Deserialize, Serialize};

use bqcrypto::{additive, multiplicative, Ciphertext, Error, PublicKey, Result, Scheme};

/// One node of an expression over ciphertexts. `Add`/`ScalarMul` are additive
/// operations, `Mul` is multiplicative; leaves carry already-encrypted
/// operands. No node ever holds a plaintext or a private key. The scalar in
/// `ScalarMul` is cleartext and known to the evaluator by design.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum ExprNode {
    Leaf(Ciphertext),
    Add(Box<ExprNode>, Box<ExprNode>),
    ScalarMul(Box<ExprNode>, Integer),
    Mul(Box<ExprNode>, Box<ExprNode>),
}

impl ExprNode {
    pub fn leaf(c: Ciphertext) -> Self {
        ExprNode::Leaf(c)
    }

    pub fn add(left: ExprNode, right: ExprNode) -> Self {
        ExprNode::Add(Box::new(left), Box::new(right))
    }

    pub fn scalar_mul(inner: ExprNode, k: impl Into<Integer>) -> Self {
        ExprNode::ScalarMul(Box::new(inner), k.into())
    }

    pub fn mul(left: ExprNode, right: ExprNode) -> Self {
        ExprNode::Mul(Box::new(left), Box::new(right))
    }

    pub fn depth(&self) -> usize {
        match self {
            ExprNode::Leaf(_) => 1,
            ExprNode::Add(l, r) | ExprNode::Mul(l, r) => 1 + l.depth().max(r.depth()),
            ExprNode::ScalarMul(inner, _) => 1 + inner.depth(),
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            ExprNode::Leaf(_) => 1,
            ExprNode::Add(l, r) | ExprNode::Mul(l, r) => l.leaf_count() + r.leaf_count(),
            ExprNode::ScalarMul(inner, _) => inner.leaf_count(),
        }
    }
}

fn wrong_key(pk: &PublicKey, required: Scheme) -> Error {
    Error::SchemeMismatch(format!(
        "{required} operation evaluated under a {} key",
        pk.scheme()
    ))
}

/// Reduce `node` bottom-up to a single ciphertext. Pure: no side effects, no
/// key material beyond `pk`. Any child failure aborts the whole evaluation
/// and propagates unchanged.
pub fn evaluate(pk: &PublicKey, node: &ExprNode) -> Result<Ciphertext> {
    match node {
        ExprNode::Leaf(c) => Ok(c.clone()),
        ExprNode::Add(l, r) => {
            let cl = evaluate(pk, l)?;
            let cr = evaluate(pk, r)?;
            match pk {
                PublicKey::Additive(apk) => additive::add(apk, &cl, &cr),
                PublicKey::Multiplicative(_) => Err(wrong_key(pk, Scheme::Additive)),
            }
        }
        ExprNode::ScalarMul(inner, k) => {
            let c = evaluate(pk, inner)?;
            match pk {
                PublicKey::Additive(apk) => additive::scalar_mul(apk, &c, k),
                PublicKey::Multiplicative(_) => Err(wrong_key(pk, Scheme::Additive)),
            }
        }
        ExprNode::Mul(l, r) => {
            let cl = evaluate(pk, l)?;
            let cr = evaluate(pk, r)?;
            match pk {
                PublicKey::Multiplicative(mpk) => multiplicative::mul(mpk, &cl, &cr),
                PublicKey::Additive(_) => Err(wrong_key(pk, Scheme::Multiplicative)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bqcrypto::{generate_additive_keypair, generate_multiplicative_keypair};

    #[test]
    fn scenario_a_times_2_plus_b() {
        let mut rng = rand::thread_rng();
        let pair = generate_additive_keypair(512, &mut rng).unwrap();
        let pk = PublicKey::Additive(pair.public.clone());

        let ea = additive::encrypt(&pair.public, &Integer::from(50u32), &mut rng).unwrap();
        let eb = additive::encrypt(&pair.public, &Integer::from(10u32), &mut rng).unwrap();
        let expr = ExprNode::add(
            ExprNode::scalar_mul(ExprNode::leaf(ea), 2u32),
            ExprNode::leaf(eb),
        );
        assert_eq!(expr.depth(), 3);
        assert_eq!(expr.leaf_count(), 2);

        let result = evaluate(&pk, &expr).unwrap();
        assert_eq!(additive::decrypt(&pair.private, &result).unwrap(), 110);
    }

    #[test]
    fn nested_additive_tree() {
        let mut rng = rand::thread_rng();
        let pair = generate_additive_keypair(512, &mut rng).unwrap();
        let pk = PublicKey::Additive(pair.public.clone());
        let enc = |v: u32, rng: &mut rand::rngs::ThreadRng| {
            additive::encrypt(&pair.public, &Integer::from(v), rng).unwrap()
        };

        // ((a + b) * 3) + (c * -1), with -1 wrapping mod n
        let expr = ExprNode::add(
            ExprNode::scalar_mul(
                ExprNode::add(
                    ExprNode::leaf(enc(5, &mut rng)),
                    ExprNode::leaf(enc(6, &mut rng)),
                ),
                3u32,
            ),
            ExprNode::scalar_mul(ExprNode::leaf(enc(7, &mut rng)), Integer::from(-1)),
        );
        let result = evaluate(&pk, &expr).unwrap();
        let got = additive::decrypt(&pair.private, &result).unwrap();
        // (5+6)*3 - 7 mod n
        assert_eq!(got, Integer::from((5 + 6) * 3 - 7));
    }

    #[test]
    fn multiplicative_tree() {
        let mut rng = rand::thread_rng();
        let pair = generate_multiplicative_keypair(512, &mut rng).unwrap();
        let pk = PublicKey::Multiplicative(pair.public.clone());

        let ea = multiplicative::encrypt(&pair.public, &Integer::from(6u32)).unwrap();
        let eb = multiplicative::encrypt(&pair.public, &Integer::from(7u32)).unwrap();
        let ec = multiplicative::encrypt(&pair.public, &Integer::from(2u32)).unwrap();
        let expr = ExprNode::mul(
            ExprNode::mul(ExprNode::leaf(ea), ExprNode::leaf(eb)),
            ExprNode::leaf(ec),
        );
        let result = evaluate(&pk, &expr).unwrap();
        assert_eq!(multiplicative::decrypt(&pair.private, &result).unwrap(), 84);
    }

    #[test]
    fn mixed_scheme_tree_fails_fast() {
        let mut rng = rand::thread_rng();
        let addv = generate_additive_keypair(512, &mut rng).unwrap();
        let mult = generate_multiplicative_keypair(512, &mut rng).unwrap();

        let ea = additive::encrypt(&addv.public, &Integer::from(50u32), &mut rng).unwrap();
        let em = multiplicative::encrypt(&mult.public, &Integer::from(10u32)).unwrap();
        let expr = ExprNode::add(ExprNode::leaf(ea), ExprNode::leaf(em));

        let err = evaluate(&PublicKey::Additive(addv.public.clone()), &expr).unwrap_err();
        assert!(matches!(err, Error::SchemeMismatch(_)));
    }

    #[test]
    fn additive_op_under_multiplicative_key_fails() {
        let mut rng = rand::thread_rng();
        let mult = generate_multiplicative_keypair(512, &mut rng).unwrap();
        let em = multiplicative::encrypt(&mult.public, &Integer::from(3u32)).unwrap();
        let expr = ExprNode::scalar_mul(ExprNode::leaf(em), 2u32);
        let err = evaluate(&PublicKey::Multiplicative(mult.public.clone()), &expr).unwrap_err();
        assert!(matches!(err, Error::SchemeMismatch(_)));
    }

    #[test]
    fn leaf_passes_through_untouched() {
        let mut rng = rand::thread_rng();
        let pair = generate_additive_keypair(512, &mut rng).unwrap();
        let pk = PublicKey::Additive(pair.public.clone());
        let ct = additive::encrypt(&pair.public, &Integer::from(9u32), &mut rng).unwrap();
        let out = evaluate(&pk, &ExprNode::leaf(ct.clone())).unwrap();
        assert_eq!(out, ct);
    }
}
