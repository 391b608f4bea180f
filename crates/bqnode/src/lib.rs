//! In-process client/server roles for blind evaluation.
//!
//! The client owns the keypair and is the only party that can decrypt. The
//! server is built from public material alone; the type has no private-key
//! field, so key isolation is structural, not a runtime check. Handing
//! material across the boundary goes through the `bqproto` records.

use rand::RngCore;
use rug::Integer;

use bqcrypto::{
    generate_additive_keypair, generate_multiplicative_keypair, additive, multiplicative,
    AdditiveKeyPair, Ciphertext, MultiplicativeKeyPair, PublicKey, Result,
};
use bqeval::ExprNode;
use bqproto::PublicKeyRecord;

enum KeyMaterial {
    Additive(AdditiveKeyPair),
    Multiplicative(MultiplicativeKeyPair),
}

/// Key-holding role: encrypts, decrypts, and builds expression trees. The
/// private key never leaves this struct.
pub struct Client {
    keys: KeyMaterial,
}

impl Client {
    pub fn generate_additive(bits: u32, rng: &mut impl RngCore) -> Result<Self> {
        Ok(Client {
            keys: KeyMaterial::Additive(generate_additive_keypair(bits, rng)?),
        })
    }

    pub fn generate_multiplicative(bits: u32, rng: &mut impl RngCore) -> Result<Self> {
        Ok(Client {
            keys: KeyMaterial::Multiplicative(generate_multiplicative_keypair(bits, rng)?),
        })
    }

    pub fn public_key(&self) -> PublicKey {
        match &self.keys {
            KeyMaterial::Additive(pair) => PublicKey::Additive(pair.public.clone()),
            KeyMaterial::Multiplicative(pair) => {
                PublicKey::Multiplicative(pair.public.clone())
            }
        }
    }

    /// The record a client actually sends to a server.
    pub fn public_key_record(&self) -> PublicKeyRecord {
        PublicKeyRecord::from_key(&self.public_key())
    }

    pub fn encrypt(&self, m: &Integer, rng: &mut impl RngCore) -> Result<Ciphertext> {
        match &self.keys {
            KeyMaterial::Additive(pair) => additive::encrypt(&pair.public, m, rng),
            KeyMaterial::Multiplicative(pair) => multiplicative::encrypt(&pair.public, m),
        }
    }

    pub fn decrypt(&self, c: &Ciphertext) -> Result<Integer> {
        match &self.keys {
            KeyMaterial::Additive(pair) => additive::decrypt(&pair.private, c),
            KeyMaterial::Multiplicative(pair) => multiplicative::decrypt(&pair.private, c),
        }
    }
}

/// Blind role: holds a public key only and combines ciphertexts with the
/// homomorphic operations. There is no call path from a `Server` to private
/// keys or plaintexts.
pub struct Server {
    public_key: PublicKey,
}

impl Server {
    pub fn new(public_key: PublicKey) -> Self {
        Server { public_key }
    }

    pub fn from_record(record: &PublicKeyRecord) -> bqproto::Result<Self> {
        Ok(Server::new(record.to_key()?))
    }

    pub fn evaluate(&self, expr: &ExprNode) -> Result<Ciphertext> {
        bqeval::evaluate(&self.public_key, expr)
    }

    pub fn fingerprint(&self) -> String {
        self.public_key.fingerprint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bqcrypto::Error;

    #[test]
    fn session_over_records() {
        let mut rng = rand::thread_rng();
        let client = Client::generate_additive(512, &mut rng).unwrap();
        // server sees only the public-key record
        let server = Server::from_record(&client.public_key_record()).unwrap();
        assert_eq!(server.fingerprint(), client.public_key().fingerprint());

        let ea = client.encrypt(&Integer::from(50u32), &mut rng).unwrap();
        let eb = client.encrypt(&Integer::from(10u32), &mut rng).unwrap();
        let expr = ExprNode::add(
            ExprNode::scalar_mul(ExprNode::leaf(ea), 2u32),
            ExprNode::leaf(eb),
        );
        let result = server.evaluate(&expr).unwrap();
        assert_eq!(client.decrypt(&result).unwrap(), 110);
    }

    #[test]
    fn multiplicative_session() {
        let mut rng = rand::thread_rng();
        let client = Client::generate_multiplicative(512, &mut rng).unwrap();
        let server = Server::from_record(&client.public_key_record()).unwrap();

        let ea = client.encrypt(&Integer::from(6u32), &mut rng).unwrap();
        let eb = client.encrypt(&Integer::from(7u32), &mut rng).unwrap();
        let expr = ExprNode::mul(ExprNode::leaf(ea), ExprNode::leaf(eb));
        let result = server.evaluate(&expr).unwrap();
        assert_eq!(client.decrypt(&result).unwrap(), 42);
    }

    #[test]
    fn foreign_client_cannot_decrypt() {
        let mut rng = rand::thread_rng();
        let client = Client::generate_additive(512, &mut rng).unwrap();
        let other = Client::generate_additive(512, &mut rng).unwrap();
        let ct = client.encrypt(&Integer::from(5u32), &mut rng).unwrap();
        let err = other.decrypt(&ct).unwrap_err();
        assert!(matches!(err, Error::SchemeMismatch(_)));
    }
}
