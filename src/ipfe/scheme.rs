use crate::elgamal::params::GroupParams;
use crate::elgamal::{KeyPair, PublicKey};
use crate::errors::IpfeError;
use crate::ipfe::keys::FeSecretKey;

use itertools::Itertools;
use num_bigint::BigUint;
use num_traits::Zero;

use rand::{CryptoRng, Rng};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Inner-product functional encryption scheme state: the shared group
/// parameters and `l` independent ElGamal key pairs, one per vector slot.
///
/// All operations after setup take `&self`, so one instance can be shared
/// across threads; randomness is always injected per call.
///
/// # Example
///
/// ```
/// # use ipfe_crypto::ipfe::Ipfe;
/// # use ipfe_crypto::preset::toy_group;
/// # use num_bigint::BigUint;
/// # use rand::SeedableRng;
/// # use rand::rngs::StdRng;
/// let params = toy_group();
/// let mut rng = StdRng::seed_from_u64(7);
/// let scheme = Ipfe::setup(2, &params, &mut rng).unwrap();
///
/// let x = [BigUint::from(5u32), BigUint::from(7u32)];
/// let y = [BigUint::from(2u32), BigUint::from(3u32)];
///
/// let key = scheme.derive_key(&y).unwrap();
/// let ciphertext = scheme.encrypt(&x, &mut rng).unwrap();
///
/// // 15^(5*2 + 7*3) mod 73
/// assert_eq!(
///     key.decrypt(&ciphertext, &y, &params).unwrap(),
///     BigUint::from(5u32)
/// );
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ipfe {
    params: GroupParams,
    key_pairs: Vec<KeyPair>,
}

/// Vector ciphertext: one shared `c0 = g^r` and one masked component per
/// slot, `c1_i = h_i^r * g^{x_i} mod p`.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct FeCiphertext {
    pub c0: BigUint,
    pub c1: Vec<BigUint>,
}

impl Ipfe {
    /// Sets up a scheme for vectors of the given length by generating one
    /// independent key pair per slot.
    pub fn setup<R: Rng + CryptoRng>(
        vector_length: usize,
        params: &GroupParams,
        rng: &mut R,
    ) -> Result<Self, IpfeError> {
        if vector_length == 0 {
            return Err(IpfeError::InvalidParameters(
                "Vector length must be at least 1".to_string(),
            ));
        }

        let key_pairs = (0..vector_length)
            .map(|_| KeyPair::generate(params, rng))
            .collect();

        debug!(
            vector_length,
            modulus_bits = params.modulus().bits(),
            "generated scheme key material"
        );

        Ok(Self {
            params: params.clone(),
            key_pairs,
        })
    }

    /// Rebuilds a scheme from imported key material.
    ///
    /// Verifies that every public element matches its private scalar, so a
    /// corrupted or tampered import cannot produce a scheme that decrypts
    /// garbage.
    pub fn from_key_pairs(
        params: &GroupParams,
        key_pairs: Vec<KeyPair>,
    ) -> Result<Self, IpfeError> {
        if key_pairs.is_empty() {
            return Err(IpfeError::InvalidParameters(
                "At least one key pair is required".to_string(),
            ));
        }

        let scheme = Self {
            params: params.clone(),
            key_pairs,
        };
        scheme.check_key_consistency()?;

        Ok(scheme)
    }

    fn check_key_consistency(&self) -> Result<(), IpfeError> {
        let ring = self.params.element_ring();
        for (index, pair) in self.key_pairs.iter().enumerate() {
            if &pair.secret >= self.params.subgroup_order() {
                return Err(IpfeError::RangeViolation(format!(
                    "Private scalar of slot {} is not below the subgroup order",
                    index
                )));
            }

            if ring.pow(self.params.generator(), &pair.secret) != pair.public_key().h {
                return Err(IpfeError::InvalidParameters(format!(
                    "Public element of slot {} does not match its private scalar",
                    index
                )));
            }
        }

        Ok(())
    }

    /// Derives the functional secret key `sk_y = Σ y_i * x_i mod q`.
    ///
    /// Pure with respect to scheme state: key pairs are only read, and the
    /// call can be repeated with different vectors to obtain independent
    /// capabilities.
    pub fn derive_key(&self, y: &[BigUint]) -> Result<FeSecretKey, IpfeError> {
        if y.len() != self.key_pairs.len() {
            return Err(IpfeError::InvalidVectorLength(format!(
                "Query vector has length {} but the scheme was set up for length {}",
                y.len(),
                self.key_pairs.len()
            )));
        }

        check_vector_entries("Key derivation", y, &self.params)?;

        let ring = self.params.exponent_ring();
        let mut sk = BigUint::zero();
        for (pair, weight) in self.key_pairs.iter().zip_eq(y) {
            sk = ring.add(&sk, &ring.mul(&pair.secret, weight));
        }

        debug!(vector_length = y.len(), "derived functional secret key");

        Ok(FeSecretKey {
            sk,
            vector_length: y.len(),
        })
    }

    /// Encrypts a message vector.
    ///
    /// Samples one randomness `r` for the whole vector, keeps `c0 = g^r`
    /// once, and runs the primitive per slot against that slot's public key
    /// with the entry encoded as `g^{x_i}`; only the masked component of each
    /// primitive ciphertext is retained, since its `c0` repeats the shared
    /// one.
    pub fn encrypt<R: Rng + CryptoRng>(
        &self,
        x: &[BigUint],
        rng: &mut R,
    ) -> Result<FeCiphertext, IpfeError> {
        if x.len() != self.key_pairs.len() {
            return Err(IpfeError::InvalidVectorLength(format!(
                "Message vector has length {} but the scheme was set up for length {}",
                x.len(),
                self.key_pairs.len()
            )));
        }

        check_vector_entries("Encryption", x, &self.params)?;

        let ring = self.params.element_ring();
        let randomness = self.params.exponent_ring().sample(rng);
        let c0 = ring.pow(self.params.generator(), &randomness);

        let mut c1 = Vec::with_capacity(x.len());
        for (pair, entry) in self.key_pairs.iter().zip_eq(x) {
            let encoded = ring.pow(self.params.generator(), entry);
            let component = pair
                .public_key()
                .encrypt(&encoded, &randomness, &self.params)?;
            c1.push(component.c1);
        }

        debug!(vector_length = x.len(), "encrypted message vector");

        Ok(FeCiphertext { c0, c1 })
    }

    /// Length `l` the scheme was set up for.
    pub fn vector_length(&self) -> usize {
        self.key_pairs.len()
    }

    pub fn params(&self) -> &GroupParams {
        &self.params
    }

    /// The public elements of every slot, in slot order.
    pub fn public_keys(&self) -> Vec<PublicKey> {
        self.key_pairs
            .iter()
            .map(|pair| pair.public_key().clone())
            .collect()
    }

    pub fn to_json(&self) -> Result<String, IpfeError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserializes scheme state and re-validates parameters and key
    /// consistency.
    pub fn from_json(json: &str) -> Result<Self, IpfeError> {
        let scheme: Ipfe = serde_json::from_str(json)?;
        if scheme.key_pairs.is_empty() {
            return Err(IpfeError::InvalidParameters(
                "At least one key pair is required".to_string(),
            ));
        }

        scheme.params.validate()?;
        scheme.check_key_consistency()?;

        Ok(scheme)
    }
}

/// Rejects vector entries outside `[0, q)` before any arithmetic runs.
pub(crate) fn check_vector_entries(
    operation: &str,
    entries: &[BigUint],
    params: &GroupParams,
) -> Result<(), IpfeError> {
    let order = params.subgroup_order();
    for (index, entry) in entries.iter().enumerate() {
        if entry >= order {
            return Err(IpfeError::RangeViolation(format!(
                "{} vector entry {} must lie below the subgroup order {}",
                operation, index, order
            )));
        }
    }

    Ok(())
}
