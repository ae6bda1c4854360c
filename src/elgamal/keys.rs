use crate::elgamal::params::GroupParams;
use crate::errors::IpfeError;

use num_bigint::BigUint;
use num_traits::Zero;

use rand::{CryptoRng, Rng};

use serde::{Deserialize, Serialize};

/// One participant's key material: the private scalar `x` and the public
/// element `h = g^x mod p`.
///
/// The private scalar never leaves the crate except through serialization of
/// the whole pair (deliberate persistence) or through key derivation in the
/// IPFE layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyPair {
    pub(crate) secret: BigUint,
    public: PublicKey,
}

/// The public element `h`; everything an encryptor needs.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PublicKey {
    pub h: BigUint,
}

/// Primitive-level ciphertext `(c0, c1)`, both elements of Z_p.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Ciphertext {
    pub c0: BigUint,
    pub c1: BigUint,
}

impl KeyPair {
    /// Generates a fresh key pair: `x` uniform in `[0, q)`, `h = g^x mod p`.
    pub fn generate<R: Rng + CryptoRng>(params: &GroupParams, rng: &mut R) -> Self {
        let secret = params.exponent_ring().sample(rng);
        let h = params.element_ring().pow(params.generator(), &secret);

        Self {
            secret,
            public: PublicKey { h },
        }
    }

    /// Imports an existing private scalar and recomputes its public element.
    ///
    /// # Errors
    ///
    /// Returns `IpfeError::RangeViolation` if the scalar is not below the
    /// subgroup order.
    pub fn from_secret(
        secret: impl Into<BigUint>,
        params: &GroupParams,
    ) -> Result<Self, IpfeError> {
        let secret = secret.into();
        if &secret >= params.subgroup_order() {
            return Err(IpfeError::RangeViolation(format!(
                "Private scalar must lie below the subgroup order {}",
                params.subgroup_order()
            )));
        }

        let h = params.element_ring().pow(params.generator(), &secret);

        Ok(Self {
            secret,
            public: PublicKey { h },
        })
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Decrypts a ciphertext addressed to this key pair (standalone mode).
    pub fn decrypt(
        &self,
        ciphertext: &Ciphertext,
        params: &GroupParams,
    ) -> Result<BigUint, IpfeError> {
        decrypt_with_exponent(ciphertext, &self.secret, params)
    }
}

impl PublicKey {
    /// Encrypts a group element under this public key:
    /// `c0 = g^r mod p`, `c1 = h^r * message mod p`.
    ///
    /// The message must be a nonzero element of Z_p (typically itself `g^m`
    /// for some plaintext `m`); the randomness must lie in `[0, q)`. When a
    /// vector is encrypted, the same randomness is reused across every
    /// component of that vector; the layer above samples it once per call.
    pub fn encrypt(
        &self,
        message: &BigUint,
        randomness: &BigUint,
        params: &GroupParams,
    ) -> Result<Ciphertext, IpfeError> {
        if message.is_zero() || message >= params.modulus() {
            return Err(IpfeError::RangeViolation(format!(
                "Message must be a nonzero element of Z_{}",
                params.modulus()
            )));
        }

        if randomness >= params.subgroup_order() {
            return Err(IpfeError::RangeViolation(format!(
                "Encryption randomness must lie below the subgroup order {}",
                params.subgroup_order()
            )));
        }

        let ring = params.element_ring();
        let c0 = ring.pow(params.generator(), randomness);
        let mask = ring.pow(&self.h, randomness);
        let c1 = ring.mul(&mask, message);

        Ok(Ciphertext { c0, c1 })
    }
}

/// Decrypts with an explicitly supplied exponent key:
/// `plaintext = c1 * (c0^exponent)^-1 mod p`.
///
/// The IPFE layer calls this with a derived secret that is not any key pair's
/// own private scalar; [`KeyPair::decrypt`] delegates here for standalone use.
///
/// # Errors
///
/// Returns `IpfeError::NonInvertibleElement` if the decryption share
/// `c0^exponent` is not invertible modulo `p`. This cannot happen for a prime
/// modulus and nonzero `c0`; reaching it means the parameters are not
/// prime-structured.
pub fn decrypt_with_exponent(
    ciphertext: &Ciphertext,
    exponent: &BigUint,
    params: &GroupParams,
) -> Result<BigUint, IpfeError> {
    if exponent >= params.subgroup_order() {
        return Err(IpfeError::RangeViolation(format!(
            "Decryption exponent must lie below the subgroup order {}",
            params.subgroup_order()
        )));
    }

    let ring = params.element_ring();
    let shared = ring.pow(&ciphertext.c0, exponent);
    // the share is key-derived, so the ring-level message must not surface
    let inverse = ring.inv(&shared).map_err(|_| {
        IpfeError::NonInvertibleElement(format!(
            "Decryption share is not invertible modulo {}",
            params.modulus()
        ))
    })?;

    Ok(ring.mul(&ciphertext.c1, &inverse))
}
