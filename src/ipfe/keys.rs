use crate::elgamal::params::GroupParams;
use crate::elgamal::{Ciphertext, decrypt_with_exponent};
use crate::errors::IpfeError;
use crate::ipfe::scheme::{FeCiphertext, check_vector_entries};

use itertools::Itertools;
use num_bigint::BigUint;
use num_traits::One;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Functional secret key `sk_y = Σ y_i * x_i mod q` for one query vector `y`.
///
/// A capability, not a key pair: holding it reveals `g^⟨x,y⟩` of any
/// ciphertext produced under the same scheme, and nothing else. It carries
/// the vector length it was derived for, so decryption can reject mismatched
/// inputs before any arithmetic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeSecretKey {
    pub(crate) sk: BigUint,
    pub(crate) vector_length: usize,
}

impl FeSecretKey {
    /// Length of the query vector this key was derived for.
    pub fn vector_length(&self) -> usize {
        self.vector_length
    }

    /// Recovers `g^⟨x,y⟩ mod p` from a ciphertext of `x`, given the same
    /// query vector `y` the key was derived for.
    ///
    /// Combines the ciphertext components into
    /// `aggregate = Π c1_i^{y_i} mod p` and strips the mask with one
    /// primitive decryption of `(c0, aggregate)` under `sk_y`.
    ///
    /// Turning the returned group element back into the literal integer
    /// `⟨x,y⟩` (bounded search, baby-step giant-step) is the caller's
    /// concern.
    ///
    /// # Errors
    ///
    /// `IpfeError::InvalidVectorLength` if `y` or the ciphertext does not
    /// match the derived length; `IpfeError::RangeViolation` if an entry of
    /// `y` is not below the subgroup order; `IpfeError::NonInvertibleElement`
    /// if the decryption share is not invertible (impossible for a prime
    /// modulus).
    pub fn decrypt(
        &self,
        ciphertext: &FeCiphertext,
        y: &[BigUint],
        params: &GroupParams,
    ) -> Result<BigUint, IpfeError> {
        if y.len() != self.vector_length {
            return Err(IpfeError::InvalidVectorLength(format!(
                "Decryption vector has length {} but the key was derived for length {}",
                y.len(),
                self.vector_length
            )));
        }

        if ciphertext.c1.len() != self.vector_length {
            return Err(IpfeError::InvalidVectorLength(format!(
                "Ciphertext carries {} components but the key was derived for length {}",
                ciphertext.c1.len(),
                self.vector_length
            )));
        }

        check_vector_entries("Decryption", y, params)?;

        let ring = params.element_ring();
        let mut aggregate = BigUint::one();
        for (component, weight) in ciphertext.c1.iter().zip_eq(y) {
            aggregate = ring.mul(&aggregate, &ring.pow(component, weight));
        }

        let combined = Ciphertext {
            c0: ciphertext.c0.clone(),
            c1: aggregate,
        };
        let result = decrypt_with_exponent(&combined, &self.sk, params)?;

        debug!(
            vector_length = self.vector_length,
            "recovered masked inner product"
        );

        Ok(result)
    }
}
