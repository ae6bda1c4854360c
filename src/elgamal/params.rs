use crate::errors::IpfeError;
use crate::ring::Ring;

use num_bigint::BigUint;
use num_traits::{One, Zero};

use serde::{Deserialize, Serialize};

/// Domain parameters shared by every participant: a modulus `p`, the order `q`
/// of the working subgroup of Z_p^*, and a generator `g` of that subgroup.
///
/// Construction validates the group structure; the parameters are immutable
/// afterwards and passed by reference into key generation, encryption and
/// decryption. Generating cryptographically strong values (a safe prime `p`,
/// a prime `q`) is a concern of the parameter supplier; vetted published
/// constants live in [`crate::preset`].
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GroupParams {
    /// Ring Z_p in which group elements are multiplied.
    element_ring: Ring,
    /// Ring Z_q of exponents; private scalars, vector entries and encryption
    /// randomness all live here.
    exponent_ring: Ring,
    /// Generator of the order-q subgroup of Z_p^*.
    generator: BigUint,
}

impl GroupParams {
    /// Creates validated group parameters from `p`, `q` and `g`.
    ///
    /// Checks that both moduli exceed 1, `1 < g < p`, `q` divides `p - 1` and
    /// `g^q ≡ 1 (mod p)` (so the order of `g` divides `q`).
    ///
    /// # Example
    ///
    /// ```
    /// # use ipfe_crypto::elgamal::GroupParams;
    /// # use num_bigint::BigUint;
    /// let params = GroupParams::try_with(73u32, 72u32, 15u32).unwrap();
    /// assert_eq!(params.modulus(), &BigUint::from(73u32));
    /// assert_eq!(params.subgroup_order(), &BigUint::from(72u32));
    /// assert!(GroupParams::try_with(73u32, 70u32, 15u32).is_err());
    /// ```
    pub fn try_with(
        p: impl Into<BigUint>,
        q: impl Into<BigUint>,
        g: impl Into<BigUint>,
    ) -> Result<Self, IpfeError> {
        let params = Self {
            element_ring: Ring::try_with(p)?,
            exponent_ring: Ring::try_with(q)?,
            generator: g.into(),
        };
        params.validate()?;

        Ok(params)
    }

    /// Re-checks every structural invariant.
    ///
    /// Used by [`GroupParams::try_with`] and again after deserialization, so a
    /// tampered document cannot smuggle in an invalid group.
    pub(crate) fn validate(&self) -> Result<(), IpfeError> {
        let p = self.element_ring.modulus();
        let q = self.exponent_ring.modulus();

        if p <= &BigUint::one() || q <= &BigUint::one() {
            return Err(IpfeError::InvalidModulus(
                "Both p and q must be greater than 1".to_string(),
            ));
        }

        if self.generator <= BigUint::one() || &self.generator >= p {
            return Err(IpfeError::InvalidParameters(format!(
                "Generator must lie strictly between 1 and p={}, got {}",
                p, self.generator
            )));
        }

        if !((p - 1u32) % q).is_zero() {
            return Err(IpfeError::InvalidParameters(format!(
                "Subgroup order {} must divide p - 1 = {}",
                q,
                p - 1u32
            )));
        }

        if !self.element_ring.pow(&self.generator, q).is_one() {
            return Err(IpfeError::InvalidParameters(format!(
                "Generator {} does not have order dividing {} modulo {}",
                self.generator, q, p
            )));
        }

        Ok(())
    }

    /// Returns the modulus `p` of the element ring.
    pub fn modulus(&self) -> &BigUint {
        self.element_ring.modulus()
    }

    /// Returns the subgroup order `q`.
    pub fn subgroup_order(&self) -> &BigUint {
        self.exponent_ring.modulus()
    }

    /// Returns the subgroup generator `g`.
    pub fn generator(&self) -> &BigUint {
        &self.generator
    }

    /// Ring Z_p of group elements.
    pub fn element_ring(&self) -> &Ring {
        &self.element_ring
    }

    /// Ring Z_q of exponents.
    pub fn exponent_ring(&self) -> &Ring {
        &self.exponent_ring
    }

    pub fn to_json(&self) -> Result<String, IpfeError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserializes parameters and re-validates the group structure.
    pub fn from_json(json: &str) -> Result<Self, IpfeError> {
        let params: GroupParams = serde_json::from_str(json)?;
        params.validate()?;

        Ok(params)
    }
}
