//! Implementation of ring ops using arbitrary-precision modular arithmetic.

use crate::errors::IpfeError;

use num_bigint::{BigInt, BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};

use rand::{CryptoRng, Rng};

use serde::{Deserialize, Serialize};

/// Represents a residue ring Z_m over arbitrary-precision integers.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    pub modulus: BigUint,
}

impl Ring {
    /// Create a new Ring with the given modulus.
    ///
    /// The modulus must be greater than 1.
    pub fn try_with(modulus: impl Into<BigUint>) -> Result<Self, IpfeError> {
        let modulus = modulus.into();
        if modulus <= BigUint::one() {
            return Err(IpfeError::InvalidModulus(format!(
                "Modulus must be greater than 1, got {}",
                modulus
            )));
        }

        Ok(Ring { modulus })
    }

    /// Returns the modulus of the ring.
    ///
    /// # Example
    ///
    /// ```
    /// # use ipfe_crypto::ring::Ring;
    /// # use num_bigint::BigUint;
    /// let ring = Ring::try_with(13u32).unwrap();
    /// assert_eq!(ring.modulus(), &BigUint::from(13u32));
    /// ```
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Normalizes a value to the range `[0, modulus)`.
    ///
    /// # Example
    ///
    /// ```
    /// # use ipfe_crypto::ring::Ring;
    /// # use num_bigint::BigUint;
    /// let ring = Ring::try_with(10u32).unwrap();
    /// assert_eq!(ring.normalize(&BigUint::from(15u32)), BigUint::from(5u32));
    /// assert_eq!(ring.normalize(&BigUint::from(10u32)), BigUint::from(0u32));
    /// ```
    pub fn normalize(&self, value: &BigUint) -> BigUint {
        value % &self.modulus
    }

    /// Computes `(a + b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use ipfe_crypto::ring::Ring;
    /// # use num_bigint::BigUint;
    /// let ring = Ring::try_with(10u32).unwrap();
    /// assert_eq!(ring.add(&BigUint::from(7u32), &BigUint::from(5u32)), BigUint::from(2u32));
    /// ```
    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.modulus
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// # Example
    ///
    /// ```
    /// # use ipfe_crypto::ring::Ring;
    /// # use num_bigint::BigUint;
    /// let ring = Ring::try_with(10u32).unwrap();
    /// assert_eq!(ring.mul(&BigUint::from(7u32), &BigUint::from(5u32)), BigUint::from(5u32));
    /// ```
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.modulus
    }

    /// Computes `base^exponent mod modulus`, normalized to `[0, modulus)`.
    ///
    /// # Example
    ///
    /// ```
    /// # use ipfe_crypto::ring::Ring;
    /// # use num_bigint::BigUint;
    /// let ring = Ring::try_with(73u32).unwrap();
    /// assert_eq!(ring.pow(&BigUint::from(15u32), &BigUint::from(31u32)), BigUint::from(5u32));
    /// assert_eq!(ring.pow(&BigUint::from(6u32), &BigUint::from(0u32)), BigUint::from(1u32));
    /// ```
    pub fn pow(&self, base: &BigUint, exponent: &BigUint) -> BigUint {
        base.modpow(exponent, &self.modulus)
    }

    /// Computes the modular multiplicative inverse `a^-1 mod modulus`.
    ///
    /// The inverse exists if and only if `gcd(a, modulus) == 1`.
    /// Uses the iterative extended Euclidean algorithm.
    ///
    /// # Errors
    ///
    /// Returns `IpfeError::NonInvertibleElement` if the inverse does not exist
    /// (i.e., `gcd(a, modulus) != 1`), in particular if `a` is 0.
    ///
    /// # Example
    ///
    /// ```
    /// # use ipfe_crypto::ring::Ring;
    /// # use num_bigint::BigUint;
    /// let ring = Ring::try_with(10u32).unwrap();
    /// assert_eq!(ring.inv(&BigUint::from(3u32)).unwrap(), BigUint::from(7u32));
    /// assert!(ring.inv(&BigUint::from(2u32)).is_err()); // gcd(2, 10) = 2
    /// assert!(ring.inv(&BigUint::from(0u32)).is_err());
    /// ```
    pub fn inv(&self, a: &BigUint) -> Result<BigUint, IpfeError> {
        let a_norm = self.normalize(a);
        if a_norm.is_zero() {
            return Err(IpfeError::NonInvertibleElement(format!(
                "Cannot invert 0 in mod {}",
                self.modulus
            )));
        }

        let modulus = BigInt::from(self.modulus.clone());
        let ext = BigInt::from(a_norm.clone()).extended_gcd(&modulus);
        if !ext.gcd.is_one() {
            return Err(IpfeError::NonInvertibleElement(format!(
                "Modular inverse does not exist for {} mod {} (gcd={})",
                a_norm, self.modulus, ext.gcd
            )));
        }

        ext.x.mod_floor(&modulus).to_biguint().ok_or_else(|| {
            IpfeError::InternalError(format!(
                "Floor-reduced inverse of {} mod {} is negative",
                a_norm, self.modulus
            ))
        })
    }

    /// Draws a uniform value in `[0, modulus)` from the supplied random source.
    ///
    /// # Example
    ///
    /// ```
    /// # use ipfe_crypto::ring::Ring;
    /// # use num_bigint::BigUint;
    /// # use rand::SeedableRng;
    /// # use rand::rngs::StdRng;
    /// let ring = Ring::try_with(97u32).unwrap();
    /// let mut rng = StdRng::seed_from_u64(7);
    /// assert!(ring.sample(&mut rng) < BigUint::from(97u32));
    /// ```
    pub fn sample<R: Rng + CryptoRng>(&self, rng: &mut R) -> BigUint {
        rng.gen_biguint_below(&self.modulus)
    }
}
