//! # ElGamal Module
//!
//! Discrete-log public-key encryption over a subgroup of Z_p^*, parameterized
//! by shared [`GroupParams`]. The IPFE layer composes this primitive; it is
//! also usable standalone.

pub mod keys;
pub mod params;

pub use keys::{Ciphertext, KeyPair, PublicKey, decrypt_with_exponent};
pub use params::GroupParams;
