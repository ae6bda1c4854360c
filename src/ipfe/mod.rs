//! # IPFE Module
//!
//! Inner-product functional encryption composed from `l` independent
//! [`crate::elgamal`] key pairs. [`Ipfe`] holds the scheme state created at
//! setup; [`FeSecretKey`] is the derived decryption capability for one query
//! vector.

pub mod keys;
pub mod scheme;

pub use keys::FeSecretKey;
pub use scheme::{FeCiphertext, Ipfe};
