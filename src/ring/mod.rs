//! # Ring Module
//!
//! Provides the [`Ring`] struct for representing residue rings Z_m over
//! arbitrary-precision integers and performing modular arithmetic.

pub mod math;

pub use math::Ring;
