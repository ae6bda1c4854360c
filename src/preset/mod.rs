//! # Preset Module
//!
//! Canned domain parameters: vetted published MODP groups and a tiny
//! demonstration group.

pub mod groups;

pub use groups::{MODP_1536, MODP_2048, modp_group, toy_group};
