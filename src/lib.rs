pub mod elgamal;
pub mod errors;
pub mod ipfe;
pub mod preset;
pub mod ring;
