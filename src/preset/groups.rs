//! Vetted multiplicative groups from RFC 3526 plus a small demonstration
//! group for tests and documentation examples.
//!
//! The MODP moduli are safe primes `p = 2q + 1`, so `g = 2` generates the
//! prime-order subgroup of quadratic residues and the subgroup order is
//! simply `(p - 1) / 2`.

use lazy_static::lazy_static;
use num_bigint::BigUint;

use crate::elgamal::GroupParams;
use crate::errors::IpfeError;

/// 1536-bit MODP group modulus (RFC 3526, group 5), most significant byte first.
const MODP_1536_HEX: &str = concat!(
    "FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD1",
    "29024E088A67CC74020BBEA63B139B22514A08798E3404DD",
    "EF9519B3CD3A431B302B0A6DF25F14374FE1356D6D51C245",
    "E485B576625E7EC6F44C42E9A637ED6B0BFF5CB6F406B7ED",
    "EE386BFB5A899FA5AE9F24117C4B1FE649286651ECE45B3D",
    "C2007CB8A163BF0598DA48361C55D39A69163FA8FD24CF5F",
    "83655D23DCA3AD961C62F356208552BB9ED529077096966D",
    "670C354E4ABC9804F1746C08CA237327FFFFFFFFFFFFFFFF",
);

/// 2048-bit MODP group modulus (RFC 3526, group 14), most significant byte first.
const MODP_2048_HEX: &str = concat!(
    "FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD1",
    "29024E088A67CC74020BBEA63B139B22514A08798E3404DD",
    "EF9519B3CD3A431B302B0A6DF25F14374FE1356D6D51C245",
    "E485B576625E7EC6F44C42E9A637ED6B0BFF5CB6F406B7ED",
    "EE386BFB5A899FA5AE9F24117C4B1FE649286651ECE45B3D",
    "C2007CB8A163BF0598DA48361C55D39A69163FA8FD24CF5F",
    "83655D23DCA3AD961C62F356208552BB9ED529077096966D",
    "670C354E4ABC9804F1746C08CA18217C32905E462E36CE3B",
    "E39E772C180E86039B2783A2EC07A28FB5C55DF06F4C52C9",
    "DE2BCBF6955817183995497CEA956AE515D2261898FA0510",
    "15728E5A8AACAA68FFFFFFFFFFFFFFFF",
);

lazy_static! {
    /// The 1536-bit MODP group from RFC 3526 with generator 2.
    pub static ref MODP_1536: GroupParams = modp_params(MODP_1536_HEX);

    /// The 2048-bit MODP group from RFC 3526 with generator 2.
    pub static ref MODP_2048: GroupParams = modp_params(MODP_2048_HEX);
}

/// Builds validated parameters from a safe-prime modulus given in hexadecimal.
fn modp_params(hex: &str) -> GroupParams {
    let p = BigUint::parse_bytes(hex.as_bytes(), 16)
        .expect("preset modulus is well-formed hexadecimal");
    let q = (&p - 1u32) / 2u32;

    GroupParams::try_with(p, q, 2u32).expect("published MODP constants form a valid group")
}

/// Looks up a vetted preset group by modulus size in bits.
///
/// ```
/// # use ipfe_crypto::preset::modp_group;
/// let params = modp_group(2048)?;
///
/// assert_eq!(params.modulus().bits(), 2048);
/// # Ok::<(), ipfe_crypto::errors::IpfeError>(())
/// ```
pub fn modp_group(bits: usize) -> Result<&'static GroupParams, IpfeError> {
    match bits {
        1536 => Ok(&*MODP_1536),
        2048 => Ok(&*MODP_2048),
        other => Err(IpfeError::InvalidParameters(format!(
            "No preset group with a {}-bit modulus; available sizes are 1536 and 2048",
            other
        ))),
    }
}

/// A 7-bit demonstration group: the full multiplicative group modulo 73,
/// generated by 15.
///
/// The subgroup order 72 is composite, so this group offers no security at
/// all. It exists to keep documentation examples and tests readable.
pub fn toy_group() -> GroupParams {
    GroupParams::try_with(73u32, 72u32, 15u32).expect("demonstration constants form a valid group")
}
