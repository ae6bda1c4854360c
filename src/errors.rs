#[derive(thiserror::Error, Debug)]
pub enum IpfeError {
    /// Error when trying to find a modular inverse that doesn't exist (gcd(a, modulus) != 1).
    #[error("NonInvertibleElement: {0}")]
    NonInvertibleElement(String),
    /// Error when creating a ring with an invalid modulus (modulus <= 1).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    #[error("InvalidParameters: {0}")]
    InvalidParameters(String),
    #[error("InvalidVectorLength: {0}")]
    InvalidVectorLength(String),
    /// Error when a caller-supplied scalar lies outside its documented range.
    #[error("RangeViolation: {0}")]
    RangeViolation(String),
    #[error("InternalError: {0}")]
    InternalError(String),

    #[error("Data serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
}
