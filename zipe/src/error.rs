use thiserror::Error;

/// Errors returned by the predicate encryption scheme.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Non-positive vector length or unusable modulus at setup.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
    /// A vector does not have the dimension the authority was set up with.
    #[error("dimension mismatch: expected {expected} coordinates, given {given}")]
    DimensionMismatch { expected: usize, given: usize },
    /// `<f, x>` is not zero modulo the group order.
    #[error("predicate not satisfied")]
    PredicateNotSatisfied,
    /// The payload was tampered with or decrypted under the wrong key.
    #[error("authentication failure on the encrypted payload")]
    AuthenticationFailure,
    /// Arithmetic fault, the value shares a factor with the modulus.
    #[error("value is not invertible modulo the group modulus")]
    NotInvertible,
    /// The symmetric layer refused to seal the payload.
    #[error("unable to encrypt the payload")]
    SymEncryption,
}

impl From<ske::Error> for Error {
    fn from(e: ske::Error) -> Self {
        match e {
            ske::Error::AuthenticationFailure => Error::AuthenticationFailure,
            ske::Error::Encryption => Error::SymEncryption,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
