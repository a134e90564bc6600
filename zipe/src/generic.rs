use serde::{Deserialize, Serialize};
use std::fmt;

/// Generic structure describing the working group.
/// * `T` : internal type representing a scalar (exponent modulo the order)
/// * `U` : internal type representing a group element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZipGroup<T, U> {
    pub(crate) modulus: U,
    pub(crate) order: T,
    pub(crate) generator: U,
}

impl<T, U> ZipGroup<T, U> {
    /// The prime `p` defining the group.
    pub fn modulus(&self) -> &U {
        &self.modulus
    }

    /// The order `q` of the generator, every exponent is taken modulo `q`.
    pub fn order(&self) -> &T {
        &self.order
    }

    pub fn generator(&self) -> &U {
        &self.generator
    }
}

/// Generic structure representing the authority's master secret.
/// * `T` : internal type representing a scalar
/// * `U` : internal type representing a group element
///
/// Holds one secret scalar per coordinate and the matching bases `g^s[i]`.
#[derive(Clone)]
pub struct ZipMasterSecret<T, U> {
    pub(crate) group: ZipGroup<T, U>,
    pub(crate) secrets: Vec<T>,
    pub(crate) bases: Vec<U>,
}

// Secrets stay out of logs
impl<T, U> fmt::Debug for ZipMasterSecret<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZipMasterSecret")
            .field("length", &self.secrets.len())
            .finish_non_exhaustive()
    }
}

/// Generic structure representing a functional key for one policy vector.
/// * `T` : internal type representing a scalar
/// * `U` : internal type representing a group element
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZipFunctionalKey<T, U> {
    pub(crate) group: ZipGroup<T, U>,
    pub(crate) skf: T,
    pub(crate) policy: Vec<T>,
}

impl<T, U> fmt::Debug for ZipFunctionalKey<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZipFunctionalKey")
            .field("length", &self.policy.len())
            .finish_non_exhaustive()
    }
}

/// Generic structure representing a ciphertext.
/// * `U` : internal type representing a group element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZipCiphertext<U> {
    pub(crate) c0: U,
    pub(crate) masked: Vec<U>,
    pub(crate) payload: Vec<u8>,
}
