use crate::error::Result;
use crate::generic::ZipGroup;
use num_bigint::BigInt;
use rand::{CryptoRng, RngCore, SeedableRng, rngs::StdRng};
use serde::{Serialize, de::DeserializeOwned};
/*
    T : scalar type (exponents modulo the group order)
    U : group element type
    V : type of input vector element, signed values are accepted
*/

pub trait PEAuthority<T, U>: Sized {
    type FunctionalKey: PEFunctionalKey<Ciphertext = Self::Ciphertext>;
    type Ciphertext: PECiphertext<U>;

    /// Return a fresh master secret for vectors of `length` coordinates over `Z_modulus^*`
    fn setup_with_rng<R: CryptoRng + RngCore>(
        rng: &mut R,
        modulus: &U,
        length: i64,
    ) -> Result<Self>;

    /// Same as `setup_with_rng`, seeded from OS entropy
    fn setup(modulus: &U, length: i64) -> Result<Self> {
        let mut rng = StdRng::from_entropy();
        Self::setup_with_rng(&mut rng, modulus, length)
    }

    fn group(&self) -> &ZipGroup<T, U>;

    /// Dimension of the policy and attribute vectors
    fn length(&self) -> usize;

    /// Return the functional key associated to the policy vector
    fn key_gen<V: Clone>(&self, policy: &[V]) -> Result<Self::FunctionalKey>
    where
        BigInt: From<V>;

    /// Encrypt `message` under the attribute vector
    fn encrypt_with_rng<R: CryptoRng + RngCore, V: Clone>(
        &self,
        rng: &mut R,
        attributes: &[V],
        message: &[u8],
    ) -> Result<Self::Ciphertext>
    where
        BigInt: From<V>;

    fn encrypt<V: Clone>(&self, attributes: &[V], message: &[u8]) -> Result<Self::Ciphertext>
    where
        BigInt: From<V>,
    {
        let mut rng = StdRng::from_entropy();
        self.encrypt_with_rng(&mut rng, attributes, message)
    }
}

pub trait PEFunctionalKey: Serialize + DeserializeOwned {
    type Ciphertext;

    fn length(&self) -> usize;

    /// Recover the message if the policy vector of the key is orthogonal to
    /// the attribute vector of the ciphertext
    fn decrypt<V: Clone>(&self, attributes: &[V], ct: &Self::Ciphertext) -> Result<Vec<u8>>
    where
        BigInt: From<V>;
}

pub trait PECiphertext<U>: Serialize + DeserializeOwned {
    fn get_c0(&self) -> &U;
    fn get_masked(&self) -> &[U];
    fn get_payload(&self) -> &[u8];
}
