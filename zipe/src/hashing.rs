//! Derivation of the payload key from the ciphertext header.
use num_bigint::BigUint;
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

const PAYLOAD_KEY_DST: &[u8] = b"ZIPE_PAYLOAD_KEY";

/// Length-prefixed SHA-256 transcript.
struct KeyDigest(Sha256);

impl KeyDigest {
    fn new_with_dst(dst: &[u8]) -> Self {
        Self(Sha256::new()).chain_bytes(dst)
    }

    fn chain_bytes(mut self, bytes: &[u8]) -> Self {
        self.0.update((bytes.len() as u64).to_be_bytes());
        self.0.update(bytes);
        self
    }

    fn chain_integer(self, value: &BigUint) -> Self {
        self.chain_bytes(&value.to_bytes_be())
    }

    fn chain_integers(self, values: &[BigUint]) -> Self {
        values.iter().fold(
            self.chain_bytes(&(values.len() as u64).to_be_bytes()),
            |digest, v| digest.chain_integer(v),
        )
    }

    fn finalize(self) -> Zeroizing<[u8; 32]> {
        let mut key = Zeroizing::new([0u8; 32]);
        key.copy_from_slice(&self.0.finalize());
        key
    }
}

/// Key sealing the payload: binds the modulus, the commitment `c0`, the
/// masked coordinates and the normalized attribute vector.
pub(crate) fn payload_key(
    modulus: &BigUint,
    c0: &BigUint,
    masked: &[BigUint],
    attributes: &[BigUint],
) -> Zeroizing<[u8; 32]> {
    KeyDigest::new_with_dst(PAYLOAD_KEY_DST)
        .chain_integer(modulus)
        .chain_integer(c0)
        .chain_integers(masked)
        .chain_integers(attributes)
        .finalize()
}
