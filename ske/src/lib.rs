#![warn(missing_docs, rust_2018_idioms)]

//! Authenticated symmetric encryption of arbitrary payloads.
//!
//! The raw key can be of any length: it is first compressed with SHA-256 into
//! an AES-256 key. Every encryption draws a fresh 96-bit nonce which is
//! prepended to the AES-GCM output, so a sealed blob looks like
//! `nonce || ciphertext || tag`.
//!
//! ```rust
//! let blob = ske::encrypt(b"mysecretkey12345", b"Hello, World!").unwrap();
//! let plaintext = ske::decrypt(b"mysecretkey12345", &blob).unwrap();
//! assert_eq!(plaintext, b"Hello, World!");
//! ```
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use log::trace;
use rand::{CryptoRng, RngCore, SeedableRng, rngs::StdRng};
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

/// Size in bytes of the nonce prepended to every sealed blob.
pub const NONCE_LENGTH: usize = 12;
/// Size in bytes of the GCM authentication tag.
pub const TAG_LENGTH: usize = 16;

/// Errors raised by the symmetric layer.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The blob is shorter than a nonce or its tag does not verify.
    #[error("authentication failure: ciphertext was truncated or tampered with")]
    AuthenticationFailure,
    /// The AEAD refused to seal the plaintext.
    #[error("symmetric encryption failed")]
    Encryption,
}

/// Result alias of this crate.
pub type Result<T> = std::result::Result<T, Error>;

// SHA-256 of the raw key material
fn derive_key(key: &[u8]) -> Zeroizing<[u8; 32]> {
    let mut derived = Zeroizing::new([0u8; 32]);
    derived.copy_from_slice(&Sha256::digest(key));
    derived
}

/// Encrypt `plaintext` under `key` using a nonce drawn from `rng`.
pub fn encrypt_with_rng<R: CryptoRng + RngCore>(
    rng: &mut R,
    key: &[u8],
    plaintext: &[u8],
) -> Result<Vec<u8>> {
    let key = derive_key(key);
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key[..]));

    let mut nonce = [0u8; NONCE_LENGTH];
    rng.fill_bytes(&mut nonce);

    let sealed = cipher
        .encrypt(Nonce::from_slice(&nonce), plaintext)
        .map_err(|_| Error::Encryption)?;
    trace!("Sealed {} bytes into {} bytes", plaintext.len(), sealed.len());

    let mut blob = Vec::with_capacity(NONCE_LENGTH + sealed.len());
    blob.extend_from_slice(&nonce);
    blob.extend_from_slice(&sealed);
    Ok(blob)
}

/// Encrypt `plaintext` under `key`, the nonce is drawn from an entropy-seeded CSPRNG.
pub fn encrypt(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    let mut rng = StdRng::from_entropy();
    encrypt_with_rng(&mut rng, key, plaintext)
}

/// Decrypt a `nonce || ciphertext || tag` blob produced by [`encrypt`].
pub fn decrypt(key: &[u8], blob: &[u8]) -> Result<Vec<u8>> {
    if blob.len() < NONCE_LENGTH {
        return Err(Error::AuthenticationFailure);
    }
    let (nonce, sealed) = blob.split_at(NONCE_LENGTH);

    let key = derive_key(key);
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key[..]));
    cipher
        .decrypt(Nonce::from_slice(nonce), sealed)
        .map_err(|_| Error::AuthenticationFailure)
}
