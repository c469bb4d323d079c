//! src/encryptor/encrypt.rs
//! Container encryption with a fresh random IV

use crate::aliases::KeyMaterial32;
use crate::crypto::rng::random_iv;
use crate::encryptor::encrypt_fixed_iv::encrypt_with_iv;
use crate::error::ShcryptError;

/// Encrypt `plaintext` into a complete container.
///
/// Layout: 16-byte random IV, AES-256-CBC over the zero-padded plaintext,
/// then one clear byte holding the padding length (`1..=16`).
///
/// Every call draws a new IV, so encrypting the same bytes twice with the
/// same key yields two different containers.
///
/// # Errors
///
/// [`ShcryptError::Crypto`] if the operating system's random source fails.
///
/// # Example
///
/// ```
/// use shcrypt::{decrypt, encrypt, derive_key_material};
///
/// let key = derive_key_material(b"secret");
/// let container = encrypt(b"hello", &key)?;
/// assert_eq!(container.len(), 33);
/// assert_eq!(container[32], 11);
/// assert_eq!(decrypt(&container, &key)?, b"hello");
/// # Ok::<(), shcrypt::ShcryptError>(())
/// ```
pub fn encrypt(plaintext: &[u8], key: &KeyMaterial32) -> Result<Vec<u8>, ShcryptError> {
    let iv = random_iv()?;
    encrypt_with_iv(plaintext, key, &iv)
}
