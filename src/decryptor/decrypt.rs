//! src/decryptor/decrypt.rs
//! Container decryption

use crate::aliases::KeyMaterial32;
use crate::crypto::CipherEngine;
use crate::decryptor::read::split_container;
use crate::error::ShcryptError;
use crate::layout::inspect;

/// Decrypt a container produced by [`encrypt`](crate::encrypt).
///
/// The structure is validated before any cipher work, so a rejected
/// container never yields partial plaintext.
///
/// A wrong key or tampered ciphertext is **not** detected: the format has no
/// MAC, and the result is simply garbage of the recorded length.
///
/// # Errors
///
/// - [`ShcryptError::MalformedContainer`] if shorter than 17 bytes or the
///   ciphertext region is not block-aligned.
/// - [`ShcryptError::InvalidPadding`] if the trailer byte is outside `1..=16`
///   or exceeds the ciphertext length.
pub fn decrypt(container: &[u8], key: &KeyMaterial32) -> Result<Vec<u8>, ShcryptError> {
    let layout = inspect(container)?;

    let (iv, ciphertext, _) = split_container(container)?;
    let mut plaintext = ciphertext.to_vec();

    CipherEngine::new(key).decrypt_blocks(&iv, &mut plaintext)?;
    plaintext.truncate(layout.plaintext_len);

    log::debug!(
        "decrypted {} byte container into {} bytes (padding {})",
        container.len(),
        plaintext.len(),
        layout.padding_len
    );

    Ok(plaintext)
}
