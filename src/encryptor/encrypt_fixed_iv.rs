//! src/encryptor/encrypt_fixed_iv.rs
//! Deterministic container encryption with a caller-supplied IV
//! (for known-answer tests; production code goes through `encrypt`)

use crate::aliases::{Iv16, KeyMaterial32};
use crate::crypto::CipherEngine;
use crate::encryptor::write::{write_iv, write_octets, write_padding_length};
use crate::error::ShcryptError;
use crate::utils::{container_len, padding_length};

/// Encrypt `plaintext` → container, chaining from the given `iv`.
///
/// Reusing an IV under the same key leaks equality of leading blocks.
pub fn encrypt_with_iv(
    plaintext: &[u8],
    key: &KeyMaterial32,
    iv: &Iv16,
) -> Result<Vec<u8>, ShcryptError> {
    let padding = padding_length(plaintext.len());
    let padded_len = plaintext.len() + padding as usize;

    // === Zero padding ===
    let mut blocks = Vec::with_capacity(padded_len);
    blocks.extend_from_slice(plaintext);
    blocks.resize(padded_len, 0x00);

    // === CBC over the padded region ===
    CipherEngine::new(key).encrypt_blocks(iv, &mut blocks)?;

    // === IV || ciphertext || padding length ===
    let mut container = Vec::with_capacity(container_len(plaintext.len()));
    write_iv(&mut container, iv)?;
    write_octets(&mut container, &blocks)?;
    write_padding_length(&mut container, padding)?;

    log::debug!(
        "encrypted {} bytes into {} byte container (padding {padding})",
        plaintext.len(),
        container.len()
    );

    Ok(container)
}
