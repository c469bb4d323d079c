//! src/crypto/kdf/sha256.rs
//! Key-file digest: one pass of SHA-256 over the raw key-file bytes

use crate::aliases::KeyMaterial32;
use crate::error::ShcryptError;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Hash arbitrary key-file bytes into a 32-byte AES-256 key.
///
/// Deterministic, no salt, no iterations. Any length is accepted,
/// including zero.
#[inline]
pub fn derive_key_material(key_file_bytes: &[u8]) -> KeyMaterial32 {
    let digest: [u8; 32] = Sha256::digest(key_file_bytes).into();
    KeyMaterial32::new(digest)
}

/// Resolve `key_file` to an absolute path, read it fully and hash it.
///
/// # Errors
///
/// [`ShcryptError::KeyFileUnreadable`] if the path cannot be resolved or read.
pub fn derive_key_from_file(key_file: &Path) -> Result<KeyMaterial32, ShcryptError> {
    let unreadable = |source: std::io::Error| ShcryptError::KeyFileUnreadable {
        path: key_file.to_path_buf(),
        source,
    };

    let absolute = std::path::absolute(key_file).map_err(unreadable)?;
    let bytes = std::fs::read(&absolute).map_err(unreadable)?;
    log::debug!(
        "derived key material from {} ({} bytes)",
        absolute.display(),
        bytes.len()
    );

    Ok(derive_key_material(&bytes))
}
