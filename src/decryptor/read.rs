//! src/decryptor/read.rs
//! Zero-copy container slicing
//!
//! Each helper validates only what it needs; [`crate::layout::inspect`]
//! performs the full structural check.

use crate::aliases::Iv16;
use crate::consts::{
    BLOCK_SIZE, IV_SIZE, MAX_PADDING, MIN_CONTAINER_LEN, MIN_PADDING, TRAILER_SIZE,
};
use crate::error::ShcryptError;

#[inline]
fn ensure_min_len(container: &[u8]) -> Result<(), ShcryptError> {
    if container.len() < MIN_CONTAINER_LEN {
        return Err(ShcryptError::MalformedContainer(format!(
            "{} bytes is shorter than the {MIN_CONTAINER_LEN}-byte minimum",
            container.len()
        )));
    }
    Ok(())
}

/// Copy the leading 16-byte IV into a secure buffer.
#[inline]
pub fn read_iv(container: &[u8]) -> Result<Iv16, ShcryptError> {
    ensure_min_len(container)?;
    let mut iv = [0u8; IV_SIZE];
    iv.copy_from_slice(&container[..IV_SIZE]);
    Ok(Iv16::new(iv))
}

/// Read the trailing padding-length byte (stored in clear).
///
/// Rejects `0` and anything above one block.
#[inline]
pub fn read_padding_length(container: &[u8]) -> Result<u8, ShcryptError> {
    ensure_min_len(container)?;
    check_padding_byte(container[container.len() - TRAILER_SIZE])
}

/// The ciphertext between IV and trailer. Must be block-aligned.
#[inline]
pub fn ciphertext_region(container: &[u8]) -> Result<&[u8], ShcryptError> {
    ensure_min_len(container)?;
    let region = &container[IV_SIZE..container.len() - TRAILER_SIZE];
    if region.len() % BLOCK_SIZE != 0 {
        return Err(ShcryptError::MalformedContainer(format!(
            "ciphertext region of {} bytes is not a multiple of {BLOCK_SIZE}",
            region.len()
        )));
    }
    Ok(region)
}

/// Split a container into `(iv, ciphertext, padding_len)`.
///
/// Same checks as the individual helpers; the padding byte is not compared
/// against the ciphertext length (see [`crate::layout::inspect`]).
#[inline]
pub fn split_container(container: &[u8]) -> Result<(Iv16, &[u8], u8), ShcryptError> {
    let ciphertext = ciphertext_region(container)?;
    let padding_len = read_padding_length(container)?;
    let iv = read_iv(container)?;
    Ok((iv, ciphertext, padding_len))
}

#[inline]
pub(crate) fn check_padding_byte(padding: u8) -> Result<u8, ShcryptError> {
    if !(MIN_PADDING..=MAX_PADDING).contains(&padding) {
        return Err(ShcryptError::InvalidPadding(format!(
            "padding length {padding} outside {MIN_PADDING}..={MAX_PADDING}"
        )));
    }
    Ok(padding)
}
