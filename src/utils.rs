//! Utility functions used across the library.

use crate::consts::{BLOCK_SIZE, IV_SIZE, TRAILER_SIZE};

/// Number of zero bytes appended before encryption.
///
/// Always in `1..=16`: an input that is already block-aligned gets a full
/// extra block, so the recorded length is never zero.
#[inline]
pub const fn padding_length(plaintext_len: usize) -> u8 {
    (BLOCK_SIZE - plaintext_len % BLOCK_SIZE) as u8
}

/// Total container size for a plaintext of `plaintext_len` bytes.
#[inline]
pub const fn container_len(plaintext_len: usize) -> usize {
    IV_SIZE + plaintext_len + padding_length(plaintext_len) as usize + TRAILER_SIZE
}

/// XORs two 16-byte blocks and writes the result to `output`.
///
/// # Panics (by contract)
///
/// Panics if any argument is shorter than 16 bytes. Every caller passes
/// exact 16-byte blocks from `chunks_exact(16)` or [`crate::aliases::Block16`].
#[inline(always)]
pub fn xor_blocks(block_a: &[u8], block_b: &[u8], output: &mut [u8]) {
    for ((out, a), b) in output[..BLOCK_SIZE]
        .iter_mut()
        .zip(&block_a[..BLOCK_SIZE])
        .zip(&block_b[..BLOCK_SIZE])
    {
        *out = a ^ b;
    }
}
