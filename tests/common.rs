//! tests/common.rs
//! Common constants and utilities shared across test files

use shcrypt::aliases::KeyMaterial32;
use shcrypt::derive_key_material;

/// Key-file contents used across the suite
#[allow(dead_code)] // Used across multiple test files
pub const TEST_KEY_FILE_BYTES: &[u8] = b"secret";

/// Common test data strings used across multiple tests
#[allow(dead_code)]
pub const TEST_DATA: &[u8] = b"hello";

#[allow(dead_code)]
pub const TEST_DATA_BLOCK: &[u8] = b"exactly16bytes!!";

/// Plaintext lengths around every interesting block boundary
#[allow(dead_code)]
pub const TEST_LENGTHS: &[usize] = &[0, 1, 5, 15, 16, 17, 31, 32, 33, 255, 256, 1000, 4096];

#[allow(dead_code)]
pub fn test_key() -> KeyMaterial32 {
    derive_key_material(TEST_KEY_FILE_BYTES)
}

/// Deterministic non-trivial plaintext of `len` bytes
#[allow(dead_code)]
pub fn patterned(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 % 251) as u8).collect()
}
