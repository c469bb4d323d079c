//! # Constants
//!
//! Format constants for the `.shc` container and the defaults used when
//! persisting output.
//!
//! ```text
//! offset 0     : 16 bytes  IV (random, plaintext)
//! offset 16    : N bytes   ciphertext, N = original_len + p, multiple of 16
//! offset 16+N  : 1 byte    padding length p (1..=16), plaintext
//! ```

/// AES block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Initialization vector size (one block).
pub const IV_SIZE: usize = BLOCK_SIZE;

/// Derived key size (SHA-256 output, selects AES-256).
pub const KEY_SIZE: usize = 32;

/// Size of the trailing, unencrypted padding-length byte.
pub const TRAILER_SIZE: usize = 1;

/// Smallest byte count that can be a container: IV plus trailer.
pub const MIN_CONTAINER_LEN: usize = IV_SIZE + TRAILER_SIZE;

/// Smallest padding that can ever be recorded.
pub const MIN_PADDING: u8 = 1;

/// Largest padding that can ever be recorded (a full extra block).
pub const MAX_PADDING: u8 = BLOCK_SIZE as u8;

/// Suffix appended to encrypted files when no output path is given.
pub const ENCRYPTED_SUFFIX: &str = ".shc";

/// [`ENCRYPTED_SUFFIX`] without the leading dot, as `Path::extension` reports it.
pub const ENCRYPTED_EXTENSION: &str = "shc";

/// Unix permission bits for every file written by [`crate::resource`].
pub const OUTPUT_FILE_MODE: u32 = 0o600;
