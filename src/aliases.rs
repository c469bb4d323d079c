//! # Secure Buffer Aliases
//!
//! Fixed-size secret buffers for the container pipeline, all built on
//! [`secure_gate::Fixed`] so that key material and IVs are wiped on drop and
//! never leak through an accidental `Debug` or copy.
//!
//! All access goes through `.expose_secret()` / `.expose_secret_mut()`.

use crate::consts::{BLOCK_SIZE, IV_SIZE, KEY_SIZE};

/// Generic secure stack buffer for any size `N`.
pub type SpanBuffer<const N: usize> = secure_gate::Fixed<[u8; N]>;

/// 32-byte AES-256 key derived from the key file (SHA-256 digest).
pub type KeyMaterial32 = SpanBuffer<KEY_SIZE>;

/// 16-byte CBC initialization vector, stored in clear at offset 0.
pub type Iv16 = SpanBuffer<IV_SIZE>;

/// One AES block of scratch space.
pub type Block16 = SpanBuffer<BLOCK_SIZE>;
