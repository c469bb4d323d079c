// src/encryptor/mod.rs

//! Encode path of the container codec.
//!
//! Core API: `encrypt(plaintext, &key)?` returns `IV || Enc(padded) || p`.
//! Deterministic variant: `encrypt_with_iv` for known-answer tests.
//! Utility: `write_*` helpers for the three container regions.

pub(crate) mod encrypt;
pub(crate) mod encrypt_fixed_iv;
pub(crate) mod write;

pub use encrypt::encrypt;
pub use encrypt_fixed_iv::encrypt_with_iv;
pub use write::{write_iv, write_octets, write_padding_length};
