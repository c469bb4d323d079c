// src/decryptor/mod.rs

//! Decode path of the container codec.
//!
//! Core API: `decrypt(container, &key)?` for the whole container.
//! Helpers: `split_container`, or `read_iv`, `read_padding_length` and
//! `ciphertext_region` individually, for custom flows.

pub(crate) mod decrypt;
pub(crate) mod read;

pub use decrypt::decrypt;
pub use read::{ciphertext_region, read_iv, read_padding_length, split_container};
