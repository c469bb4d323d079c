// src/lib.rs

//! Key-file based AES-256-CBC file encryption.
//!
//! The key is the SHA-256 digest of an arbitrary "key file". Output is a
//! minimal container: `IV (16) || AES-256-CBC(zero-padded data) || p (1)`,
//! where the last byte records how many zero bytes were appended.
//!
//! The format carries no MAC. The trailing padding byte is neither encrypted
//! nor authenticated, and a wrong key decrypts to garbage without error.

pub mod aliases;
pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod encryptor;
pub mod error;
pub mod layout;
pub mod resource;
pub mod utils;

// High-level API
pub use decryptor::decrypt;
pub use encryptor::{encrypt, encrypt_with_iv};
pub use error::ShcryptError;

// Key derivation is public at the root: front-ends that hold the key bytes
// in memory skip the file read.
pub use crypto::kdf::{derive_key_from_file, derive_key_material};

pub use layout::{inspect, inspect_file, ContainerLayout};
pub use resource::{default_output_path, run, FileResource, Mode, ResourceRequest, Written};
