// src/crypto/mod.rs

//! Low-level crypto primitives: key derivation, IV generation and the
//! CBC engine.
//!
//! The container codec in [`crate::encryptor`] / [`crate::decryptor`] is the
//! only intended caller; these are public for custom flows and tests.

pub mod engine;
pub mod kdf;
pub mod rng;

pub use engine::CipherEngine;
