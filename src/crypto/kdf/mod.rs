//! # Key Derivation
//!
//! Turns the bytes of a user-chosen key file into [`KeyMaterial32`].
//!
//! No salt and no stretching: the key file carries its own entropy and the
//! digest only normalises its length.
//!
//! [`KeyMaterial32`]: crate::aliases::KeyMaterial32

pub mod sha256;

pub use sha256::{derive_key_from_file, derive_key_material};
