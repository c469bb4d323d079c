//! src/crypto/rng.rs
//! Secure randomness for fixed-size secrets
//!
//! Adds `T::try_random()` to every `Fixed<[u8; N]>` alias (`Iv16`,
//! `KeyMaterial32`, ...) backed by a thread-local `OsRng`.

use crate::aliases::Iv16;
use crate::error::ShcryptError;
use rand::{rngs::OsRng, TryRngCore};
use secure_gate::Fixed;
use std::cell::RefCell;

/// Extension trait – gives `.try_random()` to all fixed-size secret types
pub trait SecureRandomExt: Sized {
    /// Fill a fresh instance from the operating system's CSPRNG.
    fn try_random() -> Result<Self, ShcryptError>;
}

thread_local! {
    static RNG: RefCell<OsRng> = const { RefCell::new(OsRng) };
}

impl<const N: usize> SecureRandomExt for Fixed<[u8; N]> {
    #[inline]
    fn try_random() -> Result<Self, ShcryptError> {
        RNG.with(|rng_cell| {
            let mut rng = rng_cell.borrow_mut();
            let mut bytes = [0u8; N];
            rng.try_fill_bytes(&mut bytes)
                .map_err(|e| ShcryptError::Crypto(format!("random source failed: {e}")))?;
            Ok(Fixed::new(bytes))
        })
    }
}

/// Fresh 16-byte IV for one encryption. Never reuse the result.
#[inline]
pub fn random_iv() -> Result<Iv16, ShcryptError> {
    Iv16::try_random()
}
