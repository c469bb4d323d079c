//! src/crypto/engine.rs
//! AES-256-CBC over whole-block buffers, in place
//!
//! The block primitive comes from the `aes` crate; chaining is done here with
//! [`xor_blocks`] so both directions stay visible side by side.
//!
//! There is no authentication. A flipped ciphertext bit garbles its own block
//! and flips the same bit in the next one, and decryption still succeeds.

use crate::aliases::{Block16, Iv16, KeyMaterial32};
use crate::consts::BLOCK_SIZE;
use crate::error::ShcryptError;
use crate::utils::xor_blocks;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes256Dec, Aes256Enc, Block as AesBlock};
use secure_gate::{RevealSecret, RevealSecretMut};

/// Block cipher keyed with [`KeyMaterial32`], operating in CBC mode.
pub struct CipherEngine {
    encryptor: Aes256Enc,
    decryptor: Aes256Dec,
}

impl CipherEngine {
    /// Expand the key schedule for both directions.
    pub fn new(key: &KeyMaterial32) -> Self {
        Self {
            encryptor: Aes256Enc::new(key.expose_secret().into()),
            decryptor: Aes256Dec::new(key.expose_secret().into()),
        }
    }

    /// CBC-encrypt `buffer` in place, chaining from `iv`.
    ///
    /// The IV must never be reused with the same key; see
    /// [`random_iv`](crate::crypto::rng::random_iv).
    ///
    /// # Errors
    ///
    /// [`ShcryptError::MalformedInput`] if `buffer.len()` is not a multiple of 16.
    pub fn encrypt_blocks(&self, iv: &Iv16, buffer: &mut [u8]) -> Result<(), ShcryptError> {
        ensure_block_aligned(buffer)?;

        let mut prev_block: [u8; BLOCK_SIZE] = *iv.expose_secret();
        let mut xor_output = Block16::new([0u8; BLOCK_SIZE]);

        for chunk in buffer.chunks_exact_mut(BLOCK_SIZE) {
            xor_blocks(chunk, &prev_block, xor_output.expose_secret_mut());

            let mut aes_block = AesBlock::from(*xor_output.expose_secret());
            self.encryptor.encrypt_block(&mut aes_block);
            chunk.copy_from_slice(aes_block.as_slice());

            prev_block.copy_from_slice(chunk);
        }

        Ok(())
    }

    /// CBC-decrypt `buffer` in place using the IV stored next to it.
    ///
    /// # Errors
    ///
    /// [`ShcryptError::MalformedInput`] if `buffer.len()` is not a multiple of 16.
    pub fn decrypt_blocks(&self, iv: &Iv16, buffer: &mut [u8]) -> Result<(), ShcryptError> {
        ensure_block_aligned(buffer)?;

        let mut prev_block: [u8; BLOCK_SIZE] = *iv.expose_secret();
        let mut ciphertext_block = [0u8; BLOCK_SIZE];

        for chunk in buffer.chunks_exact_mut(BLOCK_SIZE) {
            ciphertext_block.copy_from_slice(chunk);

            let mut aes_block = AesBlock::from(ciphertext_block);
            self.decryptor.decrypt_block(&mut aes_block);
            xor_blocks(aes_block.as_slice(), &prev_block, chunk);

            prev_block = ciphertext_block;
        }

        Ok(())
    }
}

#[inline]
fn ensure_block_aligned(buffer: &[u8]) -> Result<(), ShcryptError> {
    if buffer.len() % BLOCK_SIZE != 0 {
        return Err(ShcryptError::MalformedInput(format!(
            "buffer length {} is not a multiple of {BLOCK_SIZE}",
            buffer.len()
        )));
    }
    Ok(())
}
