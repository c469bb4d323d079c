//! src/encryptor/write.rs
//! Container write helpers

use crate::aliases::Iv16;
use crate::consts::{MAX_PADDING, MIN_PADDING};
use crate::error::ShcryptError;
use secure_gate::RevealSecret;
use std::io::Write;

#[inline]
pub fn write_octets<W: Write>(writer: &mut W, data: &[u8]) -> Result<(), ShcryptError> {
    writer.write_all(data).map_err(ShcryptError::Io)
}

#[inline]
pub fn write_iv<W: Write>(writer: &mut W, iv: &Iv16) -> Result<(), ShcryptError> {
    write_octets(writer, iv.expose_secret())
}

/// Append the unencrypted trailer byte. Only `1..=16` is ever valid.
#[inline]
pub fn write_padding_length<W: Write>(writer: &mut W, padding: u8) -> Result<(), ShcryptError> {
    if !(MIN_PADDING..=MAX_PADDING).contains(&padding) {
        return Err(ShcryptError::InvalidPadding(format!(
            "refusing to write padding length {padding}"
        )));
    }
    write_octets(writer, &[padding])
}
