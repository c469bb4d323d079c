//! # Container Inspection
//!
//! Structural validation of a `.shc` container without the key: length,
//! block alignment and the clear-text padding byte. Decryption runs the same
//! checks first, so anything accepted here is safe to hand to
//! [`decrypt`](crate::decrypt).

use crate::consts::{BLOCK_SIZE, IV_SIZE, MIN_CONTAINER_LEN, TRAILER_SIZE};
use crate::decryptor::read::check_padding_byte;
use crate::decryptor::{ciphertext_region, read_padding_length};
use crate::error::ShcryptError;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

/// Sizes of the regions of a well-formed container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerLayout {
    /// Bytes between the IV and the trailer (multiple of 16).
    pub ciphertext_len: usize,
    /// Recorded padding length, `1..=16`.
    pub padding_len: u8,
    /// Length of the original plaintext.
    pub plaintext_len: usize,
}

impl ContainerLayout {
    /// Total size on disk: IV + ciphertext + trailer.
    #[must_use]
    pub const fn container_len(&self) -> usize {
        IV_SIZE + self.ciphertext_len + TRAILER_SIZE
    }

    fn from_parts(ciphertext_len: usize, padding_len: u8) -> Result<Self, ShcryptError> {
        let padding_len = check_padding_byte(padding_len)?;
        if padding_len as usize > ciphertext_len {
            return Err(ShcryptError::InvalidPadding(format!(
                "padding length {padding_len} exceeds {ciphertext_len} bytes of ciphertext"
            )));
        }
        Ok(Self {
            ciphertext_len,
            padding_len,
            plaintext_len: ciphertext_len - padding_len as usize,
        })
    }
}

/// Validate an in-memory container and report its layout.
///
/// # Errors
///
/// - [`ShcryptError::MalformedContainer`] - shorter than 17 bytes, or the
///   ciphertext region is not a multiple of 16
/// - [`ShcryptError::InvalidPadding`] - trailer outside `1..=16` or larger
///   than the ciphertext region
///
/// # Example
///
/// ```
/// use shcrypt::inspect;
///
/// let mut container = vec![0u8; 16 + 32];
/// container.push(16);
/// let layout = inspect(&container)?;
/// assert_eq!(layout.ciphertext_len, 32);
/// assert_eq!(layout.plaintext_len, 16);
/// # Ok::<(), shcrypt::ShcryptError>(())
/// ```
pub fn inspect(container: &[u8]) -> Result<ContainerLayout, ShcryptError> {
    let ciphertext_len = ciphertext_region(container)?.len();
    let padding_len = read_padding_length(container)?;
    ContainerLayout::from_parts(ciphertext_len, padding_len)
}

/// Validate a container on disk without loading it.
///
/// Only the file size and the final byte are read.
///
/// # Errors
///
/// [`ShcryptError::SourceFileUnreadable`] on any I/O failure, otherwise the
/// same errors as [`inspect`].
pub fn inspect_file(path: &Path) -> Result<ContainerLayout, ShcryptError> {
    let unreadable = |source: std::io::Error| ShcryptError::SourceFileUnreadable {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(unreadable)?;
    let total_len = file_len_to_usize(file.metadata().map_err(unreadable)?.len())?;

    if total_len < MIN_CONTAINER_LEN {
        return Err(ShcryptError::MalformedContainer(format!(
            "{total_len} bytes is shorter than the {MIN_CONTAINER_LEN}-byte minimum"
        )));
    }

    let ciphertext_len = total_len - IV_SIZE - TRAILER_SIZE;
    if ciphertext_len % BLOCK_SIZE != 0 {
        return Err(ShcryptError::MalformedContainer(format!(
            "ciphertext region of {ciphertext_len} bytes is not a multiple of {BLOCK_SIZE}"
        )));
    }

    let mut trailer = [0u8; TRAILER_SIZE];
    file.seek(SeekFrom::End(-(TRAILER_SIZE as i64)))
        .map_err(unreadable)?;
    file.read_exact(&mut trailer).map_err(unreadable)?;

    ContainerLayout::from_parts(ciphertext_len, trailer[0])
}

/// On-disk length as `usize`; larger than the address space is malformed.
fn file_len_to_usize(len: u64) -> Result<usize, ShcryptError> {
    usize::try_from(len).map_err(|_| {
        ShcryptError::MalformedContainer(format!(
            "{len} bytes does not fit in memory on this platform"
        ))
    })
}
