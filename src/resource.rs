//! # File Resource
//!
//! One-shot orchestration of a single encrypt or decrypt request:
//!
//! ```text
//! FileResource::load ──► Transformed ──► Written
//!   (source + key read)   (codec applied)  (output persisted)
//! ```
//!
//! Each stage consumes the previous one, so no stage can run twice. Every
//! failure comes back as a [`ShcryptError`]; nothing here exits the process.
//!
//! ## Output naming
//!
//! With no explicit output path the result lands in the current directory:
//! `<name>.shc` when encrypting, and `<name>` with a trailing `.shc` removed
//! when decrypting.

use crate::aliases::KeyMaterial32;
use crate::consts::{ENCRYPTED_EXTENSION, ENCRYPTED_SUFFIX};
use crate::crypto::kdf::derive_key_from_file;
use crate::error::ShcryptError;
use crate::{decrypt, encrypt};
use std::ffi::OsStr;
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Direction of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Encrypt,
    Decrypt,
}

impl Mode {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Mode::Encrypt => "encrypt",
            Mode::Decrypt => "decrypt",
        }
    }

    /// Verb for log lines once the work is done.
    #[must_use]
    pub const fn past_tense(&self) -> &'static str {
        match self {
            Mode::Encrypt => "encrypted",
            Mode::Decrypt => "decrypted",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a front-end resolves before calling [`run`].
///
/// # Example
///
/// ```
/// use shcrypt::{Mode, ResourceRequest};
///
/// let request = ResourceRequest::encrypt("report.pdf", "my.key").with_output("");
/// assert_eq!(request.mode, Mode::Encrypt);
/// assert_eq!(request.output, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRequest {
    pub source: PathBuf,
    /// `None` selects the default output name.
    pub output: Option<PathBuf>,
    pub key_file: PathBuf,
    pub mode: Mode,
}

impl ResourceRequest {
    #[must_use]
    pub fn new(source: impl Into<PathBuf>, key_file: impl Into<PathBuf>, mode: Mode) -> Self {
        Self {
            source: source.into(),
            output: None,
            key_file: key_file.into(),
            mode,
        }
    }

    #[must_use]
    pub fn encrypt(source: impl Into<PathBuf>, key_file: impl Into<PathBuf>) -> Self {
        Self::new(source, key_file, Mode::Encrypt)
    }

    #[must_use]
    pub fn decrypt(source: impl Into<PathBuf>, key_file: impl Into<PathBuf>) -> Self {
        Self::new(source, key_file, Mode::Decrypt)
    }

    /// Set an explicit output path. An empty path means "use the default name".
    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        let output = output.into();
        self.output = (!output.as_os_str().is_empty()).then_some(output);
        self
    }
}

/// Loaded state: source bytes and derived key held in memory.
pub struct FileResource {
    source: PathBuf,
    key: KeyMaterial32,
    data: Vec<u8>,
}

impl fmt::Debug for FileResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileResource")
            .field("source", &self.source)
            .field("len", &self.data.len())
            .finish_non_exhaustive()
    }
}

impl FileResource {
    /// Resolve both paths, read both files fully and derive the key.
    ///
    /// The key file is read first, then the source.
    ///
    /// # Errors
    ///
    /// - [`ShcryptError::KeyFileUnreadable`]
    /// - [`ShcryptError::SourceFileUnreadable`]
    pub fn load(source: &Path, key_file: &Path) -> Result<Self, ShcryptError> {
        let key = derive_key_from_file(key_file)?;

        let unreadable = |err: std::io::Error| ShcryptError::SourceFileUnreadable {
            path: source.to_path_buf(),
            source: err,
        };
        let absolute = std::path::absolute(source).map_err(unreadable)?;
        let data = std::fs::read(&absolute).map_err(unreadable)?;

        log::debug!("loaded {} ({} bytes)", absolute.display(), data.len());

        Ok(Self {
            source: source.to_path_buf(),
            key,
            data,
        })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Size of the loaded source in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn encrypt(self) -> Result<Transformed, ShcryptError> {
        self.transform(Mode::Encrypt)
    }

    pub fn decrypt(self) -> Result<Transformed, ShcryptError> {
        self.transform(Mode::Decrypt)
    }

    /// Apply the container codec in the given direction.
    ///
    /// # Errors
    ///
    /// Decrypting: [`ShcryptError::MalformedContainer`] or
    /// [`ShcryptError::InvalidPadding`]. Encrypting: [`ShcryptError::Crypto`]
    /// if no IV could be generated.
    pub fn transform(self, mode: Mode) -> Result<Transformed, ShcryptError> {
        let data = match mode {
            Mode::Encrypt => encrypt(&self.data, &self.key)?,
            Mode::Decrypt => decrypt(&self.data, &self.key)?,
        };

        Ok(Transformed {
            source: self.source,
            mode,
            data,
        })
    }
}

/// Transformed state: output bytes ready to be written.
pub struct Transformed {
    source: PathBuf,
    mode: Mode,
    data: Vec<u8>,
}

impl fmt::Debug for Transformed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transformed")
            .field("source", &self.source)
            .field("mode", &self.mode)
            .field("len", &self.data.len())
            .finish()
    }
}

impl Transformed {
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Write the output, either to `output` or to the default name.
    ///
    /// An empty `output` path selects the default name, as `None` does.
    ///
    /// The file is written to a temporary sibling and renamed into place, so
    /// on failure nothing is left at the destination.
    ///
    /// # Errors
    ///
    /// - [`ShcryptError::InvalidPath`] if no default name can be derived
    /// - [`ShcryptError::OutputWriteFailed`]
    pub fn persist(self, output: Option<&Path>) -> Result<Written, ShcryptError> {
        let output = output.filter(|path| !path.as_os_str().is_empty());
        let path = match output {
            Some(path) => path.to_path_buf(),
            None => default_output_path(&self.source, self.mode)?,
        };

        if output.is_none() && self.source.file_name() == path.file_name() {
            log::warn!(
                "{} has no {ENCRYPTED_SUFFIX} suffix; output reuses its name",
                self.source.display()
            );
        }

        let absolute = std::path::absolute(&path).map_err(|source| {
            ShcryptError::OutputWriteFailed {
                path: path.clone(),
                source,
            }
        })?;
        write_atomic(&absolute, &self.data)?;

        log::info!("{} {}", self.mode.past_tense(), absolute.display());

        Ok(Written {
            path: absolute,
            bytes_written: self.data.len(),
        })
    }
}

/// Written state: where the output went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Written {
    pub path: PathBuf,
    pub bytes_written: usize,
}

/// Default output name for `source` (base name only, no directory).
///
/// # Errors
///
/// [`ShcryptError::InvalidPath`] if `source` has no file name (`/`, `..`).
///
/// # Example
///
/// ```
/// use shcrypt::{default_output_path, Mode};
/// use std::path::Path;
///
/// let enc = default_output_path(Path::new("docs/report.pdf"), Mode::Encrypt)?;
/// assert_eq!(enc, Path::new("report.pdf.shc"));
/// let dec = default_output_path(Path::new("report.pdf.shc"), Mode::Decrypt)?;
/// assert_eq!(dec, Path::new("report.pdf"));
/// # Ok::<(), shcrypt::ShcryptError>(())
/// ```
pub fn default_output_path(source: &Path, mode: Mode) -> Result<PathBuf, ShcryptError> {
    let name = source
        .file_name()
        .ok_or_else(|| ShcryptError::InvalidPath(source.to_path_buf()))?;

    let output = match mode {
        Mode::Encrypt => {
            let mut name = name.to_os_string();
            name.push(ENCRYPTED_SUFFIX);
            PathBuf::from(name)
        }
        Mode::Decrypt => {
            let name = Path::new(name);
            match (name.extension(), name.file_stem()) {
                (Some(ext), Some(stem)) if ext == OsStr::new(ENCRYPTED_EXTENSION) => {
                    PathBuf::from(stem)
                }
                _ => name.to_path_buf(),
            }
        }
    };

    Ok(output)
}

/// Single entry point for front-ends: load, transform, persist.
///
/// Returns where the output was written.
pub fn run(request: &ResourceRequest) -> Result<Written, ShcryptError> {
    log::debug!(
        "{} {} with key {}",
        request.mode,
        request.source.display(),
        request.key_file.display()
    );

    FileResource::load(&request.source, &request.key_file)?
        .transform(request.mode)?
        .persist(request.output.as_deref())
}

fn write_atomic(path: &Path, data: &[u8]) -> Result<(), ShcryptError> {
    let failed = |source: std::io::Error| ShcryptError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::Builder::new()
        .prefix(".shcrypt-")
        .tempfile_in(dir)
        .map_err(failed)?;
    tmp.write_all(data).map_err(failed)?;

    #[cfg(unix)]
    {
        use crate::consts::OUTPUT_FILE_MODE;
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(OUTPUT_FILE_MODE))
            .map_err(failed)?;
    }

    tmp.as_file().sync_all().map_err(failed)?;
    tmp.persist(path).map_err(|e| failed(e.error))?;

    Ok(())
}
