// SPDX-License-Identifier: MIT OR Apache-2.0

//! File configuration source adapter.
//!
//! This module provides a [`LineSource`] that reads configuration text from a file
//! on disk, either at an explicit path or in the OS-appropriate configuration
//! directory for an application.

use crate::domain::{KvError, Result, Store};
use crate::ports::LineSource;
use directories::ProjectDirs;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Maximum allowed size for configuration files (10MB)
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Extension of the file looked up by [`FileSource::from_default_location`].
const DEFAULT_EXTENSION: &str = "cfg";

/// Configuration source for a file on disk.
///
/// Nothing is read until the source is opened, so a `FileSource` can be built
/// for a file that does not exist yet; opening it then fails with an I/O error.
///
/// # Examples
///
/// ```rust,no_run
/// use kvparse::adapters::FileSource;
/// use kvparse::domain::{Store, TypedAccessor};
///
/// # fn main() -> kvparse::domain::Result<()> {
/// let mut store = Store::new();
/// store.parse_source(&mut FileSource::from_file("/etc/ga/run.cfg"))?;
///
/// // Or look in the per-user configuration directory
/// let mut source = FileSource::from_default_location("ga", "org.example")?;
/// store.parse_source(&mut source)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FileSource {
    /// Path to the file
    file_path: PathBuf,
    /// Identifier used in diagnostics
    name: String,
}

impl FileSource {
    /// Creates a source for the file at `path`.
    ///
    /// The path as given, not its canonical form, names the source in errors.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Self {
        let file_path = path.as_ref().to_path_buf();
        let name = file_path.display().to_string();
        Self { file_path, name }
    }

    /// Creates a source for `<config dir>/<app_name>.cfg`.
    ///
    /// The configuration directory comes from the `directories` crate, for
    /// example `~/.config/<app_name>` on Linux.
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        let filename = format!("{}.{}", app_name, DEFAULT_EXTENSION);
        Self::with_filename(app_name, qualifier, &filename)
    }

    /// Creates a source for a custom file name in the default location.
    pub fn with_filename(app_name: &str, qualifier: &str, filename: &str) -> Result<Self> {
        let proj_dirs = ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| {
            KvError::io(
                app_name,
                io::Error::new(
                    io::ErrorKind::NotFound,
                    "failed to determine project directories",
                ),
            )
        })?;

        Ok(Self::from_file(proj_dirs.config_dir().join(filename)))
    }

    /// Returns the path of the file.
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Returns `true` if the file currently exists.
    pub fn exists(&self) -> bool {
        self.file_path.is_file()
    }
}

impl LineSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn open(&mut self) -> Result<Box<dyn BufRead + '_>> {
        // Check file size before reading to avoid loading huge files
        let metadata = fs::metadata(&self.file_path).map_err(|e| KvError::io(&self.name, e))?;
        if metadata.len() > MAX_FILE_SIZE {
            return Err(KvError::io(
                &self.name,
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!(
                        "configuration file too large: {} bytes (max {} bytes)",
                        metadata.len(),
                        MAX_FILE_SIZE
                    ),
                ),
            ));
        }

        let file = File::open(&self.file_path).map_err(|e| KvError::io(&self.name, e))?;
        tracing::debug!("Opened configuration file '{}'", self.name);
        Ok(Box::new(BufReader::new(file)))
    }
}

impl Store {
    /// Parses the configuration file at `path`.
    ///
    /// Shorthand for [`Store::parse_source`] with a [`FileSource`]; the path
    /// names the source in any error.
    pub fn parse_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        self.parse_source(&mut FileSource::from_file(path))
    }
}
