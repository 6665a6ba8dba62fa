//! Persisted slots holding the serialized review collection
//!
//! A slot is a single key with an opaque string value, the same contract a
//! browser's local storage offers. The store owns serialization; slots only
//! move bytes.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::{Error, Result};

/// One persisted key holding the serialized collection
pub trait Slot: Send + Sync {
    /// Read the raw value, `None` when nothing has been persisted
    fn read(&self) -> Result<Option<String>>;

    /// Replace the raw value
    fn write(&self, raw: &str) -> Result<()>;
}

impl<S: Slot + ?Sized> Slot for Box<S> {
    fn read(&self) -> Result<Option<String>> {
        (**self).read()
    }

    fn write(&self, raw: &str) -> Result<()> {
        (**self).write(raw)
    }
}

impl<S: Slot + ?Sized> Slot for Arc<S> {
    fn read(&self) -> Result<Option<String>> {
        (**self).read()
    }

    fn write(&self, raw: &str) -> Result<()> {
        (**self).write(raw)
    }
}

/// In-process slot
#[derive(Debug, Default)]
pub struct MemorySlot {
    value: Mutex<Option<String>>,
}

impl MemorySlot {
    /// Create an empty slot
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot already holding `raw`
    pub fn with_value(raw: impl Into<String>) -> Self {
        Self {
            value: Mutex::new(Some(raw.into())),
        }
    }
}

impl Slot for MemorySlot {
    fn read(&self) -> Result<Option<String>> {
        let value = self
            .value
            .lock()
            .map_err(|_| Error::Storage("memory slot lock poisoned".to_string()))?;
        Ok(value.clone())
    }

    fn write(&self, raw: &str) -> Result<()> {
        let mut value = self
            .value
            .lock()
            .map_err(|_| Error::Storage("memory slot lock poisoned".to_string()))?;
        *value = Some(raw.to_string());
        Ok(())
    }
}

/// Slot backed by a single JSON file
///
/// Writes land in a sibling temp file that is renamed over the target, so a
/// reader never observes a half-written payload.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Create a slot at `path`; the file is created on first write
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("slot"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Slot for FileSlot {
    fn read(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::Io(e)),
        }
    }

    fn write(&self, raw: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let temp = self.temp_path();
        std::fs::write(&temp, raw)?;
        std::fs::rename(&temp, &self.path)?;

        debug!(path = %self.path.display(), bytes = raw.len(), "Wrote file slot");
        Ok(())
    }
}
