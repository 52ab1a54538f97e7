//! Whole-file persistence for the break timeline.
//!
//! The store is a deliberately dumb collaborator: it reads and writes the
//! timeline file as raw text and knows nothing about slots. Parsing and
//! recovery policy live in the timeline engine. The file path is injected at
//! construction so tests and alternate profiles can point the engine at any
//! location instead of a process-wide computed directory.

use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the timeline inside the application data directory.
pub const TIMELINE_FILE_NAME: &str = "timeline.json";

/// Handle to the timeline file on disk.
#[derive(Debug, Clone)]
pub struct TimelineStore {
    path: PathBuf,
}

impl TimelineStore {
    /// Store at the default platform location.
    pub fn new() -> Result<Self> {
        let path = DataStorage::new().get_path(TIMELINE_FILE_NAME)?;
        Ok(Self { path })
    }

    /// Store at an explicit path.
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    /// Reads the raw timeline text. `Ok(None)` when no file exists yet.
    pub fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&self.path)?))
    }

    /// Replaces the timeline file contents.
    pub fn write(&self, raw: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, raw)?;
        Ok(())
    }
}
