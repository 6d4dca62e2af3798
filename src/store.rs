//! Session persistence
//!
//! Best-effort storage for a [`SessionState`] between runs. Nothing in the
//! catalog, resolver or calculator depends on it.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, warn};

use crate::session::SessionState;

/// Errors raised while saving a session.
#[derive(Debug, Error)]
pub enum StoreError {
    /// IO error writing the state file
    #[error("Failed to write session state: {0}")]
    Io(#[from] io::Error),

    /// YAML serialisation error
    #[error("Failed to serialise session state: {0}")]
    Yaml(#[from] serde_norway::Error),
}

/// Somewhere a session can be saved and restored.
pub trait SessionStore {
    /// Restore the last saved session, or `None` if there is nothing usable.
    fn load(&self) -> Option<SessionState>;

    /// Save the session.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the session could not be written.
    fn save(&self, state: &SessionState) -> Result<(), StoreError>;
}

/// Session stored as a YAML file.
#[derive(Debug, Clone)]
pub struct YamlFileStore {
    path: PathBuf,
}

impl YamlFileStore {
    /// Store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the state file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for YamlFileStore {
    fn load(&self) -> Option<SessionState> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no saved session");

                return None;
            }
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "could not read saved session"
                );

                return None;
            }
        };

        match serde_norway::from_str(&contents) {
            Ok(state) => Some(state),
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "ignoring malformed saved session"
                );

                None
            }
        }
    }

    fn save(&self, state: &SessionState) -> Result<(), StoreError> {
        let yaml = serde_norway::to_string(state)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, yaml)?;

        debug!(path = %self.path.display(), "session saved");

        Ok(())
    }
}
