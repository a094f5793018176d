use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use wallet_form_core::{FormStorePort, PersistenceError, WalletFormRecord};

use crate::config::FormShellConfig;

/// Form record stored as a single JSON file at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(cfg: &FormShellConfig) -> Self {
        Self::new(cfg.form_file_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FormStorePort for JsonFileStore {
    fn load(&self) -> Result<WalletFormRecord, PersistenceError> {
        let json = std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => PersistenceError::Missing(self.path.display().to_string()),
            _ => PersistenceError::Read(format!("{}: {e}", self.path.display())),
        })?;
        let record = serde_json::from_str(&json)
            .map_err(|e| PersistenceError::Decode(format!("{}: {e}", self.path.display())))?;
        Ok(record)
    }

    fn save(&self, record: &WalletFormRecord) -> Result<(), PersistenceError> {
        let json = serde_json::to_string_pretty(record)
            .map_err(|e| PersistenceError::Encode(e.to_string()))?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| PersistenceError::Write(format!("{}: {e}", parent.display())))?;
        }
        std::fs::write(&self.path, json)
            .map_err(|e| PersistenceError::Write(format!("{}: {e}", self.path.display())))?;
        tracing::debug!(path = %self.path.display(), "form state saved");
        Ok(())
    }
}
