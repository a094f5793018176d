use std::path::{Path, PathBuf};

/// Environment variable overriding the documents directory.
pub const DOCUMENTS_DIR_ENV: &str = "WALLET_FORM_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormShellConfig {
    /// Application-private directory holding the form file and engine storage.
    pub documents_dir: PathBuf,
    pub form_file_name: String,
    /// Directory under `documents_dir` handed to the wallet engine.
    pub engine_storage_dir_name: String,
}

impl Default for FormShellConfig {
    fn default() -> Self {
        let documents_dir = dirs::document_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::with_documents_dir(documents_dir)
    }
}

impl FormShellConfig {
    pub fn with_documents_dir(documents_dir: impl Into<PathBuf>) -> Self {
        Self {
            documents_dir: documents_dir.into(),
            form_file_name: "wallet_form.json".to_owned(),
            engine_storage_dir_name: "disk".to_owned(),
        }
    }

    pub fn from_env() -> Self {
        match std::env::var_os(DOCUMENTS_DIR_ENV) {
            Some(dir) if !dir.is_empty() => {
                tracing::debug!(dir = ?dir, "documents directory overridden from environment");
                Self::with_documents_dir(dir)
            }
            _ => Self::default(),
        }
    }

    pub fn documents_dir(&self) -> &Path {
        &self.documents_dir
    }

    pub fn form_file_path(&self) -> PathBuf {
        self.documents_dir.join(&self.form_file_name)
    }

    pub fn engine_storage_path(&self) -> PathBuf {
        self.documents_dir.join(&self.engine_storage_dir_name)
    }
}
