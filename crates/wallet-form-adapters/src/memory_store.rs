use std::sync::Mutex;

use wallet_form_core::{FormStorePort, PersistenceError, WalletFormRecord};

/// In-memory store that keeps the same JSON encoding as [`crate::JsonFileStore`].
#[derive(Debug, Default)]
pub struct MemoryFormStore {
    json: Mutex<Option<String>>,
}

impl MemoryFormStore {
    pub fn with_json(json: impl Into<String>) -> Self {
        Self {
            json: Mutex::new(Some(json.into())),
        }
    }

    pub fn raw_json(&self) -> Result<Option<String>, PersistenceError> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<String>>, PersistenceError> {
        self.json
            .lock()
            .map_err(|_| PersistenceError::Read("memory store lock poisoned".to_owned()))
    }
}

impl FormStorePort for MemoryFormStore {
    fn load(&self) -> Result<WalletFormRecord, PersistenceError> {
        let guard = self.lock()?;
        let json = guard
            .as_deref()
            .ok_or_else(|| PersistenceError::Missing("memory store is empty".to_owned()))?;
        serde_json::from_str(json).map_err(|e| PersistenceError::Decode(e.to_string()))
    }

    fn save(&self, record: &WalletFormRecord) -> Result<(), PersistenceError> {
        let json =
            serde_json::to_string(record).map_err(|e| PersistenceError::Encode(e.to_string()))?;
        *self.lock()? = Some(json);
        Ok(())
    }
}
