#![allow(dead_code)]

use std::sync::Mutex;

use wallet_form_core::{
    EngineCall, EngineError, EngineRequest, FormStateShell, FormStorePort, PersistenceError,
    WalletEnginePort, WalletFormRecord,
};

pub const STORAGE_PATH: &str = "/var/mobile/Documents/disk";

/// Store keeping the encoded JSON in memory.
#[derive(Debug, Default)]
pub struct JsonCellStore {
    pub contents: Mutex<Option<String>>,
    pub fail_writes: bool,
}

impl JsonCellStore {
    pub fn seeded(json: &str) -> Self {
        Self {
            contents: Mutex::new(Some(json.to_owned())),
            fail_writes: false,
        }
    }

    pub fn failing_writes() -> Self {
        Self {
            contents: Mutex::new(None),
            fail_writes: true,
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.contents.lock().expect("store lock").clone()
    }
}

impl FormStorePort for JsonCellStore {
    fn load(&self) -> Result<WalletFormRecord, PersistenceError> {
        let guard = self.contents.lock().expect("store lock");
        let json = guard
            .as_ref()
            .ok_or_else(|| PersistenceError::Missing("memory".to_owned()))?;
        serde_json::from_str(json).map_err(|e| PersistenceError::Decode(e.to_string()))
    }

    fn save(&self, record: &WalletFormRecord) -> Result<(), PersistenceError> {
        if self.fail_writes {
            return Err(PersistenceError::Write("read-only volume".to_owned()));
        }
        let json =
            serde_json::to_string(record).map_err(|e| PersistenceError::Encode(e.to_string()))?;
        *self.contents.lock().expect("store lock") = Some(json);
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct FakeEngine {
    pub calls: Mutex<Vec<(EngineCall, EngineRequest)>>,
    pub fail_with: Option<EngineError>,
}

impl FakeEngine {
    pub fn recorded(&self) -> Vec<(EngineCall, EngineRequest)> {
        self.calls.lock().expect("engine lock").clone()
    }

    fn record(&self, call: EngineCall, request: &EngineRequest) -> Result<(), EngineError> {
        self.calls
            .lock()
            .expect("engine lock")
            .push((call, request.clone()));
        match &self.fail_with {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

impl WalletEnginePort for FakeEngine {
    fn restore_wallet(&self, request: &EngineRequest) -> Result<(), EngineError> {
        self.record(EngineCall::Restore, request)
    }

    fn sync_wallet(&self, request: &EngineRequest) -> Result<(), EngineError> {
        self.record(EngineCall::Sync, request)
    }
}

pub type TestShell = FormStateShell<JsonCellStore, FakeEngine>;

pub fn new_shell(store: JsonCellStore) -> TestShell {
    FormStateShell::new(store, FakeEngine::default(), STORAGE_PATH)
}

pub fn shell_store_json(shell: &TestShell) -> String {
    shell.store().raw().expect("store holds json")
}

pub fn filled_record() -> WalletFormRecord {
    WalletFormRecord {
        tendermint_url: Some("ws://10.0.0.7:26657/websocket".to_owned()),
        name: Some("savings".to_owned()),
        passphrase: Some("correct horse".to_owned()),
        encryption_key: Some("a1b2c3d4".to_owned()),
        mnemonics: Some(
            "math original guitar once close news cactus crime cool tank honey file".to_owned(),
        ),
    }
}
