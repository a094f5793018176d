//! Form state holder sitting between the UI and the wallet engine.
//!
//! The shell owns the record the UI edits, keeps it in step with the store and
//! turns it into engine requests. It has no knowledge of any view toolkit.

use std::sync::Arc;

use crate::domain::{EngineCall, EngineRequest, WalletFormRecord};
use crate::ports::{EngineError, FormStorePort, PersistenceError, WalletEnginePort};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellPhase {
    NotLoaded,
    Loaded,
}

/// Result of [`FormStateShell::initialize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Restored,
    /// Nothing usable on disk; the shell holds an empty record.
    FreshStart(PersistenceError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineCallReport {
    pub call: EngineCall,
    /// Set when the record could not be persisted before the call.
    pub persist_error: Option<PersistenceError>,
    pub result: Result<(), EngineError>,
}

impl EngineCallReport {
    pub fn is_success(&self) -> bool {
        self.persist_error.is_none() && self.result.is_ok()
    }
}

/// An engine invocation captured on the UI thread, runnable on any thread.
pub struct PendingEngineCall<E> {
    engine: Arc<E>,
    call: EngineCall,
    request: EngineRequest,
    persist_error: Option<PersistenceError>,
}

impl<E: WalletEnginePort> PendingEngineCall<E> {
    pub fn call(&self) -> EngineCall {
        self.call
    }

    pub fn request(&self) -> &EngineRequest {
        &self.request
    }

    pub fn persist_error(&self) -> Option<&PersistenceError> {
        self.persist_error.as_ref()
    }

    pub fn run(self) -> EngineCallReport {
        tracing::info!(
            call = %self.call,
            tendermint_url = %self.request.tendermint_url,
            storage_path = %self.request.storage_path,
            name = %self.request.name,
            "forwarding to wallet engine"
        );
        let result = match self.call {
            EngineCall::Restore => self.engine.restore_wallet(&self.request),
            EngineCall::Sync => self.engine.sync_wallet(&self.request),
        };
        if let Err(e) = &result {
            tracing::warn!(call = %self.call, "wallet engine call failed: {e}");
        }
        EngineCallReport {
            call: self.call,
            persist_error: self.persist_error,
            result,
        }
    }
}

pub struct FormStateShell<S, E> {
    store: S,
    engine: Arc<E>,
    storage_path: String,
    record: WalletFormRecord,
    phase: ShellPhase,
}

impl<S, E> FormStateShell<S, E>
where
    S: FormStorePort,
    E: WalletEnginePort,
{
    pub fn new(store: S, engine: E, storage_path: impl Into<String>) -> Self {
        Self {
            store,
            engine: Arc::new(engine),
            storage_path: storage_path.into(),
            record: WalletFormRecord::default(),
            phase: ShellPhase::NotLoaded,
        }
    }

    /// Adopts the stored record, or an empty one when loading fails.
    pub fn initialize(&mut self) -> LoadOutcome {
        let outcome = match self.store.load() {
            Ok(record) => {
                tracing::debug!(?record, "form state loaded");
                self.record = record;
                LoadOutcome::Restored
            }
            Err(e) => {
                tracing::warn!("starting with an empty form: {e}");
                self.record = WalletFormRecord::default();
                LoadOutcome::FreshStart(e)
            }
        };
        self.phase = ShellPhase::Loaded;
        outcome
    }

    pub fn load(&self) -> Result<WalletFormRecord, PersistenceError> {
        self.store.load()
    }

    pub fn save(&self) -> Result<(), PersistenceError> {
        self.store.save(&self.record).inspect_err(|e| {
            tracing::warn!("failed to persist form state: {e}");
        })
    }

    pub fn record(&self) -> &WalletFormRecord {
        &self.record
    }

    pub fn replace_record(&mut self, record: WalletFormRecord) {
        self.record = record;
    }

    pub fn phase(&self) -> ShellPhase {
        self.phase
    }

    pub fn storage_path(&self) -> &str {
        &self.storage_path
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn reset_to_defaults(&mut self) -> Result<(), PersistenceError> {
        self.record = WalletFormRecord::canonical_defaults();
        tracing::info!("form reset to defaults");
        self.save()
    }

    /// Persists the record, then captures the request for `call`.
    ///
    /// A failed save does not prevent the engine call; it is carried into the report.
    pub fn prepare(&self, call: EngineCall) -> PendingEngineCall<E> {
        let persist_error = self.save().err();
        PendingEngineCall {
            engine: Arc::clone(&self.engine),
            call,
            request: EngineRequest::from_record(&self.record, self.storage_path.clone()),
            persist_error,
        }
    }

    pub fn create_or_restore_wallet(&self) -> EngineCallReport {
        self.prepare(EngineCall::Restore).run()
    }

    pub fn sync_wallet(&self) -> EngineCallReport {
        self.prepare(EngineCall::Sync).run()
    }
}
