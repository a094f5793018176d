//! Bridge between the egui view and the form shell.
//! Engine calls leave the UI thread here; everything else runs inline.

use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, PoisonError};

use wallet_form_adapters::{FormShellConfig, JsonFileStore};
use wallet_form_core::{
    EngineCall, EngineCallReport, EngineError, FormStateShell, FormStorePort, LoadOutcome,
    PersistenceError, WalletEnginePort, WalletFormRecord,
};

#[cfg(feature = "native-engine")]
pub type AppEngine = wallet_form_adapters::NativeEngineAdapter;
#[cfg(not(feature = "native-engine"))]
pub type AppEngine = wallet_form_adapters::UnlinkedEngineAdapter;

pub type AppBridge = ShellBridge<JsonFileStore, AppEngine>;

pub struct ShellBridge<S, E> {
    shell: FormStateShell<S, E>,
    report: Arc<Mutex<Option<EngineCallReport>>>,
}

impl AppBridge {
    pub fn from_config(config: &FormShellConfig) -> Self {
        let storage_path = config.engine_storage_path().display().to_string();
        Self::new(FormStateShell::new(
            JsonFileStore::from_config(config),
            AppEngine::default(),
            storage_path,
        ))
    }
}

impl<S, E> ShellBridge<S, E>
where
    S: FormStorePort,
    E: WalletEnginePort + 'static,
{
    pub fn new(shell: FormStateShell<S, E>) -> Self {
        Self {
            shell,
            report: Arc::new(Mutex::new(None)),
        }
    }

    pub fn initialize(&mut self) -> LoadOutcome {
        self.shell.initialize()
    }

    pub fn record(&self) -> &WalletFormRecord {
        self.shell.record()
    }

    pub fn save(&mut self, record: WalletFormRecord) -> Result<(), PersistenceError> {
        self.shell.replace_record(record);
        self.shell.save()
    }

    pub fn reset_to_defaults(&mut self) -> Result<(), PersistenceError> {
        self.shell.reset_to_defaults()
    }

    /// Persists `record` and runs `call` on a worker thread.
    ///
    /// `on_done` fires on the worker once the report is available from [`Self::take_report`].
    /// A panic inside the engine is published as a failed report.
    pub fn dispatch(
        &mut self,
        record: WalletFormRecord,
        call: EngineCall,
        on_done: impl FnOnce() + Send + 'static,
    ) {
        self.shell.replace_record(record);
        let pending = self.shell.prepare(call);
        let slot = Arc::clone(&self.report);
        std::thread::spawn(move || {
            let call = pending.call();
            let persist_error = pending.persist_error().cloned();
            let report = panic::catch_unwind(AssertUnwindSafe(|| pending.run())).unwrap_or_else(
                |payload| {
                    let reason = panic_message(payload.as_ref());
                    tracing::error!(%call, "wallet engine panicked: {reason}");
                    EngineCallReport {
                        call,
                        persist_error,
                        result: Err(EngineError::Failed(format!("engine panicked: {reason}"))),
                    }
                },
            );
            *slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(report);
            on_done();
        });
    }

    pub fn take_report(&self) -> Option<EngineCallReport> {
        self.report
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_owned()
    }
}
