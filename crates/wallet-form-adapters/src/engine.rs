use std::sync::Mutex;

use wallet_form_core::{EngineCall, EngineError, EngineRequest, WalletEnginePort};

/// Used when the binary is built without the native wallet library.
#[derive(Debug, Clone, Default)]
pub struct UnlinkedEngineAdapter;

impl WalletEnginePort for UnlinkedEngineAdapter {
    fn restore_wallet(&self, _request: &EngineRequest) -> Result<(), EngineError> {
        Err(EngineError::NotLinked("engine.restore_wallet"))
    }

    fn sync_wallet(&self, _request: &EngineRequest) -> Result<(), EngineError> {
        Err(EngineError::NotLinked("engine.sync_wallet"))
    }
}

/// Engine double that records every call in order.
#[derive(Debug, Default)]
pub struct RecordingEngineAdapter {
    calls: Mutex<Vec<(EngineCall, EngineRequest)>>,
    failure: Option<EngineError>,
}

impl RecordingEngineAdapter {
    pub fn failing_with(error: EngineError) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: Some(error),
        }
    }

    pub fn calls(&self) -> Result<Vec<(EngineCall, EngineRequest)>, EngineError> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<(EngineCall, EngineRequest)>>, EngineError> {
        self.calls
            .lock()
            .map_err(|_| EngineError::Failed("recording lock poisoned".to_owned()))
    }

    fn record(&self, call: EngineCall, request: &EngineRequest) -> Result<(), EngineError> {
        self.lock()?.push((call, request.clone()));
        match &self.failure {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

impl WalletEnginePort for RecordingEngineAdapter {
    fn restore_wallet(&self, request: &EngineRequest) -> Result<(), EngineError> {
        self.record(EngineCall::Restore, request)
    }

    fn sync_wallet(&self, request: &EngineRequest) -> Result<(), EngineError> {
        self.record(EngineCall::Sync, request)
    }
}

#[cfg(feature = "native-engine")]
pub use native::NativeEngineAdapter;

#[cfg(feature = "native-engine")]
mod native {
    use std::ffi::CString;
    use std::os::raw::c_char;

    use wallet_form_core::{EngineCall, EngineError, EngineRequest, WalletEnginePort};

    #[link(name = "cro_clib")]
    extern "C" {
        fn restore_wallet(
            tendermint_url: *const c_char,
            storage: *const c_char,
            name: *const c_char,
            passphrase: *const c_char,
            enckey: *const c_char,
            mnemonics: *const c_char,
        );
        fn sync_wallet(
            tendermint_url: *const c_char,
            storage: *const c_char,
            name: *const c_char,
            passphrase: *const c_char,
            enckey: *const c_char,
            mnemonics: *const c_char,
        );
    }

    /// Forwards to the C ABI of the native wallet library.
    #[derive(Debug, Clone, Default)]
    pub struct NativeEngineAdapter;

    impl NativeEngineAdapter {
        fn invoke(&self, call: EngineCall, request: &EngineRequest) -> Result<(), EngineError> {
            let args = c_strings(request)?;
            let [url, storage, name, passphrase, enckey, mnemonics] = &args;
            // SAFETY: every pointer comes from a live NUL-terminated CString that
            // outlives the call; the library does not retain them.
            unsafe {
                match call {
                    EngineCall::Restore => restore_wallet(
                        url.as_ptr(),
                        storage.as_ptr(),
                        name.as_ptr(),
                        passphrase.as_ptr(),
                        enckey.as_ptr(),
                        mnemonics.as_ptr(),
                    ),
                    EngineCall::Sync => sync_wallet(
                        url.as_ptr(),
                        storage.as_ptr(),
                        name.as_ptr(),
                        passphrase.as_ptr(),
                        enckey.as_ptr(),
                        mnemonics.as_ptr(),
                    ),
                }
            }
            Ok(())
        }
    }

    impl WalletEnginePort for NativeEngineAdapter {
        fn restore_wallet(&self, request: &EngineRequest) -> Result<(), EngineError> {
            self.invoke(EngineCall::Restore, request)
        }

        fn sync_wallet(&self, request: &EngineRequest) -> Result<(), EngineError> {
            self.invoke(EngineCall::Sync, request)
        }
    }

    const ARG_NAMES: [&str; 6] = [
        "tendermint_url",
        "storage_path",
        "name",
        "passphrase",
        "encryption_key",
        "mnemonics",
    ];

    fn c_strings(request: &EngineRequest) -> Result<[CString; 6], EngineError> {
        let mut out: Vec<CString> = Vec::with_capacity(6);
        for (arg, label) in request.as_args().into_iter().zip(ARG_NAMES) {
            let c = CString::new(arg).map_err(|_| {
                EngineError::InvalidArgument(format!("{label} contains a NUL byte"))
            })?;
            out.push(c);
        }
        out.try_into()
            .map_err(|_| EngineError::InvalidArgument("expected six arguments".to_owned()))
    }

}
