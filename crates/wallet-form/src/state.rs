//! Text buffers behind the form inputs

use wallet_form_core::{EngineCall, WalletFormRecord};

#[derive(Debug, Clone, Default)]
pub struct WalletFormUiState {
    pub tendermint_url: String,
    pub name: String,
    pub passphrase: String,
    pub encryption_key: String,
    pub mnemonics: String,
    /// Engine call currently running in the background.
    pub in_flight: Option<EngineCall>,
    pub last_error: Option<String>,
    pub last_info: Option<String>,
}

impl WalletFormUiState {
    pub fn from_record(record: &WalletFormRecord) -> Self {
        let mut state = Self::default();
        state.apply_record(record);
        state
    }

    pub fn apply_record(&mut self, record: &WalletFormRecord) {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        self.tendermint_url = text(&record.tendermint_url);
        self.name = text(&record.name);
        self.passphrase = text(&record.passphrase);
        self.encryption_key = text(&record.encryption_key);
        self.mnemonics = text(&record.mnemonics);
    }

    /// Every input yields a value, so all fields are present.
    pub fn to_record(&self) -> WalletFormRecord {
        WalletFormRecord {
            tendermint_url: Some(self.tendermint_url.clone()),
            name: Some(self.name.clone()),
            passphrase: Some(self.passphrase.clone()),
            encryption_key: Some(self.encryption_key.clone()),
            mnemonics: Some(self.mnemonics.clone()),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.last_info = None;
        self.last_error = Some(message.into());
    }

    pub fn set_info(&mut self, message: impl Into<String>) {
        self.last_error = None;
        self.last_info = Some(message.into());
    }

    pub fn clear_notice(&mut self) {
        self.last_error = None;
        self.last_info = None;
    }
}
