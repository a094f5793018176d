use std::fmt;

use serde::{Deserialize, Serialize};

/// Node endpoint written by "reset to defaults".
pub const DEFAULT_TENDERMINT_URL: &str = "ws://localhost:26657/websocket";
/// Wallet name written by "reset to defaults".
pub const DEFAULT_WALLET_NAME: &str = "a";

/// Form values persisted between launches.
///
/// Field names on disk are fixed by files written by earlier builds, including the
/// `passphras` key.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletFormRecord {
    #[serde(rename = "tendermint", default, skip_serializing_if = "Option::is_none")]
    pub tendermint_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "passphras", default, skip_serializing_if = "Option::is_none")]
    pub passphrase: Option<String>,
    #[serde(rename = "enckey", default, skip_serializing_if = "Option::is_none")]
    pub encryption_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mnemonics: Option<String>,
}

impl WalletFormRecord {
    pub fn canonical_defaults() -> Self {
        Self {
            tendermint_url: Some(DEFAULT_TENDERMINT_URL.to_owned()),
            name: Some(DEFAULT_WALLET_NAME.to_owned()),
            passphrase: Some(String::new()),
            encryption_key: Some(String::new()),
            mnemonics: Some(String::new()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

// Secrets stay out of logs: only presence is shown.
impl fmt::Debug for WalletFormRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletFormRecord")
            .field("tendermint_url", &self.tendermint_url)
            .field("name", &self.name)
            .field("passphrase", &Redacted(&self.passphrase))
            .field("encryption_key", &Redacted(&self.encryption_key))
            .field("mnemonics", &Redacted(&self.mnemonics))
            .finish()
    }
}

struct Redacted<'a>(&'a Option<String>);

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) if v.is_empty() => f.write_str("Some(<empty>)"),
            Some(_) => f.write_str("Some(<redacted>)"),
            None => f.write_str("None"),
        }
    }
}

/// The two entry points exposed by the wallet engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineCall {
    Restore,
    Sync,
}

impl EngineCall {
    pub fn entry_point(&self) -> &'static str {
        match self {
            EngineCall::Restore => "restore_wallet",
            EngineCall::Sync => "sync_wallet",
        }
    }
}

impl fmt::Display for EngineCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.entry_point())
    }
}

/// Positional arguments shared by `restore_wallet` and `sync_wallet`.
#[derive(Clone, PartialEq, Eq)]
pub struct EngineRequest {
    pub tendermint_url: String,
    pub storage_path: String,
    pub name: String,
    pub passphrase: String,
    pub encryption_key: String,
    pub mnemonics: String,
}

impl EngineRequest {
    /// Absent fields forward as empty strings, the value an untouched text input yields.
    pub fn from_record(record: &WalletFormRecord, storage_path: impl Into<String>) -> Self {
        let field = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            tendermint_url: field(&record.tendermint_url),
            storage_path: storage_path.into(),
            name: field(&record.name),
            passphrase: field(&record.passphrase),
            encryption_key: field(&record.encryption_key),
            mnemonics: field(&record.mnemonics),
        }
    }

    pub fn as_args(&self) -> [&str; 6] {
        [
            self.tendermint_url.as_str(),
            self.storage_path.as_str(),
            self.name.as_str(),
            self.passphrase.as_str(),
            self.encryption_key.as_str(),
            self.mnemonics.as_str(),
        ]
    }
}

impl fmt::Debug for EngineRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineRequest")
            .field("tendermint_url", &self.tendermint_url)
            .field("storage_path", &self.storage_path)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
