use thiserror::Error;

use crate::domain::{EngineRequest, WalletFormRecord};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    #[error("form file not found: {0}")]
    Missing(String),
    #[error("failed to read form file: {0}")]
    Read(String),
    #[error("invalid form JSON: {0}")]
    Decode(String),
    #[error("failed to encode form JSON: {0}")]
    Encode(String),
    #[error("failed to write form file: {0}")]
    Write(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("wallet engine not linked: {0}")]
    NotLinked(&'static str),
    #[error("invalid engine argument: {0}")]
    InvalidArgument(String),
    #[error("wallet engine failed: {0}")]
    Failed(String),
}

pub trait FormStorePort {
    fn load(&self) -> Result<WalletFormRecord, PersistenceError>;
    fn save(&self, record: &WalletFormRecord) -> Result<(), PersistenceError>;
}

/// Capability boundary around the native wallet library.
pub trait WalletEnginePort: Send + Sync {
    fn restore_wallet(&self, request: &EngineRequest) -> Result<(), EngineError>;
    fn sync_wallet(&self, request: &EngineRequest) -> Result<(), EngineError>;
}

impl<T: WalletEnginePort + ?Sized> WalletEnginePort for std::sync::Arc<T> {
    fn restore_wallet(&self, request: &EngineRequest) -> Result<(), EngineError> {
        (**self).restore_wallet(request)
    }

    fn sync_wallet(&self, request: &EngineRequest) -> Result<(), EngineError> {
        (**self).sync_wallet(request)
    }
}
