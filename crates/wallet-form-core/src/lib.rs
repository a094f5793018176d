pub mod domain;
pub mod ports;
pub mod shell;

pub use domain::{
    EngineCall, EngineRequest, WalletFormRecord, DEFAULT_TENDERMINT_URL, DEFAULT_WALLET_NAME,
};
pub use ports::{EngineError, FormStorePort, PersistenceError, WalletEnginePort};
pub use shell::{EngineCallReport, FormStateShell, LoadOutcome, PendingEngineCall, ShellPhase};
