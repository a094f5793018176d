pub mod config;
pub mod engine;
pub mod file_store;
pub mod memory_store;

pub use config::FormShellConfig;
#[cfg(feature = "native-engine")]
pub use engine::NativeEngineAdapter;
pub use engine::{RecordingEngineAdapter, UnlinkedEngineAdapter};
pub use file_store::JsonFileStore;
pub use memory_store::MemoryFormStore;
