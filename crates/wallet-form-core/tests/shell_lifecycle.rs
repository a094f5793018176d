mod common;

use common::{filled_record, new_shell, JsonCellStore};
use wallet_form_core::{
    LoadOutcome, PersistenceError, ShellPhase, WalletFormRecord, DEFAULT_TENDERMINT_URL,
};

#[test]
fn initialize_restores_stored_record() {
    let mut shell = new_shell(JsonCellStore::seeded(
        r#"{"tendermint":"ws://node:26657/websocket","name":"w1","passphras":"p"}"#,
    ));
    assert_eq!(shell.phase(), ShellPhase::NotLoaded);

    assert_eq!(shell.initialize(), LoadOutcome::Restored);
    assert_eq!(shell.phase(), ShellPhase::Loaded);
    assert_eq!(shell.record().name.as_deref(), Some("w1"));
    assert_eq!(shell.record().passphrase.as_deref(), Some("p"));
    assert!(shell.record().mnemonics.is_none());
}

#[test]
fn missing_file_falls_back_to_empty_record() {
    let mut shell = new_shell(JsonCellStore::default());

    assert!(matches!(shell.load(), Err(PersistenceError::Missing(_))));
    let outcome = shell.initialize();
    assert!(matches!(
        outcome,
        LoadOutcome::FreshStart(PersistenceError::Missing(_))
    ));
    assert_eq!(shell.phase(), ShellPhase::Loaded);
    assert!(shell.record().is_empty());
}

#[test]
fn malformed_file_falls_back_to_empty_record() {
    let mut shell = new_shell(JsonCellStore::seeded("{\"name\": "));

    let outcome = shell.initialize();
    assert!(matches!(
        outcome,
        LoadOutcome::FreshStart(PersistenceError::Decode(_))
    ));
    assert!(shell.record().is_empty());
}

#[test]
fn save_then_load_returns_same_record() {
    let mut shell = new_shell(JsonCellStore::default());
    let record = filled_record();
    shell.replace_record(record.clone());

    shell.save().expect("first save");
    let first = shell.load().expect("load after first save");
    shell.save().expect("second save");
    let second = shell.load().expect("load after second save");

    assert_eq!(first, record);
    assert_eq!(second, record);
}

#[test]
fn reset_persists_canonical_defaults() {
    let mut shell = new_shell(JsonCellStore::default());
    shell.replace_record(filled_record());

    shell.reset_to_defaults().expect("reset");

    let stored = shell.load().expect("load after reset");
    assert_eq!(stored, WalletFormRecord::canonical_defaults());
    assert_eq!(stored.tendermint_url.as_deref(), Some(DEFAULT_TENDERMINT_URL));
    assert_eq!(stored.name.as_deref(), Some("a"));
    assert_eq!(stored.passphrase.as_deref(), Some(""));
    assert_eq!(stored.encryption_key.as_deref(), Some(""));
    assert_eq!(stored.mnemonics.as_deref(), Some(""));
}

#[test]
fn reset_surfaces_write_failure_but_keeps_defaults_in_memory() {
    let mut shell = new_shell(JsonCellStore::failing_writes());
    shell.replace_record(filled_record());

    let err = shell.reset_to_defaults().expect_err("write should fail");
    assert!(matches!(err, PersistenceError::Write(_)));
    assert_eq!(shell.record(), &WalletFormRecord::canonical_defaults());
}
