use std::fs;

use chrono::Utc;
use tempfile::tempdir;

use pwstore_core::codec::VALIDATION_KEY;
use pwstore_core::storage::{BlobStore, DirStore, Gateway};
use pwstore_core::{EntryFields, Record, RotationOptions, Vault, VaultError};

const MASTER: &str = "correcthorse";
const PHRASE: &str = "the quick brown fox jumps";

fn entry(secret: &str, username: &str) -> EntryFields {
    EntryFields {
        secret: secret.to_string(),
        username: username.to_string(),
        ..EntryFields::default()
    }
}

#[test]
fn test_bootstrap_scenario() {
    let dir = tempdir().expect("tempdir");
    let root = dir.path().join(".password-manager-store");

    let mut vault = Vault::open(&root).expect("store should open");
    assert!(!vault.is_initialized());

    vault.bootstrap(MASTER, PHRASE).expect("bootstrap should succeed");
    assert!(vault.is_initialized());
    assert!(root.join(".checker").join("init.gpg").is_file());

    assert!(vault.login(MASTER).is_ok());
    assert!(matches!(
        vault.login("wrongsecret1"),
        Err(VaultError::IncorrectPassword)
    ));
}

#[test]
fn test_blobs_are_armored_and_private() {
    let dir = tempdir().expect("tempdir");
    let root = dir.path().join("store");
    let mut vault = Vault::open(&root).expect("store should open");
    vault.bootstrap(MASTER, PHRASE).expect("bootstrap");
    let session = vault.login(MASTER).expect("login");

    let key = vault
        .add_entry(&session, "Mail Server", &entry("PLAINTEXT_MARKER_123", "ops"))
        .expect("add");
    let path = root.join(format!("{}.gpg", key));
    let on_disk = fs::read_to_string(&path).expect("blob should be text");

    assert!(on_disk.starts_with("-----BEGIN AGE ENCRYPTED FILE-----"));
    assert!(!on_disk.contains("PLAINTEXT_MARKER_123"));
    assert!(!on_disk.contains(PHRASE));

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let file_mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        let dir_mode = fs::metadata(&root).unwrap().permissions().mode() & 0o777;
        assert_eq!(file_mode, 0o600);
        assert_eq!(dir_mode, 0o700);
    }
}

#[test]
fn test_catalog_tolerates_unreadable_entries() {
    let dir = tempdir().expect("tempdir");
    let root = dir.path().join("store");
    let mut vault = Vault::open(&root).expect("store should open");
    vault.bootstrap(MASTER, PHRASE).expect("bootstrap");
    let session = vault.login(MASTER).expect("login");

    for (label, user) in [("github", "octo"), ("bank", "me"), ("email", "me2")] {
        vault
            .add_entry(&session, label, &entry("secret-value", user))
            .expect("add");
    }
    fs::write(root.join("corrupt_20240101_120000.gpg"), b"garbage").unwrap();
    fs::create_dir(root.join("nested.gpg")).unwrap();

    let entries = vault.list_entries(&session).expect("listing never fails");
    assert_eq!(entries.len(), 3);
    assert!(entries.iter().all(|e| e.key != VALIDATION_KEY));
    let mut labels: Vec<_> = entries.iter().map(|e| e.label.clone()).collect();
    labels.sort();
    assert_eq!(labels, vec!["bank", "email", "github"]);
}

#[test]
fn test_listing_reflects_external_changes() {
    let dir = tempdir().expect("tempdir");
    let root = dir.path().join("store");
    let mut vault = Vault::open(&root).expect("store should open");
    vault.bootstrap(MASTER, PHRASE).expect("bootstrap");
    let session = vault.login(MASTER).expect("login");

    let key = vault
        .add_entry(&session, "site", &entry("secret-value", ""))
        .expect("add");
    assert_eq!(vault.list_entries(&session).unwrap().len(), 1);

    fs::remove_file(root.join(format!("{}.gpg", key))).unwrap();
    assert!(vault.list_entries(&session).unwrap().is_empty());
}

#[test]
fn test_rotation_scenario() {
    let dir = tempdir().expect("tempdir");
    let root = dir.path().join("store");
    let mut vault = Vault::open(&root).expect("store should open");
    vault.bootstrap("passphrase-A", PHRASE).expect("bootstrap");
    let mut session = vault.login("passphrase-A").expect("login");

    vault
        .rotate(
            &mut session,
            "passphrase-A",
            "passphrase-B",
            RotationOptions::default(),
        )
        .expect("rotation should succeed");

    assert!(vault.login("passphrase-B").is_ok());
    assert!(vault.login("passphrase-A").is_err());

    let record = vault
        .gateway()
        .open(VALIDATION_KEY, "passphrase-B")
        .expect("validation record");
    assert_eq!(record.secret, PHRASE);
}

#[test]
fn test_rotation_failure_scenario() {
    let dir = tempdir().expect("tempdir");
    let root = dir.path().join("store");
    let mut vault = Vault::open(&root).expect("store should open");
    vault.bootstrap("passphrase-A", PHRASE).expect("bootstrap");
    let mut session = vault.login("passphrase-A").expect("login");

    let err = vault
        .rotate(
            &mut session,
            "wrong-passphrase-A",
            "passphrase-B",
            RotationOptions::default(),
        )
        .unwrap_err();

    assert!(matches!(err, VaultError::IncorrectPassword));
    assert!(!err.is_critical());
    assert!(vault.login("passphrase-A").is_ok());
    assert!(vault.login("passphrase-B").is_err());
}

#[test]
fn test_rotation_with_reseal_keeps_entries_readable() {
    let dir = tempdir().expect("tempdir");
    let root = dir.path().join("store");
    let mut vault = Vault::open(&root).expect("store should open");
    vault.bootstrap("passphrase-A", PHRASE).expect("bootstrap");
    let mut session = vault.login("passphrase-A").expect("login");

    let key = vault
        .add_entry(&session, "github", &entry("hunter22", "octo"))
        .expect("add");

    let report = vault
        .rotate(
            &mut session,
            "passphrase-A",
            "passphrase-B",
            RotationOptions {
                reseal_entries: true,
            },
        )
        .expect("rotation should succeed");

    assert!(report.is_complete());
    assert_eq!(report.resealed, vec![key.clone()]);
    let record = vault.show_entry(&session, &key).expect("entry readable");
    assert_eq!(record.secret, "hunter22");
    assert_eq!(record.username.as_deref(), Some("octo"));
}

#[test]
fn test_custom_gateway_over_dir_store() {
    let dir = tempdir().expect("tempdir");
    let (store, initialized) = DirStore::ensure_ready(dir.path().join("s")).expect("ready");
    assert!(!initialized);

    store.put("legacy_20200101_000000", b"unrelated").unwrap();
    let gateway = Gateway::with_age(store);
    gateway
        .seal(
            "manual_20200101_000000",
            &Record::new("manual", Utc::now()),
            MASTER,
        )
        .unwrap();

    let mut vault = Vault::with_gateway(gateway, false);
    vault.bootstrap(MASTER, PHRASE).expect("bootstrap");
    let session = vault.login(MASTER).expect("login");

    let entries = vault.list_entries(&session).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].label, "manual");
}
