use std::fs;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tally_core::storage::{KeyValueStore, LedgerStore, CATEGORIES_KEY, TRANSACTIONS_KEY};
use tally_domain::{CategorySet, Ledger, Transaction};
use tally_storage_json::JsonFileStore;
use tempfile::tempdir;

#[test]
fn json_store_round_trips_raw_values() {
    let dir = tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path().join("store")).expect("create store");

    assert_eq!(store.get("missing").expect("get"), None);
    store.set("greeting", "\"hello\"").expect("set");
    assert_eq!(store.get("greeting").expect("get").as_deref(), Some("\"hello\""));

    store.remove("greeting").expect("remove");
    assert_eq!(store.get("greeting").expect("get"), None);
    store.remove("greeting").expect("removing twice is fine");
}

#[test]
fn ledger_state_survives_reopening_the_store() {
    let dir = tempdir().expect("tempdir");
    let root = dir.path().join("store");

    let mut ledger = Ledger::new();
    ledger.categories.push("Pets");
    ledger.add_transaction(Transaction::new(
        1,
        "Kibble",
        Decimal::new(-1999, 2),
        "Pets",
        NaiveDate::from_ymd_opt(2024, 8, 12).unwrap(),
    ));

    {
        let store = LedgerStore::new(Box::new(JsonFileStore::new(root.clone()).unwrap()));
        store.save_ledger(&ledger).expect("save ledger");
    }

    let store = LedgerStore::new(Box::new(JsonFileStore::new(root.clone()).unwrap()));
    let report = store.load_ledger().expect("load ledger");
    assert!(report.warnings.is_empty());
    assert_eq!(report.ledger, ledger);

    let raw = fs::read_to_string(root.join("transactions.json")).expect("read file");
    assert!(raw.contains("\"amount\":-19.99"));
    assert!(!root.join("transactions.json.tmp").exists());
}

#[test]
fn corrupt_file_falls_back_to_defaults() {
    let dir = tempdir().expect("tempdir");
    let root = dir.path().join("store");
    let backend = JsonFileStore::new(root.clone()).unwrap();
    fs::write(backend.record_path(TRANSACTIONS_KEY), "not json").unwrap();
    fs::write(backend.record_path(CATEGORIES_KEY), "[\"Food\", \"Other\"]").unwrap();

    let report = LedgerStore::new(Box::new(backend)).load_ledger().expect("load");

    assert!(report.ledger.transactions.is_empty());
    assert_eq!(report.ledger.categories, CategorySet::from_names(["Food", "Other"]));
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("transactions"));
}
