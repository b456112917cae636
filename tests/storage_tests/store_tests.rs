//! Record Store Tests
//!
//! Tests verify:
//! - Missing files load as empty
//! - Save then load returns the same records in order
//! - Atomic replace leaves no temp file behind
//! - Malformed files fail with the offending line

use std::fs;

use stocklist::catalog::Item;
use stocklist::config::Config;
use stocklist::storage::RecordStore;
use stocklist::view::{rebuild, CategoryRegistry};
use stocklist::StockError;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_store() -> (TempDir, RecordStore) {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder().data_dir(temp_dir.path()).build();
    let store = RecordStore::open(&config).unwrap();
    (temp_dir, store)
}

fn sample_items() -> Vec<Item> {
    vec![
        Item::new("Milk Tea", "Tea", 5.5, 10),
        Item::new("Coke", "Beverage", 3.0, 20),
        Item::new("Orange Juice", "Juice", 4.0, 15),
    ]
}

// =============================================================================
// Open Tests
// =============================================================================

#[test]
fn test_open_creates_data_dir() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("shop");
    let config = Config::builder().data_dir(&data_dir).build();

    let store = RecordStore::open(&config).unwrap();

    assert!(data_dir.is_dir());
    assert_eq!(store.catalog_path(), data_dir.join("inventory.txt"));
    assert_eq!(store.sorted_path(), data_dir.join("sorted_inventory.txt"));
}

#[test]
fn test_load_missing_file_is_empty() {
    let (_temp, store) = setup_temp_store();

    assert!(store.load_catalog().unwrap().is_empty());
    assert!(store.load_sorted().unwrap().is_empty());
}

// =============================================================================
// Save / Load Tests
// =============================================================================

#[test]
fn test_save_and_load_catalog() {
    let (_temp, store) = setup_temp_store();
    let items = sample_items();

    let written = store.save_catalog(&items).unwrap();
    let loaded = store.load_catalog().unwrap();

    assert_eq!(written, 3);
    assert_eq!(loaded, items);
}

#[test]
fn test_save_sorted_view() {
    let (_temp, store) = setup_temp_store();
    let view = rebuild(&sample_items(), &CategoryRegistry::default());

    store.save_sorted(&view).unwrap();

    let contents = fs::read_to_string(store.sorted_path()).unwrap();
    assert_eq!(
        contents,
        "Coke Beverage 3 20\nOrange%20Juice Juice 4 15\nMilk%20Tea Tea 5.5 10\n"
    );
    assert_eq!(store.load_sorted().unwrap(), view.items());
}

#[test]
fn test_save_replaces_previous_contents() {
    let (_temp, store) = setup_temp_store();

    store.save_catalog(&sample_items()).unwrap();
    store.save_catalog(&[Item::new("Water", "Beverage", 1.0, 3)]).unwrap();

    assert_eq!(store.load_catalog().unwrap(), vec![Item::new("Water", "Beverage", 1.0, 3)]);
}

#[test]
fn test_save_leaves_no_temp_file() {
    let (temp, store) = setup_temp_store();

    store.save_catalog(&sample_items()).unwrap();

    let names: Vec<String> = fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["inventory.txt"]);
}

#[test]
fn test_save_empty() {
    let (_temp, store) = setup_temp_store();

    assert_eq!(store.save_catalog(&Vec::<Item>::new()).unwrap(), 0);
    assert_eq!(fs::read_to_string(store.catalog_path()).unwrap(), "");
}

#[test]
fn test_failed_save_removes_temp_file() {
    let (temp, store) = setup_temp_store();
    // A directory in the way makes the final rename fail
    fs::create_dir(store.catalog_path()).unwrap();

    let result = store.save_catalog(&sample_items());

    assert!(matches!(result, Err(StockError::Io(_))));
    assert!(!temp.path().join("inventory.txt.tmp").exists());
    assert!(store.catalog_path().is_dir());
}

// =============================================================================
// Compatibility / Corruption Tests
// =============================================================================

#[test]
fn test_load_plain_legacy_file() {
    let (_temp, store) = setup_temp_store();
    fs::write(
        store.catalog_path(),
        "Coke Beverage 3 20\n\nLemonTea Tea 4 6\nSprite Beverage 2.5 9\n",
    )
    .unwrap();

    let loaded = store.load_catalog().unwrap();

    assert_eq!(
        loaded,
        vec![
            Item::new("Coke", "Beverage", 3.0, 20),
            Item::new("LemonTea", "Tea", 4.0, 6),
            Item::new("Sprite", "Beverage", 2.5, 9),
        ]
    );
}

#[test]
fn test_load_malformed_reports_line() {
    let (_temp, store) = setup_temp_store();
    fs::write(store.catalog_path(), "Coke Beverage 3 20\n\nSprite Beverage two 9\n").unwrap();

    let result = store.load_catalog();

    assert!(matches!(result, Err(StockError::Record { line: 3, .. })));
}
