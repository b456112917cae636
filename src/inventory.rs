//! Inventory Module
//!
//! The coordinator that owns the catalog, the sorted view and the store.
//!
//! ## Responsibilities
//! - Load the working set on startup and build the first view
//! - Enforce the category policy on every write
//! - After each mutation: rebuild the view, then persist (if autosave)
//! - Serve point lookups from the catalog and range searches from the view

use std::path::Path;

use tracing::{debug, info};

use crate::catalog::{normalize_key, Catalog, Item, Upsert};
use crate::config::{CategoryPolicy, Config};
use crate::error::{Result, StockError};
use crate::search::{self, search_by_category};
use crate::storage::RecordStore;
use crate::view::{self, CategoryRegistry, SortedView};

/// Partial update for `Inventory::edit`; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    /// New name; a change of letter case only re-spells the item
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<u32>,
}

/// The inventory manager
///
/// ## Consistency Model
///
/// Every mutating method takes `&mut self` and rebuilds the sorted view
/// before returning, so a caller can never observe a view older than the
/// catalog. The view is read-only; it is never used as the source of a
/// mutation.
///
/// With `autosave` on, the working set and the sorted view file are
/// rewritten after the rebuild. A failed save is returned as an error but
/// the in-memory mutation stays applied.
#[derive(Debug)]
pub struct Inventory {
    /// Inventory configuration
    config: Config,

    /// Source of truth
    catalog: Catalog,

    /// Derived view, rebuilt after every mutation
    view: SortedView,

    /// Record files; `None` for an in-memory inventory
    store: Option<RecordStore>,
}

impl Inventory {
    /// Open or create an inventory with the given config
    ///
    /// On startup:
    /// 1. Create the data directory
    /// 2. Load the working set (missing file = empty)
    /// 3. Build the sorted view
    /// 4. Rewrite the sorted view file if it is missing or out of date
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;

        // Step 1: Open the store (creates data_dir)
        let store = RecordStore::open(&config)?;

        // Step 2: Seed the catalog from the working set
        let mut catalog = Catalog::with_buckets(config.bucket_count)?;
        for item in store.load_catalog()? {
            check_category(&config, &item.category)?;
            if catalog.upsert(&item.name, &item.category, item.price, item.stock)?
                == Upsert::Updated
            {
                debug!(name = %item.name, "Duplicate record, later line wins");
            }
        }

        // Step 3: Build the view
        let view = view::rebuild(&catalog, &config.categories);

        // Step 4: The sorted file is derived; rewrite it only when stale
        if config.autosave && !sorted_file_matches(&store, &view) {
            store.save_sorted(&view)?;
            info!("Refreshed stale sorted view file");
        }

        info!(
            items = catalog.len(),
            data_dir = %config.data_dir.display(),
            "Inventory opened"
        );

        Ok(Self {
            config,
            catalog,
            view,
            store: Some(store),
        })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified data directory
    pub fn open_path(path: &Path) -> Result<Self> {
        let config = Config::builder().data_dir(path).build();
        Self::open(config)
    }

    /// Create an inventory that never touches the file system
    pub fn in_memory(config: Config) -> Result<Self> {
        config.validate()?;

        let catalog = Catalog::with_buckets(config.bucket_count)?;
        let view = view::rebuild(&catalog, &config.categories);

        Ok(Self {
            config,
            catalog,
            view,
            store: None,
        })
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Insert a new item or overwrite the one with the same name
    pub fn upsert(&mut self, name: &str, category: &str, price: f64, stock: u32) -> Result<Upsert> {
        check_category(&self.config, category)?;

        let outcome = self.catalog.upsert(name, category, price, stock)?;
        debug!(name, category, price, stock, ?outcome, "Upserted item");

        self.commit()?;
        Ok(outcome)
    }

    /// Change some fields of an existing item, optionally renaming it
    ///
    /// Every check runs before the catalog is touched, so a refused edit
    /// changes nothing in memory or on disk. Returns the item as stored
    /// after the edit.
    pub fn edit(&mut self, name: &str, patch: ItemPatch) -> Result<Item> {
        let current = self
            .catalog
            .find(name)
            .cloned()
            .ok_or_else(|| StockError::ItemNotFound(name.to_string()))?;

        let new_name = match patch.name {
            Some(new_name) => {
                self.check_rename(&current.name, &new_name)?;
                new_name
            }
            None => current.name.clone(),
        };
        let category = patch.category.unwrap_or(current.category);
        let price = patch.price.unwrap_or(current.price);
        let stock = patch.stock.unwrap_or(current.stock);
        check_category(&self.config, &category)?;

        // Field update under the old key first; it validates before mutating
        self.catalog.upsert(&current.name, &category, price, stock)?;
        if new_name != current.name {
            self.catalog.remove(&current.name);
            self.catalog.upsert(&new_name, &category, price, stock)?;
            debug!(from = %current.name, to = %new_name, "Renamed item");
        }
        debug!(name = %new_name, category = %category, price, stock, "Edited item");

        self.commit()?;
        Ok(Item::new(new_name, category, price, stock))
    }

    /// Give an item a new name
    ///
    /// A rename that only changes letter case re-spells the stored name.
    pub fn rename(&mut self, old_name: &str, new_name: &str) -> Result<()> {
        let patch = ItemPatch {
            name: Some(new_name.to_string()),
            ..Default::default()
        };
        self.edit(old_name, patch).map(|_| ())
    }

    /// Remove an item by name, ignoring case
    ///
    /// Returns whether an item was removed. Nothing is rebuilt or saved
    /// when the name is absent.
    pub fn remove(&mut self, name: &str) -> Result<bool> {
        if !self.catalog.remove(name) {
            return Ok(false);
        }
        debug!(name, "Removed item");

        self.commit()?;
        Ok(true)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Look up an item by name, ignoring case
    pub fn find(&self, name: &str) -> Option<&Item> {
        self.catalog.find(name)
    }

    /// Snapshot of every item, in catalog order
    pub fn all(&self) -> Vec<Item> {
        self.catalog.all()
    }

    /// Items whose category matches, ignoring case, in catalog order
    pub fn by_category(&self, category: &str) -> Vec<&Item> {
        let wanted = category.to_lowercase();
        self.catalog
            .iter()
            .filter(|item| item.category.to_lowercase() == wanted)
            .collect()
    }

    /// The current sorted view
    pub fn view(&self) -> &SortedView {
        &self.view
    }

    /// The name-ordered block of one category in the sorted view
    pub fn category_slice(&self, category: &str) -> Option<&[Item]> {
        search_by_category(&self.view, category).map(|range| range.slice(&self.view))
    }

    /// Range search: find `name` inside `category` in the sorted view
    pub fn search(&self, category: &str, name: &str) -> Result<&Item> {
        search::lookup(&self.view, category, name).map(|(_, item)| item)
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Write the working set and the sorted view file
    pub fn save(&self) -> Result<()> {
        let store = self.store.as_ref().ok_or_else(|| {
            StockError::Config("in-memory inventory has no data directory".to_string())
        })?;

        let written = store.save_catalog(&self.catalog)?;
        store.save_sorted(&self.view)?;
        info!(records = written, "Inventory saved");
        Ok(())
    }

    /// Read back the sorted view file as it is on disk
    pub fn load_sorted(&self) -> Result<Vec<Item>> {
        match &self.store {
            Some(store) => store.load_sorted(),
            None => Ok(self.view.items().to_vec()),
        }
    }

    /// Close the inventory, saving if it is file-backed
    pub fn close(self) -> Result<()> {
        if self.store.is_some() {
            self.save()?;
        }
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of items
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    /// Check if the inventory holds no items
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// The authoritative catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The category registry in use
    pub fn registry(&self) -> &CategoryRegistry {
        &self.config.categories
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The record store, if file-backed
    pub fn store(&self) -> Option<&RecordStore> {
        self.store.as_ref()
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Refuse blank names and names taken by another item
    fn check_rename(&self, old_name: &str, new_name: &str) -> Result<()> {
        if new_name.trim().is_empty() {
            return Err(StockError::InvalidArgument("item name is empty".to_string()));
        }
        if normalize_key(old_name) != normalize_key(new_name) && self.catalog.find(new_name).is_some() {
            return Err(StockError::InvalidArgument(format!(
                "an item named {} already exists",
                new_name
            )));
        }
        Ok(())
    }

    /// Rebuild the view, then persist if configured to
    fn commit(&mut self) -> Result<()> {
        self.view = view::rebuild(&self.catalog, &self.config.categories);
        debug!(items = self.view.len(), "Rebuilt sorted view");

        if self.config.autosave && self.store.is_some() {
            self.save()?;
        }
        Ok(())
    }
}

/// Apply the unknown-category policy
fn check_category(config: &Config, category: &str) -> Result<()> {
    match config.category_policy {
        CategoryPolicy::Trailing => Ok(()),
        CategoryPolicy::Reject if config.categories.contains(category) => Ok(()),
        CategoryPolicy::Reject => Err(StockError::UnknownCategory(category.to_string())),
    }
}

/// Check whether the sorted view file on disk already holds `view`
///
/// A missing or unreadable file never matches.
fn sorted_file_matches(store: &RecordStore, view: &SortedView) -> bool {
    if !store.sorted_path().exists() {
        return false;
    }
    matches!(store.load_sorted(), Ok(on_disk) if on_disk == view.items())
}
