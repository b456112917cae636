//! Configuration for stocklist
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{Result, StockError};
use crate::view::CategoryRegistry;

/// Main configuration for an Inventory instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for the record files
    /// Internal structure:
    ///   {data_dir}/
    ///     ├── inventory.txt          (working set, source of truth)
    ///     └── sorted_inventory.txt   (derived sorted view)
    pub data_dir: PathBuf,

    /// File name of the working set inside `data_dir`
    pub catalog_file: String,

    /// File name of the sorted view inside `data_dir`
    pub sorted_file: String,

    /// Write both files after every successful mutation
    pub autosave: bool,

    // -------------------------------------------------------------------------
    // Catalog Configuration
    // -------------------------------------------------------------------------
    /// Number of hash buckets in the catalog index
    pub bucket_count: usize,

    /// Known categories, in sorted-view order
    pub categories: CategoryRegistry,

    /// What to do with items whose category is not registered
    pub category_policy: CategoryPolicy,
}

/// Handling of categories missing from the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryPolicy {
    /// Refuse the item with `StockError::UnknownCategory`
    Reject,

    /// Accept the item; it sorts after every registered category
    Trailing,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./stocklist_data"),
            catalog_file: "inventory.txt".to_string(),
            sorted_file: "sorted_inventory.txt".to_string(),
            autosave: true,
            bucket_count: 50,
            categories: CategoryRegistry::default(),
            category_policy: CategoryPolicy::Reject,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the values that can't be expressed in the types
    pub fn validate(&self) -> Result<()> {
        if self.bucket_count == 0 {
            return Err(StockError::Config("bucket_count must be at least 1".to_string()));
        }
        if self.catalog_file.trim().is_empty() || self.sorted_file.trim().is_empty() {
            return Err(StockError::Config("file names must not be empty".to_string()));
        }
        if self.catalog_file == self.sorted_file {
            return Err(StockError::Config(format!(
                "catalog and sorted view can't share the file {}",
                self.catalog_file
            )));
        }
        Ok(())
    }

    /// Full path of the working set
    pub fn catalog_path(&self) -> PathBuf {
        self.data_dir.join(&self.catalog_file)
    }

    /// Full path of the sorted view
    pub fn sorted_path(&self) -> PathBuf {
        self.data_dir.join(&self.sorted_file)
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (root for both record files)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the working set file name
    pub fn catalog_file(mut self, name: impl Into<String>) -> Self {
        self.config.catalog_file = name.into();
        self
    }

    /// Set the sorted view file name
    pub fn sorted_file(mut self, name: impl Into<String>) -> Self {
        self.config.sorted_file = name.into();
        self
    }

    /// Enable or disable saving after each mutation
    pub fn autosave(mut self, enabled: bool) -> Self {
        self.config.autosave = enabled;
        self
    }

    /// Set the number of hash buckets
    pub fn bucket_count(mut self, count: usize) -> Self {
        self.config.bucket_count = count;
        self
    }

    /// Set the category registry
    pub fn categories(mut self, registry: CategoryRegistry) -> Self {
        self.config.categories = registry;
        self
    }

    /// Set the unknown-category policy
    pub fn category_policy(mut self, policy: CategoryPolicy) -> Self {
        self.config.category_policy = policy;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
