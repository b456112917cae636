//! Catalog Module
//!
//! The authoritative, name-keyed collection of items.
//!
//! ## Responsibilities
//! - Insert-or-update, point lookup and removal in expected O(1)
//! - Case-insensitive name identity
//! - Snapshot iteration for the sorter and the record store
//!
//! ## Data Structure Choice
//! A fixed number of buckets, each an owned chain of items:
//! - Bucket = sum of the lower-cased name's scalar values, mod bucket count
//! - New items go to the front of their chain
//! - Iteration order is bucket order, then chain order (unspecified to callers)

mod table;

pub use table::{Catalog, Iter};

/// A catalog entry
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Display name; its lower-cased form is the identity
    pub name: String,

    /// Category (drink type), compared exactly
    pub category: String,

    /// Unit price, finite and non-negative
    pub price: f64,

    /// Units on hand
    pub stock: u32,
}

impl Item {
    /// Create a new item
    pub fn new(name: impl Into<String>, category: impl Into<String>, price: f64, stock: u32) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price,
            stock,
        }
    }

    /// The lookup key for this item
    pub fn key(&self) -> String {
        normalize_key(&self.name)
    }
}

/// Outcome of `Catalog::upsert`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// No item had this name; a new one was created
    Inserted,

    /// An existing item was overwritten in place
    Updated,
}

/// Case-normalize a name for key comparison
pub fn normalize_key(name: &str) -> String {
    name.to_lowercase()
}
