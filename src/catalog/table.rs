//! Catalog implementation
//!
//! Separate-chaining hash table keyed by lower-cased item name.

use std::collections::vec_deque;
use std::collections::VecDeque;
use std::slice;

use crate::error::{Result, StockError};
use super::{normalize_key, Item, Upsert};

/// Bucket count used by `Catalog::new`
pub const DEFAULT_BUCKETS: usize = 50;

/// One link in a bucket chain
#[derive(Debug, Clone)]
struct Entry {
    /// Normalized name, cached so chain scans don't re-lowercase
    key: String,
    item: Item,
}

/// Name-keyed item index
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Chains, front = most recently inserted
    buckets: Vec<VecDeque<Entry>>,

    /// Number of items across all chains
    len: usize,
}

impl Catalog {
    /// Create an empty catalog with the default bucket count
    pub fn new() -> Self {
        Self::allocate(DEFAULT_BUCKETS)
    }

    /// Create an empty catalog with `bucket_count` chains
    pub fn with_buckets(bucket_count: usize) -> Result<Self> {
        if bucket_count == 0 {
            return Err(StockError::InvalidArgument(
                "catalog needs at least one bucket".to_string(),
            ));
        }
        Ok(Self::allocate(bucket_count))
    }

    fn allocate(bucket_count: usize) -> Self {
        Self {
            buckets: (0..bucket_count).map(|_| VecDeque::new()).collect(),
            len: 0,
        }
    }

    /// Insert a new item or overwrite the one with the same name
    ///
    /// On update the stored name keeps its original spelling; only
    /// category, price and stock change.
    pub fn upsert(
        &mut self,
        name: &str,
        category: &str,
        price: f64,
        stock: u32,
    ) -> Result<Upsert> {
        validate(name, category, price)?;

        let key = normalize_key(name);
        let index = self.bucket_of(&key);
        let chain = &mut self.buckets[index];

        if let Some(entry) = chain.iter_mut().find(|e| e.key == key) {
            entry.item.category = category.to_string();
            entry.item.price = price;
            entry.item.stock = stock;
            return Ok(Upsert::Updated);
        }

        chain.push_front(Entry {
            key,
            item: Item::new(name, category, price, stock),
        });
        self.len += 1;
        Ok(Upsert::Inserted)
    }

    /// Look up an item by name, ignoring case
    pub fn find(&self, name: &str) -> Option<&Item> {
        let key = normalize_key(name);
        self.buckets[self.bucket_of(&key)]
            .iter()
            .find(|e| e.key == key)
            .map(|e| &e.item)
    }

    /// Remove an item by name, ignoring case
    ///
    /// Returns whether an item was found and removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let key = normalize_key(name);
        let index = self.bucket_of(&key);
        let chain = &mut self.buckets[index];

        match chain.iter().position(|e| e.key == key) {
            Some(pos) => {
                chain.remove(pos);
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    /// Snapshot of every item, in bucket order
    pub fn all(&self) -> Vec<Item> {
        self.iter().cloned().collect()
    }

    /// Borrowing iterator over every item, in bucket order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            buckets: self.buckets.iter(),
            chain: None,
        }
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the catalog holds no items
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of hash buckets
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Items per bucket
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Bucket index for a name (exposed for collision tests)
    pub fn bucket_for(&self, name: &str) -> usize {
        self.bucket_of(&normalize_key(name))
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Sum of scalar values of an already-normalized key, mod bucket count
    fn bucket_of(&self, key: &str) -> usize {
        let sum: u64 = key.chars().map(|c| c as u64).sum();
        (sum % self.buckets.len() as u64) as usize
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Item;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Reject item fields the catalog refuses to store
fn validate(name: &str, category: &str, price: f64) -> Result<()> {
    if name.trim().is_empty() {
        return Err(StockError::InvalidArgument("item name is empty".to_string()));
    }
    if category.trim().is_empty() {
        return Err(StockError::InvalidArgument(format!("category for {} is empty", name)));
    }
    if !price.is_finite() || price < 0.0 {
        return Err(StockError::InvalidArgument(format!(
            "price for {} must be a non-negative number, got {}",
            name, price
        )));
    }
    Ok(())
}

/// Iterator over catalog items
pub struct Iter<'a> {
    buckets: slice::Iter<'a, VecDeque<Entry>>,
    chain: Option<vec_deque::Iter<'a, Entry>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.as_mut().and_then(|c| c.next()) {
                return Some(&entry.item);
            }
            self.chain = Some(self.buckets.next()?.iter());
        }
    }
}
