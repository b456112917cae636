//! Sorted View Module
//!
//! Derived, read-only ordering of the catalog used by range search.
//!
//! ## Responsibilities
//! - Hold the fixed category priority order (`CategoryRegistry`)
//! - Rebuild the view from a catalog snapshot (`rebuild`)
//! - Answer "which rank does this category have" for the boundary searches
//!
//! ## Layout
//! ```text
//! ┌──────────── Beverage ───────────┬──── Juice ────┬──────── Tea ────────┬ unknown... ┐
//! │ Coke │ Pepsi │ Sprite           │ Orange Juice  │ Lemon Tea │ Milk Tea│            │
//! └─────────────────────────────────┴───────────────┴─────────────────────┴────────────┘
//!   registry order, then unregistered categories in first-seen order;
//!   names ascending inside each group
//! ```
//!
//! The view is never patched in place: any catalog mutation makes it stale
//! until the next `rebuild`.

mod registry;
mod sorter;

use std::collections::HashMap;
use std::slice;

pub use registry::CategoryRegistry;
pub use sorter::rebuild;

use crate::catalog::Item;

/// Items grouped by category rank, then ordered by name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SortedView {
    /// The flat sorted sequence
    items: Vec<Item>,

    /// Effective group order: registry categories, then unregistered ones
    order: Vec<String>,

    /// Category → position in `order`
    ranks: HashMap<String, usize>,
}

impl SortedView {
    pub(crate) fn from_parts(
        items: Vec<Item>,
        order: Vec<String>,
        ranks: HashMap<String, usize>,
    ) -> Self {
        Self { items, order, ranks }
    }

    /// The sorted items
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Item at a view position
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Iterate in view order
    pub fn iter(&self) -> slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the view holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Group order the view was built with (including empty groups)
    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// Rank of a category in the group order, if the view knows it
    pub fn rank_of(&self, category: &str) -> Option<usize> {
        self.ranks.get(category).copied()
    }

    /// Names of the items, in view order
    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.name.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a SortedView {
    type Item = &'a Item;
    type IntoIter = slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
