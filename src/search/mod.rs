//! Range Search Module
//!
//! Two-stage lookup over a `SortedView`.
//!
//! ## Stages
//! 1. `search_by_category`: two binary searches find the first and last view
//!    position of a category (groups are contiguous by construction)
//! 2. `search_by_name`: ternary search for an exact name inside that range
//!
//! `lookup` chains both and tells "no such category" apart from
//! "category exists but the name isn't in it".

mod range;
mod ternary;

pub use range::search_by_category;
pub use ternary::search_by_name;

use crate::catalog::Item;
use crate::error::{Result, StockError};
use crate::view::SortedView;

/// Closed range `[start, end]` of view positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRange {
    pub start: usize,
    pub end: usize,
}

impl CategoryRange {
    /// Number of positions covered; zero when `end < start`
    pub fn len(&self) -> usize {
        self.end
            .checked_sub(self.start)
            .map_or(0, |span| span + 1)
    }

    /// Check if the range covers no position
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Check if a view position falls inside the range
    pub fn contains(&self, index: usize) -> bool {
        (self.start..=self.end).contains(&index)
    }

    /// The items of `view` covered by this range
    ///
    /// Empty if the range is inverted or reaches past the end of the view.
    pub fn slice<'a>(&self, view: &'a SortedView) -> &'a [Item] {
        if self.is_empty() {
            return &[];
        }
        view.items().get(self.start..=self.end).unwrap_or(&[])
    }
}

/// Find `name` within `category`
///
/// Returns the view position and the item.
pub fn lookup<'a>(view: &'a SortedView, category: &str, name: &str) -> Result<(usize, &'a Item)> {
    let range = search_by_category(view, category)
        .ok_or_else(|| StockError::CategoryNotFound(category.to_string()))?;

    let index = search_by_name(view, range, name).ok_or_else(|| {
        StockError::NameNotFoundInCategory {
            name: name.to_string(),
            category: category.to_string(),
        }
    })?;

    Ok((index, &view.items()[index]))
}
