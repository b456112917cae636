//! Category boundary search
//!
//! Leftmost and rightmost binary searches over category rank.

use std::cmp::Ordering;

use crate::view::SortedView;
use super::CategoryRange;

/// Locate the contiguous block of `category` in `view`
///
/// Categories are compared by their rank in the view's group order, which
/// is the order the sorter laid the groups out in. Returns `None` if the
/// category is unknown to the view or has no items.
pub fn search_by_category(view: &SortedView, category: &str) -> Option<CategoryRange> {
    let target = view.rank_of(category)?;
    let start = leftmost(view, target)?;
    let end = rightmost(view, target, start)?;
    Some(CategoryRange { start, end })
}

/// Compare the rank at `index` against `target`
fn rank_cmp(view: &SortedView, index: usize, target: usize) -> Ordering {
    // Every item's category is ranked by the sorter; anything else sorts last.
    let rank = view
        .rank_of(&view.items()[index].category)
        .unwrap_or(usize::MAX);
    rank.cmp(&target)
}

/// First position whose rank equals `target`
///
/// On a match, record it and keep searching the left half.
fn leftmost(view: &SortedView, target: usize) -> Option<usize> {
    let (mut lo, mut hi) = (0, view.len());
    let mut found = None;

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match rank_cmp(view, mid, target) {
            Ordering::Equal => {
                found = Some(mid);
                hi = mid;
            }
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }

    found
}

/// Last position whose rank equals `target`, starting from a known match
///
/// On a match, record it and keep searching the right half.
fn rightmost(view: &SortedView, target: usize, start: usize) -> Option<usize> {
    let (mut lo, mut hi) = (start, view.len());
    let mut found = None;

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match rank_cmp(view, mid, target) {
            Ordering::Equal => {
                found = Some(mid);
                lo = mid + 1;
            }
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }

    found
}
