//! Name search
//!
//! Ternary search over a closed range of the sorted view.

use std::cmp::Ordering;

use crate::view::SortedView;
use super::CategoryRange;

/// Find the view position of `name` inside `range`
///
/// Each step probes two pivots, `mid1 = start + (end - start) / 3` and
/// `mid2 = end - (end - start) / 3`, and keeps the third that can still hold
/// the name. Comparison is exact and case-sensitive, matching the order the
/// sorter produced. A range reaching past the end of the view yields `None`.
pub fn search_by_name(view: &SortedView, range: CategoryRange, name: &str) -> Option<usize> {
    let items = view.items();
    if range.start > range.end || range.end >= items.len() {
        return None;
    }

    let (mut lo, mut hi) = (range.start, range.end);

    while lo <= hi {
        let mid1 = lo + (hi - lo) / 3;
        let mid2 = hi - (hi - lo) / 3;

        let at_mid1 = name.cmp(items[mid1].name.as_str());
        if at_mid1 == Ordering::Equal {
            return Some(mid1);
        }
        let at_mid2 = name.cmp(items[mid2].name.as_str());
        if at_mid2 == Ordering::Equal {
            return Some(mid2);
        }

        if at_mid1 == Ordering::Less {
            hi = mid1.checked_sub(1)?;
        } else if at_mid2 == Ordering::Greater {
            lo = mid2 + 1;
        } else {
            lo = mid1 + 1;
            hi = mid2.checked_sub(1)?;
        }
    }

    None
}
