//! Category sorter
//!
//! Partitions items by category and orders each partition by name.

use std::collections::HashMap;

use crate::catalog::Item;
use super::{CategoryRegistry, SortedView};

/// Build a fresh sorted view from a set of items
///
/// 1. One bucket per registered category, in registry order
/// 2. Unregistered categories get trailing buckets in first-seen order
/// 3. Each bucket is stably sorted by name (byte order, case-sensitive)
/// 4. Buckets are concatenated
///
/// The output is a permutation of the input. The input is not touched.
pub fn rebuild<'a, I>(items: I, registry: &CategoryRegistry) -> SortedView
where
    I: IntoIterator<Item = &'a Item>,
{
    let mut order: Vec<String> = registry.iter().map(str::to_string).collect();
    let mut ranks: HashMap<String, usize> = order
        .iter()
        .enumerate()
        .map(|(rank, category)| (category.clone(), rank))
        .collect();
    let mut buckets: Vec<Vec<Item>> = vec![Vec::new(); order.len()];

    // Step 1: Partition
    for item in items {
        let rank = match ranks.get(&item.category) {
            Some(&rank) => rank,
            None => {
                let rank = order.len();
                order.push(item.category.clone());
                ranks.insert(item.category.clone(), rank);
                buckets.push(Vec::new());
                rank
            }
        };
        buckets[rank].push(item.clone());
    }

    // Step 2: Sort each bucket, then concatenate
    let total = buckets.iter().map(Vec::len).sum();
    let mut sorted = Vec::with_capacity(total);
    for mut bucket in buckets {
        bucket.sort_by(|a, b| a.name.cmp(&b.name));
        sorted.append(&mut bucket);
    }

    SortedView::from_parts(sorted, order, ranks)
}
