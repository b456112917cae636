//! # stocklist
//!
//! A small retail inventory manager with:
//! - A separate-chaining hash index keyed by case-insensitive item name
//! - A category-partitioned, name-sorted secondary view
//! - Two-phase range search (category block, then name)
//! - Flat-file persistence of the working set and the sorted view
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      stocklist-cli                           │
//! │               (add / edit / remove / search)                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Inventory                              │
//! │          (mutate → rebuild view → persist)                   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┼─────────────────────┐
//!          │            │                     │
//!          ▼            ▼                     ▼
//!   ┌─────────────┐ ┌─────────────┐    ┌─────────────┐
//!   │   Catalog   │ │ SortedView  │───▶│   Search    │
//!   │ (hash index)│ │ (by category│    │(range+name) │
//!   └──────┬──────┘ │  then name) │    └─────────────┘
//!          │        └──────┬──────┘
//!          ▼               ▼
//!   ┌─────────────────────────────┐
//!   │        RecordStore          │
//!   │ inventory.txt / sorted_*.txt│
//!   └─────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod catalog;
pub mod view;
pub mod search;
pub mod storage;
pub mod inventory;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{StockError, Result};
pub use config::{CategoryPolicy, Config};
pub use catalog::{Catalog, Item, Upsert};
pub use view::{CategoryRegistry, SortedView};
pub use search::CategoryRange;
pub use inventory::{Inventory, ItemPatch};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of stocklist
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
