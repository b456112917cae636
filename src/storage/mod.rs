//! Storage Module
//!
//! Flat-file persistence for the working set and the sorted view.
//!
//! ## Responsibilities
//! - Parse and format one record per line
//! - Load the working set on startup
//! - Rewrite both files after a mutation (atomic replace)
//!
//! ## File Format
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ name  category  price  stock                 │
//! │ Coke Beverage 3 20                           │
//! │ Milk%20Tea Tea 5.5 10                        │
//! │ ... one record per line ...                  │
//! └──────────────────────────────────────────────┘
//! ```
//! Fields are whitespace-separated. Whitespace and `%` inside a field are
//! percent-encoded so names like "Milk Tea" survive a round trip; plain
//! fields are written verbatim.

mod manager;
mod record;

pub use manager::RecordStore;
pub use record::{decode_field, encode_field, format_record, parse_record};
