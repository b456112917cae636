//! Error types for stocklist
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using StockError
pub type Result<T> = std::result::Result<T, StockError>;

/// Unified error type for stocklist operations
#[derive(Debug, Error)]
pub enum StockError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Record File Errors
    // -------------------------------------------------------------------------
    #[error("Malformed record on line {line}: {reason}")]
    Record { line: usize, reason: String },

    // -------------------------------------------------------------------------
    // Catalog Errors
    // -------------------------------------------------------------------------
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Item not found: {0}")]
    ItemNotFound(String),

    // -------------------------------------------------------------------------
    // Search Errors
    // -------------------------------------------------------------------------
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("Item {name} not found in category {category}")]
    NameNotFoundInCategory { name: String, category: String },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
