//! Category registry
//!
//! The ordered list of known categories, fixed at startup.

use std::fmt;

use crate::error::{Result, StockError};

/// Categories every fresh registry starts with
const DEFAULT_CATEGORIES: [&str; 3] = ["Beverage", "Juice", "Tea"];

/// Known category names in sorted-view priority order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRegistry {
    names: Vec<String>,
}

impl CategoryRegistry {
    /// Build a registry from names in priority order
    ///
    /// Names are trimmed; blank names and duplicates are rejected.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut registry = Self { names: Vec::new() };

        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                return Err(StockError::Config("category name is empty".to_string()));
            }
            if registry.contains(name) {
                return Err(StockError::Config(format!("duplicate category: {}", name)));
            }
            registry.names.push(name.to_string());
        }

        Ok(registry)
    }

    /// Position of a category, exact match
    pub fn position(&self, category: &str) -> Option<usize> {
        self.names.iter().position(|name| name == category)
    }

    /// Check if a category is registered
    pub fn contains(&self, category: &str) -> bool {
        self.position(category).is_some()
    }

    /// Iterate in priority order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of registered categories
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if no category is registered
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self {
            names: DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl fmt::Display for CategoryRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names.join(", "))
    }
}
