//! Menu Catalog Domain Module
//!
//! This module contains the read-only restaurant catalog:
//! - Domain models (MenuItem, dietary preferences, search criteria)
//! - The catalog itself (loading, listing, lookup and filtering)

pub mod catalog;
pub mod models;

// Re-export commonly used types for convenience
pub use catalog::Catalog;
pub use models::{DietaryPreference, MenuItem, SearchCriteria};
