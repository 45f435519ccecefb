//! Utility modules for common functionality

pub mod query;

// Re-export commonly used functions
pub use query::{build_query, join_keywords};
