//! GitHub API payload types
//!
//! Deserialization targets for the endpoints hubfind calls. Every field is
//! defaulted so a response missing optional fields (the search endpoints
//! return trimmed-down repository objects) still decodes.

use serde::Deserialize;

/// Repository owner (user or organization)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Owner {
    #[serde(default)]
    pub login: String,
}

/// A GitHub repository as returned by the list and search endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Repository {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub owner: Owner,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub clone_url: String,
}

/// A single code-search match referencing its containing repository
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CodeSearchItem {
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub repository: Repository,
}

/// One page of a search response
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResults<T> {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub items: Vec<T>,
}
