//! GitHub API integration module
//!
//! This module provides the interface for interacting with the slice of
//! GitHub's REST API that hubfind needs. It follows a modular design where
//! the different API endpoints are organized into separate sub-modules.
//!
//! ## Architecture
//!
//! - [`client`]: Core GitHub client with authentication and request building
//! - [`auth`]: Authentication handling and token management
//! - [`repositories`]: Listing repositories by owner
//! - [`search`]: Repository and code search
//! - [`types`]: Data structures and type definitions
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hubfind::github::GitHubClient;
//!
//! # async fn example() -> anyhow::Result<()> {
//! // Create a client
//! let client = GitHubClient::new(Some("your_token".to_string()));
//!
//! // List a user's repositories, first page
//! let repos = client.list_repositories("octocat", 100, 1).await?;
//! for repo in repos {
//!     println!("{}", repo.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod repositories;
pub mod search;
pub mod types;

// Re-export commonly used items for convenience
pub use auth::GitHubAuth;
pub use client::GitHubClient;
pub use types::{CodeSearchItem, Owner, Repository, SearchResults};
