//! GitHub API client implementation
//!
//! This module provides the main `GitHubClient` struct which serves as the
//! entry point for all GitHub API operations. The client encapsulates
//! authentication and HTTP client state; the endpoint methods live in the
//! `repositories` and `search` modules as `impl` blocks extending it.

use super::auth::GitHubAuth;
use crate::constants;
use reqwest::Client;

/// GitHub API client for interacting with GitHub's REST API
///
/// Construction cannot fail; connectivity and authentication problems only
/// surface when a request is issued.
///
/// ## Example
///
/// ```rust,no_run
/// use hubfind::github::GitHubClient;
///
/// // Client without authentication (public data, lower rate limits)
/// let anonymous = GitHubClient::new(None);
///
/// // Client with authentication
/// let authenticated = GitHubClient::new(Some("your_token".to_string()));
/// ```
pub struct GitHubClient {
    pub(crate) client: Client,
    pub(crate) auth: Option<GitHubAuth>,
    pub(crate) base_url: String,
}

impl GitHubClient {
    /// Create a new GitHub client
    ///
    /// # Arguments
    /// * `token` - Optional personal access token. `None` or an empty string
    ///   produces an anonymous client.
    pub fn new(token: Option<String>) -> Self {
        let auth = token.filter(|t| !t.is_empty()).map(GitHubAuth::new);
        Self {
            client: Client::new(),
            auth,
            base_url: constants::github::API_BASE.to_string(),
        }
    }

    /// Point the client at a different API host (GitHub Enterprise)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Check if the client has authentication configured
    pub fn is_authenticated(&self) -> bool {
        self.auth.is_some()
    }

    /// Get the authentication token (if available)
    pub fn token(&self) -> Option<&str> {
        self.auth.as_ref().map(|auth| auth.token())
    }

    /// Build a GET request with the standard API headers attached
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let mut request = self
            .client
            .get(url)
            .header("User-Agent", constants::github::DEFAULT_USER_AGENT)
            .header("Accept", "application/vnd.github.v3+json")
            .header("X-GitHub-Api-Version", constants::github::API_VERSION);

        if let Some(auth) = &self.auth {
            request = request.header("Authorization", auth.get_auth_header());
        }

        request
    }
}
