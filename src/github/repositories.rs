//! GitHub Repository API operations
//!
//! Listing repositories by owner. An empty owner name lists the
//! authenticated user's repositories instead.

use super::client::GitHubClient;
use super::types::Repository;
use anyhow::Result;
use tracing::debug;

impl GitHubClient {
    /// List repositories for a user or organization
    ///
    /// # Arguments
    /// * `owner` - Repository owner (username or organization); empty means
    ///   the authenticated user
    /// * `per_page` - Number of results per page (max 100)
    /// * `page` - 1-based page number
    ///
    /// # Returns
    /// One page of repositories; an empty vector means the listing is
    /// exhausted.
    ///
    /// # Example
    /// ```rust,no_run
    /// use hubfind::github::GitHubClient;
    ///
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = GitHubClient::new(None);
    /// let repos = client.list_repositories("octocat", 100, 1).await?;
    /// println!("{} repositories", repos.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_repositories(
        &self,
        owner: &str,
        per_page: u32,
        page: u32,
    ) -> Result<Vec<Repository>> {
        let url = if owner.is_empty() {
            format!(
                "{}/user/repos?per_page={}&page={}",
                self.base_url, per_page, page
            )
        } else {
            format!(
                "{}/users/{}/repos?per_page={}&page={}",
                self.base_url, owner, per_page, page
            )
        };

        debug!(url = %url, "listing repositories");
        let response = self.get(&url).send().await?;

        if response.status().is_success() {
            let repos: Vec<Repository> = response.json().await?;
            Ok(repos)
        } else {
            let status = response.status();
            let error_text = response.text().await?;
            Err(anyhow::anyhow!(
                "GitHub API error ({}): {}",
                status,
                error_text
            ))
        }
    }
}
