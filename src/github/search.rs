//! GitHub Search API operations
//!
//! Keyword search over repositories and code. The query string is passed
//! through to the API verbatim; malformed query syntax is the service's
//! error to report, not detected locally.

use super::client::GitHubClient;
use super::types::{CodeSearchItem, Repository, SearchResults};
use anyhow::Result;
use tracing::debug;

impl GitHubClient {
    /// Search repositories matching a keyword query
    ///
    /// # Arguments
    /// * `query` - Search query, keywords joined with `+` plus any
    ///   qualifiers (e.g. `language:go`)
    /// * `per_page` - Number of results per page (max 100)
    /// * `page` - 1-based page number
    ///
    /// # Example
    /// ```rust,no_run
    /// use hubfind::github::GitHubClient;
    ///
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = GitHubClient::new(None);
    /// let results = client.search_repositories("http+router", 100, 1).await?;
    /// println!("{} total matches", results.total_count);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search_repositories(
        &self,
        query: &str,
        per_page: u32,
        page: u32,
    ) -> Result<SearchResults<Repository>> {
        let url = format!(
            "{}/search/repositories?q={}&per_page={}&page={}",
            self.base_url, query, per_page, page
        );

        debug!(url = %url, "searching repositories");
        let response = self.get(&url).send().await?;

        if response.status().is_success() {
            let results: SearchResults<Repository> = response.json().await?;
            Ok(results)
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

    /// Search file contents matching a keyword query
    ///
    /// Each hit references the containing repository and carries an HTML URL
    /// pointing at the matching file.
    pub async fn search_code(
        &self,
        query: &str,
        per_page: u32,
        page: u32,
    ) -> Result<SearchResults<CodeSearchItem>> {
        let url = format!(
            "{}/search/code?q={}&per_page={}&page={}",
            self.base_url, query, per_page, page
        );

        debug!(url = %url, "searching code");
        let response = self.get(&url).send().await?;

        if response.status().is_success() {
            let results: SearchResults<CodeSearchItem> = response.json().await?;
            Ok(results)
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
