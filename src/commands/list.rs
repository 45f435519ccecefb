//! List command implementation

use super::{Command, CommandContext};
use crate::constants::github::{MAX_PAGES, PER_PAGE};
use crate::output;
use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

/// List command for printing a user's repositories, one per line
pub struct ListCommand {
    /// Owner to list repositories for; empty means the authenticated user
    pub user: String,
}

#[async_trait]
impl Command for ListCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        for page in 1..=MAX_PAGES {
            debug!(user = %self.user, page, "fetching repository page");
            let repos = context
                .client
                .list_repositories(&self.user, PER_PAGE, page)
                .await?;

            // A short listing ends before the page cap
            if repos.is_empty() {
                break;
            }

            for repo in &repos {
                println!("{}", output::repo_line(&self.user, repo));
            }
        }

        Ok(())
    }
}
