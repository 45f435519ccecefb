//! Find command implementation

use super::{Command, CommandContext};
use crate::constants::github::{MAX_PAGES, PER_PAGE};
use crate::output;
use crate::utils::build_query;
use anyhow::Result;
use async_trait::async_trait;
use colored::*;
use tracing::debug;

/// Find command for searching repositories by keyword
pub struct FindCommand {
    /// Keywords already joined with `+`
    pub keywords: String,
    /// Disable the default language qualifier
    pub all_languages: bool,
}

#[async_trait]
impl Command for FindCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let query = build_query(&self.keywords, self.all_languages);
        let mut index: u64 = 0;

        for page in 1..=MAX_PAGES {
            debug!(query = %query, page, "searching repositories");
            let results = context
                .client
                .search_repositories(&query, PER_PAGE, page)
                .await?;

            println!("{}", output::results_banner(results.total_count).green());
            println!("{}", output::RESULTS_HEADER);

            for repo in &results.items {
                println!("{}", output::search_line(index, repo));
                index += 1;
            }

            // A reported total other than exactly one full page is treated
            // as the last page
            if results.total_count != u64::from(PER_PAGE) {
                break;
            }
        }

        Ok(())
    }
}
