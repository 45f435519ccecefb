//! Base types and traits for the command pattern

use crate::github::GitHubClient;
use anyhow::Result;

/// Context passed to all commands
pub struct CommandContext {
    /// The API client, anonymous or token-authenticated
    pub client: GitHubClient,
}

/// Trait that all commands must implement
#[async_trait::async_trait]
pub trait Command {
    /// Execute the command with the given context
    async fn execute(&self, context: &CommandContext) -> Result<()>;
}
