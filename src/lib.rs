//! Hubfind - A CLI tool for searching GitHub repositories and code

pub mod commands;
pub mod constants;
pub mod github;
pub mod output;
pub mod utils;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use commands::{Command, CommandContext};
pub use github::GitHubClient;
