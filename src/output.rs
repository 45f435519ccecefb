//! Result line formatting
//!
//! Pure string producers, kept apart from the commands so the exact output
//! shapes can be unit tested without touching the network or stdout.

use crate::github::Repository;

/// Column header printed above search results, once per fetched page
pub const RESULTS_HEADER: &str = "# (*) repository - description";

fn description_suffix(repo: &Repository) -> String {
    match repo.description.as_deref() {
        Some(descr) if !descr.is_empty() => format!(" - {}", descr),
        _ => String::new(),
    }
}

/// One line of `list` output: `owner/name` with an optional description
pub fn repo_line(owner: &str, repo: &Repository) -> String {
    format!("{}/{}{}", owner, repo.name, description_suffix(repo))
}

/// One line of search output: running index, star count, clone URL,
/// optional description
pub fn search_line(index: u64, repo: &Repository) -> String {
    format!(
        "{} ({}) {}{}",
        index,
        repo.stargazers_count,
        repo.clone_url,
        description_suffix(repo)
    )
}

/// Per-page result count banner
pub fn results_banner(total: u64) -> String {
    format!("Found {} results", total)
}
