//! Central constants for the hubfind application

/// Default values for GitHub API operations
pub mod github {
    /// GitHub API base URL
    pub const API_BASE: &str = "https://api.github.com";

    /// Default User-Agent header for API requests
    pub const DEFAULT_USER_AGENT: &str = concat!("hubfind/", env!("CARGO_PKG_VERSION"));

    /// GitHub REST API version header value
    pub const API_VERSION: &str = "2022-11-28";

    /// Number of items requested per page
    pub const PER_PAGE: u32 = 100;

    /// Hard cap on pages fetched per invocation
    pub const MAX_PAGES: u32 = 2;

    /// Language qualifier appended to search queries unless disabled
    pub const DEFAULT_LANGUAGE: &str = "go";
}

/// Environment variable names
pub mod env {
    /// Default source for the API token when no flag is given
    pub const TOKEN: &str = "GITHUB_TOKEN";

    /// Override for the API base URL (GitHub Enterprise hosts)
    pub const API_URL: &str = "GITHUB_API_URL";
}

/// Process exit codes
pub mod exit {
    /// Any request against the GitHub API failed
    pub const REQUEST_FAILED: i32 = 111;
}
