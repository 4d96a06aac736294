use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating a milestone changelog
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Failed to search issues: {0}")]
    Network(#[from] reqwest::Error),

    #[error("No closed issues found for milestone \"{milestone}\" in {owner}/{repo}")]
    EmptyResult {
        owner: String,
        repo: String,
        milestone: String,
    },

    #[error("Changelog file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Invalid changelog delimiter {pattern:?}: {source}")]
    InvalidDelimiter {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Unexpected search response: {0}")]
    InvalidResponse(String),

    #[error("Malformed search response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("Missing required input: {0}")]
    MissingInput(&'static str),

    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Type alias for Result with ChangelogError
pub type Result<T> = std::result::Result<T, ChangelogError>;
