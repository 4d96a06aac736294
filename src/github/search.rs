use crate::error::Result;
use crate::github::issues::{Issue, parse_search_response};
use crate::github::repository::Repository;
use std::time::Duration;

/// Public GitHub REST API host.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const USER_AGENT: &str = "milestone-changelog";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Closed issues of one milestone in one repository.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery<'a> {
    pub repository: &'a Repository,
    pub milestone: &'a str,
}

impl SearchQuery<'_> {
    /// Builds the `q` parameter, e.g. `repo:acme/widgets milestone:v1.0 state:closed`.
    ///
    /// Milestones containing whitespace are quoted so the search treats them as one term.
    pub fn to_query_string(&self) -> String {
        let milestone = if self.milestone.chars().any(char::is_whitespace) {
            format!("\"{}\"", self.milestone)
        } else {
            self.milestone.to_string()
        };
        format!(
            "repo:{} milestone:{} state:closed",
            self.repository.full_name(),
            milestone
        )
    }
}

/// Source of closed milestone issues
#[allow(async_fn_in_trait)]
pub trait IssueSearch {
    /// Returns the matching issues in the order the backend reports them.
    async fn search_closed_issues(&self, query: &SearchQuery<'_>) -> Result<Vec<Issue>>;
}

/// `IssueSearch` backed by the GitHub `/search/issues` endpoint
pub struct GitHubSearchClient {
    client: reqwest::Client,
    api_url: String,
}

impl GitHubSearchClient {
    pub fn new(api_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(GitHubSearchClient {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }
}

impl IssueSearch for GitHubSearchClient {
    async fn search_closed_issues(&self, query: &SearchQuery<'_>) -> Result<Vec<Issue>> {
        let url = format!("{}/search/issues", self.api_url);
        let q = query.to_query_string();
        tracing::debug!(%url, %q, "searching issues");

        let response = self
            .client
            .get(&url)
            .query(&[("q", q.as_str())])
            .header("Accept", "application/vnd.github+json")
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        parse_search_response(&body)
    }
}
