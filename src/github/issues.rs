use crate::error::{ChangelogError, Result};
use serde::Deserialize;

/// A closed issue (or pull request) returned by the issue search API.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Issue {
    pub title: String,
    pub number: u64,
    pub html_url: String,
    pub user: IssueUser,
    pub labels: Vec<IssueLabel>,
}

/// The account that opened the issue.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct IssueUser {
    pub login: String,
    pub html_url: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct IssueLabel {
    pub name: String,
}

/// Body of a `/search/issues` response. Only `items` is used.
#[derive(Deserialize, Debug)]
struct SearchResponse {
    items: Vec<Issue>,
}

impl Issue {
    /// Whether the issue carries a label named `name`, ignoring case.
    pub fn has_label(&self, name: &str) -> bool {
        let wanted = name.to_lowercase();
        self.labels
            .iter()
            .any(|label| label.name.to_lowercase() == wanted)
    }
}

/// Extracts the issues from a `/search/issues` response body.
///
/// - A body that is not JSON at all is returned verbatim in `InvalidResponse`.
/// - JSON without `items`, or items missing a required field, is a `MalformedResponse`.
pub fn parse_search_response(body: &str) -> Result<Vec<Issue>> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|_| ChangelogError::InvalidResponse(body.to_string()))?;
    let response: SearchResponse = serde_json::from_value(value)?;
    Ok(response.items)
}
