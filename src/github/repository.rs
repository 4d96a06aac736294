/// Public GitHub web host, used for links in the rendered changelog.
pub const DEFAULT_SERVER_URL: &str = "https://github.com";

/// A repository on a GitHub (or GitHub Enterprise) server.
#[derive(Debug, Clone, PartialEq)]
pub struct Repository {
    pub server_url: String,
    pub owner: String,
    pub name: String,
}

impl Repository {
    pub fn new(server_url: &str, owner: &str, name: &str) -> Self {
        Repository {
            server_url: server_url.trim_end_matches('/').to_string(),
            owner: owner.to_string(),
            name: name.to_string(),
        }
    }

    /// Repository on github.com
    pub fn github(owner: &str, name: &str) -> Self {
        Self::new(DEFAULT_SERVER_URL, owner, name)
    }

    /// `owner/name`, as used by search qualifiers.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// Browser URL of the repository.
    pub fn web_url(&self) -> String {
        format!("{}/{}/{}", self.server_url, self.owner, self.name)
    }
}
