use cucumber::World;
use std::path::PathBuf;
use tempfile::TempDir;
use wiremock::MockServer;

#[derive(Debug, Default, World)]
pub struct ChangelogWorld {
    pub owner: String,
    pub repo: String,
    pub milestone: String,
    pub api: Option<ApiServer>,
    pub workdir: Option<TempDir>,
    pub changelog_path: Option<PathBuf>,
    pub original_file_content: String,
    pub captured_output: Vec<u8>,
    pub run_result: Option<Result<Option<String>, anyhow::Error>>,
}

/// Mock GitHub API for one scenario.
pub struct ApiServer(pub MockServer);

impl std::fmt::Debug for ApiServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ApiServer").field(&self.0.uri()).finish()
    }
}

#[tokio::main]
async fn main() {
    ChangelogWorld::run("features").await;
}

mod steps;
