use crate::github::repository::DEFAULT_SERVER_URL;
use crate::github::search::DEFAULT_API_URL;
use crate::patcher::DEFAULT_DELIMITER;
use clap::Parser;
use clap::error::ErrorKind;

/// Generate a markdown changelog for a milestone from its closed GitHub issues.
///
/// Every option can also be supplied through the environment variable GitHub Actions sets
/// for the matching action input.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "milestone-changelog", version)]
pub struct GenerateArgs {
    /// Organization (or user) owning the repository
    #[arg(long, env = "INPUT_GITHUB_ORGANIZATION")]
    pub github_organization: String,

    /// Repository name
    #[arg(long, env = "INPUT_GITHUB_REPOSITORY")]
    pub github_repository: String,

    /// Milestone to generate the changelog for
    #[arg(long, env = "INPUT_MILESTONE")]
    pub milestone: String,

    #[arg(long, env = "INPUT_ADDED_LABEL_NAME", default_value = "Added")]
    pub added_label_name: String,

    #[arg(long, env = "INPUT_UPDATED_LABEL_NAME", default_value = "Updated")]
    pub updated_label_name: String,

    #[arg(long, env = "INPUT_CHANGED_LABEL_NAME", default_value = "Changed")]
    pub changed_label_name: String,

    #[arg(long, env = "INPUT_FIXED_LABEL_NAME", default_value = "Fixed")]
    pub fixed_label_name: String,

    #[arg(long, env = "INPUT_REMOVED_LABEL_NAME", default_value = "Removed")]
    pub removed_label_name: String,

    /// Existing changelog file to insert the result into (empty means none)
    #[arg(long, env = "INPUT_CHANGELOG_FILE_PATH")]
    pub changelog_file_path: Option<String>,

    /// Line-start regex marking the insertion point
    #[arg(long, env = "INPUT_CHANGELOG_FILE_DELIMITER", default_value = DEFAULT_DELIMITER)]
    pub changelog_file_delimiter: String,

    /// GitHub REST API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// GitHub web base URL used for links
    #[arg(long, env = "GITHUB_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    pub server_url: String,

    /// File receiving the `changelog` step output
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub output_file: Option<String>,
}

/// Enum representing CLI commands
#[derive(Debug, PartialEq)]
pub enum Command {
    Generate(Box<GenerateArgs>),
    /// Help or version text to print
    Help(String),
    Invalid(String),
}

/// Parse command line arguments and return a Command
///
/// # Arguments
/// * `args` - Command line arguments (including program name)
pub fn parse_args(args: &[String]) -> Command {
    match GenerateArgs::try_parse_from(args) {
        Ok(parsed) => Command::Generate(Box::new(parsed)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                Command::Help(err.render().to_string())
            }
            _ => Command::Invalid(err.render().to_string()),
        },
    }
}
