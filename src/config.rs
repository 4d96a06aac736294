use crate::cli::parser::GenerateArgs;
use crate::error::{ChangelogError, Result};
use crate::github::repository::Repository;
use crate::github::search::SearchQuery;
use crate::patcher;
use regex::Regex;
use std::path::PathBuf;

/// Change categories, in the priority order used for classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelKey {
    Added,
    Updated,
    Changed,
    Fixed,
    Removed,
}

impl LabelKey {
    /// Label name used when the category is not configured.
    pub fn default_name(&self) -> &'static str {
        match self {
            LabelKey::Added => "Added",
            LabelKey::Updated => "Updated",
            LabelKey::Changed => "Changed",
            LabelKey::Fixed => "Fixed",
            LabelKey::Removed => "Removed",
        }
    }

    /// Get all label keys, highest priority first
    pub fn all() -> &'static [LabelKey] {
        &[
            LabelKey::Added,
            LabelKey::Updated,
            LabelKey::Changed,
            LabelKey::Fixed,
            LabelKey::Removed,
        ]
    }
}

/// The five label names matched against issues, in priority order.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelNames {
    pub added: String,
    pub updated: String,
    pub changed: String,
    pub fixed: String,
    pub removed: String,
}

impl Default for LabelNames {
    fn default() -> Self {
        LabelNames {
            added: LabelKey::Added.default_name().to_string(),
            updated: LabelKey::Updated.default_name().to_string(),
            changed: LabelKey::Changed.default_name().to_string(),
            fixed: LabelKey::Fixed.default_name().to_string(),
            removed: LabelKey::Removed.default_name().to_string(),
        }
    }
}

impl LabelNames {
    pub fn get(&self, key: LabelKey) -> &str {
        match key {
            LabelKey::Added => &self.added,
            LabelKey::Updated => &self.updated,
            LabelKey::Changed => &self.changed,
            LabelKey::Fixed => &self.fixed,
            LabelKey::Removed => &self.removed,
        }
    }

    /// Label names ordered by priority.
    pub fn priority(&self) -> Vec<&str> {
        LabelKey::all().iter().map(|key| self.get(*key)).collect()
    }
}

/// Existing file the changelog is inserted into.
#[derive(Debug, Clone)]
pub struct ChangelogFile {
    pub path: PathBuf,
    pub delimiter: Regex,
}

/// Validated settings for one changelog run.
#[derive(Debug, Clone)]
pub struct Config {
    pub repository: Repository,
    pub milestone: String,
    pub labels: LabelNames,
    pub changelog_file: Option<ChangelogFile>,
    pub api_url: String,
    pub output_file: Option<PathBuf>,
}

impl Config {
    /// Validates parsed arguments.
    ///
    /// Checks that the required inputs are not blank, that the changelog file exists and
    /// that the delimiter compiles. Nothing here touches the network.
    pub fn from_args(args: GenerateArgs) -> Result<Config> {
        let owner = required(args.github_organization, "github_organization")?;
        let repo = required(args.github_repository, "github_repository")?;
        let milestone = required(args.milestone, "milestone")?;

        let labels = LabelNames {
            added: label_or_default(args.added_label_name, LabelKey::Added),
            updated: label_or_default(args.updated_label_name, LabelKey::Updated),
            changed: label_or_default(args.changed_label_name, LabelKey::Changed),
            fixed: label_or_default(args.fixed_label_name, LabelKey::Fixed),
            removed: label_or_default(args.removed_label_name, LabelKey::Removed),
        };

        let changelog_file = match optional_path(args.changelog_file_path) {
            Some(path) => {
                if !path.is_file() {
                    return Err(ChangelogError::FileNotFound(path));
                }
                let pattern = if args.changelog_file_delimiter.trim().is_empty() {
                    patcher::DEFAULT_DELIMITER
                } else {
                    args.changelog_file_delimiter.as_str()
                };
                let delimiter = patcher::delimiter_regex(pattern)?;
                Some(ChangelogFile { path, delimiter })
            }
            None => None,
        };

        Ok(Config {
            repository: Repository::new(&args.server_url, &owner, &repo),
            milestone,
            labels,
            changelog_file,
            api_url: args.api_url,
            output_file: optional_path(args.output_file),
        })
    }

    pub fn search_query(&self) -> SearchQuery<'_> {
        SearchQuery {
            repository: &self.repository,
            milestone: &self.milestone,
        }
    }
}

fn required(value: String, name: &'static str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ChangelogError::MissingInput(name));
    }
    Ok(trimmed.to_string())
}

/// Empty values are how an action runner passes an omitted input.
fn optional_path(value: Option<String>) -> Option<PathBuf> {
    value
        .filter(|path| !path.trim().is_empty())
        .map(PathBuf::from)
}

fn label_or_default(value: String, key: LabelKey) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        key.default_name().to_string()
    } else {
        trimmed.to_string()
    }
}
