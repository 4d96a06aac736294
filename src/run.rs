use crate::classifier;
use crate::cli;
use crate::config::Config;
use crate::error::{ChangelogError, Result};
use crate::github::search::{GitHubSearchClient, IssueSearch};
use crate::output;
use crate::patcher;
use anyhow::Context;
use chrono::NaiveDate;

/// Fetches the milestone's closed issues and renders the changelog.
///
/// Fails with `EmptyResult` when the milestone has no closed issues.
pub async fn generate_changelog<S: IssueSearch>(
    config: &Config,
    search: &S,
    release_date: NaiveDate,
) -> Result<String> {
    let issues = search.search_closed_issues(&config.search_query()).await?;
    if issues.is_empty() {
        return Err(ChangelogError::EmptyResult {
            owner: config.repository.owner.clone(),
            repo: config.repository.name.clone(),
            milestone: config.milestone.clone(),
        });
    }
    tracing::info!(
        count = issues.len(),
        milestone = %config.milestone,
        "found closed issues"
    );

    let sections = classifier::classify(issues, &config.labels.priority());
    tracing::info!(sections = sections.len(), "classified issues");

    Ok(crate::renderer::render(
        &config.repository,
        &config.milestone,
        &sections,
        release_date,
    ))
}

/// Runs the command line: validate, generate, publish.
///
/// Returns the rendered changelog, or `None` when only help text was printed.
pub async fn run(
    args: Vec<String>,
    mut stdout_additional: Option<&mut dyn std::io::Write>,
) -> anyhow::Result<Option<String>> {
    let generate_args = match cli::parser::parse_args(&args) {
        cli::parser::Command::Generate(generate_args) => generate_args,
        cli::parser::Command::Help(text) => {
            output::println(text.trim_end(), &mut stdout_additional)?;
            return Ok(None);
        }
        cli::parser::Command::Invalid(message) => {
            return Err(anyhow::Error::msg(message.trim_end().to_string()));
        }
    };

    let config = Config::from_args(*generate_args).context("Invalid configuration")?;
    let client = GitHubSearchClient::new(&config.api_url).context("Failed to create HTTP client")?;

    let release_date = chrono::Local::now().date_naive();
    let changelog = generate_changelog(&config, &client, release_date)
        .await
        .context("Failed to generate changelog")?;

    output::println(&changelog, &mut stdout_additional)?;

    if let Some(path) = &config.output_file {
        output::write_step_output(path, output::CHANGELOG_OUTPUT, &changelog)
            .with_context(|| format!("Failed to write step output to {}", path.display()))?;
    }

    if let Some(file) = &config.changelog_file {
        let patched = patcher::patch_file(&file.path, &file.delimiter, &changelog)
            .context("Failed to update changelog file")?;
        if patched {
            tracing::info!(path = %file.path.display(), "changelog inserted");
        } else {
            tracing::info!(
                path = %file.path.display(),
                "delimiter not found, changelog file left unchanged"
            );
        }
    }

    Ok(Some(changelog))
}
