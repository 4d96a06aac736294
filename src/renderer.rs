use crate::classifier::Section;
use crate::github::issues::Issue;
use crate::github::repository::Repository;
use chrono::NaiveDate;

/// Renders the changelog entry for `milestone`.
///
/// The output starts with a newline, followed by the release heading, the release-date
/// line and one block per section.
pub fn render(
    repository: &Repository,
    milestone: &str,
    sections: &[Section],
    release_date: NaiveDate,
) -> String {
    let web_url = repository.web_url();
    let header = format!(
        "\n## [{milestone}]({web_url}/releases/tag/{milestone}) ({short_date})\n\
         Released on {long_date}. All issues associated with this milestone can be found using this \
         [filter]({web_url}/issues?q=milestone%3A{milestone}+is%3Aclosed).\n",
        short_date = release_date.format("%m/%d/%Y"),
        long_date = release_date.format("%A, %B %d, %Y"),
    );

    sections
        .iter()
        .fold(header, |mut changelog, section| {
            changelog.push_str(&render_section(section));
            changelog
        })
}

fn render_section(section: &Section) -> String {
    let heading = format!("\n### {}\n", section.name);
    section.issues.iter().map(render_issue).fold(heading, |mut out, item| {
        out.push_str(&item);
        out
    })
}

fn render_issue(issue: &Issue) -> String {
    format!(
        "* {}\n * Fixed by [{}]({}) in [#{}]({}).\n",
        issue.title, issue.user.login, issue.user.html_url, issue.number, issue.html_url
    )
}
