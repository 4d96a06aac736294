use crate::{ApiServer, ChangelogWorld};
use cucumber::gherkin::Step;
use cucumber::{given, then, when};
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn unescape(text: &str) -> String {
    text.replace("\\n", "\n").replace("\\\"", "\"")
}

fn workdir(world: &mut ChangelogWorld) -> std::path::PathBuf {
    world
        .workdir
        .get_or_insert_with(|| TempDir::new().expect("Failed to create scenario directory"))
        .path()
        .to_path_buf()
}

fn output_file(world: &mut ChangelogWorld) -> std::path::PathBuf {
    workdir(world).join("github_output")
}

fn api(world: &ChangelogWorld) -> &MockServer {
    &world
        .api
        .as_ref()
        .expect("Mock GitHub API not started; missing Background step?")
        .0
}

async fn mount_search_response(world: &ChangelogWorld, items: serde_json::Value) {
    let q = format!(
        "repo:{}/{} milestone:{} state:closed",
        world.owner, world.repo, world.milestone
    );
    let total = items.as_array().map_or(0, Vec::len);
    Mock::given(method("GET"))
        .and(path("/search/issues"))
        .and(query_param("q", q.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total_count": total,
            "incomplete_results": false,
            "items": items,
        })))
        .mount(api(world))
        .await;
}

fn captured_changelog(world: &ChangelogWorld) -> String {
    match &world.run_result {
        Some(Ok(Some(changelog))) => changelog.clone(),
        other => panic!("Expected a generated changelog, got {:?}", other),
    }
}

async fn generate(world: &mut ChangelogWorld, extra: &[String]) {
    let output_file = output_file(world);
    let mut args = vec![
        "milestone-changelog".to_string(),
        "--github-organization".to_string(),
        world.owner.clone(),
        "--github-repository".to_string(),
        world.repo.clone(),
        "--milestone".to_string(),
        world.milestone.clone(),
        "--api-url".to_string(),
        api(world).uri(),
        "--server-url".to_string(),
        "https://github.com".to_string(),
        "--output-file".to_string(),
        output_file.to_string_lossy().into_owned(),
    ];
    if let Some(changelog_path) = &world.changelog_path {
        args.push("--changelog-file-path".to_string());
        args.push(changelog_path.to_string_lossy().into_owned());
    }
    args.extend(extra.iter().cloned());

    let mut buffer: Vec<u8> = Vec::new();
    let writer_option: Option<&mut dyn std::io::Write> = Some(&mut buffer);
    let result = milestone_changelog::run::run(args, writer_option).await;

    world.captured_output = buffer;
    world.run_result = Some(result);
}

#[given(regex = r#"^the repository "([^/"]+)/([^"]+)" with milestone "([^"]*)"$"#)]
async fn given_repository_with_milestone(
    world: &mut ChangelogWorld,
    owner: String,
    repo: String,
    milestone: String,
) {
    world.owner = owner;
    world.repo = repo;
    world.milestone = milestone;
    world.api = Some(ApiServer(MockServer::start().await));
}

#[given("the milestone has these closed issues:")]
async fn given_milestone_has_issues(world: &mut ChangelogWorld, step: &Step) {
    let docstring = step
        .docstring
        .as_ref()
        .expect("Expected docstring with issue JSON");
    let items: serde_json::Value =
        serde_json::from_str(docstring).expect("Docstring must be a JSON array of issues");
    mount_search_response(world, items).await;
}

#[given("the milestone has no closed issues")]
async fn given_milestone_has_no_issues(world: &mut ChangelogWorld) {
    mount_search_response(world, serde_json::json!([])).await;
}

#[given(regex = r#"^the changelog file contains "(.*)"$"#)]
async fn given_changelog_file_contains(world: &mut ChangelogWorld, content: String) {
    let changelog_path = workdir(world).join("CHANGELOG.md");
    let content = unescape(&content);
    std::fs::write(&changelog_path, &content)
        .unwrap_or_else(|e| panic!("Failed to write {:?}: {}", changelog_path, e));
    world.original_file_content = content;
    world.changelog_path = Some(changelog_path);
}

#[given("the changelog file does not exist")]
async fn given_changelog_file_missing(world: &mut ChangelogWorld) {
    world.changelog_path = Some(workdir(world).join("CHANGELOG.md"));
}

#[when("I generate the changelog")]
async fn when_generate(world: &mut ChangelogWorld) {
    generate(world, &[]).await;
}

#[when(regex = r#"^I generate the changelog with "(.*)"$"#)]
async fn when_generate_with(world: &mut ChangelogWorld, extra: String) {
    let extra: Vec<String> = extra.split_whitespace().map(str::to_string).collect();
    generate(world, &extra).await;
}

/// Runs the installed binary with inputs passed the way an Actions runner does: every
/// `INPUT_*` variable is set, and inputs the workflow omits are empty strings.
#[when("the action runs with optional inputs left empty")]
async fn when_action_runs(world: &mut ChangelogWorld) {
    let output_file = output_file(world);
    let output = tokio::process::Command::new(env!("CARGO_BIN_EXE_milestone-changelog"))
        .env("INPUT_GITHUB_ORGANIZATION", &world.owner)
        .env("INPUT_GITHUB_REPOSITORY", &world.repo)
        .env("INPUT_MILESTONE", &world.milestone)
        .env("INPUT_ADDED_LABEL_NAME", "Added")
        .env("INPUT_UPDATED_LABEL_NAME", "Updated")
        .env("INPUT_CHANGED_LABEL_NAME", "Changed")
        .env("INPUT_FIXED_LABEL_NAME", "Fixed")
        .env("INPUT_REMOVED_LABEL_NAME", "Removed")
        .env("INPUT_CHANGELOG_FILE_PATH", "")
        .env("INPUT_CHANGELOG_FILE_DELIMITER", "")
        .env("GITHUB_API_URL", api(world).uri())
        .env("GITHUB_SERVER_URL", "https://github.com")
        .env("GITHUB_OUTPUT", &output_file)
        .output()
        .await
        .expect("Failed to launch milestone-changelog");

    let stdout = String::from_utf8(output.stdout).expect("Invalid UTF-8 on stdout");
    world.run_result = Some(if output.status.success() {
        Ok(Some(stdout.strip_suffix('\n').unwrap_or(&stdout).to_string()))
    } else {
        Err(anyhow::anyhow!(
            "exit status {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr)
        ))
    });
    world.captured_output = stdout.into_bytes();
}

#[then(regex = r#"^the section headings should be "(.*)"$"#)]
async fn then_section_headings(world: &mut ChangelogWorld, expected: String) {
    let changelog = captured_changelog(world);
    let headings: Vec<&str> = changelog
        .lines()
        .filter_map(|line| line.strip_prefix("### "))
        .collect();
    assert_eq!(
        headings.join(", "),
        expected,
        "Unexpected sections in:\n---\n{}\n---",
        changelog
    );
}

#[then(regex = r#"^the changelog should contain the line "(.*)"$"#)]
async fn then_changelog_contains_line(world: &mut ChangelogWorld, expected: String) {
    let output = String::from_utf8(world.captured_output.clone()).expect("Invalid UTF-8");
    assert!(
        output.lines().any(|line| line == expected),
        "Expected line '{}' not found in output:\n---\n{}\n---",
        expected,
        output
    );
}

#[then("the release heading should be dated today")]
async fn then_heading_dated_today(world: &mut ChangelogWorld) {
    let changelog = captured_changelog(world);
    let expected = format!(
        "## [{m}](https://github.com/{o}/{r}/releases/tag/{m}) ({d})",
        m = world.milestone,
        o = world.owner,
        r = world.repo,
        d = chrono::Local::now().format("%m/%d/%Y"),
    );
    assert_eq!(changelog.lines().nth(1), Some(expected.as_str()));
}

#[then(regex = r#"^the step output "([^"]+)" should hold the changelog$"#)]
async fn then_step_output_holds_changelog(world: &mut ChangelogWorld, name: String) {
    let changelog = captured_changelog(world);
    let output_path = output_file(world);
    let content = std::fs::read_to_string(&output_path)
        .unwrap_or_else(|e| panic!("Failed to read step output {:?}: {}", output_path, e));
    let prefix = format!("{name}<<");
    assert!(
        content.starts_with(&prefix) && content.contains(&changelog),
        "Step output does not hold the changelog:\n---\n{}\n---",
        content
    );
}

#[then(regex = r#"^the run should fail with "(.*)"$"#)]
async fn then_run_fails_with(world: &mut ChangelogWorld, expected: String) {
    let expected = unescape(&expected);
    match &world.run_result {
        Some(Err(err)) => {
            let message = format!("{err:#}");
            assert!(
                message.contains(&expected),
                "Expected error containing '{}', got '{}'",
                expected,
                message
            );
        }
        other => panic!("Run should have failed, got {:?}", other),
    }
}

#[then("no issue search should have been made")]
async fn then_no_search(world: &mut ChangelogWorld) {
    let requests = api(world)
        .received_requests()
        .await
        .expect("Request recording is enabled");
    assert!(
        requests.is_empty(),
        "Expected no API requests, got {}",
        requests.len()
    );
}

#[then(regex = r#"^the changelog file should be "(.*)"$"#)]
async fn then_changelog_file_is(world: &mut ChangelogWorld, expected: String) {
    let changelog = captured_changelog(world);
    let expected = unescape(&expected).replace("{changelog}", &changelog);
    let changelog_path = world
        .changelog_path
        .clone()
        .expect("No changelog file configured");
    let content = std::fs::read_to_string(&changelog_path)
        .unwrap_or_else(|e| panic!("Failed to read {:?}: {}", changelog_path, e));
    assert_eq!(content, expected);
}

#[then("the changelog file should be unchanged")]
async fn then_changelog_file_unchanged(world: &mut ChangelogWorld) {
    assert!(
        matches!(world.run_result, Some(Ok(Some(_)))),
        "Run failed: {:?}",
        world.run_result
    );
    let changelog_path = world
        .changelog_path
        .clone()
        .expect("No changelog file configured");
    let content = std::fs::read_to_string(&changelog_path)
        .unwrap_or_else(|e| panic!("Failed to read {:?}: {}", changelog_path, e));
    assert_eq!(content, world.original_file_content);
}
