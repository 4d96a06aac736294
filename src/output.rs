use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Name of the step output holding the rendered changelog.
pub const CHANGELOG_OUTPUT: &str = "changelog";

/// Prints `message` to stdout and, when given, to `writer` as well.
pub fn println(message: &str, writer: &mut Option<&mut dyn Write>) -> io::Result<()> {
    if let Err(e) = writeln!(io::stdout(), "{message}") {
        tracing::warn!("failed to write to stdout: {e}");
    }

    if let Some(w) = writer {
        writeln!(w, "{message}")?;
    }

    Ok(())
}

/// Formats a multi-line step output as `name<<DELIMITER\nvalue\nDELIMITER\n`.
///
/// The delimiter is extended until it no longer occurs in `value`.
pub fn format_step_output(name: &str, value: &str) -> String {
    let delimiter = (0..)
        .map(|n| format!("CHANGELOG_EOF_{n}"))
        .find(|candidate| !value.contains(candidate.as_str()))
        .unwrap_or_default();
    format!("{name}<<{delimiter}\n{value}\n{delimiter}\n")
}

/// Appends a step output to the file GitHub Actions reads outputs from.
pub fn write_step_output(path: &Path, name: &str, value: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(format_step_output(name, value).as_bytes())
}
