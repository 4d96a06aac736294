use crate::github::issues::Issue;

/// Name of the remainder section when no configured label matched anything.
pub const CHANGES_SECTION: &str = "Changes";
/// Name of the remainder section when it follows labelled sections.
pub const ADDITIONAL_CHANGES_SECTION: &str = "Additional Changes";

/// A named group of issues in the rendered changelog.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub name: String,
    pub issues: Vec<Issue>,
}

/// Partitions `issues` into sections following the order of `label_priority`.
///
/// Each issue lands in the section of the first label it carries (case-insensitive).
/// Issues carrying none of the labels are collected into a trailing remainder section,
/// named `Additional Changes` when labelled sections exist and `Changes` otherwise.
/// Labels matching nothing produce no section, and issue order is preserved.
pub fn classify<S: AsRef<str>>(issues: Vec<Issue>, label_priority: &[S]) -> Vec<Section> {
    let (mut sections, remaining) = label_priority.iter().fold(
        (Vec::new(), issues),
        |(mut sections, pool), label| {
            let label = label.as_ref();
            let (matched, rest): (Vec<Issue>, Vec<Issue>) =
                pool.into_iter().partition(|issue| issue.has_label(label));
            if !matched.is_empty() {
                sections.push(Section {
                    name: label.to_string(),
                    issues: matched,
                });
            }
            (sections, rest)
        },
    );

    if !remaining.is_empty() {
        let name = if sections.is_empty() {
            CHANGES_SECTION
        } else {
            ADDITIONAL_CHANGES_SECTION
        };
        sections.push(Section {
            name: name.to_string(),
            issues: remaining,
        });
    }

    sections
}
