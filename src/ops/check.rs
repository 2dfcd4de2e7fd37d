use std::collections::HashSet;

use serde::Serialize;

use crate::model::Content;

/// Structured result from `folio check`, suitable for --json output.
#[derive(Debug, Default, Serialize)]
pub struct CheckResult {
    pub valid: bool,
    pub errors: Vec<CheckError>,
    pub warnings: Vec<CheckWarning>,
}

/// A content-contract violation (something that should be fixed).
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum CheckError {
    /// Two projects share the same identifier
    #[serde(rename = "duplicate_project_id")]
    DuplicateProjectId { project_id: String },
    /// A project has an empty identifier
    #[serde(rename = "empty_project_id")]
    EmptyProjectId { title: String },
}

/// A non-critical content issue.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum CheckWarning {
    /// Project has no tags, so the tag filter can never select it
    #[serde(rename = "untagged_project")]
    UntaggedProject { project_id: String },
    /// Skill group with no items
    #[serde(rename = "empty_skill_group")]
    EmptySkillGroup { group: String },
    /// A profile link that is neither a URL, a mailto value, nor "#"
    #[serde(rename = "odd_link")]
    OddLink { kind: String, value: String },
}

/// Validate loaded content and return structured results.
///
/// This is read-only. Duplicate identifiers are a data-contract
/// violation of the content source; the viewer itself never checks.
pub fn check_content(content: &Content) -> CheckResult {
    let mut result = CheckResult::default();

    let mut seen: HashSet<&str> = HashSet::new();
    for project in &content.projects {
        if project.id.is_empty() {
            result.errors.push(CheckError::EmptyProjectId {
                title: project.title.clone(),
            });
            continue;
        }
        if !seen.insert(project.id.as_str()) {
            result.errors.push(CheckError::DuplicateProjectId {
                project_id: project.id.clone(),
            });
        }
        if project.tags.is_empty() {
            result.warnings.push(CheckWarning::UntaggedProject {
                project_id: project.id.clone(),
            });
        }
    }

    for group in &content.skills {
        if group.items.is_empty() {
            result.warnings.push(CheckWarning::EmptySkillGroup {
                group: group.group.clone(),
            });
        }
    }

    for (kind, value) in &content.profile.links {
        if !looks_like_link(kind, value) {
            result.warnings.push(CheckWarning::OddLink {
                kind: kind.clone(),
                value: value.clone(),
            });
        }
    }

    result.valid = result.errors.is_empty();
    result
}

/// Accept http(s) URLs everywhere, bare addresses for the email kind,
/// and "#" as an intentional placeholder.
fn looks_like_link(kind: &str, value: &str) -> bool {
    if value.starts_with("http://") || value.starts_with("https://") || value == "#" {
        return true;
    }
    if kind == "email" {
        return value.contains('@') || value.starts_with("mailto:");
    }
    false
}

/// Render check results as human-readable lines.
pub fn format_check_result(result: &CheckResult) -> Vec<String> {
    let mut lines = Vec::new();

    for error in &result.errors {
        match error {
            CheckError::DuplicateProjectId { project_id } => {
                lines.push(format!("error: duplicate project id '{}'", project_id));
            }
            CheckError::EmptyProjectId { title } => {
                lines.push(format!("error: project '{}' has an empty id", title));
            }
        }
    }

    for warning in &result.warnings {
        match warning {
            CheckWarning::UntaggedProject { project_id } => {
                lines.push(format!("warning: project '{}' has no tags", project_id));
            }
            CheckWarning::EmptySkillGroup { group } => {
                lines.push(format!("warning: skill group '{}' has no items", group));
            }
            CheckWarning::OddLink { kind, value } => {
                lines.push(format!("warning: link '{}' looks odd: {}", kind, value));
            }
        }
    }

    if lines.is_empty() {
        lines.push("content ok".to_string());
    }
    lines
}
