use crate::model::Project;

/// Sentinel tag meaning "no tag filter applied".
pub const ALL_TAG: &str = "All";

/// Filter the project collection by free-text query and selected tag.
///
/// Both predicates must pass. The result is a subsequence of `projects`
/// in original order; an empty result is a valid outcome, not an error.
pub fn filter_projects<'a>(projects: &'a [Project], query: &str, tag: &str) -> Vec<&'a Project> {
    let q = query.trim().to_lowercase();

    projects
        .iter()
        .filter(|p| {
            let matches_tag = tag == ALL_TAG || p.tags.iter().any(|t| t == tag);
            if !matches_tag {
                return false;
            }
            if q.is_empty() {
                return true;
            }
            haystack(p).contains(&q)
        })
        .collect()
}

/// The searchable text of a project: title, description, role, tags,
/// responsibilities, and outcomes, space-joined and lowercased.
fn haystack(project: &Project) -> String {
    let mut parts: Vec<&str> = vec![
        project.title.as_str(),
        project.description.as_str(),
        project.role.as_str(),
    ];
    parts.extend(project.tags.iter().map(String::as_str));
    parts.extend(project.responsibilities.iter().map(String::as_str));
    parts.extend(project.outcomes.iter().map(String::as_str));
    parts.join(" ").to_lowercase()
}

/// All distinct tags across the collection, sorted case-insensitively,
/// with the "All" sentinel first.
pub fn tag_universe(projects: &[Project]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for project in projects {
        for tag in &project.tags {
            if !tags.contains(tag) {
                tags.push(tag.clone());
            }
        }
    }
    tags.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
    let mut universe = Vec::with_capacity(tags.len() + 1);
    universe.push(ALL_TAG.to_string());
    universe.extend(tags);
    universe
}
