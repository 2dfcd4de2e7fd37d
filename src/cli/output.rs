use serde::Serialize;

use crate::model::{Profile, Project, SkillGroup};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ProjectListJson<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<&'a str>,
    pub tag: &'a str,
    pub count: usize,
    pub projects: Vec<&'a Project>,
}

#[derive(Serialize)]
pub struct TagsJson {
    pub tags: Vec<String>,
}

#[derive(Serialize)]
pub struct SkillsJson<'a> {
    pub skills: &'a [SkillGroup],
}

#[derive(Serialize)]
pub struct ProfileJson<'a> {
    pub profile: &'a Profile,
}
