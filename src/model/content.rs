use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A fully loaded portfolio, parsed from portfolio.toml.
///
/// Content is read once at startup (or on a watcher reload) and never
/// mutated; every view derives from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub meta: Meta,
    pub profile: Profile,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default = "default_site_title")]
    pub site_title: String,
    #[serde(default)]
    pub footer_text: String,
}

impl Default for Meta {
    fn default() -> Self {
        Meta {
            site_title: default_site_title(),
            footer_text: String::new(),
        }
    }
}

fn default_site_title() -> String {
    "folio".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub tagline: String,
    /// Biography paragraphs, in display order.
    #[serde(default)]
    pub bio: Vec<String>,
    /// Link kind → URL (email, github, linkedin, resume), insertion-ordered.
    #[serde(default)]
    pub links: IndexMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub group: String,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Stable identifier, unique across the collection.
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Display order preserved; membership tested for tag filtering.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub outcomes: Vec<String>,
    #[serde(default)]
    pub links: ProjectLinks,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
}
