use rust_embed::Embed;
use serde::Deserialize;
use std::sync::LazyLock;
use thiserror::Error;

use crate::preview::secure_url;

const CATALOGUE_FILE: &str = "projects.json";

/// Number of projects shown as large alternating cards before the grid.
pub const SPOTLIGHT_COUNT: usize = 3;

static CATALOGUE: LazyLock<Result<Vec<Project>, ProjectError>> = LazyLock::new(load_projects);

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    /// Thumbnail shown whenever the live preview is unavailable.
    pub image: String,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
}

impl Project {
    /// Public repository link; `"#"` marks private source.
    pub fn source_url(&self) -> Option<&str> {
        self.source_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty() && *url != "#")
    }

    pub fn live_url(&self) -> Option<&str> {
        self.live_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Embeddable (https) form of the live URL.
    pub fn preview_url(&self) -> Option<String> {
        self.live_url().and_then(secure_url)
    }
}

#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("project catalogue {0} is missing")]
    Missing(&'static str),
    #[error("couldn't parse project catalogue: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("project #{0} has no title")]
    Untitled(usize),
}

pub fn parse_projects(json: &str) -> Result<Vec<Project>, ProjectError> {
    let projects = serde_json::from_str::<Vec<Project>>(json)?;
    if let Some(i) = projects.iter().position(|p| p.title.trim().is_empty()) {
        return Err(ProjectError::Untitled(i));
    }
    Ok(projects)
}

pub fn load_projects() -> Result<Vec<Project>, ProjectError> {
    let file = Content::get(CATALOGUE_FILE).ok_or(ProjectError::Missing(CATALOGUE_FILE))?;
    let json = String::from_utf8_lossy(&file.data);
    parse_projects(&json)
}

/// The embedded catalogue, parsed once per process.
pub fn catalogue() -> Result<&'static [Project], &'static ProjectError> {
    CATALOGUE.as_deref()
}

/// Splits the catalogue into spotlight projects and the remaining grid.
pub fn split_spotlight(projects: &[Project]) -> (&[Project], &[Project]) {
    projects.split_at(SPOTLIGHT_COUNT.min(projects.len()))
}
