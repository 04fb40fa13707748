use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

const PROJECTS_JSON: &str = include_str!("../../assets/projects.json");

/// Display format for project dates, e.g. "Jan 8, 2025".
pub const PROJECT_DATE_FORMAT: &str = "%b %-d, %Y";

#[derive(Error, Debug)]
#[error("invalid community projects asset: {0}")]
pub struct ProjectsError(#[from] serde_json::Error);

/// A finished floor plan shown in the community showcase.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub author: String,
    pub created_on: NaiveDate,
    pub summary: String,
}

impl Project {
    pub fn display_date(&self) -> String {
        self.created_on.format(PROJECT_DATE_FORMAT).to_string()
    }

    pub fn visualizer_path(&self) -> String {
        super::visualizer_path(&self.id)
    }
}

/// Parses the showcase bundled with the binary.
pub fn community_projects() -> Result<Vec<Project>, ProjectsError> {
    parse_projects(PROJECTS_JSON)
}

fn parse_projects(json: &str) -> Result<Vec<Project>, ProjectsError> {
    Ok(serde_json::from_str(json)?)
}
