//! Project list types for the "My Projects" screen.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a video ad project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Completed,
    Generating,
    Draft,
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectStatus::Completed => write!(f, "completed"),
            ProjectStatus::Generating => write!(f, "generating"),
            ProjectStatus::Draft => write!(f, "draft"),
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "completed" => Ok(ProjectStatus::Completed),
            "generating" => Ok(ProjectStatus::Generating),
            "draft" => Ok(ProjectStatus::Draft),
            other => Err(format!("invalid project status: '{other}'")),
        }
    }
}

/// A video ad project owned by the signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub status: ProjectStatus,
    pub thumbnail: String,
    pub last_modified: DateTime<Utc>,
    pub scenes: u32,
    /// Human-readable runtime, e.g. "30s".
    pub duration: String,
}

impl Project {
    pub fn is_draft(&self) -> bool {
        self.status == ProjectStatus::Draft
    }
}

/// Which tab of the project list is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectTab {
    #[default]
    Projects,
    Drafts,
}

/// Sort order for the project list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectSort {
    /// Most recently modified first.
    #[default]
    Date,
    /// Alphabetical by title.
    Name,
}

impl FromStr for ProjectSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "date" => Ok(ProjectSort::Date),
            "name" => Ok(ProjectSort::Name),
            other => Err(format!("invalid project sort: '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_status_roundtrip() {
        for status in [
            ProjectStatus::Completed,
            ProjectStatus::Generating,
            ProjectStatus::Draft,
        ] {
            let parsed: ProjectStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_project_sort_parse() {
        assert_eq!("NAME".parse::<ProjectSort>().unwrap(), ProjectSort::Name);
        assert!("size".parse::<ProjectSort>().is_err());
        assert_eq!(ProjectSort::default(), ProjectSort::Date);
    }
}
