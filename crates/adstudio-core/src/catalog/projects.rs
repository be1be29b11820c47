//! Project list queries.

use adstudio_types::error::CatalogError;
use adstudio_types::project::{Project, ProjectSort, ProjectTab};
use tracing::info;

use super::matches_search;

/// Query over the project list.
#[derive(Debug, Clone, Default)]
pub struct ProjectQuery {
    pub tab: ProjectTab,
    pub search: Option<String>,
    pub sort: ProjectSort,
}

/// In-memory list of the user's projects.
#[derive(Debug, Default)]
pub struct ProjectCatalog {
    projects: Vec<Project>,
}

impl ProjectCatalog {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// Projects on the requested tab, filtered and sorted.
    pub fn list(&self, query: &ProjectQuery) -> Vec<&Project> {
        let want_drafts = query.tab == ProjectTab::Drafts;
        let search = query.search.as_deref().unwrap_or("");

        let mut items: Vec<&Project> = self
            .projects
            .iter()
            .filter(|p| p.is_draft() == want_drafts)
            .filter(|p| matches_search(&p.title, search))
            .collect();

        match query.sort {
            ProjectSort::Date => items.sort_by(|a, b| b.last_modified.cmp(&a.last_modified)),
            ProjectSort::Name => {
                items.sort_by_key(|p| p.title.to_lowercase());
            }
        }
        items
    }

    pub fn get(&self, id: &str) -> Result<&Project, CatalogError> {
        self.projects
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CatalogError::ProjectNotFound(id.to_string()))
    }

    /// Remove a project from the list.
    pub fn delete(&mut self, id: &str) -> Result<Project, CatalogError> {
        let pos = self
            .projects
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| CatalogError::ProjectNotFound(id.to_string()))?;
        let removed = self.projects.remove(pos);
        info!(project_id = %id, title = %removed.title, "Project deleted");
        Ok(removed)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

/// Copy for a tab with nothing to show.
pub fn empty_state_message(tab: ProjectTab) -> &'static str {
    match tab {
        ProjectTab::Projects => "You haven't created any projects yet",
        ProjectTab::Drafts => "No drafts here. Ready to start something new?",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adstudio_types::project::ProjectStatus;
    use chrono::{TimeZone, Utc};

    fn project(id: &str, title: &str, status: ProjectStatus, day: u32) -> Project {
        Project {
            id: id.to_string(),
            title: title.to_string(),
            status,
            thumbnail: String::new(),
            last_modified: Utc.with_ymd_and_hms(2024, 3, day, 0, 0, 0).unwrap(),
            scenes: 3,
            duration: "30s".to_string(),
        }
    }

    fn catalog() -> ProjectCatalog {
        ProjectCatalog::new(vec![
            project("1", "Spring Coffee Launch", ProjectStatus::Completed, 10),
            project("2", "Summer Collection Preview", ProjectStatus::Generating, 9),
            project("3", "autumn teaser", ProjectStatus::Completed, 12),
            project("4", "Winter Draft", ProjectStatus::Draft, 1),
        ])
    }

    fn titles(items: &[&Project]) -> Vec<String> {
        items.iter().map(|p| p.title.clone()).collect()
    }

    #[test]
    fn test_projects_tab_sorted_newest_first() {
        let catalog = catalog();
        let items = catalog.list(&ProjectQuery::default());
        assert_eq!(
            titles(&items),
            vec!["autumn teaser", "Spring Coffee Launch", "Summer Collection Preview"]
        );
    }

    #[test]
    fn test_sort_by_name_ignores_case() {
        let catalog = catalog();
        let query = ProjectQuery {
            sort: ProjectSort::Name,
            ..Default::default()
        };
        assert_eq!(
            titles(&catalog.list(&query)),
            vec!["autumn teaser", "Spring Coffee Launch", "Summer Collection Preview"]
        );
    }

    #[test]
    fn test_drafts_tab_only_shows_drafts() {
        let catalog = catalog();
        let query = ProjectQuery {
            tab: ProjectTab::Drafts,
            ..Default::default()
        };
        assert_eq!(titles(&catalog.list(&query)), vec!["Winter Draft"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = catalog();
        let query = ProjectQuery {
            search: Some("COFFEE".to_string()),
            ..Default::default()
        };
        assert_eq!(titles(&catalog.list(&query)), vec!["Spring Coffee Launch"]);

        let blank = ProjectQuery {
            search: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(catalog.list(&blank).len(), 3);
    }

    #[test]
    fn test_delete_removes_project() {
        let mut catalog = catalog();
        let removed = catalog.delete("2").unwrap();
        assert_eq!(removed.title, "Summer Collection Preview");
        assert_eq!(catalog.len(), 3);
        assert!(matches!(catalog.get("2"), Err(CatalogError::ProjectNotFound(_))));
        assert!(catalog.delete("2").is_err());
    }

    #[test]
    fn test_empty_state_copy() {
        let catalog = ProjectCatalog::default();
        assert!(catalog.list(&ProjectQuery::default()).is_empty());
        assert_eq!(
            empty_state_message(ProjectTab::Drafts),
            "No drafts here. Ready to start something new?"
        );
    }
}
