//! Catalog API routes.

use axum::{Json, extract::State};
use web_types::ProjectSummary;

use crate::state::AppState;

/// GET /api/projects - List the catalog in display order.
pub async fn list_projects(State(state): State<AppState>) -> Json<Vec<ProjectSummary>> {
    Json(state.catalog.iter().map(ProjectSummary::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::catalog::REPOSITORY_URL;
    use core_types::{Action, Catalog, ProjectCard, Slug, Unconfigured};

    fn card(slug: &str, title: &str, action: Action) -> ProjectCard {
        ProjectCard {
            slug: Slug::parse(slug).unwrap(),
            title: title.to_string(),
            description: "...".to_string(),
            logo_url: "https://example.com/logo.png".to_string(),
            background_color: "#b8dae5".to_string(),
            action,
        }
    }

    #[tokio::test]
    async fn test_list_projects_preserves_order() {
        let catalog = Catalog::new(vec![
            card("b", "Bravo", Action::Disabled),
            card(
                "a",
                "Alpha",
                Action::documentation(Some(REPOSITORY_URL)),
            ),
        ])
        .unwrap();
        let state = AppState::new(catalog, Unconfigured, "dist");

        let Json(projects) = list_projects(State(state)).await;

        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].title, "Bravo");
        assert_eq!(projects[0].documentation_url, None);
        assert_eq!(projects[1].documentation_url.as_deref(), Some(REPOSITORY_URL));
    }
}
