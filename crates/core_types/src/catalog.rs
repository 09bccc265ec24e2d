//! Project catalog shown on the dashboard.
//!
//! The catalog is a fixed, ordered list of [`ProjectCard`]s. It is validated
//! once on construction and never mutated afterwards.

use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::router::Page;

/// Repository that hosts the showcase sources.
pub const REPOSITORY_URL: &str = "https://github.com/nicklasfrahm/showcases";

/// Errors raised while building a catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Project title must not be empty")]
    EmptyTitle,

    #[error("Duplicate project title: {0}")]
    DuplicateTitle(String),

    #[error("Duplicate project slug: {0}")]
    DuplicateSlug(String),

    #[error("Invalid slug: {0:?}")]
    InvalidSlug(String),

    #[error("Project {title:?} links to unknown route {slug:?}")]
    UnknownRoute { title: String, slug: String },

    #[error("Project {0:?} has an empty external link")]
    EmptyUrl(String),
}

/// URL-safe identifier of a catalog entry.
///
/// Lowercase ASCII letters and digits, separated by single hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Parse a slug, rejecting anything that is not already in canonical form.
    pub fn parse(raw: &str) -> Result<Self, CatalogError> {
        let valid = !raw.is_empty()
            && !raw.starts_with('-')
            && !raw.ends_with('-')
            && !raw.contains("--")
            && raw
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

        if valid {
            Ok(Self(raw.to_string()))
        } else {
            Err(CatalogError::InvalidSlug(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Slug {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

/// The single action control rendered on a project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "target", rename_all = "snake_case")]
pub enum Action {
    /// Opens the documentation URL in a new browsing context.
    ExternalLink(String),
    /// Navigates to another page of this application.
    InternalRoute(Slug),
    /// Plain "Login" label without navigation.
    Disabled,
}

impl Action {
    /// Action for an optional documentation URL. A missing URL disables the
    /// control instead of producing a dead link.
    pub fn documentation(url: Option<&str>) -> Self {
        match url {
            Some(url) if !url.trim().is_empty() => Self::ExternalLink(url.to_string()),
            _ => Self::Disabled,
        }
    }

    /// Presentation data for this action.
    pub fn view(&self) -> ActionView {
        match self {
            Self::ExternalLink(url) => ActionView {
                label: "View on GitHub",
                href: Some(url.clone()),
                new_context: true,
            },
            Self::InternalRoute(slug) => ActionView {
                label: "Open",
                href: Page::from_slug(slug).map(|page| page.path().to_string()),
                new_context: false,
            },
            Self::Disabled => ActionView {
                label: "Login",
                href: None,
                new_context: false,
            },
        }
    }
}

/// What a card's action control does when activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionView {
    pub label: &'static str,
    href: Option<String>,
    new_context: bool,
}

impl ActionView {
    /// Navigation target, if the control navigates at all.
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    pub fn is_enabled(&self) -> bool {
        self.href.is_some()
    }

    /// Whether activation opens a new browsing context (tab/window).
    pub fn opens_new_context(&self) -> bool {
        self.new_context
    }
}

/// A showcase project as displayed on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCard {
    pub slug: Slug,
    pub title: String,
    pub description: String,
    pub logo_url: String,
    pub background_color: String,
    pub action: Action,
}

impl ProjectCard {
    /// Documentation URL, present exactly when the card links out.
    pub fn documentation_url(&self) -> Option<&str> {
        match &self.action {
            Action::ExternalLink(url) => Some(url),
            _ => None,
        }
    }
}

/// Validated, ordered sequence of project cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    projects: Vec<ProjectCard>,
}

impl Catalog {
    /// Build a catalog, checking title/slug uniqueness and link targets.
    pub fn new(projects: Vec<ProjectCard>) -> Result<Self, CatalogError> {
        let mut titles = HashSet::new();
        let mut slugs = HashSet::new();

        for project in &projects {
            if project.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle);
            }
            if !titles.insert(project.title.as_str()) {
                return Err(CatalogError::DuplicateTitle(project.title.clone()));
            }
            if !slugs.insert(project.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(project.slug.to_string()));
            }

            match &project.action {
                Action::ExternalLink(url) if url.trim().is_empty() => {
                    return Err(CatalogError::EmptyUrl(project.title.clone()));
                }
                Action::InternalRoute(slug) if Page::from_slug(slug).is_none() => {
                    return Err(CatalogError::UnknownRoute {
                        title: project.title.clone(),
                        slug: slug.to_string(),
                    });
                }
                _ => {}
            }
        }

        Ok(Self { projects })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProjectCard> {
        self.projects.iter()
    }

    pub fn as_slice(&self) -> &[ProjectCard] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Look up a project by slug.
    pub fn get(&self, slug: &str) -> Option<&ProjectCard> {
        self.projects.iter().find(|p| p.slug.as_str() == slug)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ProjectCard;
    type IntoIter = std::slice::Iter<'a, ProjectCard>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let projects = Vec::<ProjectCard>::deserialize(deserializer)?;
        Catalog::new(projects).map_err(serde::de::Error::custom)
    }
}

/// The catalog compiled into the application.
pub fn builtin() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(|| Catalog {
        projects: vec![ProjectCard {
            slug: Slug("email-sender".to_string()),
            title: "Email Sender".to_string(),
            description: "Send emails and simulate automatic failover in case of an external service provider failure.".to_string(),
            logo_url: "https://images.squarespace-cdn.com/content/v1/60880c8985e48a388d33bd16/1620732746386-HBC3RQJ55P25GMJ9PUY6/dreamdata.png".to_string(),
            background_color: "#b8dae5".to_string(),
            action: Action::InternalRoute(Slug("email-sender".to_string())),
        }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = builtin();
        let rebuilt = Catalog::new(catalog.as_slice().to_vec()).unwrap();

        assert_eq!(&rebuilt, catalog);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.as_slice()[0].title, "Email Sender");
        assert_eq!(catalog.as_slice()[0].background_color, "#b8dae5");
    }

    #[test]
    fn test_builtin_links_to_email_sender() {
        let project = builtin().get("email-sender").unwrap();
        let view = project.action.view();

        assert_eq!(view.href(), Some("/email-sender"));
        assert!(!view.opens_new_context());
        assert_eq!(project.documentation_url(), None);
    }

    #[test]
    fn test_slug_parse() {
        assert!(Slug::parse("email-sender").is_ok());
        assert!(Slug::parse("v2").is_ok());

        for bad in ["", "Email", "email sender", "-email", "email-", "a--b", "e.mail"] {
            assert_eq!(
                Slug::parse(bad),
                Err(CatalogError::InvalidSlug(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_external_link_navigates_to_documentation_url() {
        let url = REPOSITORY_URL;
        let project = card("docs", "Docs", Action::documentation(Some(url)));
        let view = project.action.view();

        assert_eq!(project.documentation_url(), Some(url));
        assert_eq!(view.href(), Some(url));
        assert!(view.opens_new_context());
        assert!(view.is_enabled());
    }

    #[test]
    fn test_missing_documentation_disables_action() {
        for url in [None, Some(""), Some("   ")] {
            let project = card("docs", "Docs", Action::documentation(url));
            let view = project.action.view();

            assert_eq!(project.action, Action::Disabled);
            assert_eq!(project.documentation_url(), None);
            assert_eq!(view.href(), None);
            assert!(!view.is_enabled());
            assert_eq!(view.label, "Login");
        }
    }

    #[test]
    fn test_duplicate_title_rejected() {
        let result = Catalog::new(vec![
            card("a", "Same", Action::Disabled),
            card("b", "Same", Action::Disabled),
        ]);

        assert_eq!(result, Err(CatalogError::DuplicateTitle("Same".to_string())));
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let result = Catalog::new(vec![
            card("a", "One", Action::Disabled),
            card("a", "Two", Action::Disabled),
        ]);

        assert_eq!(result, Err(CatalogError::DuplicateSlug("a".to_string())));
    }

    #[test]
    fn test_unknown_internal_route_rejected() {
        let result = Catalog::new(vec![card(
            "a",
            "One",
            Action::InternalRoute(Slug::parse("nowhere").unwrap()),
        )]);

        assert!(matches!(result, Err(CatalogError::UnknownRoute { .. })));
    }

    #[test]
    fn test_empty_title_and_url_rejected() {
        assert_eq!(
            Catalog::new(vec![card("a", " ", Action::Disabled)]),
            Err(CatalogError::EmptyTitle)
        );
        assert_eq!(
            Catalog::new(vec![card("a", "One", Action::ExternalLink(String::new()))]),
            Err(CatalogError::EmptyUrl("One".to_string()))
        );
    }

    #[test]
    fn test_catalog_preserves_order() {
        let catalog = Catalog::new(vec![
            card("c", "Charlie", Action::Disabled),
            card("a", "Alpha", Action::Disabled),
            card("b", "Bravo", Action::Disabled),
        ])
        .unwrap();

        let titles: Vec<&str> = catalog.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Charlie", "Alpha", "Bravo"]);
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r##"[
            {"slug":"a","title":"One","description":"","logo_url":"","background_color":"#fff","action":{"type":"disabled"}},
            {"slug":"a","title":"Two","description":"","logo_url":"","background_color":"#fff","action":{"type":"disabled"}}
        ]"##;

        assert!(serde_json::from_str::<Catalog>(json).is_err());
    }

    #[test]
    fn test_action_serialization_shape() {
        let action = Action::InternalRoute(Slug::parse("email-sender").unwrap());
        let json = serde_json::to_string(&action).unwrap();

        assert_eq!(json, r#"{"type":"internal_route","target":"email-sender"}"#);
    }
}
