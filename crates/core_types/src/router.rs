//! Client-side route table.
//!
//! Two pages are reachable: the dashboard at `/` and the email composer at
//! `/email-sender`. Any other path resolves to a redirect back to `/`; the
//! not-found state is transient and never the resting state of a
//! [`Navigator`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Slug;

/// Path every unmatched location is redirected to.
pub const ROOT_PATH: &str = "/";

/// A page that can be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Dashboard,
    EmailSender,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Dashboard, Page::EmailSender];

    pub fn path(self) -> &'static str {
        match self {
            Page::Dashboard => ROOT_PATH,
            Page::EmailSender => "/email-sender",
        }
    }

    /// Page addressed by an internal-route slug.
    pub fn from_slug(slug: &Slug) -> Option<Page> {
        Page::ALL
            .into_iter()
            .find(|page| page.path().strip_prefix('/') == Some(slug.as_str()))
    }
}

/// Router states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteState {
    Dashboard,
    EmailComposer,
    NotFound,
}

impl From<Page> for RouteState {
    fn from(page: Page) -> Self {
        match page {
            Page::Dashboard => RouteState::Dashboard,
            Page::EmailSender => RouteState::EmailComposer,
        }
    }
}

/// Outcome of matching a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Render(Page),
    Redirect { to: &'static str },
}

/// Strip the query string and fragment from a location.
fn path_of(location: &str) -> &str {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    &location[..end]
}

/// Match a location against the route table.
pub fn match_state(location: &str) -> RouteState {
    let path = path_of(location);
    Page::ALL
        .into_iter()
        .find(|page| page.path() == path)
        .map(RouteState::from)
        .unwrap_or(RouteState::NotFound)
}

/// Resolve a location to the page to render or a redirect.
pub fn resolve(location: &str) -> Resolution {
    match match_state(location) {
        RouteState::Dashboard => Resolution::Render(Page::Dashboard),
        RouteState::EmailComposer => Resolution::Render(Page::EmailSender),
        RouteState::NotFound => Resolution::Redirect { to: ROOT_PATH },
    }
}

/// Tracks the current page over a session of path changes.
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Page,
    history: Vec<Page>,
}

impl Navigator {
    /// Resolve the initial page from the location at load time.
    pub fn load(location: &str) -> Self {
        let page = Self::settle(location);
        Self {
            current: page,
            history: vec![page],
        }
    }

    /// Apply a path change and return the page that ends up rendered.
    pub fn navigate(&mut self, location: &str) -> Page {
        let page = Self::settle(location);
        debug!(from = ?self.current, to = ?page, location, "route transition");
        self.current = page;
        self.history.push(page);
        page
    }

    pub fn current(&self) -> Page {
        self.current
    }

    /// Pages rendered so far, oldest first.
    pub fn history(&self) -> &[Page] {
        &self.history
    }

    fn settle(location: &str) -> Page {
        match resolve(location) {
            Resolution::Render(page) => page,
            Resolution::Redirect { to } => {
                debug!(location, to, "unmatched path, redirecting");
                match resolve(to) {
                    Resolution::Render(page) => page,
                    Resolution::Redirect { .. } => Page::Dashboard,
                }
            }
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::load(ROOT_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths_render() {
        assert_eq!(resolve("/"), Resolution::Render(Page::Dashboard));
        assert_eq!(resolve("/email-sender"), Resolution::Render(Page::EmailSender));
    }

    #[test]
    fn test_unknown_paths_redirect_to_root() {
        for path in ["/nope", "/email-sender/", "/Email-Sender", "", "/email-sender/x", "/404"] {
            assert_eq!(
                resolve(path),
                Resolution::Redirect { to: ROOT_PATH },
                "{path:?} should redirect"
            );
            assert_eq!(match_state(path), RouteState::NotFound);
        }
    }

    #[test]
    fn test_query_and_fragment_ignored() {
        assert_eq!(
            resolve("/email-sender?to=a@x.com"),
            Resolution::Render(Page::EmailSender)
        );
        assert_eq!(resolve("/#top"), Resolution::Render(Page::Dashboard));
    }

    #[test]
    fn test_navigator_never_rests_on_not_found() {
        let mut nav = Navigator::load("/does-not-exist");
        assert_eq!(nav.current(), Page::Dashboard);

        assert_eq!(nav.navigate("/email-sender"), Page::EmailSender);
        assert_eq!(nav.navigate("/garbage"), Page::Dashboard);
        assert_eq!(
            nav.history(),
            [Page::Dashboard, Page::EmailSender, Page::Dashboard]
        );
    }

    #[test]
    fn test_navigate_round_trip() {
        let mut nav = Navigator::default();
        nav.navigate("/email-sender");
        nav.navigate("/");

        assert_eq!(nav.current(), Page::Dashboard);
    }

    #[test]
    fn test_page_from_slug() {
        let slug = Slug::parse("email-sender").unwrap();
        assert_eq!(Page::from_slug(&slug), Some(Page::EmailSender));

        let unknown = Slug::parse("dashboard").unwrap();
        assert_eq!(Page::from_slug(&unknown), None);
    }
}
