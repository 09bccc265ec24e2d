//! Session capability passed down to views that may need gated access.
//!
//! No route is gated yet; views only read the current principal.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// An authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
}

impl User {
    /// User with the given display name, trimmed. Blank names are rejected.
    pub fn named(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
        })
    }
}

/// Authentication state. A session is authenticated exactly when it carries
/// a principal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    principal: Option<User>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(user: User) -> Self {
        Self {
            principal: Some(user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.principal.is_some()
    }

    pub fn principal(&self) -> Option<&User> {
        self.principal.as_ref()
    }

    /// Sign `user` in. Returns whether the session changed.
    pub fn login(&mut self, user: User) -> bool {
        if self.principal.as_ref() == Some(&user) {
            return false;
        }
        debug!(user = %user.name, "login");
        self.principal = Some(user);
        true
    }

    /// Sign out. Returns whether the session changed.
    pub fn logout(&mut self) -> bool {
        match self.principal.take() {
            Some(user) => {
                debug!(user = %user.name, "logout");
                true
            }
            None => false,
        }
    }
}
