//! One-shot navigation signals returned by session actions.
//!
//! A [`Redirect`] is a plain value handed back to the caller of a coordinator
//! action. It is not `Clone` and [`Redirect::into_href`] consumes it, so a
//! view can follow it at most once; nothing about it lives in the session
//! state, so later unrelated state changes cannot re-trigger navigation.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

use url::form_urlencoded;

/// Query parameter carrying a one-shot success message.
pub const FLASH_PARAM: &str = "message";

/// User-facing routes of the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    EditProfile,
}

impl Route {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::EditProfile => "/edit-profile",
        }
    }

    /// Match a location path, ignoring a trailing slash.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(Self::Home),
            "/login" => Some(Self::Login),
            "/register" => Some(Self::Register),
            "/edit-profile" => Some(Self::EditProfile),
            _ => None,
        }
    }
}

/// Navigation the caller should perform after a successful action.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a redirect should be followed by the view that triggered it"]
pub struct Redirect {
    route: Route,
    flash: Option<String>,
}

impl Redirect {
    pub(crate) fn to(route: Route) -> Self {
        Self { route, flash: None }
    }

    pub(crate) fn with_flash(route: Route, flash: impl Into<String>) -> Self {
        Self { route, flash: Some(flash.into()) }
    }

    #[must_use]
    pub fn route(&self) -> Route {
        self.route
    }

    #[must_use]
    pub fn flash(&self) -> Option<&str> {
        self.flash.as_deref()
    }

    /// Consume the redirect into a location href, with the flash message as a
    /// `message` query parameter when present.
    #[must_use]
    pub fn into_href(self) -> String {
        match self.flash {
            Some(flash) => {
                let query = form_urlencoded::Serializer::new(String::new())
                    .append_pair(FLASH_PARAM, &flash)
                    .finish();
                format!("{}?{query}", self.route.path())
            }
            None => self.route.path().to_owned(),
        }
    }
}

/// Read the one-shot flash message from a location query string.
///
/// Accepts the string with or without its leading `?`. Blank messages are
/// treated as absent.
#[must_use]
pub fn flash_from_query(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == FLASH_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.trim().is_empty())
}
