//! [`App`] shell and [`Route`] table.

use std::str::FromStr;

use crate::context::Context;

/// Page route of the admin portal.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Route {
    /// `/dashboard` page.
    #[default]
    Dashboard,

    /// `/users` page.
    Users,

    /// `/team` page.
    Team,

    /// `/properties` page.
    Properties,

    /// `/profile` page.
    Profile,

    /// `/settings` page.
    Settings,
}

impl Route {
    /// Parses the provided `path` into a [`Route`].
    ///
    /// The root path redirects to [`Route::Dashboard`]; unknown paths parse
    /// to [`None`].
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        match path {
            "/" | "/dashboard" => Some(Self::Dashboard),
            "/users" => Some(Self::Users),
            "/team" => Some(Self::Team),
            "/properties" => Some(Self::Properties),
            "/profile" => Some(Self::Profile),
            "/settings" => Some(Self::Settings),
            _ => None,
        }
    }

    /// Returns the canonical path of this [`Route`].
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/dashboard",
            Self::Users => "/users",
            Self::Team => "/team",
            Self::Properties => "/properties",
            Self::Profile => "/profile",
            Self::Settings => "/settings",
        }
    }
}

impl FromStr for Route {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or("unknown route")
    }
}

/// Application shell coupling the session [`Context`] with the current
/// [`Route`].
#[derive(Debug)]
pub struct App {
    /// Session [`Context`] of this [`App`].
    context: Context,

    /// Current [`Route`].
    route: Route,
}

impl App {
    /// Creates a new [`App`] at [`Route::Dashboard`].
    #[must_use]
    pub fn new(context: Context) -> Self {
        Self {
            context,
            route: Route::default(),
        }
    }

    /// Returns the session [`Context`] of this [`App`].
    #[must_use]
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Returns the current [`Route`].
    #[must_use]
    pub fn route(&self) -> Route {
        self.route
    }

    /// Navigates to the provided `path`.
    ///
    /// Returns `false` (and stays put) for an unknown path.
    pub fn navigate(&mut self, path: &str) -> bool {
        match Route::parse(path) {
            Some(route) => {
                self.route = route;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod spec {
    use super::Route;

    #[test]
    fn root_redirects_to_the_dashboard() {
        assert_eq!(Route::parse("/"), Some(Route::Dashboard));
    }

    #[test]
    fn every_page_route_parses() {
        for route in [
            Route::Dashboard,
            Route::Users,
            Route::Team,
            Route::Properties,
            Route::Profile,
            Route::Settings,
        ] {
            assert_eq!(Route::parse(route.path()), Some(route));
        }
    }

    #[test]
    fn unknown_paths_do_not_parse() {
        assert_eq!(Route::parse("/nope"), None);
        assert_eq!(Route::parse("dashboard"), None);
        assert!("/nope".parse::<Route>().is_err());
    }
}
