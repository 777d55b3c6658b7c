//! Client route registry.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards take their redirect targets from here and pages use it for
//! post-login/logout navigation, so no path literal lives anywhere else.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Logical names for the navigable client routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteName {
    Home,
    Login,
    Dashboard,
}

/// One registry row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub name: RouteName,
    pub path: &'static str,
}

pub const ROUTES: [RouteEntry; 3] = [
    RouteEntry { name: RouteName::Home, path: "/" },
    RouteEntry { name: RouteName::Login, path: "/login" },
    RouteEntry { name: RouteName::Dashboard, path: "/dashboard" },
];

impl RouteName {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Login => "login",
            Self::Dashboard => "dashboard",
        }
    }

    /// Registered path, always with a leading `/`.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => ROUTES[0].path,
            Self::Login => ROUTES[1].path,
            Self::Dashboard => ROUTES[2].path,
        }
    }

    /// Router segment form of [`RouteName::path`] (no leading `/`).
    pub fn segment(self) -> &'static str {
        self.path().trim_start_matches('/')
    }
}

/// Look up a registry entry by its logical name (`"home"`, `"login"`, ...).
pub fn lookup(name: &str) -> Option<&'static RouteEntry> {
    ROUTES.iter().find(|entry| entry.name.as_str() == name)
}
