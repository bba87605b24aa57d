//! Client-side route table.
//!
//! DESIGN
//! ======
//! The table is an immutable value handed to a [`Router`]; there is no global
//! registration step. Unknown paths redirect to the table's fallback, which
//! must itself be a known route so a redirect always lands somewhere.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Views a route can bind to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Editor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: String,
    /// Template served for the view.
    pub template: String,
    pub view: View,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("fallback {0} does not name a route")]
    UnknownFallback(String),
    #[error("duplicate route: {0}")]
    Duplicate(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
    /// Index into `routes`.
    fallback: usize,
}

impl RouteTable {
    /// Build a table.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::Duplicate`] if two routes share a path and
    /// [`RouteError::UnknownFallback`] if `fallback` is not one of them.
    pub fn new(routes: Vec<Route>, fallback: &str) -> Result<Self, RouteError> {
        let routes: Vec<Route> = routes
            .into_iter()
            .map(|route| Route { path: normalize(&route.path), ..route })
            .collect();
        for (i, route) in routes.iter().enumerate() {
            if routes[..i].iter().any(|earlier| earlier.path == route.path) {
                return Err(RouteError::Duplicate(route.path.clone()));
            }
        }
        let fallback_path = normalize(fallback);
        let Some(fallback) = routes.iter().position(|route| route.path == fallback_path) else {
            return Err(RouteError::UnknownFallback(fallback_path));
        };
        Ok(Self { routes, fallback })
    }

    /// The application's table: `/edit` shows the editor, everything else
    /// redirects there.
    #[must_use]
    pub fn editor() -> Self {
        Self {
            routes: vec![Route {
                path: "/edit".to_owned(),
                template: "/client/editor.html".to_owned(),
                view: View::Editor,
            }],
            fallback: 0,
        }
    }

    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    #[must_use]
    pub fn fallback(&self) -> &Route {
        &self.routes[self.fallback]
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::editor()
    }
}

/// Result of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    Matched(&'a Route),
    Redirect(&'a str),
}

#[derive(Debug, Clone)]
pub struct Router {
    table: RouteTable,
}

impl Router {
    #[must_use]
    pub fn new(table: RouteTable) -> Self {
        Self { table }
    }

    #[must_use]
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Match `path` exactly, ignoring a trailing slash.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Resolution<'_> {
        let path = normalize(path);
        match self.table.routes.iter().find(|route| route.path == path) {
            Some(route) => Resolution::Matched(route),
            None => Resolution::Redirect(&self.table.fallback().path),
        }
    }

    /// Resolve `path`, following the fallback redirect.
    #[must_use]
    pub fn navigate(&self, path: &str) -> &Route {
        match self.resolve(path) {
            Resolution::Matched(route) => route,
            Resolution::Redirect(to) => {
                tracing::debug!(from = %path, %to, "route redirect");
                self.table.fallback()
            }
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(RouteTable::editor())
    }
}

/// Strip the query and fragment, ensure a leading slash, drop trailing slashes.
fn normalize(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.starts_with('/') {
        trimmed.to_owned()
    } else {
        format!("/{trimmed}")
    }
}
