//! Path → view mapping and navigation history.
//!
//! Three routes:
//! - `/`           → home
//! - `/kanji`      → kanji list
//! - `/kanji/:id`  → kanji detail
//!
//! The id is percent-decoded when parsed and percent-encoded when rendered,
//! so every route survives `path()` → `parse()`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("No route matches '{0}'")]
    NotFound(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    KanjiList,
    KanjiDetail {
        id: String,
    },
}

impl Route {
    pub fn detail(id: impl Into<String>) -> Self {
        Route::KanjiDetail { id: id.into() }
    }

    /// Route name, stable across path changes.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::KanjiList => "KanjiList",
            Route::KanjiDetail { .. } => "KanjiDetail",
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::KanjiList => "/kanji".to_string(),
            Route::KanjiDetail { id } => format!("/kanji/{}", urlencoding::encode(id)),
        }
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let not_found = || RouteError::NotFound(path.to_string());
        let rest = path.strip_prefix('/').ok_or_else(not_found)?;
        let rest = rest.trim_end_matches('/');
        if rest.is_empty() {
            return Ok(Route::Home);
        }

        let mut segments = rest.split('/');
        match (segments.next(), segments.next(), segments.next()) {
            (Some("kanji"), None, None) => Ok(Route::KanjiList),
            (Some("kanji"), Some(id), None) if !id.is_empty() => {
                let id = urlencoding::decode(id).map_err(|_| not_found())?;
                Ok(Route::detail(id))
            }
            _ => Err(not_found()),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Current route plus back-stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    current: Route,
    previous: Vec<Route>,
}

impl Router {
    pub fn new(initial: Route) -> Self {
        Self {
            current: initial,
            previous: Vec::new(),
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Navigate to `route`. Pushing the current route again is a no-op.
    pub fn push(&mut self, route: Route) -> bool {
        if self.current() == &route {
            return false;
        }
        tracing::debug!(from = %self.current, to = %route, "navigate");
        let from = std::mem::replace(&mut self.current, route);
        self.previous.push(from);
        true
    }

    /// Pop back to the previous route. Returns false at the bottom.
    pub fn back(&mut self) -> bool {
        let Some(previous) = self.previous.pop() else {
            return false;
        };
        self.current = previous;
        tracing::debug!(to = %self.current, "navigate back");
        true
    }

    pub fn can_go_back(&self) -> bool {
        !self.previous.is_empty()
    }

    /// Number of routes in the history, the current one included.
    pub fn depth(&self) -> usize {
        self.previous.len() + 1
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_static_routes() {
        assert_eq!("/".parse::<Route>(), Ok(Route::Home));
        assert_eq!("/kanji".parse::<Route>(), Ok(Route::KanjiList));
        assert_eq!("/kanji/".parse::<Route>(), Ok(Route::KanjiList));
    }

    #[test]
    fn decodes_detail_id() {
        assert_eq!("/kanji/水".parse::<Route>(), Ok(Route::detail("水")));
        assert_eq!("/kanji/%E6%B0%B4".parse::<Route>(), Ok(Route::detail("水")));
        assert!("/kanji/%FF".parse::<Route>().is_err());
    }

    #[test]
    fn rejects_unknown_paths() {
        for path in ["", "kanji", "/radicals", "/kanji/水/extra", "/kanji//x"] {
            assert!(path.parse::<Route>().is_err(), "{path} should not match");
        }
    }

    #[test]
    fn path_round_trips() {
        for route in [
            Route::Home,
            Route::KanjiList,
            Route::detail("親"),
            Route::detail("a/b"),
            Route::detail("50%"),
        ] {
            assert_eq!(route.path().parse::<Route>(), Ok(route));
        }
    }

    #[test]
    fn router_back_stack() {
        let mut router = Router::default();
        assert!(!router.back());
        assert!(router.push(Route::KanjiList));
        assert!(router.push(Route::detail("木")));
        assert!(!router.push(Route::detail("木")));
        assert_eq!(router.depth(), 3);
        assert!(router.back());
        assert_eq!(router.current(), &Route::KanjiList);
        assert!(router.back());
        assert_eq!(router.current(), &Route::Home);
        assert!(!router.can_go_back());
    }
}
