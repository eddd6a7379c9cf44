//! Route table for the RoadWatch UI.
//!
//! # Design
//! - `Route` is the single source of truth for path patterns; recognition is delegated to
//!   `yew-router` so links and the matcher cannot drift apart.
//! - Pages are referenced by [`PageId`] only; the renderable unit behind an id is produced by a
//!   deferred loader (see [`registry`]).
//! - The configuration is built once at boot and never mutated.
pub mod deferred;
pub mod registry;
pub mod scroll;
pub mod session;

use std::fmt;
use std::str::FromStr;

use yew_router::prelude::*;

use crate::config::ConfigError;
use scroll::ScrollBehavior;

/// Client-side routes, in match priority order.
#[derive(Clone, Copy, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    /// Landing page.
    #[at("/")]
    Home,
    /// Project description.
    #[at("/about")]
    About,
    /// Road-works map.
    #[at("/map")]
    Map,
    /// Construction notice listing.
    #[at("/announcement")]
    Announcement,
    /// Watch view.
    #[at("/watch")]
    Watch,
    /// Catch-all fallback for any unmatched path.
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// One row of the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    /// Path pattern as registered with the router.
    pub pattern: &'static str,
    /// Route produced when the pattern matches.
    pub route: Route,
    /// Loader identifier of the page rendered for the route.
    pub page: PageId,
    /// Whether this entry absorbs every path left unmatched by earlier entries.
    pub catch_all: bool,
}

const ROUTE_TABLE: [RouteEntry; 6] = [
    RouteEntry {
        pattern: "/",
        route: Route::Home,
        page: PageId::Home,
        catch_all: false,
    },
    RouteEntry {
        pattern: "/about",
        route: Route::About,
        page: PageId::About,
        catch_all: false,
    },
    RouteEntry {
        pattern: "/map",
        route: Route::Map,
        page: PageId::Map,
        catch_all: false,
    },
    RouteEntry {
        pattern: "/announcement",
        route: Route::Announcement,
        page: PageId::Announcement,
        catch_all: false,
    },
    RouteEntry {
        pattern: "/watch",
        route: Route::Watch,
        page: PageId::Watch,
        catch_all: false,
    },
    RouteEntry {
        pattern: "/404",
        route: Route::NotFound,
        page: PageId::NotFound,
        catch_all: true,
    },
];

impl Route {
    /// Ordered route table; the catch-all entry is always last.
    #[must_use]
    pub const fn table() -> &'static [RouteEntry] {
        &ROUTE_TABLE
    }

    /// Resolve a location path to a route using first-match semantics.
    ///
    /// Query strings and fragments are ignored. Matching is exact: case-sensitive, and a
    /// trailing slash (other than the root itself) makes the path a different one. Paths matching
    /// no declared entry resolve to [`Route::NotFound`]; resolution never fails.
    #[must_use]
    pub fn resolve(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = if path.is_empty() { "/" } else { path };
        if path.len() > 1 && path.ends_with('/') {
            return Self::NotFound;
        }
        Self::recognize(path).unwrap_or(Self::NotFound)
    }

    /// Loader identifier of the page bound to this route.
    #[must_use]
    pub const fn page_id(self) -> PageId {
        match self {
            Self::Home => PageId::Home,
            Self::About => PageId::About,
            Self::Map => PageId::Map,
            Self::Announcement => PageId::Announcement,
            Self::Watch => PageId::Watch,
            Self::NotFound => PageId::NotFound,
        }
    }

    /// Routes shown in the primary navigation.
    #[must_use]
    pub const fn navigable() -> [Self; 5] {
        [
            Self::Home,
            Self::About,
            Self::Map,
            Self::Announcement,
            Self::Watch,
        ]
    }
}

/// Opaque identifier of a page-level renderable unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageId {
    /// Landing page.
    Home,
    /// About page.
    About,
    /// Map view.
    Map,
    /// Announcement view.
    Announcement,
    /// Road watch view.
    Watch,
    /// Static not-found view.
    NotFound,
}

impl PageId {
    /// Number of pages.
    pub const COUNT: usize = 6;

    /// Every page, in table order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Home,
        Self::About,
        Self::Map,
        Self::Announcement,
        Self::Watch,
        Self::NotFound,
    ];

    /// Dense index of the page, stable for the lifetime of the build.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Home => 0,
            Self::About => 1,
            Self::Map => 2,
            Self::Announcement => 3,
            Self::Watch => 4,
            Self::NotFound => 5,
        }
    }

    /// Stable string form used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Map => "map",
            Self::Announcement => "announcement",
            Self::Watch => "watch",
            Self::NotFound => "not-found",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the current route is kept in the URL.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HistoryMode {
    /// Path-based routing through the History API. Requires the server to rewrite unknown
    /// paths to the index document.
    #[default]
    Web,
    /// Fragment-based routing (`/#/about`) for hosts without rewrite support.
    Hash,
}

impl HistoryMode {
    /// Canonical configuration value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Hash => "hash",
        }
    }
}

impl FromStr for HistoryMode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "web" | "history" | "browser" => Ok(Self::Web),
            "hash" => Ok(Self::Hash),
            _ => Err(ConfigError::UnknownHistoryMode {
                value: value.to_string(),
            }),
        }
    }
}

/// Router configuration assembled once at application boot.
#[derive(Clone, Copy, Debug)]
pub struct RouterConfig {
    /// History binding.
    pub history: HistoryMode,
    /// Scroll policy invoked after each navigation.
    pub scroll: ScrollBehavior,
}

impl RouterConfig {
    /// Configuration with the given history mode and the scroll-to-top policy.
    #[must_use]
    pub const fn new(history: HistoryMode) -> Self {
        Self {
            history,
            scroll: ScrollBehavior::top(),
        }
    }

    /// Replace the scroll policy.
    #[must_use]
    pub const fn with_scroll_behavior(mut self, scroll: ScrollBehavior) -> Self {
        self.scroll = scroll;
        self
    }

    /// Route table served by this configuration.
    #[must_use]
    pub const fn routes(&self) -> &'static [RouteEntry] {
        Route::table()
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new(HistoryMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_paths_resolve_to_their_routes() {
        assert_eq!(Route::resolve("/"), Route::Home);
        assert_eq!(Route::resolve("/about"), Route::About);
        assert_eq!(Route::resolve("/map"), Route::Map);
        assert_eq!(Route::resolve("/announcement"), Route::Announcement);
        assert_eq!(Route::resolve("/watch"), Route::Watch);
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        for path in ["/xyz123", "/about/team", "/maps", "/watch/1/2", "/announcements"] {
            assert_eq!(Route::resolve(path), Route::NotFound, "path {path}");
        }
    }

    #[test]
    fn matching_is_exact_on_slashes_and_case() {
        assert_eq!(Route::resolve("/about/"), Route::NotFound);
        assert_eq!(Route::resolve("/map/"), Route::NotFound);
        assert_eq!(Route::resolve("/map/?zoom=3"), Route::NotFound);
        assert_eq!(Route::resolve("//about"), Route::NotFound);
        assert_eq!(Route::resolve("/About"), Route::NotFound);
        assert_eq!(Route::resolve("/WATCH"), Route::NotFound);
        assert_eq!(Route::resolve("/"), Route::Home);
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        assert_eq!(Route::resolve("/map?zoom=12"), Route::Map);
        assert_eq!(Route::resolve("/about#team"), Route::About);
        assert_eq!(Route::resolve(""), Route::Home);
    }

    #[test]
    fn table_has_single_trailing_catch_all() {
        let table = Route::table();
        let catch_all: Vec<_> = table.iter().filter(|entry| entry.catch_all).collect();
        assert_eq!(catch_all.len(), 1);
        assert_eq!(table.last().map(|entry| entry.route), Some(Route::NotFound));
    }

    #[test]
    fn table_patterns_match_router_paths() {
        for entry in Route::table() {
            assert_eq!(entry.pattern, entry.route.to_path());
            assert_eq!(entry.page, entry.route.page_id());
            assert_eq!(PageId::ALL[entry.page.index()], entry.page);
        }
    }

    #[test]
    fn navigable_routes_exclude_fallback() {
        assert!(!Route::navigable().contains(&Route::NotFound));
        assert_eq!(Route::navigable().len(), Route::table().len() - 1);
    }

    #[test]
    fn history_mode_parses_aliases() {
        assert_eq!("web".parse::<HistoryMode>(), Ok(HistoryMode::Web));
        assert_eq!(" History ".parse::<HistoryMode>(), Ok(HistoryMode::Web));
        assert_eq!("browser".parse::<HistoryMode>(), Ok(HistoryMode::Web));
        assert_eq!("HASH".parse::<HistoryMode>(), Ok(HistoryMode::Hash));
        assert_eq!(
            "memory".parse::<HistoryMode>(),
            Err(ConfigError::UnknownHistoryMode {
                value: "memory".to_string()
            })
        );
    }

    #[test]
    fn default_config_uses_web_history() {
        let config = RouterConfig::default();
        assert_eq!(config.history, HistoryMode::Web);
        assert_eq!(config.routes().len(), 6);
        assert_eq!(
            RouterConfig::new(HistoryMode::Hash).history.as_str(),
            "hash"
        );
    }
}
