//! Navigation bookkeeping for one page session.
//!
//! # Design
//! - Every navigation resolves, loads, then asks the scroll policy where to land.
//! - The session owns the page registry so loaded pages live as long as the app.
use super::registry::PageRegistry;
use super::scroll::ScrollPosition;
use super::{PageId, Route, RouterConfig};

/// Outcome of a single navigation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Navigation {
    /// Route active before the navigation, `None` on the initial load.
    pub from: Option<Route>,
    /// Route matched for the requested path.
    pub to: Route,
    /// Page mounted for `to`.
    pub page: PageId,
    /// Viewport position to apply once the page has mounted.
    pub scroll: ScrollPosition,
}

/// Full location string (path, query and fragment) identifying one navigation target.
///
/// Two locations differing only in query or fragment are distinct navigations.
#[must_use]
pub fn location_key(path: &str, query: &str, fragment: &str) -> String {
    let mut key = if path.is_empty() { "/".to_string() } else { path.to_string() };
    let query = query.trim_start_matches('?');
    if !query.is_empty() {
        key.push('?');
        key.push_str(query);
    }
    let fragment = fragment.trim_start_matches('#');
    if !fragment.is_empty() {
        key.push('#');
        key.push_str(fragment);
    }
    key
}

/// Router state held for the lifetime of the page session.
pub struct NavigationSession<P> {
    config: RouterConfig,
    registry: PageRegistry<P>,
    current: Option<Route>,
}

impl<P: 'static> NavigationSession<P> {
    /// Start a session with the given configuration and page loader.
    #[must_use]
    pub fn new(config: RouterConfig, loader: impl Fn(PageId) -> P + 'static) -> Self {
        Self {
            config,
            registry: PageRegistry::new(loader),
            current: None,
        }
    }

    /// Handle a navigation to `location` from a viewport currently at `scroll`.
    ///
    /// `location` may carry a query string and fragment; only the path selects the route, but
    /// every call counts as a navigation and consults the scroll policy.
    pub fn navigate(&mut self, location: &str, scroll: ScrollPosition) -> Navigation {
        let to = Route::resolve(location);
        let from = self.current.replace(to);
        let _ = self.registry.load(to);
        Navigation {
            from,
            to,
            page: to.page_id(),
            scroll: self.config.scroll.resolve(to, from, scroll),
        }
    }

    /// Loaded page unit for `route`.
    #[must_use]
    pub fn page(&self, route: Route) -> &P {
        self.registry.load(route)
    }

    /// Route of the most recent navigation.
    #[must_use]
    pub const fn current(&self) -> Option<Route> {
        self.current
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Underlying page registry.
    #[must_use]
    pub const fn registry(&self) -> &PageRegistry<P> {
        &self.registry
    }
}
