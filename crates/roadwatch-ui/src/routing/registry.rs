//! Per-page deferred loaders.
//!
//! # Design
//! - One [`Deferred`] slot per [`PageId`], created up front, populated on first match.
//! - The loader is injected so the DOM-bound page set stays out of the routing core.
use std::rc::Rc;

use super::deferred::Deferred;
use super::{PageId, Route};

/// Cache of page units keyed by [`PageId`].
pub struct PageRegistry<P> {
    slots: [Deferred<P>; PageId::COUNT],
}

impl<P: 'static> PageRegistry<P> {
    /// Build a registry whose slots call `loader` lazily, once per page.
    #[must_use]
    pub fn new(loader: impl Fn(PageId) -> P + 'static) -> Self {
        let loader: Rc<dyn Fn(PageId) -> P> = Rc::new(loader);
        Self {
            slots: PageId::ALL.map(|page| {
                let loader = Rc::clone(&loader);
                Deferred::new(move || loader(page))
            }),
        }
    }

    /// Page unit for `route`, loading it on first use.
    #[must_use]
    pub fn load(&self, route: Route) -> &P {
        self.slots[route.page_id().index()].get()
    }

    /// Whether the page's loader has already run.
    #[must_use]
    pub fn is_loaded(&self, page: PageId) -> bool {
        self.slots[page.index()].is_loaded()
    }

    /// Number of pages loaded so far.
    #[must_use]
    pub fn loaded_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_loaded()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn recording_registry() -> (PageRegistry<String>, Rc<RefCell<Vec<PageId>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let registry = {
            let log = Rc::clone(&log);
            PageRegistry::new(move |page| {
                log.borrow_mut().push(page);
                format!("page:{page}")
            })
        };
        (registry, log)
    }

    #[test]
    fn nothing_loads_until_matched() {
        let (registry, log) = recording_registry();
        assert_eq!(registry.loaded_count(), 0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn matched_page_loads_once() {
        let (registry, log) = recording_registry();
        assert_eq!(registry.load(Route::About), "page:about");
        assert_eq!(registry.load(Route::About), "page:about");
        assert_eq!(*log.borrow(), vec![PageId::About]);
        assert!(registry.is_loaded(PageId::About));
        assert!(!registry.is_loaded(PageId::Home));
        assert_eq!(registry.loaded_count(), 1);
    }

    #[test]
    fn not_found_page_is_deferred_too() {
        let (registry, log) = recording_registry();
        assert_eq!(registry.load(Route::resolve("/xyz123")), "page:not-found");
        assert_eq!(*log.borrow(), vec![PageId::NotFound]);
    }
}
