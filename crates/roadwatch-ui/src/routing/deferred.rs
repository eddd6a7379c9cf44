//! Lazy-initialization wrapper backing on-demand page loading.
use std::fmt;

use once_cell::unsync::Lazy;

/// Boxed factory producing the deferred value.
pub type Factory<T> = Box<dyn FnOnce() -> T>;

/// Value produced by a factory the first time it is requested and cached afterwards.
///
/// Single-threaded: the UI runs on the browser main thread only.
pub struct Deferred<T> {
    inner: Lazy<T, Factory<T>>,
}

impl<T> Deferred<T> {
    /// Wrap a factory without invoking it.
    #[must_use]
    pub fn new(factory: impl FnOnce() -> T + 'static) -> Self {
        Self {
            inner: Lazy::new(Box::new(factory)),
        }
    }

    /// Return the value, running the factory on first access.
    #[must_use]
    pub fn get(&self) -> &T {
        Lazy::force(&self.inner)
    }

    /// Whether the factory has already run.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        Lazy::get(&self.inner).is_some()
    }
}

impl<T: fmt::Debug> fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Lazy::get(&self.inner) {
            Some(value) => f.debug_tuple("Deferred").field(value).finish(),
            None => f.write_str("Deferred(<pending>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Deferred;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn factory_runs_once_on_first_access() {
        let calls = Rc::new(Cell::new(0));
        let deferred = {
            let calls = Rc::clone(&calls);
            Deferred::new(move || {
                calls.set(calls.get() + 1);
                "about"
            })
        };

        assert!(!deferred.is_loaded());
        assert_eq!(calls.get(), 0);
        assert_eq!(*deferred.get(), "about");
        assert_eq!(*deferred.get(), "about");
        assert!(deferred.is_loaded());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn debug_reports_pending_state() {
        let deferred = Deferred::new(|| 42_u8);
        assert_eq!(format!("{deferred:?}"), "Deferred(<pending>)");
        let _ = deferred.get();
        assert_eq!(format!("{deferred:?}"), "Deferred(42)");
    }
}
