//! Scroll policy applied after each navigation.
use super::Route;

/// Absolute viewport scroll offset in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollPosition {
    /// Horizontal offset.
    pub left: f64,
    /// Vertical offset.
    pub top: f64,
}

impl ScrollPosition {
    /// Top-left corner of the document.
    pub const ORIGIN: Self = Self {
        left: 0.0,
        top: 0.0,
    };
}

/// Requested scroll offset; `None` axes keep their current value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollTarget {
    /// Horizontal offset to apply.
    pub left: Option<f64>,
    /// Vertical offset to apply.
    pub top: Option<f64>,
}

impl ScrollTarget {
    /// Reset the vertical offset only.
    pub const TOP: Self = Self {
        left: None,
        top: Some(0.0),
    };

    /// Resolve the target against the current viewport position.
    #[must_use]
    pub fn apply_to(self, current: ScrollPosition) -> ScrollPosition {
        ScrollPosition {
            left: self.left.unwrap_or(current.left),
            top: self.top.unwrap_or(current.top),
        }
    }
}

/// Policy producing a scroll target for a navigation from `from` to `to`.
///
/// Returning `None` leaves the viewport where it is.
#[derive(Clone, Copy, Debug)]
pub struct ScrollBehavior {
    policy: fn(to: Route, from: Option<Route>) -> Option<ScrollTarget>,
}

impl ScrollBehavior {
    /// Always scroll back to the top of the page.
    #[must_use]
    pub const fn top() -> Self {
        Self {
            policy: scroll_to_top,
        }
    }

    /// Never touch the scroll position.
    #[must_use]
    pub const fn preserve() -> Self {
        Self {
            policy: keep_position,
        }
    }

    /// Wrap a custom policy.
    #[must_use]
    pub const fn custom(policy: fn(Route, Option<Route>) -> Option<ScrollTarget>) -> Self {
        Self { policy }
    }

    /// Evaluate the policy for one navigation.
    #[must_use]
    pub fn target(&self, to: Route, from: Option<Route>) -> Option<ScrollTarget> {
        (self.policy)(to, from)
    }

    /// Position the viewport should end up at after the navigation mounts.
    #[must_use]
    pub fn resolve(&self, to: Route, from: Option<Route>, current: ScrollPosition) -> ScrollPosition {
        self.target(to, from)
            .map_or(current, |target| target.apply_to(current))
    }
}

const fn scroll_to_top(_to: Route, _from: Option<Route>) -> Option<ScrollTarget> {
    Some(ScrollTarget::TOP)
}

const fn keep_position(_to: Route, _from: Option<Route>) -> Option<ScrollTarget> {
    None
}

impl Default for ScrollBehavior {
    fn default() -> Self {
        Self::top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_policy_resets_vertical_offset_only() {
        let current = ScrollPosition {
            left: 40.0,
            top: 900.0,
        };
        let next = ScrollBehavior::top().resolve(Route::Map, Some(Route::Home), current);
        assert_eq!(
            next,
            ScrollPosition {
                left: 40.0,
                top: 0.0
            }
        );
    }

    #[test]
    fn top_policy_applies_on_first_navigation() {
        assert_eq!(
            ScrollBehavior::default().target(Route::Home, None),
            Some(ScrollTarget::TOP)
        );
    }

    #[test]
    fn preserve_policy_keeps_position() {
        let current = ScrollPosition {
            left: 0.0,
            top: 120.0,
        };
        assert_eq!(
            ScrollBehavior::preserve().resolve(Route::About, Some(Route::Home), current),
            current
        );
    }

    #[test]
    fn custom_policy_sees_both_routes() {
        let behavior = ScrollBehavior::custom(|to, from| {
            (from == Some(to)).then_some(ScrollTarget {
                left: Some(0.0),
                top: Some(0.0),
            })
        });
        let current = ScrollPosition {
            left: 5.0,
            top: 5.0,
        };
        assert_eq!(
            behavior.resolve(Route::Watch, Some(Route::Watch), current),
            ScrollPosition::ORIGIN
        );
        assert_eq!(behavior.resolve(Route::Watch, Some(Route::Map), current), current);
    }
}
