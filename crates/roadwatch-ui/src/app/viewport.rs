//! Window helpers for scroll, title and origin lookups.

use crate::routing::scroll::ScrollPosition;
use gloo::console;
use gloo::utils::window;

pub(crate) fn current_scroll() -> ScrollPosition {
    let window = window();
    ScrollPosition {
        left: window.scroll_x().unwrap_or_default(),
        top: window.scroll_y().unwrap_or_default(),
    }
}

pub(crate) fn apply_scroll(position: ScrollPosition) {
    window().scroll_to_with_x_and_y(position.left, position.top);
}

pub(crate) fn set_title(title: &str) {
    if let Some(document) = window().document() {
        document.set_title(title);
    }
}

pub(crate) fn page_origin() -> String {
    match window().location().origin() {
        Ok(origin) => origin,
        Err(err) => {
            console::warn!("location origin unavailable", err);
            String::new()
        }
    }
}
