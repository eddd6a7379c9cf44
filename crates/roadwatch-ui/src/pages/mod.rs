//! Page-level views, one per route.
//!
//! # Design
//! - Pages are reached only through [`load_page`], which the router's deferred registry invokes
//!   the first time a route matches.
//! - Views read shared settings from context; they take no props.

mod about;
mod announcement;
mod home;
mod map_view;
mod not_found;
mod road_watch;

use crate::routing::PageId;
use yew::prelude::*;

/// Renderable unit produced by a page loader.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PageModule {
    /// Document title while the page is mounted.
    pub(crate) title: &'static str,
    /// View constructor.
    pub(crate) render: fn() -> Html,
}

/// Loader backing the router's page registry.
pub(crate) fn load_page(page: PageId) -> PageModule {
    match page {
        PageId::Home => PageModule {
            title: "RoadWatch",
            render: || html! { <home::Home /> },
        },
        PageId::About => PageModule {
            title: "About | RoadWatch",
            render: || html! { <about::About /> },
        },
        PageId::Map => PageModule {
            title: "Map | RoadWatch",
            render: || html! { <map_view::MapView /> },
        },
        PageId::Announcement => PageModule {
            title: "Announcements | RoadWatch",
            render: || html! { <announcement::AnnouncementView /> },
        },
        PageId::Watch => PageModule {
            title: "Watch | RoadWatch",
            render: || html! { <road_watch::RoadWatch /> },
        },
        PageId::NotFound => PageModule {
            title: "Not Found | RoadWatch",
            render: || html! { <not_found::NotFound /> },
        },
    }
}
