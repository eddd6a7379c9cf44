//! Application root: router binding, shell and route outlet.
//!
//! # Design
//! - Configuration is resolved once per boot; the history binding cannot change afterwards.
//! - The outlet owns the navigation session; pages load the first time their route matches.
//! - Scroll is applied in an effect so it runs after the new page has mounted; the effect is keyed
//!   on the full location so query- or fragment-only navigations reset scroll too.

mod viewport;

use crate::config::UiConfig;
use crate::pages::load_page;
use crate::routing::{HistoryMode, Route};
use crate::routing::session::{NavigationSession, location_key};
use crate::services::api::ApiClient;
use gloo::console;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(RoadWatchApp)]
fn roadwatch_app() -> Html {
    let config = use_memo(|_| load_config(), ());
    let api_client = {
        let config = config.clone();
        use_memo(
            move |_| ApiClient::new(config.api_base_url(&viewport::page_origin())),
            (),
        )
    };

    let shell = html! {
        <ContextProvider<Rc<ApiClient>> context={api_client}>
            <AppShell config={(*config).clone()} />
        </ContextProvider<Rc<ApiClient>>>
    };

    match config.history {
        HistoryMode::Web => html! { <BrowserRouter>{shell}</BrowserRouter> },
        HistoryMode::Hash => html! { <HashRouter>{shell}</HashRouter> },
    }
}

#[derive(Properties, PartialEq)]
struct ShellProps {
    config: UiConfig,
}

#[function_component(AppShell)]
fn app_shell(props: &ShellProps) -> Html {
    let active = use_location().map_or(Route::Home, |location| Route::resolve(location.path()));
    html! {
        <div class="app-shell">
            <nav class="navbar">
                <span class="brand">{"RoadWatch"}</span>
                <ul class="nav-links">
                    {for Route::navigable().into_iter().map(|route| {
                        let class = if route == active { classes!("nav-link", "active") } else { classes!("nav-link") };
                        html! {
                            <li>
                                <Link<Route> classes={class} to={route}>{nav_label(route)}</Link<Route>>
                            </li>
                        }
                    })}
                </ul>
            </nav>
            <main class="content">
                <RouterView config={props.config.clone()} />
            </main>
        </div>
    }
}

#[function_component(RouterView)]
fn router_view(props: &ShellProps) -> Html {
    let router_config = props.config.router();
    let session = use_mut_ref(move || NavigationSession::new(router_config, load_page));
    let target = use_location().map_or_else(
        || "/".to_string(),
        |location| location_key(location.path(), location.query_str(), location.hash()),
    );
    let page = *session.borrow().page(Route::resolve(&target));

    {
        let session = session.clone();
        use_effect_with_deps(
            move |target: &String| {
                let navigation = session
                    .borrow_mut()
                    .navigate(target, viewport::current_scroll());
                viewport::set_title(page.title);
                viewport::apply_scroll(navigation.scroll);
                console::debug!("navigated", target.clone(), navigation.page.as_str());
                || ()
            },
            target,
        );
    }

    (page.render)()
}

const fn nav_label(route: Route) -> &'static str {
    match route {
        Route::Home => "Home",
        Route::About => "About",
        Route::Map => "Map",
        Route::Announcement => "Announcements",
        Route::Watch => "Watch",
        Route::NotFound => "Not Found",
    }
}

fn load_config() -> UiConfig {
    UiConfig::from_build_env().unwrap_or_else(|err| {
        console::warn!("invalid ui configuration, using defaults", err.to_string());
        UiConfig::default()
    })
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    yew::Renderer::<RoadWatchApp>::new().render();
}
