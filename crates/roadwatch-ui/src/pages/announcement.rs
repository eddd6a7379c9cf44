//! Construction notice listing.
//!
//! # Design
//! - Fetch once per mount; a navigation away simply drops the result.
//! - Fetch failures stay local to this view and never affect routing.

use crate::services::api::ApiClient;
use gloo::console;
use roadwatch_api_models::ConstructionNotice;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
enum NoticesState {
    Loading,
    Loaded(Vec<ConstructionNotice>),
    Failed(String),
}

#[function_component(AnnouncementView)]
pub(crate) fn announcement_view() -> Html {
    let api = use_context::<Rc<ApiClient>>();
    let state = use_state(|| NoticesState::Loading);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                match api {
                    Some(api) => spawn_local(async move {
                        match api.fetch_construction_notices().await {
                            Ok(notices) => state.set(NoticesState::Loaded(notices)),
                            Err(err) => {
                                let detail = err.to_string();
                                console::error!("construction notice fetch failed", detail.clone());
                                state.set(NoticesState::Failed(detail));
                            }
                        }
                    }),
                    None => state.set(NoticesState::Failed("api client unavailable".to_string())),
                }
                || ()
            },
            (),
        );
    }

    html! {
        <section class="announcement-page">
            <h2>{"Construction Notices"}</h2>
            {match &*state {
                NoticesState::Loading => html! { <p class="muted">{"Loading notices..."}</p> },
                NoticesState::Failed(detail) => html! {
                    <div class="alert alert-error">
                        <strong>{"Notices could not be loaded."}</strong>
                        <p class="muted">{detail.clone()}</p>
                    </div>
                },
                NoticesState::Loaded(notices) if notices.is_empty() => html! {
                    <p class="muted">{"No construction notices right now."}</p>
                },
                NoticesState::Loaded(notices) => html! {
                    <table class="table notices">
                        <thead>
                            <tr>
                                <th>{"Dates"}</th>
                                <th>{"Project"}</th>
                                <th>{"Type"}</th>
                                <th>{"Unit"}</th>
                                <th>{"Road"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for notices.iter().map(render_notice)}
                        </tbody>
                    </table>
                },
            }}
        </section>
    }
}

fn render_notice(notice: &ConstructionNotice) -> Html {
    let name = if notice.has_link() {
        let href = notice.url.clone().unwrap_or_default();
        html! { <a href={href} target="_blank" rel="noopener noreferrer">{notice.name.clone()}</a> }
    } else {
        html! { {notice.name.clone()} }
    };
    html! {
        <tr key={notice.id.to_string()}>
            <td>{notice.display_date_range().to_string()}</td>
            <td>{name}</td>
            <td>{notice.display_kind().to_string()}</td>
            <td>{notice.display_unit().to_string()}</td>
            <td>{notice.display_road().to_string()}</td>
        </tr>
    }
}
