//! Watch view for roads the visitor follows.
use yew::prelude::*;

#[function_component(RoadWatch)]
pub(crate) fn road_watch() -> Html {
    html! {
        <section class="watch-page">
            <h2>{"Road Watch"}</h2>
            <p class="muted">{"Pick roads from the announcement list to follow them here."}</p>
        </section>
    }
}
