//! Road-works map view.
use yew::prelude::*;

#[function_component(MapView)]
pub(crate) fn map_view() -> Html {
    html! {
        <section class="map-page">
            <h2>{"Map"}</h2>
            <div class="map-canvas" aria-label="Road works map">
                <p class="muted">{"Map tiles load here once a location layer is configured."}</p>
            </div>
        </section>
    }
}
