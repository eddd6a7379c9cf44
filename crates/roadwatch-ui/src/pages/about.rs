//! Project description.
use yew::prelude::*;

#[function_component(About)]
pub(crate) fn about() -> Html {
    html! {
        <section class="about-page">
            <h2>{"About RoadWatch"}</h2>
            <p>
                {"RoadWatch collects the city's public road-works register and presents it as a \
                  searchable list and map, so residents can plan around closures."}
            </p>
            <p class="muted">
                {"Notices are scraped periodically from the official register; the original \
                  announcement remains the authoritative source."}
            </p>
        </section>
    }
}
