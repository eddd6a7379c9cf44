//! Landing page.
use crate::routing::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Home)]
pub(crate) fn home() -> Html {
    html! {
        <section class="home-page">
            <div class="hero">
                <h1>{"RoadWatch"}</h1>
                <p class="muted">{"Follow road works and construction notices around the city."}</p>
            </div>
            <div class="card-grid">
                <Link<Route> classes={classes!("card")} to={Route::Map}>
                    <h3>{"Map"}</h3>
                    <p class="muted">{"See where works are happening."}</p>
                </Link<Route>>
                <Link<Route> classes={classes!("card")} to={Route::Announcement}>
                    <h3>{"Announcements"}</h3>
                    <p class="muted">{"Browse the latest construction notices."}</p>
                </Link<Route>>
                <Link<Route> classes={classes!("card")} to={Route::Watch}>
                    <h3>{"Watch"}</h3>
                    <p class="muted">{"Keep an eye on the roads you use."}</p>
                </Link<Route>>
            </div>
        </section>
    }
}
