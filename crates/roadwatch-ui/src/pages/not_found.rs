//! Static fallback view for unmatched paths.
use yew::prelude::*;

#[function_component(NotFound)]
pub(crate) fn not_found() -> Html {
    html! { <h2>{"Not Found"}</h2> }
}
