use crate::app::Route;
use crate::components::card::Card;
use yew::prelude::*;
use yew_router::prelude::*;

/// Fallback for unknown hash routes.
#[function_component(NotFoundPage)]
pub(crate) fn not_found_page() -> Html {
    html! {
        <section class="page">
            <Card title="Page not found" subtitle="Nothing lives at this address.">
                <Link<Route> to={Route::Home} classes="link link-primary">{"Back to home"}</Link<Route>>
            </Card>
        </section>
    }
}
