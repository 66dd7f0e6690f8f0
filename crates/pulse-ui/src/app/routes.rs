//! Routing definitions for the Pulse UI.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/status")]
    Status,
    #[not_found]
    #[at("/404")]
    NotFound,
}
