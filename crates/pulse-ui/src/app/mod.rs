//! App root: providers, router and bootstrapping.
//!
//! # Design
//! - One API client and one store per boot, shared through context and yewdux.
//! - The persisted prompt is loaded before the first render.
//! - Breakpoint tracking lives here so the shell stays presentational.

use crate::app::api::ApiCtx;
use crate::components::shell::AppShell;
use crate::components::theme_provider::ThemeProvider;
use crate::core::breakpoints::{Breakpoint, for_viewport};
use crate::core::settings::Settings;
use crate::core::store::{StatusStore, set_prompt};
use crate::features::home::HomePage;
use crate::features::not_found::NotFoundPage;
use crate::features::status::StatusPage;
use gloo::events::EventListener;
use gloo::utils::window;
use preferences::load_initial_prompt;
pub(crate) use routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::Dispatch;

pub(crate) mod api;
pub(crate) mod pollers;
pub(crate) mod preferences;
mod routes;

#[function_component(PulseApp)]
fn pulse_app() -> Html {
    let settings = use_memo(|_| Settings::from_build_env(), ());
    let api_ctx = {
        let settings = (*settings).clone();
        use_memo(move |_| ApiCtx::new(settings), ())
    };
    let breakpoint = use_state_eq(current_breakpoint);
    use_effect_with_deps(
        |bp| {
            apply_breakpoint(*bp);
            || ()
        },
        *breakpoint,
    );
    {
        let breakpoint = breakpoint.clone();
        use_effect_with_deps(
            move |_| {
                let handler = EventListener::new(&window(), "resize", move |_event| {
                    breakpoint.set(current_breakpoint());
                });
                move || drop(handler)
            },
            (),
        );
    }

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <ThemeProvider>
                <HashRouter>
                    <AppShell
                        app_name={settings.app_name}
                        app_version={settings.app_version.clone()}
                        breakpoint={*breakpoint}
                    >
                        <Switch<Route> render={switch} />
                    </AppShell>
                </HashRouter>
            </ThemeProvider>
        </ContextProvider<ApiCtx>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Status => html! { <StatusPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

fn apply_breakpoint(bp: Breakpoint) {
    if let Some(body) = gloo::utils::document().body() {
        let _ = body.set_attribute("data-bp", bp.name);
    }
}

fn current_breakpoint() -> Breakpoint {
    for_viewport(window().inner_width().ok().and_then(|width| width.as_f64()))
}

/// Mount the app into `#root`, or `<body>` when the element is missing.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let prompt = load_initial_prompt();
    Dispatch::<StatusStore>::new().reduce_mut(|store| set_prompt(store, prompt));
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<PulseApp>::with_root(root).render();
    } else {
        yew::Renderer::<PulseApp>::new().render();
    }
}
