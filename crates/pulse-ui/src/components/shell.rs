//! App bar, responsive navigation and page frame.

use crate::app::Route;
use crate::components::icons::IconMenu;
use crate::components::theme_provider::ThemeCtx;
use crate::core::breakpoints::{Breakpoint, uses_drawer_nav};
use crate::core::theme::ThemeMode;
use yew::prelude::*;
use yew_router::prelude::*;

const NAV_ITEMS: [(Route, &str); 2] = [(Route::Home, "Home"), (Route::Status, "API Status")];

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub(crate) app_name: AttrValue,
    pub(crate) app_version: AttrValue,
    pub(crate) breakpoint: Breakpoint,
    #[prop_or_default]
    pub(crate) children: Children,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let drawer_open = use_state(|| false);
    let navigator = use_navigator();
    let active = use_route::<Route>();
    let theme = use_context::<ThemeCtx>();

    let navigate = {
        let drawer_open = drawer_open.clone();
        Callback::from(move |route: Route| {
            if let Some(navigator) = &navigator {
                navigator.push(&route);
            }
            drawer_open.set(false);
        })
    };
    let open_drawer = {
        let drawer_open = drawer_open.clone();
        Callback::from(move |_| drawer_open.set(true))
    };
    let close_drawer = {
        let drawer_open = drawer_open.clone();
        Callback::from(move |_| drawer_open.set(false))
    };

    let nav_buttons = |extra: &'static str| -> Html {
        NAV_ITEMS
            .iter()
            .map(|(route, label)| {
                let route = route.clone();
                let is_active = active.as_ref() == Some(&route);
                let onclick = navigate.reform(move |_: MouseEvent| route.clone());
                html! {
                    <button
                        type="button"
                        class={classes!("btn", "btn-ghost", extra, is_active.then_some("btn-active"))}
                        aria-current={is_active.then_some("page")}
                        {onclick}
                    >
                        {*label}
                    </button>
                }
            })
            .collect::<Html>()
    };

    let theme_toggle = theme.map(|theme| {
        let label = match theme.mode {
            ThemeMode::Light => "Dark mode",
            ThemeMode::Dark => "Light mode",
        };
        let onclick = theme.toggle.reform(|_: MouseEvent| ());
        html! {
            <button type="button" class="btn btn-ghost btn-sm" {onclick}>{label}</button>
        }
    });

    let compact = uses_drawer_nav(props.breakpoint);
    let navigation = if compact {
        html! {
            <>
                <button type="button" class="btn btn-ghost btn-square" aria-label="menu" onclick={open_drawer}>
                    <IconMenu size={24} />
                </button>
                {if *drawer_open {
                    html! {
                        <div class="drawer-overlay" onclick={close_drawer}>
                            <nav class="drawer-panel" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                                {nav_buttons("btn-block justify-start")}
                            </nav>
                        </div>
                    }
                } else {
                    html! {}
                }}
            </>
        }
    } else {
        html! { <nav class="flex gap-1">{nav_buttons("")}</nav> }
    };

    html! {
        <div class="app-shell">
            <header class="navbar app-bar">
                <div class="flex-1 text-lg font-semibold">{props.app_name.clone()}</div>
                {theme_toggle.unwrap_or_default()}
                {navigation}
            </header>
            <main class="app-main">
                { for props.children.iter() }
            </main>
            <footer class="app-footer muted">
                {format!("{} v{}", props.app_name, props.app_version)}
            </footer>
        </div>
    }
}
