//! Theme context provider.
//!
//! # Design
//! - Holds the light/dark mode in memory only; nothing is persisted.
//! - Mirrors the mode onto `<body>` so page-level CSS can follow it.

use crate::core::theme::{ThemeMode, css_variables};
use gloo::utils::document;
use yew::prelude::*;

/// Theme value shared with descendants.
#[derive(Clone, PartialEq)]
pub(crate) struct ThemeCtx {
    pub(crate) mode: ThemeMode,
    pub(crate) toggle: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub(crate) struct ThemeProviderProps {
    #[prop_or_default]
    pub(crate) initial: ThemeMode,
    #[prop_or_default]
    pub(crate) children: Children,
}

#[function_component(ThemeProvider)]
pub(crate) fn theme_provider(props: &ThemeProviderProps) -> Html {
    let mode = {
        let initial = props.initial;
        use_state(move || initial)
    };
    use_effect_with_deps(
        |mode| {
            apply_theme(*mode);
            || ()
        },
        *mode,
    );
    let toggle = {
        let mode = mode.clone();
        Callback::from(move |()| mode.set(mode.toggled()))
    };
    let ctx = ThemeCtx {
        mode: *mode,
        toggle,
    };

    html! {
        <ContextProvider<ThemeCtx> context={ctx}>
            { for props.children.iter() }
        </ContextProvider<ThemeCtx>>
    }
}

fn apply_theme(mode: ThemeMode) {
    if let Some(body) = document().body() {
        let _ = body.set_attribute("data-theme", mode.as_str());
        let _ = body.set_attribute("style", &css_variables(mode));
    }
}
