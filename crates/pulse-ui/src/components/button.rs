//! Themed button with a loading state.

use crate::components::foundations::tone_class;
use crate::core::ui::{ButtonState, ButtonVariant, LOADING_LABEL, Tone};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ButtonProps {
    #[prop_or_default]
    pub(crate) children: Children,
    #[prop_or_default]
    pub(crate) variant: ButtonVariant,
    #[prop_or(Some(Tone::Primary))]
    pub(crate) tone: Option<Tone>,
    #[prop_or_default]
    pub(crate) loading: bool,
    #[prop_or_default]
    pub(crate) disabled: bool,
    /// Start icon, hidden while loading.
    #[prop_or_default]
    pub(crate) icon: Option<Html>,
    #[prop_or_default]
    pub(crate) small: bool,
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or_default]
    pub(crate) onclick: Callback<MouseEvent>,
}

#[function_component(Button)]
pub(crate) fn button(props: &ButtonProps) -> Html {
    let state = ButtonState::resolve(props.loading, props.disabled);
    let mut classes = classes!(
        "btn",
        props.variant.as_class(),
        props.small.then_some("btn-sm"),
        props.class.clone()
    );
    if let Some(tone) = tone_class("btn", props.tone) {
        classes.push(tone);
    }
    let icon = if state.show_icon {
        props.icon.clone().unwrap_or_default()
    } else {
        Html::default()
    };

    html! {
        <button
            class={classes}
            type="button"
            disabled={state.disabled}
            aria-busy={props.loading.then_some("true")}
            onclick={props.onclick.clone()}
        >
            {icon}
            {if state.show_loading_label {
                html! { {LOADING_LABEL} }
            } else {
                html! { for props.children.iter() }
            }}
        </button>
    }
}
