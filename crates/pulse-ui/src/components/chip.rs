//! Outlined status chip.

use crate::components::foundations::tone_class;
use crate::core::ui::Tone;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ChipProps {
    pub(crate) label: AttrValue,
    #[prop_or_default]
    pub(crate) tone: Option<Tone>,
    #[prop_or_default]
    pub(crate) small: bool,
}

/// Outlined status pill.
#[function_component(Chip)]
pub(crate) fn chip(props: &ChipProps) -> Html {
    let mut classes = classes!(
        "badge",
        "badge-outline",
        if props.small { "badge-sm" } else { "badge-md" }
    );
    if let Some(tone) = tone_class("badge", props.tone) {
        classes.push(tone);
    }
    html! { <span class={classes}>{props.label.clone()}</span> }
}
