//! Inline alert with an optional title.

use crate::components::foundations::tone_class;
use crate::core::ui::Tone;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct AlertProps {
    #[prop_or_default]
    pub(crate) title: Option<AttrValue>,
    #[prop_or(Tone::Error)]
    pub(crate) tone: Tone,
    #[prop_or_default]
    pub(crate) children: Children,
}

/// Inline alert block used for error details.
#[function_component(Alert)]
pub(crate) fn alert(props: &AlertProps) -> Html {
    let mut classes = classes!("alert", "mt-4");
    if let Some(tone) = tone_class("alert", Some(props.tone)) {
        classes.push(tone);
    }
    html! {
        <div class={classes} role="alert">
            <div>
                {props.title.clone().map(|title| html! { <strong class="block">{title}</strong> }).unwrap_or_default()}
                <span>{ for props.children.iter() }</span>
            </div>
        </div>
    }
}
