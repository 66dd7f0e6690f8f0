//! Surface card with optional header and actions.

use crate::core::ui::CardLayout;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct CardProps {
    #[prop_or_default]
    pub(crate) title: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) actions: Option<Html>,
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or_default]
    pub(crate) children: Children,
}

#[function_component(Card)]
pub(crate) fn card(props: &CardProps) -> Html {
    let layout = CardLayout::resolve(
        props.title.is_some(),
        props.subtitle.is_some(),
        !props.children.is_empty(),
        props.actions.is_some(),
    );
    let classes = classes!("card", "shadow", "bg-base-100", props.class.clone());
    let header = layout.header.then(|| {
        html! {
            <div class="card-header px-6 pt-6">
                {props.title.clone().map(|title| html! { <h2 class="card-title">{title}</h2> }).unwrap_or_default()}
                {props.subtitle.clone().map(|subtitle| html! { <p class="text-sm muted">{subtitle}</p> }).unwrap_or_default()}
            </div>
        }
    });
    let body = layout.body.then(|| {
        html! { <div class="card-body">{ for props.children.iter() }</div> }
    });
    let actions = props.actions.clone().filter(|_| layout.actions).map(|actions| {
        html! { <div class="card-actions justify-end px-6 pb-4">{actions}</div> }
    });

    html! {
        <div class={classes}>
            {header.unwrap_or_default()}
            {body.unwrap_or_default()}
            {actions.unwrap_or_default()}
        </div>
    }
}
