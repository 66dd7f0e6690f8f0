//! Inline SVG glyphs.

use crate::components::foundations::text_tone;
use crate::core::ui::{StatusIcon, Tone};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct GlyphProps {
    #[prop_or_default]
    pub(crate) class: Classes,
    /// Edge length in pixels.
    #[prop_or(20)]
    pub(crate) size: u16,
}

fn svg(props: &GlyphProps, extra: Option<String>, body: Html) -> Html {
    let size = props.size.to_string();
    html! {
        <svg
            class={classes!("shrink-0", extra, props.class.clone())}
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {body}
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct StatusGlyphProps {
    pub(crate) icon: StatusIcon,
    pub(crate) tone: Tone,
    #[prop_or(20)]
    pub(crate) size: u16,
}

/// Status icon colored by tone; the spinner variant ignores the tone.
#[function_component(StatusGlyph)]
pub(crate) fn status_glyph(props: &StatusGlyphProps) -> Html {
    let glyph = GlyphProps {
        class: Classes::new(),
        size: props.size,
    };
    let tone = Some(text_tone(props.tone));
    match props.icon {
        StatusIcon::Success => svg(
            &glyph,
            tone,
            html! { <><circle cx="12" cy="12" r="10" /><path d="m8 12 3 3 5-6" /></> },
        ),
        StatusIcon::Error => svg(
            &glyph,
            tone,
            html! { <><circle cx="12" cy="12" r="10" /><path d="M12 7v6m0 4h.01" /></> },
        ),
        StatusIcon::Schedule => svg(
            &glyph,
            tone,
            html! { <><circle cx="12" cy="12" r="10" /><path d="M12 6v6l4 2" /></> },
        ),
        StatusIcon::Spinner => {
            let style = format!("width:{0}px;height:{0}px", props.size);
            html! { <span class="loading loading-spinner" style={style} role="status" /> }
        }
    }
}

#[function_component(IconRefresh)]
pub(crate) fn icon_refresh(props: &GlyphProps) -> Html {
    svg(
        props,
        None,
        html! { <path d="M21 12a9 9 0 1 1-3-6.7L21 8m0-5v5h-5" /> },
    )
}

#[function_component(IconMenu)]
pub(crate) fn icon_menu(props: &GlyphProps) -> Html {
    svg(props, None, html! { <path d="M4 6h16M4 12h16M4 18h16" /> })
}

#[function_component(IconExpand)]
pub(crate) fn icon_expand(props: &GlyphProps) -> Html {
    svg(props, None, html! { <path d="m6 9 6 6 6-6" /> })
}
