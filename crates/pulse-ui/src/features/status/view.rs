//! Status page view.

use crate::app::api::ApiCtx;
use crate::app::pollers::{StatusPollers, refresh_providers};
use crate::app::preferences::persist_prompt;
use crate::components::alert::Alert;
use crate::components::button::Button;
use crate::components::card::Card;
use crate::components::chip::Chip;
use crate::components::icons::{IconExpand, IconRefresh, StatusGlyph};
use crate::core::health::format_response_time;
use crate::core::poll::format_last_checked;
use crate::core::providers::{format_elapsed, provider_badge};
use crate::core::store::{StatusStore, set_prompt, toggle_provider};
use crate::core::ui::{ButtonVariant, StatusIcon, Tone};
use pulse_api_models::ProviderResult;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[function_component(StatusPage)]
pub(crate) fn status_page() -> Html {
    let api = use_context::<ApiCtx>();
    {
        let api = api.clone();
        use_effect_with_deps(
            move |_| {
                let dispatch = Dispatch::<StatusStore>::new();
                let pollers = api.map(|ctx| StatusPollers::start(&ctx.client, &dispatch));
                move || drop(pollers)
            },
            (),
        );
    }

    html! {
        <section class="page max-w-3xl mx-auto">
            <h1 class="text-3xl font-bold text-center mb-6">{"System Status"}</h1>
            <HealthCard />
            <ProvidersCard api={api} />
            <p class="text-sm muted text-center mt-6">
                {"This page automatically polls the API health endpoint every 30 seconds and LLM status every 2 minutes."}
            </p>
        </section>
    }
}

#[function_component(HealthCard)]
fn health_card() -> Html {
    let health = use_selector(|store: &StatusStore| store.health.clone());
    let polling = use_selector(|store: &StatusStore| store.is_polling());
    let state = health.status;

    html! {
        <Card class="mb-6">
            <div class="flex items-center gap-4 mb-4">
                <StatusGlyph icon={state.icon()} tone={state.tone()} size={40} />
                <div>
                    <h2 class="text-xl font-semibold">{"Backend API"}</h2>
                    <Chip label={state.label()} tone={state.tone()} />
                </div>
            </div>
            <div class="grid gap-4 md:grid-cols-2">
                <Field label="Endpoint" mono={true}>{"GET /health/general"}</Field>
                <Field label="Response Time">{format_response_time(health.response_time_ms)}</Field>
                <Field label="Last Checked">{format_last_checked(health.last_checked)}</Field>
                <Field label="Polling Status">
                    {if *polling { "Checking..." } else { "Idle (30s interval)" }}
                </Field>
            </div>
            {error_alert(health.error.as_deref())}
        </Card>
    }
}

#[derive(Properties, PartialEq)]
struct ProvidersCardProps {
    api: Option<ApiCtx>,
}

#[function_component(ProvidersCard)]
fn providers_card(props: &ProvidersCardProps) -> Html {
    let providers = use_selector(|store: &StatusStore| store.providers.clone());
    let prompt = use_selector(|store: &StatusStore| store.prompt.clone());
    let expanded = use_selector(|store: &StatusStore| store.expanded.clone());
    let dispatch = Dispatch::<StatusStore>::new();

    let on_prompt = {
        let dispatch = dispatch.clone();
        Callback::from(move |event: InputEvent| {
            let value = event.target_unchecked_into::<HtmlInputElement>().value();
            persist_prompt(&value);
            dispatch.reduce_mut(|store| set_prompt(store, value));
        })
    };
    let on_refresh = {
        let api = props.api.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(api) = &api {
                refresh_providers(&api.client, &dispatch, true);
            }
        })
    };
    let loading = providers.is_loading();

    html! {
        <Card class="mb-6">
            <div class="flex flex-wrap items-center justify-between gap-4 mb-4">
                <div class="flex items-center gap-4">
                    <StatusGlyph
                        icon={if loading { StatusIcon::Spinner } else { StatusIcon::Success }}
                        tone={Tone::Success}
                        size={40}
                    />
                    <div>
                        <h2 class="text-xl font-semibold">{"LLM Providers"}</h2>
                        <Chip label={providers.summary()} tone={Tone::Success} />
                    </div>
                </div>
                <div class="flex items-center gap-2">
                    <label class="form-control">
                        <span class="label-text text-xs">{"Custom Prompt"}</span>
                        <input
                            class="input input-bordered input-sm min-w-[300px]"
                            type="text"
                            value={(*prompt).clone()}
                            placeholder="Enter a prompt to test LLM providers..."
                            oninput={on_prompt}
                        />
                    </label>
                    <Button
                        variant={ButtonVariant::Outlined}
                        icon={html! { <IconRefresh size={18} /> }}
                        disabled={loading}
                        onclick={on_refresh}
                    >
                        {"Refresh"}
                    </Button>
                </div>
            </div>
            <div class="grid gap-4 md:grid-cols-2 mb-4">
                <Field label="Endpoint" mono={true}>{"GET /health/llm"}</Field>
                <Field label="Last Updated">{format_last_checked(providers.last_checked)}</Field>
            </div>
            <div class="flex flex-col gap-2">
                { for providers.results.iter().map(|result| {
                    let is_open = expanded.as_deref() == Some(result.provider.as_str());
                    html! {
                        <ProviderRow
                            key={result.provider.clone()}
                            result={result.clone()}
                            expanded={is_open}
                        />
                    }
                }) }
            </div>
            {error_alert(providers.error.as_deref())}
        </Card>
    }
}

#[derive(Properties, PartialEq)]
struct ProviderRowProps {
    result: ProviderResult,
    expanded: bool,
}

#[function_component(ProviderRow)]
fn provider_row(props: &ProviderRowProps) -> Html {
    let result = &props.result;
    let badge = provider_badge(&result.status);
    let on_toggle = {
        let provider = result.provider.clone();
        Callback::from(move |_: MouseEvent| {
            Dispatch::<StatusStore>::new().reduce_mut(|store| toggle_provider(store, &provider));
        })
    };
    let details = props.expanded.then(|| {
        html! {
            <div class="flex flex-col gap-4 px-4 pb-4">
                <div>
                    <p class="text-sm muted mb-1">{"Prompt"}</p>
                    <pre class="surface p-3 font-mono text-sm whitespace-pre-wrap">{result.prompt.clone()}</pre>
                </div>
                <div>
                    <p class="text-sm muted mb-1">{"Response"}</p>
                    <pre class="surface p-3 font-mono text-sm whitespace-pre-wrap max-h-[300px] overflow-auto">
                        {result.output.clone()}
                    </pre>
                </div>
            </div>
        }
    });

    html! {
        <div class="border border-base-300 rounded">
            <button
                type="button"
                class="flex w-full items-center gap-4 p-4 text-left hover:bg-base-200"
                aria-expanded={props.expanded.to_string()}
                onclick={on_toggle}
            >
                <StatusGlyph icon={badge.icon} tone={badge.tone} />
                <div class="flex-1">
                    <p class="font-medium capitalize">{result.provider.clone()}</p>
                    <div class="flex items-center gap-2 mt-1">
                        <Chip label={badge.label} tone={badge.tone} small={true} />
                        {format_elapsed(result.elapsed)
                            .map(|elapsed| html! { <span class="text-xs muted">{elapsed}</span> })
                            .unwrap_or_default()}
                    </div>
                </div>
                <IconExpand class={classes!(props.expanded.then_some("rotate-180"))} />
            </button>
            {details.unwrap_or_default()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FieldProps {
    label: AttrValue,
    #[prop_or_default]
    mono: bool,
    #[prop_or_default]
    children: Children,
}

#[function_component(Field)]
fn field(props: &FieldProps) -> Html {
    html! {
        <div>
            <p class="text-sm muted">{props.label.clone()}</p>
            <p class={classes!("text-sm", props.mono.then_some("font-mono"))}>
                { for props.children.iter() }
            </p>
        </div>
    }
}

fn error_alert(error: Option<&str>) -> Html {
    error
        .map(|message| {
            html! { <Alert title="Error Details">{message.to_string()}</Alert> }
        })
        .unwrap_or_default()
}
