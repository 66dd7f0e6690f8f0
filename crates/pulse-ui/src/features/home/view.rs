//! Home page view.

use crate::components::button::Button;
use crate::components::card::Card;
use crate::core::ui::{ButtonVariant, Tone};
use yew::prelude::*;

#[function_component(HomePage)]
pub(crate) fn home_page() -> Html {
    let count = use_state(|| 0_i64);
    let adjust = |delta: Option<i64>| {
        let count = count.clone();
        Callback::from(move |_: MouseEvent| {
            count.set(delta.map_or(0, |delta| *count + delta));
        })
    };

    html! {
        <section class="page">
            <h1 class="text-3xl font-bold mb-2">{"Marc Streeter Dev Frontend"}</h1>
            <p class="muted mb-6">{"Shared components and a live view of the backend."}</p>
            <div class="grid gap-6 md:grid-cols-2">
                <Card title="Button Component" subtitle="Variants and states">
                    <div class="flex flex-wrap gap-2">
                        <Button variant={ButtonVariant::Contained}>{"Primary"}</Button>
                        <Button variant={ButtonVariant::Outlined} tone={Tone::Secondary}>{"Secondary"}</Button>
                        <Button variant={ButtonVariant::Contained} loading={true}>{"Loading"}</Button>
                        <Button variant={ButtonVariant::Contained} disabled={true}>{"Disabled"}</Button>
                    </div>
                </Card>
                <Card
                    title="Counter Example"
                    subtitle="Local state"
                    actions={html! {
                        <>
                            <Button variant={ButtonVariant::Contained} onclick={adjust(Some(1))}>{"Increment"}</Button>
                            <Button variant={ButtonVariant::Outlined} onclick={adjust(Some(-1))}>{"Decrement"}</Button>
                            <Button tone={Tone::Neutral} onclick={adjust(None)}>{"Reset"}</Button>
                        </>
                    }}
                >
                    <p class="text-4xl font-semibold text-center">{*count}</p>
                </Card>
            </div>
        </section>
    }
}
