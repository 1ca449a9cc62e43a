//! Design / Preview / Deploy tab strip.

use leptos::prelude::*;

use crate::state::frame::{Step, Tab};

#[component]
pub fn TabBar(
    #[prop(into)] step: Signal<Step>,
    /// Enabled flags in `Tab::ALL` order.
    #[prop(into)]
    enabled: Signal<[bool; 3]>,
    on_select: Callback<Tab>,
) -> impl IntoView {
    view! {
        <div class="tab-bar" role="tablist">
            {Tab::ALL
                .into_iter()
                .enumerate()
                .map(|(index, tab)| {
                    let active = move || step.get() == tab.step();
                    view! {
                        <button
                            class="tab-bar__tab"
                            class:tab-bar__tab--active=active
                            role="tab"
                            id=tab.value()
                            aria-controls=format!("{}-panel", tab.value())
                            aria-selected=move || if active() { "true" } else { "false" }
                            disabled=move || !enabled.get()[index]
                            on:click=move |_| on_select.run(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
