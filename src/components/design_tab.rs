//! Template shortcuts, prompt editor, and the generate action.

use leptos::prelude::*;

use crate::state::templates::TEMPLATES;

#[component]
pub fn DesignTab(
    #[prop(into)] prompt: Signal<String>,
    #[prop(into)] generating: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    on_prompt: Callback<String>,
    on_template: Callback<&'static str>,
    on_generate: Callback<()>,
) -> impl IntoView {
    // Highlight only; the prompt itself lives in flow state.
    let selected = RwSignal::new(None::<&'static str>);
    let blocked = move || generating.get() || prompt.with(|p| p.trim().is_empty());

    view! {
        <div class="design-tab">
            <div class="design-tab__templates">
                {TEMPLATES
                    .into_iter()
                    .map(|template| {
                        let id = template.id;
                        view! {
                            <button
                                class="template-button"
                                class:template-button--selected=move || selected.get() == Some(id)
                                on:click=move |_| {
                                    selected.set(Some(id));
                                    on_template.run(id);
                                }
                            >
                                <span class="template-button__name">{template.name}</span>
                                <span class="template-button__description">{template.description}</span>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <label class="design-tab__label" for="prompt">"Describe your frame"</label>
            <textarea
                id="prompt"
                class="design-tab__prompt"
                placeholder="Describe what you want your frame to do..."
                prop:value=move || prompt.get()
                on:input=move |ev| on_prompt.run(event_target_value(&ev))
            ></textarea>

            <Show when=move || error.with(Option::is_some)>
                <p class="design-tab__error" role="alert">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <button class="btn btn--primary btn--block" disabled=blocked on:click=move |_| on_generate.run(())>
                {move || if generating.get() { "Generating..." } else { "Generate Frame" }}
            </button>
        </div>
    }
}
