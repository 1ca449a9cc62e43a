//! Generated source and the deploy action.

use leptos::prelude::*;

#[component]
pub fn PreviewTab(#[prop(into)] code: Signal<String>, runtime_name: String, on_deploy: Callback<()>) -> impl IntoView {
    view! {
        <div class="preview-tab">
            <div class="preview-tab__code">
                <pre>{move || code.get()}</pre>
            </div>

            <div class="preview-tab__frame">
                <div class="preview-tab__frame-title">"Frame Preview"</div>
                <div class="preview-tab__frame-body">
                    <span>"Preview will appear here"</span>
                </div>
            </div>

            <button class="btn btn--primary btn--block" on:click=move |_| on_deploy.run(())>
                {format!("Deploy to {runtime_name}")}
            </button>
        </div>
    }
}
