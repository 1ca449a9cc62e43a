//! Deployment progress, result URL, and retry.

use leptos::prelude::*;

use crate::state::frame::DeployStatus;

#[component]
pub fn DeployTab(
    #[prop(into)] status: Signal<Option<DeployStatus>>,
    runtime_name: String,
    on_copy: Callback<String>,
    on_open: Callback<String>,
    on_retry: Callback<()>,
) -> impl IntoView {
    let copied = RwSignal::new(false);

    move || match status.get() {
        None | Some(DeployStatus::Deploying) => view! {
            <div class="deploy-tab deploy-tab--pending">
                <div class="spinner" aria-hidden="true"></div>
                <p>{format!("Deploying your frame to {runtime_name}...")}</p>
                <p class="deploy-tab__hint">"This may take a minute"</p>
            </div>
        }
        .into_any(),
        Some(DeployStatus::Succeeded(deployed)) => {
            let url = deployed.url;
            let copy_url = url.clone();
            let open_url = url.clone();
            view! {
                <div class="deploy-tab deploy-tab--success">
                    <div class="deploy-tab__badge deploy-tab__badge--ok" aria-hidden="true">"✓"</div>
                    <h3>"Frame Deployed Successfully!"</h3>
                    <p>"Your frame is now live at:"</p>
                    <div class="deploy-tab__url-row">
                        <input class="deploy-tab__url" type="text" readonly=true prop:value=url/>
                        <button
                            class="btn btn--outline btn--small"
                            on:click=move |_| {
                                on_copy.run(copy_url.clone());
                                copied.set(true);
                            }
                        >
                            {move || if copied.get() { "Copied" } else { "Copy" }}
                        </button>
                        <button class="btn btn--outline btn--small" on:click=move |_| on_open.run(open_url.clone())>
                            "Open"
                        </button>
                    </div>
                </div>
            }
            .into_any()
        }
        Some(DeployStatus::Failed(message)) => view! {
            <div class="deploy-tab deploy-tab--failed" role="alert">
                <div class="deploy-tab__badge deploy-tab__badge--error" aria-hidden="true">"✕"</div>
                <h3>"Deployment Failed"</h3>
                <p>"There was an error deploying your frame. Please try again."</p>
                <p class="deploy-tab__hint">{message}</p>
                <button class="btn btn--outline" on:click=move |_| on_retry.run(())>
                    "Try Again"
                </button>
            </div>
        }
        .into_any(),
    }
}
