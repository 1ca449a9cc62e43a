//! Loading gate in front of the workspace.

use leptos::prelude::*;

use crate::components::workspace::FrameWorkspace;
use crate::state::sdk::{SdkState, SdkStatus};

/// Shows a loading line until the host bridge resolves, an error if it
/// fails, and the workspace once ready.
#[component]
pub fn FrameCard() -> impl IntoView {
    let sdk = expect_context::<RwSignal<SdkState>>();
    let status = Memo::new(move |_| sdk.with(|s| s.status.clone()));

    move || match status.get() {
        SdkStatus::Loading => view! { <div class="frame-gate">"Loading..."</div> }.into_any(),
        SdkStatus::Failed(message) => view! {
            <div class="frame-gate frame-gate--error" role="alert">
                <p>"Could not connect to the frame host."</p>
                <p class="frame-gate__detail">{message}</p>
            </div>
        }
        .into_any(),
        SdkStatus::Ready => view! { <FrameWorkspace/> }.into_any(),
    }
}
