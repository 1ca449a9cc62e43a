//! The loaded widget: header, tabs, active panel, footer.
//!
//! DESIGN
//! ======
//! This is the only component that touches flow state and capabilities.
//! Tab clicks go through `FrameState::select_tab`, which never starts work
//! itself; a `DeployRequested` outcome is forwarded to the explicit deploy
//! action, the same one the preview panel's button and the retry button use.

use leptos::prelude::*;

use crate::app::ServicesHandle;
use crate::components::deploy_tab::DeployTab;
use crate::components::design_tab::DesignTab;
use crate::components::preview_tab::PreviewTab;
use crate::components::tab_bar::TabBar;
use crate::config::FrameConfig;
use crate::state::frame::{FrameState, Step, Tab, TabChange};
use crate::util::clipboard;

#[component]
pub fn FrameWorkspace() -> impl IntoView {
    let config = expect_context::<FrameConfig>();
    let frame = expect_context::<RwSignal<FrameState>>();
    let services = expect_context::<ServicesHandle>();

    let step = Memo::new(move |_| frame.with(|f| f.step));
    let enabled = Memo::new(move |_| frame.with(|f| Tab::ALL.map(|tab| f.tab_enabled(tab))));

    let trigger_generate = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let generator = services.with_value(|s| s.generator.clone());
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::state::controller::generate(&frame, generator.as_ref()).await {
                    leptos::logging::warn!("generate ignored: {e}");
                }
            });
        }
    });

    let trigger_deploy = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let deployer = services.with_value(|s| s.deployer.clone());
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::state::controller::deploy(&frame, deployer.as_ref()).await {
                    leptos::logging::warn!("deploy ignored: {e}");
                }
            });
        }
    });

    let select_tab = Callback::new(move |tab: Tab| {
        let change = frame.try_update(|f| f.select_tab(tab)).unwrap_or(TabChange::Unchanged);
        if change == TabChange::DeployRequested {
            trigger_deploy.run(());
        }
    });

    let on_prompt = Callback::new(move |text: String| frame.update(|f| f.set_prompt(text)));
    let on_template = Callback::new(move |id: &'static str| {
        frame.update(|f| {
            f.apply_template(id);
        });
    });

    let on_copy = Callback::new(move |url: String| {
        if !clipboard::copy_text(&url) {
            leptos::logging::warn!("clipboard unavailable");
        }
    });
    let on_open = Callback::new(move |url: String| {
        if let Err(e) = services.with_value(|s| s.host.open_url(&url)) {
            leptos::logging::warn!("{e}");
        }
    });
    let on_close = move |_| {
        if let Err(e) = services.with_value(|s| s.host.close()) {
            leptos::logging::warn!("{e}");
        }
    };

    let prompt = Signal::derive(move || frame.with(|f| f.prompt.clone()));
    let generating = Signal::derive(move || frame.with(|f| f.generating));
    let generate_error = Signal::derive(move || frame.with(|f| f.generate_error.clone()));
    let code = Signal::derive(move || frame.with(|f| f.code().unwrap_or_default().to_owned()));
    let deployment = Signal::derive(move || frame.with(|f| f.deployment.clone()));
    let runtime_name = config.runtime_name.clone();

    view! {
        <div class="frame-shell">
            <div class="frame-card">
                <header class="frame-card__header">
                    <div>
                        <h2 class="frame-card__title">{config.title.clone()}</h2>
                        <p class="frame-card__description">{config.description.clone()}</p>
                    </div>
                    <button class="frame-card__close" title="Close" aria-label="Close" on:click=on_close>
                        "✕"
                    </button>
                </header>

                <TabBar step=step enabled=enabled on_select=select_tab/>

                <div
                    class="frame-card__content"
                    role="tabpanel"
                    id=move || format!("{}-panel", step.get().tab().value())
                    aria-labelledby=move || step.get().tab().value()
                >
                    {move || match step.get() {
                        Step::Design => view! {
                            <DesignTab
                                prompt=prompt
                                generating=generating
                                error=generate_error
                                on_prompt=on_prompt
                                on_template=on_template
                                on_generate=trigger_generate
                            />
                        }
                        .into_any(),
                        Step::Preview => view! {
                            <PreviewTab code=code runtime_name=runtime_name.clone() on_deploy=trigger_deploy/>
                        }
                        .into_any(),
                        Step::Deploy => view! {
                            <DeployTab
                                status=deployment
                                runtime_name=runtime_name.clone()
                                on_copy=on_copy
                                on_open=on_open
                                on_retry=trigger_deploy
                            />
                        }
                        .into_any(),
                    }}
                </div>

                <footer class="frame-card__footer">
                    <span>{format!("Powered by {}", config.runtime_name)}</span>
                    <span>{config.version.clone()}</span>
                </footer>
            </div>
        </div>
    }
}
