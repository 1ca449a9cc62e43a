//! Root application component with context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::frame_card::FrameCard;
use crate::config::FrameConfig;
use crate::sdk::detect_host;
use crate::services::Services;
use crate::state::frame::FrameState;
use crate::state::sdk::SdkState;

/// Capabilities handed to components through context. Local storage because
/// the bridge and capabilities hold browser handles.
pub type ServicesHandle = StoredValue<Services, LocalStorage>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides config, loading state, flow state, and injected services, then
/// starts host initialization in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = FrameConfig::from_build_env().unwrap_or_else(|e| {
        leptos::logging::warn!("invalid frame config, using defaults: {e}");
        FrameConfig::default()
    });
    let sdk = RwSignal::new(SdkState::default());
    let frame = RwSignal::new(FrameState::default());
    let services: ServicesHandle = StoredValue::new_local(Services::simulated(&config, detect_host()));

    provide_context(config.clone());
    provide_context(sdk);
    provide_context(frame);
    provide_context(services);

    #[cfg(feature = "hydrate")]
    {
        let host = services.with_value(|s| s.host.clone());
        leptos::task::spawn_local(async move {
            crate::state::sdk::initialize(&sdk, host.as_ref()).await;
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/vibes-frame.css"/>
        <Title text=config.title/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=FrameCard/>
            </Routes>
        </Router>
    }
}
