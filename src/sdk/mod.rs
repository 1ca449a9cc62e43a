//! Host bridge: access to the viewer/session context and host actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! When the widget runs inside a Farcaster client, the host injects a
//! `frameContext` object on `window`. Everything else in the crate talks to
//! that object only through the [`HostBridge`] trait, so a [`MockHost`] can
//! stand in during development, server rendering, and tests.

pub mod context;
pub mod mock;
#[cfg(feature = "hydrate")]
pub mod window;

use std::rc::Rc;

use async_trait::async_trait;

use crate::error::SdkError;

pub use context::{CastId, FrameContext};
pub use mock::MockHost;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

/// Where a bridge's context and actions come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostKind {
    /// A real host-injected bridge.
    Host,
    /// The in-memory stand-in used outside a host.
    Mock,
}

/// Host-provided context and actions.
#[async_trait(?Send)]
pub trait HostBridge {
    /// Resolve the viewer/session context for this load.
    async fn context(&self) -> Result<FrameContext, SdkError>;

    /// Tell the host the widget has finished loading.
    fn ready(&self) -> Result<(), SdkError>;

    /// Ask the host to dismiss the widget.
    fn close(&self) -> Result<(), SdkError>;

    /// Ask the host to open an external URL.
    fn open_url(&self, url: &str) -> Result<(), SdkError>;

    fn kind(&self) -> HostKind;
}

/// Pick the host bridge for the current environment.
///
/// Returns the injected `window.frameContext` bridge when present, and a
/// [`MockHost`] otherwise. Outside the browser build this is always the mock.
pub fn detect_host() -> Rc<dyn HostBridge> {
    #[cfg(feature = "hydrate")]
    {
        if let Some(host) = window::WindowHost::detect() {
            leptos::logging::log!("frame host detected");
            return Rc::new(host);
        }
    }
    Rc::new(MockHost::new())
}
