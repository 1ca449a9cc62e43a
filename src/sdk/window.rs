//! Bridge to the host-injected `window.frameContext` object.
//!
//! The host exposes `context` (a promise of the frame context) and
//! `actions.{ready, close, openUrl}`. Lookups go through `Reflect` since the
//! object has no typed bindings.

use async_trait::async_trait;
use js_sys::{Function, JSON, Promise, Reflect};
use wasm_bindgen::{JsCast as _, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::{FrameContext, HostBridge, HostKind};
use crate::error::SdkError;

const GLOBAL_KEY: &str = "frameContext";

pub struct WindowHost {
    bridge: JsValue,
}

impl WindowHost {
    /// Returns the host bridge if the host injected one on `window`.
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let key = JsValue::from_str(GLOBAL_KEY);
        if !Reflect::has(&window, &key).unwrap_or(false) {
            return None;
        }
        let bridge = Reflect::get(&window, &key).ok()?;
        if bridge.is_undefined() || bridge.is_null() {
            return None;
        }
        Some(Self { bridge })
    }

    fn call_action(&self, action: &'static str, arg: Option<&JsValue>) -> Result<(), SdkError> {
        let fail = |message: String| SdkError::Action { action, message };

        let actions = Reflect::get(&self.bridge, &JsValue::from_str("actions")).map_err(|e| fail(describe(&e)))?;
        let func = Reflect::get(&actions, &JsValue::from_str(action))
            .map_err(|e| fail(describe(&e)))?
            .dyn_into::<Function>()
            .map_err(|_| fail("not a function".to_owned()))?;

        let result = match arg {
            Some(arg) => func.call1(&actions, arg),
            None => func.call0(&actions),
        };
        result.map(|_| ()).map_err(|e| fail(describe(&e)))
    }
}

#[async_trait(?Send)]
impl HostBridge for WindowHost {
    async fn context(&self) -> Result<FrameContext, SdkError> {
        let pending = Reflect::get(&self.bridge, &JsValue::from_str("context"))
            .map_err(|e| SdkError::ContextUnavailable(describe(&e)))?;
        let value = JsFuture::from(Promise::resolve(&pending))
            .await
            .map_err(|e| SdkError::ContextUnavailable(describe(&e)))?;
        // `stringify` yields `undefined`, not a string, for an empty resolve.
        let json = JSON::stringify(&value).map_err(|e| SdkError::ContextMalformed(describe(&e)))?.as_string();
        FrameContext::from_host_json(json.as_deref()).map_err(SdkError::ContextMalformed)
    }

    fn ready(&self) -> Result<(), SdkError> {
        self.call_action("ready", None)
    }

    fn close(&self) -> Result<(), SdkError> {
        self.call_action("close", None)
    }

    fn open_url(&self, url: &str) -> Result<(), SdkError> {
        self.call_action("openUrl", Some(&JsValue::from_str(url)))
    }

    fn kind(&self) -> HostKind {
        HostKind::Host
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
