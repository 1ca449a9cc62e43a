//! Host bridge loading state: the gate the workspace waits behind.

use crate::sdk::{FrameContext, HostBridge, HostKind};

use super::cell::StateCell;

#[cfg(test)]
#[path = "sdk_test.rs"]
mod sdk_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SdkStatus {
    #[default]
    Loading,
    Ready,
    /// The host context could not be resolved.
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SdkState {
    pub status: SdkStatus,
    pub context: Option<FrameContext>,
    pub host: Option<HostKind>,
}

impl SdkState {
    pub fn is_loaded(&self) -> bool {
        self.status == SdkStatus::Ready
    }
}

/// Resolve the host context, signal readiness, and open the loading gate.
///
/// A context failure is logged and recorded as [`SdkStatus::Failed`]. A
/// failing `ready` signal is logged only: the context is already usable.
pub async fn initialize<C: StateCell<SdkState>>(cell: &C, host: &dyn HostBridge) {
    let kind = host.kind();
    cell.update_with(|s| {
        s.status = SdkStatus::Loading;
        s.host = Some(kind);
    });

    match host.context().await {
        Ok(context) => {
            if let Err(e) = host.ready() {
                leptos::logging::warn!("host ready signal failed: {e}");
            }
            cell.update_with(|s| {
                s.context = Some(context);
                s.status = SdkStatus::Ready;
            });
        }
        Err(e) => {
            leptos::logging::error!("Error initializing Frame SDK: {e}");
            cell.update_with(|s| s.status = SdkStatus::Failed(e.to_string()));
        }
    }
}
