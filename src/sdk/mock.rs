//! In-memory host used when no host bridge is injected.

use async_trait::async_trait;

use super::{FrameContext, HostBridge, HostKind};
use crate::error::SdkError;

#[cfg(test)]
#[path = "mock_test.rs"]
mod mock_test;

pub const MOCK_FID: u64 = 1;
pub const MOCK_URL: &str = "https://example.com/frame";
pub const MOCK_NETWORK: u32 = 1;

/// Placeholder host: resolves a fixed context immediately, and its actions
/// only log.
#[derive(Clone, Debug, Default)]
pub struct MockHost;

impl MockHost {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl HostBridge for MockHost {
    async fn context(&self) -> Result<FrameContext, SdkError> {
        Ok(FrameContext {
            fid: Some(MOCK_FID),
            url: Some(MOCK_URL.to_owned()),
            timestamp: Some(now_millis()),
            network: Some(MOCK_NETWORK),
            ..FrameContext::default()
        })
    }

    fn ready(&self) -> Result<(), SdkError> {
        leptos::logging::log!("Frame ready");
        Ok(())
    }

    fn close(&self) -> Result<(), SdkError> {
        leptos::logging::log!("Frame closed");
        Ok(())
    }

    fn open_url(&self, url: &str) -> Result<(), SdkError> {
        leptos::logging::log!("Opening URL: {url}");
        Ok(())
    }

    fn kind(&self) -> HostKind {
        HostKind::Mock
    }
}

fn now_millis() -> i64 {
    let nanos = time::OffsetDateTime::now_utc().unix_timestamp_nanos();
    i64::try_from(nanos / 1_000_000).unwrap_or(i64::MAX)
}
