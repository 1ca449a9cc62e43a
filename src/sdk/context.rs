//! Viewer/session context delivered by the host.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

/// Context for a single widget load. Every field is optional because hosts
/// only populate what applies to the triggering interaction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameContext {
    /// Viewer identifier.
    #[serde(default)]
    pub fid: Option<u64>,
    /// Originating URL.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub message_hash: Option<String>,
    /// Milliseconds since the Unix epoch.
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub network: Option<u32>,
    #[serde(default)]
    pub button_index: Option<u32>,
    #[serde(default)]
    pub input_text: Option<String>,
    #[serde(default)]
    pub cast_id: Option<CastId>,
}

/// Identifies the cast the widget was opened from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastId {
    pub fid: u64,
    pub hash: String,
}

impl FrameContext {
    /// Decode a context from the JSON the host resolves its promise with.
    ///
    /// # Errors
    ///
    /// Returns the decoder message if the JSON is not a frame context.
    pub fn from_json(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw).map_err(|e| e.to_string())
    }

    /// Decode whatever the host resolved with. A host that resolves with
    /// nothing (`undefined` or `null`) yields an empty context.
    ///
    /// # Errors
    ///
    /// Same as [`FrameContext::from_json`].
    pub fn from_host_json(raw: Option<&str>) -> Result<Self, String> {
        match raw {
            None | Some("null") => Ok(Self::default()),
            Some(raw) => Self::from_json(raw),
        }
    }
}
