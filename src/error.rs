//! Error types for the host bridge, the injected capabilities, and the tab flow.
//!
//! ERROR HANDLING
//! ==============
//! Every failure the widget can observe is a typed value. Host and capability
//! errors are rendered into view state as strings; flow errors describe an
//! action the current state does not allow and are logged, never shown.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced by the host bridge.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SdkError {
    /// The host context promise rejected or could not be awaited.
    #[error("host context unavailable: {0}")]
    ContextUnavailable(String),

    /// The host context resolved to a value that is not a frame context.
    #[error("host context malformed: {0}")]
    ContextMalformed(String),

    /// A host action entry point is missing or threw.
    #[error("host action `{action}` failed: {message}")]
    Action { action: &'static str, message: String },
}

/// Errors produced by the generation and deployment capabilities.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// The prompt handed to the generator was blank.
    #[error("prompt is empty")]
    EmptyPrompt,

    /// The artifact handed to the deployer has no source.
    #[error("artifact has no source to deploy")]
    EmptyArtifact,

    /// Code generation failed upstream.
    #[error("generation failed: {0}")]
    Generation(String),

    /// Deployment failed upstream.
    #[error("deployment failed: {0}")]
    Deployment(String),
}

/// A user action that the current flow state does not permit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    #[error("prompt is empty")]
    EmptyPrompt,

    #[error("generation already in progress")]
    GenerationPending,

    #[error("no generated code to deploy")]
    NoArtifact,

    #[error("deploy is only available from the preview step")]
    NotInPreview,

    #[error("deployment already in progress")]
    DeploymentPending,

    /// The view owning the state was disposed before the action started.
    #[error("view state is no longer available")]
    Detached,
}
