//! Async flow around the injected capabilities.
//!
//! Each operation takes its state through a [`StateCell`] and releases the
//! borrow while awaiting, so views stay responsive and a view disposed
//! mid-operation simply drops the completion.

use crate::error::FlowError;
use crate::services::{CodeGenerator, Deployer};

use super::cell::StateCell;
use super::frame::FrameState;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Generate code from the current prompt and move to Preview on success.
///
/// # Errors
///
/// Returns a [`FlowError`] if the current state does not allow generation.
/// Capability failures are recorded in the state, not returned.
pub async fn generate<C: StateCell<FrameState>>(cell: &C, generator: &dyn CodeGenerator) -> Result<(), FlowError> {
    let prompt = cell.update_with(FrameState::begin_generate).ok_or(FlowError::Detached)??;

    let result = generator.generate(&prompt).await;
    if let Err(e) = &result {
        leptos::logging::warn!("frame generation failed: {e}");
    }
    if cell.update_with(|s| s.finish_generate(result)).is_none() {
        leptos::logging::log!("generation finished after view was disposed");
    }
    Ok(())
}

/// Deploy the current artifact. Used both for the first deploy from Preview
/// and for retrying a failed deployment.
///
/// # Errors
///
/// Returns a [`FlowError`] if the current state does not allow deploying.
/// Capability failures are recorded as [`super::frame::DeployStatus::Failed`].
pub async fn deploy<C: StateCell<FrameState>>(cell: &C, deployer: &dyn Deployer) -> Result<(), FlowError> {
    let ticket = cell.update_with(FrameState::begin_deploy).ok_or(FlowError::Detached)??;

    let result = deployer.deploy(&ticket.artifact).await;
    match &result {
        Ok(deployed) => leptos::logging::log!("frame deployed to {}", deployed.url),
        Err(e) => leptos::logging::warn!("frame deployment failed: {e}"),
    }
    match cell.update_with(|s| s.finish_deploy(ticket.attempt, result)) {
        None => leptos::logging::log!("deployment finished after view was disposed"),
        Some(false) => leptos::logging::log!("dropping result of superseded deployment #{}", ticket.attempt),
        Some(true) => {}
    }
    Ok(())
}
