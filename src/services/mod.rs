//! Capabilities the tab flow depends on: code generation and deployment.
//!
//! DESIGN
//! ======
//! The view controller only sees the [`CodeGenerator`] and [`Deployer`]
//! traits. The simulated implementations in [`simulated`] wait a fixed delay
//! and return canned output; a networked implementation slots in behind the
//! same traits without touching the flow.

pub mod simulated;

use std::rc::Rc;

use async_trait::async_trait;

use crate::config::FrameConfig;
use crate::error::ServiceError;
use crate::sdk::HostBridge;

pub use simulated::{PlaceholderGenerator, SimulatedDeployer};

/// Frame source produced from a prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeArtifact {
    /// The prompt exactly as submitted.
    pub prompt: String,
    pub source: String,
}

/// Where a deployed artifact is reachable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeploymentResult {
    pub url: String,
}

#[async_trait(?Send)]
pub trait CodeGenerator {
    async fn generate(&self, prompt: &str) -> Result<CodeArtifact, ServiceError>;
}

#[async_trait(?Send)]
pub trait Deployer {
    async fn deploy(&self, artifact: &CodeArtifact) -> Result<DeploymentResult, ServiceError>;
}

/// Everything the widget injects into its views.
#[derive(Clone)]
pub struct Services {
    pub host: Rc<dyn HostBridge>,
    pub generator: Rc<dyn CodeGenerator>,
    pub deployer: Rc<dyn Deployer>,
}

impl Services {
    /// Wire the simulated generator and deployer around the given host.
    pub fn simulated(config: &FrameConfig, host: Rc<dyn HostBridge>) -> Self {
        Self {
            host,
            generator: Rc::new(PlaceholderGenerator::new(config.generate_delay)),
            deployer: Rc::new(SimulatedDeployer::new(config.deploy_delay, config.deploy_url.clone())),
        }
    }
}
