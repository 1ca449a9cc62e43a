//! Delay-then-canned-result stand-ins for generation and deployment.

use std::time::Duration;

use async_trait::async_trait;

use super::{CodeArtifact, CodeGenerator, DeploymentResult, Deployer};
use crate::error::ServiceError;
use crate::util::timer;

#[cfg(test)]
#[path = "simulated_test.rs"]
mod simulated_test;

/// Produces a fixed frames.js component that records the prompt it came from.
#[derive(Clone, Debug)]
pub struct PlaceholderGenerator {
    delay: Duration,
}

impl PlaceholderGenerator {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait(?Send)]
impl CodeGenerator for PlaceholderGenerator {
    async fn generate(&self, prompt: &str) -> Result<CodeArtifact, ServiceError> {
        if prompt.trim().is_empty() {
            return Err(ServiceError::EmptyPrompt);
        }
        timer::sleep(self.delay).await;
        Ok(CodeArtifact { prompt: prompt.to_owned(), source: placeholder_source(prompt) })
    }
}

/// Always succeeds with the same URL.
#[derive(Clone, Debug)]
pub struct SimulatedDeployer {
    delay: Duration,
    url: String,
}

impl SimulatedDeployer {
    #[must_use]
    pub fn new(delay: Duration, url: String) -> Self {
        Self { delay, url }
    }
}

#[async_trait(?Send)]
impl Deployer for SimulatedDeployer {
    async fn deploy(&self, artifact: &CodeArtifact) -> Result<DeploymentResult, ServiceError> {
        if artifact.source.trim().is_empty() {
            return Err(ServiceError::EmptyArtifact);
        }
        timer::sleep(self.delay).await;
        Ok(DeploymentResult { url: self.url.clone() })
    }
}

fn placeholder_source(prompt: &str) -> String {
    format!(
        r#"
import {{ Button, Card, Text }} from "@frames.js/render";

// Generated from prompt: "{prompt}"
export default function MyFrame() {{
  return (
    <Card>
      <Text>This is your custom frame</Text>
      <Button>Option 1</Button>
      <Button>Option 2</Button>
    </Card>
  );
}}"#
    )
}
