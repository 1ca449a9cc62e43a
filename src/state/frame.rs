//! Tab flow for designing, previewing, and deploying a frame.
//!
//! Steps run `Design -> Preview -> Deploy`. Preview needs generated code;
//! Deploy is entered only from Preview (or re-entered to retry a failed
//! deployment). Tab selection is navigation only: asking for the Deploy tab
//! from Preview reports [`TabChange::DeployRequested`] and leaves the actual
//! deploy to the caller. Each deployment carries an attempt number so a late
//! result never lands on a newer attempt.

use crate::error::{FlowError, ServiceError};
use crate::services::{CodeArtifact, DeploymentResult};

use super::templates::{self, Template};

#[cfg(test)]
#[path = "frame_test.rs"]
mod frame_test;

/// Which panel the flow is on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Step {
    #[default]
    Design,
    Preview,
    Deploy,
}

impl Step {
    pub fn tab(self) -> Tab {
        match self {
            Self::Design => Tab::Design,
            Self::Preview => Tab::Preview,
            Self::Deploy => Tab::Deploy,
        }
    }
}

/// Tabs shown in the tab bar, one per step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Design,
    Preview,
    Deploy,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Design, Tab::Preview, Tab::Deploy];

    /// Element id of the tab button; its panel is `{value}-panel`.
    pub fn value(self) -> &'static str {
        match self {
            Self::Design => "design",
            Self::Preview => "preview",
            Self::Deploy => "deploy",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Design => "Design",
            Self::Preview => "Preview",
            Self::Deploy => "Deploy",
        }
    }

    pub fn step(self) -> Step {
        match self {
            Self::Design => Step::Design,
            Self::Preview => Step::Preview,
            Self::Deploy => Step::Deploy,
        }
    }
}

/// Outcome of selecting a tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabChange {
    Unchanged,
    Navigated,
    /// The viewer asked for Deploy from Preview; start a deployment.
    DeployRequested,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeployStatus {
    Deploying,
    Succeeded(DeploymentResult),
    Failed(String),
}

/// A started deployment. Hand `attempt` back to [`FrameState::finish_deploy`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeployTicket {
    pub attempt: u64,
    pub artifact: CodeArtifact,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameState {
    pub step: Step,
    pub prompt: String,
    pub artifact: Option<CodeArtifact>,
    pub generating: bool,
    pub generate_error: Option<String>,
    pub deployment: Option<DeployStatus>,
    deploy_attempt: u64,
}

impl FrameState {
    pub fn set_prompt(&mut self, prompt: String) {
        self.prompt = prompt;
    }

    /// Replace the prompt with a template's seed prompt.
    pub fn apply_template(&mut self, id: &str) -> Option<&'static Template> {
        let template = templates::find(id)?;
        self.prompt = template.prompt.to_owned();
        Some(template)
    }

    pub fn can_generate(&self) -> bool {
        !self.generating && !self.prompt.trim().is_empty()
    }

    /// Mark generation as started and return the prompt to generate from.
    ///
    /// # Errors
    ///
    /// `EmptyPrompt` for a blank prompt, `GenerationPending` if a generation
    /// is already running.
    pub fn begin_generate(&mut self) -> Result<String, FlowError> {
        if self.generating {
            return Err(FlowError::GenerationPending);
        }
        if self.prompt.trim().is_empty() {
            return Err(FlowError::EmptyPrompt);
        }
        self.generating = true;
        self.generate_error = None;
        Ok(self.prompt.clone())
    }

    /// Record a generation result. Success moves to Preview and drops any
    /// deployment of earlier code; failure stays on the current step.
    pub fn finish_generate(&mut self, result: Result<CodeArtifact, ServiceError>) {
        self.generating = false;
        match result {
            Ok(artifact) => {
                self.artifact = Some(artifact);
                self.deployment = None;
                self.generate_error = None;
                self.step = Step::Preview;
            }
            Err(e) => self.generate_error = Some(e.to_string()),
        }
    }

    pub fn tab_enabled(&self, tab: Tab) -> bool {
        match tab {
            Tab::Design => true,
            Tab::Preview => self.artifact.is_some(),
            Tab::Deploy => matches!(self.step, Step::Preview | Step::Deploy),
        }
    }

    pub fn select_tab(&mut self, tab: Tab) -> TabChange {
        match tab {
            Tab::Design | Tab::Preview if self.step == tab.step() => TabChange::Unchanged,
            Tab::Design => {
                self.step = Step::Design;
                TabChange::Navigated
            }
            Tab::Preview if self.artifact.is_some() => {
                self.step = Step::Preview;
                TabChange::Navigated
            }
            Tab::Preview => TabChange::Unchanged,
            Tab::Deploy if self.step == Step::Preview && self.deploying() => {
                self.step = Step::Deploy;
                TabChange::Navigated
            }
            Tab::Deploy if self.step == Step::Preview => TabChange::DeployRequested,
            Tab::Deploy => TabChange::Unchanged,
        }
    }

    /// Start deploying the current artifact.
    ///
    /// Allowed from Preview, or from Deploy after a failed attempt.
    ///
    /// # Errors
    ///
    /// `NoArtifact` without generated code, `DeploymentPending` while a
    /// deployment runs, `NotInPreview` from any other step.
    pub fn begin_deploy(&mut self) -> Result<DeployTicket, FlowError> {
        let Some(artifact) = self.artifact.clone() else {
            return Err(FlowError::NoArtifact);
        };
        match (&self.step, &self.deployment) {
            (_, Some(DeployStatus::Deploying)) => return Err(FlowError::DeploymentPending),
            (Step::Preview, _) | (Step::Deploy, Some(DeployStatus::Failed(_))) => {}
            _ => return Err(FlowError::NotInPreview),
        }
        self.step = Step::Deploy;
        self.deployment = Some(DeployStatus::Deploying);
        self.deploy_attempt += 1;
        Ok(DeployTicket { attempt: self.deploy_attempt, artifact })
    }

    /// Record the result of deployment `attempt`. Ignored unless that attempt
    /// is the one currently running.
    pub fn finish_deploy(&mut self, attempt: u64, result: Result<DeploymentResult, ServiceError>) -> bool {
        if !self.deploying() || attempt != self.deploy_attempt {
            return false;
        }
        self.deployment = Some(match result {
            Ok(deployed) => DeployStatus::Succeeded(deployed),
            Err(e) => DeployStatus::Failed(e.to_string()),
        });
        true
    }

    pub fn deploying(&self) -> bool {
        self.deployment == Some(DeployStatus::Deploying)
    }

    pub fn code(&self) -> Option<&str> {
        self.artifact.as_ref().map(|a| a.source.as_str())
    }

    pub fn deploy_url(&self) -> Option<&str> {
        match &self.deployment {
            Some(DeployStatus::Succeeded(deployed)) => Some(deployed.url.as_str()),
            _ => None,
        }
    }
}
