use super::*;

fn artifact(prompt: &str) -> CodeArtifact {
    CodeArtifact { prompt: prompt.to_owned(), source: format!("// Generated from prompt: \"{prompt}\"") }
}

fn previewing() -> FrameState {
    let mut state = FrameState::default();
    state.set_prompt("poll".to_owned());
    state.begin_generate().unwrap();
    state.finish_generate(Ok(artifact("poll")));
    state
}

fn deployed(url: &str) -> DeploymentResult {
    DeploymentResult { url: url.to_owned() }
}

// =============================================================
// Defaults and tabs
// =============================================================

#[test]
fn default_state_is_empty_design() {
    let state = FrameState::default();
    assert_eq!(state.step, Step::Design);
    assert!(state.prompt.is_empty());
    assert!(state.artifact.is_none());
    assert!(!state.generating);
    assert!(state.deployment.is_none());
}

#[test]
fn tab_values_are_distinct() {
    let values = Tab::ALL.map(Tab::value);
    assert_eq!(values, ["design", "preview", "deploy"]);
    for tab in Tab::ALL {
        assert_eq!(tab.step().tab(), tab);
    }
}

#[test]
fn tabs_enabled_follow_progress() {
    let state = FrameState::default();
    assert!(state.tab_enabled(Tab::Design));
    assert!(!state.tab_enabled(Tab::Preview));
    assert!(!state.tab_enabled(Tab::Deploy));

    let state = previewing();
    assert!(state.tab_enabled(Tab::Preview));
    assert!(state.tab_enabled(Tab::Deploy));
}

// =============================================================
// Templates and prompt
// =============================================================

#[test]
fn apply_template_fills_prompt() {
    let mut state = FrameState::default();
    let template = state.apply_template("meme").unwrap();
    assert_eq!(template.name, "Meme Generator");
    assert_eq!(state.prompt, "Create a meme generator with customizable text");
}

#[test]
fn apply_unknown_template_keeps_prompt() {
    let mut state = FrameState::default();
    state.set_prompt("mine".to_owned());
    assert!(state.apply_template("nope").is_none());
    assert_eq!(state.prompt, "mine");
}

// =============================================================
// Generation
// =============================================================

#[test]
fn begin_generate_rejects_blank_prompt_without_transition() {
    for prompt in ["", "   ", "\n\t"] {
        let mut state = FrameState::default();
        state.set_prompt(prompt.to_owned());
        assert!(!state.can_generate());
        assert_eq!(state.begin_generate(), Err(FlowError::EmptyPrompt));
        assert!(!state.generating);
        assert_eq!(state.step, Step::Design);
    }
}

#[test]
fn begin_generate_returns_literal_prompt() {
    let mut state = FrameState::default();
    state.set_prompt("  spaced prompt ".to_owned());
    assert_eq!(state.begin_generate(), Ok("  spaced prompt ".to_owned()));
    assert!(state.generating);
    assert!(!state.can_generate());
}

#[test]
fn begin_generate_twice_is_rejected() {
    let mut state = FrameState::default();
    state.set_prompt("quiz".to_owned());
    state.begin_generate().unwrap();
    assert_eq!(state.begin_generate(), Err(FlowError::GenerationPending));
}

#[test]
fn finish_generate_success_moves_to_preview() {
    let state = previewing();
    assert_eq!(state.step, Step::Preview);
    assert!(!state.generating);
    assert!(state.code().unwrap().contains("poll"));
}

#[test]
fn finish_generate_failure_stays_on_design() {
    let mut state = FrameState::default();
    state.set_prompt("quiz".to_owned());
    state.begin_generate().unwrap();
    state.finish_generate(Err(ServiceError::Generation("model offline".to_owned())));
    assert_eq!(state.step, Step::Design);
    assert!(!state.generating);
    assert!(state.artifact.is_none());
    assert_eq!(state.generate_error.as_deref(), Some("generation failed: model offline"));
}

#[test]
fn regenerating_clears_previous_deployment() {
    let mut state = previewing();
    let ticket = state.begin_deploy().unwrap();
    state.finish_deploy(ticket.attempt, Ok(deployed("https://a.test")));
    state.select_tab(Tab::Design);
    state.begin_generate().unwrap();
    state.finish_generate(Ok(artifact("poll v2")));
    assert!(state.deployment.is_none());
    assert_eq!(state.step, Step::Preview);
}

// =============================================================
// Tab selection
// =============================================================

#[test]
fn select_preview_without_code_is_noop() {
    let mut state = FrameState::default();
    let before = state.clone();
    assert_eq!(state.select_tab(Tab::Preview), TabChange::Unchanged);
    assert_eq!(state, before);
}

#[test]
fn select_deploy_from_design_is_noop() {
    let mut state = previewing();
    state.select_tab(Tab::Design);
    let before = state.clone();
    assert_eq!(state.select_tab(Tab::Deploy), TabChange::Unchanged);
    assert_eq!(state, before);
}

#[test]
fn select_deploy_from_preview_requests_deploy_without_mutation() {
    let mut state = previewing();
    let before = state.clone();
    assert_eq!(state.select_tab(Tab::Deploy), TabChange::DeployRequested);
    assert_eq!(state, before);
}

#[test]
fn select_deploy_while_deploying_navigates_back_to_panel() {
    let mut state = previewing();
    state.begin_deploy().unwrap();
    assert_eq!(state.select_tab(Tab::Design), TabChange::Navigated);
    assert_eq!(state.select_tab(Tab::Preview), TabChange::Navigated);

    assert_eq!(state.select_tab(Tab::Deploy), TabChange::Navigated);
    assert_eq!(state.step, Step::Deploy);
    assert_eq!(state.deployment, Some(DeployStatus::Deploying));
}

#[test]
fn select_design_then_preview_navigates_back() {
    let mut state = previewing();
    assert_eq!(state.select_tab(Tab::Design), TabChange::Navigated);
    assert_eq!(state.step, Step::Design);
    assert_eq!(state.select_tab(Tab::Preview), TabChange::Navigated);
    assert_eq!(state.step, Step::Preview);
    assert_eq!(state.select_tab(Tab::Preview), TabChange::Unchanged);
}

#[test]
fn select_current_design_tab_is_unchanged() {
    let mut state = FrameState::default();
    assert_eq!(state.select_tab(Tab::Design), TabChange::Unchanged);
}

// =============================================================
// Deployment
// =============================================================

#[test]
fn begin_deploy_without_code_fails() {
    let mut state = FrameState::default();
    assert_eq!(state.begin_deploy(), Err(FlowError::NoArtifact));
}

#[test]
fn begin_deploy_from_design_fails() {
    let mut state = previewing();
    state.select_tab(Tab::Design);
    assert_eq!(state.begin_deploy(), Err(FlowError::NotInPreview));
    assert_eq!(state.step, Step::Design);
}

#[test]
fn deploy_success_exposes_url() {
    let mut state = previewing();
    let ticket = state.begin_deploy().unwrap();
    assert!(ticket.artifact.source.contains("poll"));
    assert_eq!(state.step, Step::Deploy);
    assert_eq!(state.deployment, Some(DeployStatus::Deploying));
    assert_eq!(state.begin_deploy(), Err(FlowError::DeploymentPending));

    assert!(state.finish_deploy(ticket.attempt, Ok(deployed("https://vibes-frame-12345.modal.run"))));
    assert_eq!(state.deploy_url(), Some("https://vibes-frame-12345.modal.run"));
}

#[test]
fn deploy_failure_allows_retry() {
    let mut state = previewing();
    let ticket = state.begin_deploy().unwrap();
    state.finish_deploy(ticket.attempt, Err(ServiceError::Deployment("timeout".to_owned())));
    assert_eq!(state.deployment, Some(DeployStatus::Failed("deployment failed: timeout".to_owned())));
    assert!(state.deploy_url().is_none());

    state.begin_deploy().unwrap();
    assert_eq!(state.deployment, Some(DeployStatus::Deploying));
}

#[test]
fn redeploy_after_success_requires_preview() {
    let mut state = previewing();
    let ticket = state.begin_deploy().unwrap();
    state.finish_deploy(ticket.attempt, Ok(deployed("https://a.test")));
    assert_eq!(state.begin_deploy(), Err(FlowError::NotInPreview));

    state.select_tab(Tab::Preview);
    assert!(state.begin_deploy().is_ok());
}

#[test]
fn finish_deploy_without_pending_is_ignored() {
    let mut state = previewing();
    assert!(!state.finish_deploy(0, Ok(deployed("https://a.test"))));
    assert!(state.deployment.is_none());
}

#[test]
fn stale_deploy_result_does_not_finish_newer_attempt() {
    let mut state = previewing();
    let old = state.begin_deploy().unwrap();

    state.select_tab(Tab::Design);
    state.begin_generate().unwrap();
    state.finish_generate(Ok(artifact("new")));
    let new = state.begin_deploy().unwrap();
    assert_eq!(new.artifact.prompt, "new");
    assert_ne!(old.attempt, new.attempt);

    assert!(!state.finish_deploy(old.attempt, Ok(deployed("https://old.test"))));
    assert_eq!(state.deployment, Some(DeployStatus::Deploying));

    assert!(state.finish_deploy(new.attempt, Ok(deployed("https://new.test"))));
    assert_eq!(state.deploy_url(), Some("https://new.test"));
}

#[test]
fn stale_deploy_result_after_regenerate_is_ignored() {
    let mut state = previewing();
    let old = state.begin_deploy().unwrap();
    state.select_tab(Tab::Design);
    state.begin_generate().unwrap();
    state.finish_generate(Ok(artifact("new")));

    assert!(!state.finish_deploy(old.attempt, Ok(deployed("https://old.test"))));
    assert!(state.deployment.is_none());
}
