//! Widget UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `FrameCard` gates on host loading and `FrameWorkspace` owns the wiring
//! between flow state and capabilities. The tab panels only render what they
//! are handed and report user intent through callbacks.

pub mod deploy_tab;
pub mod design_tab;
pub mod frame_card;
pub mod preview_tab;
pub mod tab_bar;
pub mod workspace;
