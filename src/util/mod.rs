//! Utility helpers shared across widget modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (timers, clipboard)
//! from component and state logic.

pub mod clipboard;
pub mod timer;
