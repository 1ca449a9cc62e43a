//! Widget state and the flow that drives it.
//!
//! DESIGN
//! ======
//! State is split by concern (`sdk` loading, `frame` tab flow) so components
//! depend on small focused models. Transitions are plain methods on those
//! models; `controller` wraps them around the async capabilities and writes
//! through [`cell::StateCell`] so the same flow runs against Leptos signals
//! in the browser and `RefCell`s in tests.

pub mod cell;
pub mod controller;
pub mod frame;
pub mod sdk;
pub mod templates;
