//! Write access to a piece of state, independent of the reactive runtime.

use std::cell::RefCell;

use leptos::prelude::{RwSignal, Update};

/// Something that can hand out a mutable view of `T`.
///
/// Returns `None` when the state is gone (a disposed signal) or busy, in
/// which case the update is dropped.
pub trait StateCell<T> {
    fn update_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T: Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn update_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl<T> StateCell<T> for RefCell<T> {
    fn update_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_borrow_mut().ok().map(|mut state| f(&mut state))
    }
}
