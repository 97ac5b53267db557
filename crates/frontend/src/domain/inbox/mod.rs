//! Three-category invitation inbox: tab-scoped list synchronization,
//! per-item actions with optimistic reconcile, and the two transient
//! user-facing channels (action popup, fetch error banner).

pub mod actions;
pub mod api;
pub mod error;
pub mod state;
pub mod sync;
pub mod ui;

use leptos::prelude::*;

use crate::shared::transient::{show_for, Transient};
use self::state::{create_state, InboxState, Notification};

/// Shared handle over the inbox state and its message channels.
///
/// Provided once through Leptos context; `Copy` so components and
/// spawned tasks capture it freely.
#[derive(Clone, Copy)]
pub struct InboxContext {
    pub state: RwSignal<InboxState>,
    pub notification: RwSignal<Transient<Notification>>,
    pub error_banner: RwSignal<Transient<String>>,
}

impl InboxContext {
    pub fn new() -> Self {
        Self {
            state: create_state(),
            notification: RwSignal::new(Transient::new()),
            error_banner: RwSignal::new(Transient::new()),
        }
    }

    /// Show an action outcome, replacing any visible popup.
    pub fn notify(&self, notification: Notification) {
        show_for(self.notification, notification);
    }

    /// Show a fetch-level failure, replacing any visible banner.
    pub fn show_banner(&self, message: impl Into<String>) {
        show_for(self.error_banner, message.into());
    }

    pub fn dismiss_notification(&self) {
        let _ = self.notification.try_update(|slot| slot.dismiss());
    }
}

impl Default for InboxContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the inbox context
pub fn use_inbox() -> InboxContext {
    use_context::<InboxContext>().expect("InboxContext not found in component tree")
}
