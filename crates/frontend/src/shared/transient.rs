//! Single-slot transient value with a fixed auto-clear window.
//!
//! Both user-facing channels (the action notification popup and the
//! fetch error banner) hold at most one value at a time. A new value
//! replaces the current one and restarts its own clear window; the old
//! window expiring later must not wipe the newer value. That is what
//! the epoch token guards.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Auto-clear delay for notifications and error banners.
pub const DISMISS_DELAY_MS: u32 = 3000;

#[derive(Clone, Debug, Default)]
pub struct Transient<T> {
    value: Option<T>,
    epoch: u64,
}

impl<T: Clone> Transient<T> {
    pub fn new() -> Self {
        Self {
            value: None,
            epoch: 0,
        }
    }

    /// Replace the slot and return the epoch owning the new value.
    pub fn show(&mut self, value: T) -> u64 {
        self.epoch += 1;
        self.value = Some(value);
        self.epoch
    }

    /// Clear the slot, but only if `epoch` still owns it.
    ///
    /// Returns whether the slot was cleared.
    pub fn expire(&mut self, epoch: u64) -> bool {
        if self.epoch == epoch && self.value.is_some() {
            self.value = None;
            return true;
        }
        false
    }

    /// Clear the slot unconditionally (user dismissed it).
    pub fn dismiss(&mut self) {
        self.value = None;
    }

    pub fn current(&self) -> Option<&T> {
        self.value.as_ref()
    }
}

/// Show `value` in `slot` and arm its auto-clear timer.
///
/// Uses `try_update` on expiry so a timer that outlives the owning
/// component is a no-op instead of a panic.
pub fn show_for<T>(slot: RwSignal<Transient<T>>, value: T)
where
    T: Clone + Send + Sync + 'static,
{
    let epoch = match slot.try_update(|t| t.show(value)) {
        Some(epoch) => epoch,
        None => return,
    };
    spawn_local(async move {
        TimeoutFuture::new(DISMISS_DELAY_MS).await;
        let _ = slot.try_update(|t| t.expire(epoch));
    });
}
