//! Per-item mutating actions: connect, accept, reject, cancel.
//!
//! Each action marks its item busy for the duration of the round trip,
//! removes the item from the owning list after a confirmed success and
//! reports the outcome through the notification popup. Lists are never
//! touched on failure; a later refresh reconciles with server truth.

use leptos::logging::log;
use leptos::prelude::Update;
use leptos::task::spawn_local;

use crate::system::auth::storage;

use super::api;
use super::error::InboxError;
use super::state::{Category, Notification};
use super::InboxContext;

/// The four mutating actions and their fixed per-action texts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InviteAction {
    Connect,
    Accept,
    Reject,
    Cancel,
}

impl InviteAction {
    /// The category whose list the action reconciles on success.
    pub fn category(self) -> Category {
        match self {
            InviteAction::Connect => Category::New,
            InviteAction::Accept | InviteAction::Reject => Category::Received,
            InviteAction::Cancel => Category::Sent,
        }
    }

    fn verb(self) -> &'static str {
        match self {
            InviteAction::Connect => "create",
            InviteAction::Accept => "accept",
            InviteAction::Reject => "reject",
            InviteAction::Cancel => "cancel",
        }
    }

    pub fn request_path(self, id: &str) -> String {
        format!("/invitations/{}/{}", self.verb(), id)
    }

    pub fn success_message(self) -> &'static str {
        match self {
            InviteAction::Connect => "Invitation sent successfully",
            InviteAction::Accept => "Invitation accepted successfully",
            InviteAction::Reject => "Invitation rejected successfully",
            InviteAction::Cancel => "Invitation canceled successfully",
        }
    }

    pub fn failure_fallback(self) -> &'static str {
        match self {
            InviteAction::Connect => "Failed to create invitation",
            InviteAction::Accept => "Failed to accept invitation",
            InviteAction::Reject => "Failed to reject invitation",
            InviteAction::Cancel => "Failed to cancel invitation",
        }
    }

    /// Text of the negative notification: the error's own message when
    /// it has one, the action's fixed fallback for a bare status code.
    pub fn failure_message(self, err: &InboxError) -> String {
        match err {
            InboxError::Status(_) => self.failure_fallback().to_string(),
            other => other.to_string(),
        }
    }
}

impl InboxContext {
    pub fn connect(self, id: String) {
        self.run(InviteAction::Connect, id);
    }

    pub fn accept(self, id: String) {
        self.run(InviteAction::Accept, id);
    }

    pub fn reject(self, id: String) {
        self.run(InviteAction::Reject, id);
    }

    pub fn cancel(self, id: String) {
        self.run(InviteAction::Cancel, id);
    }

    fn run(self, action: InviteAction, id: String) {
        let _ = self.state.try_update(|s| s.set_busy(&id));
        spawn_local(async move {
            let outcome = execute(action, &id).await;
            // Busy drops on every path, before the outcome is surfaced.
            let _ = self.state.try_update(|s| s.clear_busy(&id));
            match outcome {
                Ok(()) => {
                    let _ = self
                        .state
                        .try_update(|s| s.remove_item(action.category(), &id));
                    self.notify(Notification::positive(action.success_message()));
                }
                Err(err) => {
                    log!("{} failed for {}: {}", action.verb(), id, err);
                    self.notify(Notification::negative(action.failure_message(&err)));
                }
            }
        });
    }
}

async fn execute(action: InviteAction, id: &str) -> Result<(), InboxError> {
    let token = storage::get_access_token().ok_or(InboxError::MissingToken)?;
    api::post_action(&action.request_path(id), &token).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owning_categories() {
        assert_eq!(InviteAction::Connect.category(), Category::New);
        assert_eq!(InviteAction::Accept.category(), Category::Received);
        assert_eq!(InviteAction::Reject.category(), Category::Received);
        assert_eq!(InviteAction::Cancel.category(), Category::Sent);
    }

    #[test]
    fn test_request_paths() {
        assert_eq!(
            InviteAction::Connect.request_path("u-42"),
            "/invitations/create/u-42"
        );
        assert_eq!(
            InviteAction::Accept.request_path("inv-7"),
            "/invitations/accept/inv-7"
        );
        assert_eq!(
            InviteAction::Reject.request_path("inv-7"),
            "/invitations/reject/inv-7"
        );
        assert_eq!(
            InviteAction::Cancel.request_path("inv-9"),
            "/invitations/cancel/inv-9"
        );
    }

    #[test]
    fn test_success_messages() {
        assert_eq!(
            InviteAction::Connect.success_message(),
            "Invitation sent successfully"
        );
        assert_eq!(
            InviteAction::Accept.success_message(),
            "Invitation accepted successfully"
        );
        assert_eq!(
            InviteAction::Reject.success_message(),
            "Invitation rejected successfully"
        );
        assert_eq!(
            InviteAction::Cancel.success_message(),
            "Invitation canceled successfully"
        );
    }

    #[test]
    fn test_bare_status_uses_fallback() {
        // 500 with no body: the popup shows the fixed per-action text.
        assert_eq!(
            InviteAction::Cancel.failure_message(&InboxError::Status(500)),
            "Failed to cancel invitation"
        );
        assert_eq!(
            InviteAction::Connect.failure_message(&InboxError::Status(403)),
            "Failed to create invitation"
        );
    }

    #[test]
    fn test_errors_with_messages_pass_through() {
        assert_eq!(
            InviteAction::Accept.failure_message(&InboxError::MissingToken),
            "Authentication token not found"
        );
        assert_eq!(
            InviteAction::Reject
                .failure_message(&InboxError::Transport("Failed to send request: timed out".into())),
            "Failed to send request: timed out"
        );
    }
}
