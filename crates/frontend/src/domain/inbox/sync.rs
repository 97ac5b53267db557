//! Tab synchronization: keeps exactly one category fresh per tab
//! activation and on initial mount.

use contracts::domain::inbox::InboxItem;
use leptos::logging::log;
use leptos::prelude::Update;
use leptos::task::spawn_local;

use crate::system::auth::storage;

use super::api;
use super::error::InboxError;
use super::state::Category;
use super::InboxContext;

impl InboxContext {
    /// Make `tab` the active category and refetch its list.
    pub fn activate(self, tab: Category) {
        let _ = self.state.try_update(|s| s.active = tab);
        self.refresh(tab);
    }

    /// Fetch `tab`'s list and replace it wholesale on success.
    ///
    /// The generation token captured here closes the stale-overwrite
    /// race: when tabs are switched rapidly, a response from a
    /// superseded refresh is discarded at commit time. Failures go to
    /// the error banner and leave the list untouched.
    pub fn refresh(self, tab: Category) {
        let generation = match self.state.try_update(|s| s.begin_refresh(tab)) {
            Some(generation) => generation,
            None => return,
        };
        spawn_local(async move {
            match fetch_category(tab).await {
                Ok(items) => {
                    let _ = self
                        .state
                        .try_update(|s| s.commit_refresh(tab, generation, items));
                }
                Err(err) => {
                    log!("Fetch error for {}: {}", tab.label(), err);
                    self.show_banner(err.to_string());
                }
            }
        });
    }

    /// Initial load, run once from the page component.
    ///
    /// Without a token no request is issued at all, only the login
    /// prompt is shown.
    pub fn mount(self) {
        if storage::get_access_token().is_none() {
            self.show_banner("Please login first");
            return;
        }
        self.refresh(Category::New);
    }
}

async fn fetch_category(tab: Category) -> Result<Vec<InboxItem>, InboxError> {
    let token = storage::get_access_token().ok_or(InboxError::MissingToken)?;
    let path = listing_path(tab, storage::get_user_role())?;
    log!("Fetching {} from {}", tab.label(), path);
    api::fetch_items(path, &token, tab.fetch_failure_fallback()).await
}

/// Endpoint for one category's listing.
///
/// Only "New" routes by the caller's role, and an unknown role fails
/// closed rather than defaulting to either endpoint.
pub(crate) fn listing_path(
    tab: Category,
    role: Option<String>,
) -> Result<&'static str, InboxError> {
    match tab {
        Category::New => match role.as_deref() {
            None | Some("") => Err(InboxError::MissingRole),
            Some("intern") => Ok("/fetch-campaigns-for-main-page"),
            Some(_) => Ok("/fetch-interns-for-main-page"),
        },
        Category::Received => Ok("/invitations/received"),
        Category::Sent => Ok("/invitations/sent"),
    }
}
