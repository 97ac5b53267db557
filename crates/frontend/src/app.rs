use crate::domain::inbox::InboxContext;
use crate::domain::inbox::ui::InboxPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the shared inbox context to the whole app.
    provide_context(InboxContext::new());

    view! {
        <InboxPage />
    }
}
