use leptos::prelude::*;

use crate::domain::inbox::state::{Category, NotificationKind};
use crate::domain::inbox::use_inbox;
use crate::shared::components::popup_notification::PopupNotification;

use super::card::ProfileCard;

/// The inbox page: tab nav, error banner, card list and the popup.
#[component]
pub fn InboxPage() -> impl IntoView {
    let ctx = use_inbox();

    let mounted = StoredValue::new(false);
    Effect::new(move |_| {
        if !mounted.get_value() {
            mounted.set_value(true);
            ctx.mount();
        }
    });

    let active = Signal::derive(move || ctx.state.get().active);
    let visible_items = Signal::derive(move || {
        let state = ctx.state.get();
        state.items(state.active).to_vec()
    });
    let banner = Signal::derive(move || ctx.error_banner.get().current().cloned());
    let notification = Signal::derive(move || ctx.notification.get().current().cloned());

    view! {
        <main class="inbox">
            <header class="inbox__header">
                <h1 class="inbox__title">"my app"</h1>
            </header>

            <nav class="inbox__tabs">
                {Category::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                class=move || {
                                    if active.get() == tab {
                                        "inbox__tab inbox__tab--active"
                                    } else {
                                        "inbox__tab"
                                    }
                                }
                                on:click=move |_| ctx.activate(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            {move || banner.get().map(|msg| view! { <div class="alert alert--error">{msg}</div> })}

            <section class="inbox__cards">
                <Show
                    when=move || !visible_items.get().is_empty()
                    fallback=|| view! { <div class="inbox__empty">"No items found"</div> }
                >
                    <For
                        each=move || visible_items.get()
                        key=|item| item.id.clone()
                        children=move |item| view! { <ProfileCard item=item /> }
                    />
                </Show>
            </section>

            {move || {
                notification
                    .get()
                    .map(|n| {
                        let variant = match n.kind {
                            NotificationKind::Positive => "positive",
                            NotificationKind::Negative => "negative",
                        };
                        view! {
                            <PopupNotification
                                message=n.message.clone()
                                variant=variant.to_string()
                                on_close=Callback::new(move |_| ctx.dismiss_notification())
                            />
                        }
                    })
            }}
        </main>
    }
}
