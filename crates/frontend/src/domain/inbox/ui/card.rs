use contracts::domain::inbox::InboxItem;
use leptos::prelude::*;
use thaw::*;

use crate::domain::inbox::state::Category;
use crate::domain::inbox::use_inbox;

/// One inbox record with the action controls of the active tab.
///
/// The item's busy flag disables the controls and swaps their label
/// while its action is in flight.
#[component]
pub fn ProfileCard(item: InboxItem) -> impl IntoView {
    let ctx = use_inbox();
    let id = StoredValue::new(item.id.clone());
    let busy = Signal::derive(move || id.with_value(|id| ctx.state.get().is_busy(id)));
    let active = Signal::derive(move || ctx.state.get().active);

    let short_bio = item.short_bio.clone();
    let bio = item.bio.clone();

    view! {
        <div class="card">
            <h2 class="card__name">{item.display_name.clone()}</h2>
            {short_bio.map(|text| view! { <p class="card__bio">{text}</p> })}
            {bio.map(|text| view! { <p class="card__bio">{text}</p> })}

            {move || match active.get() {
                Category::New => view! {
                    <Button
                        appearance=ButtonAppearance::Transparent
                        class="card__action card__action--connect".to_string()
                        disabled=busy
                        on_click=move |_| ctx.connect(id.get_value())
                    >
                        {move || if busy.get() { "Loading..." } else { "+ Connect" }}
                    </Button>
                }
                    .into_any(),
                Category::Received => view! {
                    <div class="card__actions">
                        <Button
                            appearance=ButtonAppearance::Transparent
                            class="card__action card__action--accept".to_string()
                            disabled=busy
                            on_click=move |_| ctx.accept(id.get_value())
                        >
                            {move || if busy.get() { "Loading..." } else { "Accept" }}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Transparent
                            class="card__action card__action--reject".to_string()
                            disabled=busy
                            on_click=move |_| ctx.reject(id.get_value())
                        >
                            {move || if busy.get() { "Loading..." } else { "Reject" }}
                        </Button>
                    </div>
                }
                    .into_any(),
                Category::Sent => view! {
                    <Button
                        appearance=ButtonAppearance::Transparent
                        class="card__action card__action--cancel".to_string()
                        disabled=busy
                        on_click=move |_| ctx.cancel(id.get_value())
                    >
                        {move || if busy.get() { "Loading..." } else { "Cancel" }}
                    </Button>
                }
                    .into_any(),
            }}
        </div>
    }
}
