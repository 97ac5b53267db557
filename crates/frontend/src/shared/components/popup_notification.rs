use leptos::prelude::*;

/// Single-slot toast with a "positive" or "negative" variant
#[component]
pub fn PopupNotification(
    /// Text of the toast
    message: String,
    /// Variant: "positive" (default) or "negative"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Manual dismiss handler
    #[prop(optional)]
    on_close: Option<Callback<()>>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref() {
        Some("negative") => "popup-notification--negative",
        _ => "popup-notification--positive",
    };

    view! {
        <div class=move || format!("popup-notification {}", variant_class())>
            <span class="popup-notification__message">{message}</span>
            <button
                class="popup-notification__close"
                on:click=move |_| {
                    if let Some(handler) = on_close {
                        handler.run(());
                    }
                }
            >
                "\u{00d7}"
            </button>
        </div>
    }
}
