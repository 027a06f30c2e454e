//! Toast Component
//!
//! Transient banner for the outcome of the last favourites action. Hidden
//! while an action is loading, auto-hidden a few seconds after it lands,
//! and dismissable by hand.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::store::{store_dismiss_toast, CatalogStateStoreFields, CatalogStore};

const TOAST_AUTOHIDE_MS: u32 = 5_000;

#[component]
pub fn Toast(store: CatalogStore) -> impl IntoView {
    // Pending auto-hide timer. Dropping the handle cancels a timer that
    // has not fired yet; the callback never runs after teardown.
    let pending_hide = StoredValue::new_local(None::<Timeout>);

    Effect::new(move |_| {
        // Track the message too: a new outcome while the toast is already
        // visible must restart the countdown.
        store.toast_message().track();
        if store.show_toast().get() {
            let timeout = Timeout::new(TOAST_AUTOHIDE_MS, move || {
                store_dismiss_toast(&store);
            });
            pending_hide.set_value(Some(timeout));
        } else {
            pending_hide.set_value(None);
        }
    });

    on_cleanup(move || pending_hide.set_value(None));

    let visible = move || !store.status().get().is_loading() && store.show_toast().get();
    let is_error = move || store.status().get().is_error();

    view! {
        <Show when=visible>
            <div class="toast" class:error=is_error>
                <div class="toast-header">
                    <span class="toast-icon">{move || if is_error() { "✗" } else { "✓" }}</span>
                    <strong class="toast-label">
                        {move || if is_error() { "Error" } else { "Success" }}
                    </strong>
                    <button
                        class="toast-close"
                        on:click=move |_| store_dismiss_toast(&store)
                    >
                        "×"
                    </button>
                </div>
                <div class="toast-body">{move || store.toast_message().get()}</div>
            </div>
        </Show>
    }
}
