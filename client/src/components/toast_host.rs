//! Renders the queued toasts from `ToastState`.

use leptos::prelude::*;

use crate::state::toast::ToastState;

/// Fixed overlay listing active toasts, each dismissible by click.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class="toast toast--error" role="status">
                                <span class="toast__message">{toast.message}</span>
                                <button
                                    class="toast__close"
                                    type="button"
                                    title="Dismiss"
                                    on:click=move |_| toasts.update(|t| t.dismiss(id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
