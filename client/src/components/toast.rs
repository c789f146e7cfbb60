//! Transient toast notifications.
//!
//! DESIGN
//! ======
//! One toast at a time, replaced on push and auto-dismissed after a short
//! delay. The dismiss task compares sequence numbers so it never clears a
//! newer toast that replaced the one it was timing.

use leptos::prelude::*;

use crate::state::ui::{ToastKind, UiState};

#[cfg(feature = "hydrate")]
const DISMISS_SECS: u64 = 4;

/// Show a toast and schedule its dismissal.
pub fn show(ui: RwSignal<UiState>, kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    let mut seq = 0;
    ui.update(|state| seq = state.push_toast(kind, message));

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_secs(DISMISS_SECS)).await;
            ui.update(|state| state.dismiss_toast(seq));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = seq;
    }
}

/// Fixed-position toast outlet, rendered once in the layout.
#[component]
pub fn ToastOutlet() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <Show when=move || ui.get().toast.is_some()>
            <div
                class="toast"
                class:toast--error=move || {
                    ui.get().toast.as_ref().is_some_and(|t| t.kind == ToastKind::Error)
                }
                role="status"
            >
                {move || ui.get().toast.map(|t| t.message).unwrap_or_default()}
            </div>
        </Show>
    }
}
