//! Route guards for auth-gated pages.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Send signed-out visitors to `to` once the session restore has finished.
/// Pages that render a gate card instead simply skip installing this.
pub fn install_guest_redirect<F>(auth: RwSignal<AuthState>, to: &'static str, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate(to, NavigateOptions::default());
        }
    });
}
