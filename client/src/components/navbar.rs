//! Top navigation bar: brand, theme toggle, share button, account menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navbar owns the auth dialog open state, so any page can trigger the
//! join flow simply by rendering the shared layout.

use leptos::prelude::*;

use crate::components::auth_dialog::AuthDialog;
use crate::components::avatar::Avatar;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let menu_open = RwSignal::new(false);
    let auth_open = RwSignal::new(false);

    let on_auth_close = Callback::new(move |()| auth_open.set(false));

    let on_logout = move |_| {
        menu_open.set(false);
        crate::util::session::clear();
        auth.update(|a| a.user = None);
        // Full reload clears per-page favorite state.
        #[cfg(feature = "hydrate")]
        {
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href("/");
            }
        }
    };

    let user_name = move || auth.get().user.map(|u| u.name).unwrap_or_default();
    let user_avatar = move || auth.get().user.and_then(|u| u.avatar_url);

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">
                <span class="navbar__logo" aria-hidden="true">"🥄"</span>
                <span class="navbar__title">
                    "Ladle"
                    <span class="navbar__tagline">"Recipes with a homemade touch"</span>
                </span>
            </a>

            <div class="navbar__actions">
                <button
                    class="btn navbar__theme-toggle"
                    on:click=move |_| {
                        let current = ui.get().dark_mode;
                        let next = crate::util::theme::toggle(current);
                        ui.update(|u| u.dark_mode = next);
                    }
                    title="Toggle dark mode"
                >
                    {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                </button>

                <Show when=move || auth.get().is_authenticated()>
                    <a class="btn btn--primary navbar__share" href="/create">
                        "+ Share a recipe"
                    </a>
                </Show>

                <Show
                    when=move || auth.get().is_authenticated()
                    fallback=move || {
                        view! {
                            <button
                                class="btn btn--primary navbar__join"
                                on:click=move |_| auth_open.set(true)
                            >
                                "Join the table"
                            </button>
                        }
                    }
                >
                    <div class="navbar__account">
                        <button
                            class="navbar__account-button"
                            on:click=move |_| menu_open.update(|open| *open = !*open)
                        >
                            {move || {
                                view! { <Avatar name=user_name() src=user_avatar()/> }
                            }}
                            <span class="navbar__account-name">
                                {move || format!("Welcome, {}!", user_name())}
                            </span>
                        </button>
                        <Show when=move || menu_open.get()>
                            <div
                                class="navbar__menu-backdrop"
                                on:click=move |_| menu_open.set(false)
                            ></div>
                            <div class="navbar__menu">
                                <span class="navbar__menu-label">"What next?"</span>
                                <a href="/account" on:click=move |_| menu_open.set(false)>
                                    "My account"
                                </a>
                                <a href="/my-recipes" on:click=move |_| menu_open.set(false)>
                                    "My recipes"
                                </a>
                                <a href="/favorites" on:click=move |_| menu_open.set(false)>
                                    "My favorites"
                                </a>
                                <button class="navbar__menu-logout" on:click=on_logout>
                                    "Log out"
                                </button>
                            </div>
                        </Show>
                    </div>
                </Show>
            </div>
        </nav>

        <Show when=move || auth_open.get()>
            <AuthDialog on_close=on_auth_close/>
        </Show>
    }
}
