//! Account page: profile details, avatar crop/upload, password change.
//!
//! SYSTEM CONTEXT
//! ==============
//! Successful profile edits flow back into the auth context and the cached
//! session so the navbar and other pages pick them up immediately. The
//! email address is backend identity and stays read-only.

use leptos::prelude::*;

use models::validate;

use crate::components::avatar::Avatar;
use crate::components::avatar_crop_dialog::AvatarCropDialog;
use crate::components::toast;
use crate::state::auth::AuthState;
use crate::state::ui::{ToastKind, UiState};

#[component]
pub fn AccountPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let avatar_url = RwSignal::new(None::<String>);

    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());

    let saving_profile = RwSignal::new(false);
    let saving_password = RwSignal::new(false);
    let crop_image_url = RwSignal::new(None::<String>);

    let file_input = NodeRef::<leptos::html::Input>::new();

    // Fill the form once the session user is available (and refresh it
    // after saves, which update the auth context).
    Effect::new(move || {
        if let Some(user) = auth.get().user {
            name.set(user.name);
            email.set(user.email);
            avatar_url.set(user.avatar_url);
        }
    });

    let on_save_profile = move |_| {
        if saving_profile.get() {
            return;
        }
        let Some(user_id) = auth.get_untracked().user_id() else {
            return;
        };
        let new_name = name.get().trim().to_owned();
        if new_name.is_empty() {
            toast::show(ui, ToastKind::Error, "Please fill in your name");
            return;
        }
        saving_profile.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let update =
                models::ProfileUpdate { name: new_name, avatar_url: avatar_url.get_untracked() };
            match crate::net::api::update_profile(&user_id, &update).await {
                Ok(user) => {
                    crate::util::session::save(&user);
                    auth.update(|a| a.user = Some(user));
                    toast::show(ui, ToastKind::Success, "Profile saved");
                }
                Err(e) => toast::show(ui, ToastKind::Error, e),
            }
            saving_profile.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user_id, new_name);
            saving_profile.set(false);
        }
    };

    let on_change_password = move |_| {
        if saving_password.get() {
            return;
        }
        let Some(user_id) = auth.get_untracked().user_id() else {
            return;
        };
        let current = current_password.get();
        let new = new_password.get();
        if let Err(e) = validate::password_change(&current, &new, &confirm_password.get()) {
            toast::show(ui, ToastKind::Error, e.to_string());
            return;
        }
        saving_password.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::change_password(&user_id, &current, &new).await {
                Ok(()) => {
                    current_password.set(String::new());
                    new_password.set(String::new());
                    confirm_password.set(String::new());
                    toast::show(ui, ToastKind::Success, "Password updated");
                }
                Err(e) => toast::show(ui, ToastKind::Error, e),
            }
            saving_password.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user_id, current, new);
            saving_password.set(false);
        }
    };

    let on_pick_avatar = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_avatar_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(file) = input.files().and_then(|list| list.get(0)) else {
                return;
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let size = file.size() as u64;
            if let Err(e) = validate::image_file(size, &file.type_()) {
                toast::show(ui, ToastKind::Error, e.to_string());
                input.set_value("");
                return;
            }
            if let Ok(url) = web_sys::Url::create_object_url_with_blob(&file) {
                crop_image_url.set(Some(url));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let close_crop = move || {
        #[cfg(feature = "hydrate")]
        {
            if let Some(url) = crop_image_url.get_untracked() {
                let _ = web_sys::Url::revoke_object_url(&url);
            }
            if let Some(input) = file_input.get_untracked() {
                input.set_value("");
            }
        }
        crop_image_url.set(None);
    };

    let on_crop_close = Callback::new(move |()| close_crop());
    let on_crop_saved = Callback::new(move |user: models::User| {
        avatar_url.set(user.avatar_url.clone());
        auth.update(|a| a.user = Some(user));
        toast::show(ui, ToastKind::Success, "Profile photo updated");
    });

    view! {
        <div class="account-page">
            <Show
                when=move || auth.get().is_authenticated() || auth.get().loading
                fallback=move || {
                    view! {
                        <div class="account-page__gate">
                            <h1>"Sign in required"</h1>
                            <p>"Sign in to manage your account and favorites."</p>
                        </div>
                    }
                }
            >
                <div class="account-page__columns">
                    <section class="account-page__card">
                        <header class="account-page__card-header">
                            <h1>"My account"</h1>
                            <div class="account-page__avatar">
                                {move || {
                                    view! {
                                        <Avatar
                                            name=name.get()
                                            src=avatar_url.get()
                                            large=true
                                        />
                                    }
                                }}
                                <div>
                                    <p class="account-page__muted">"Profile photo"</p>
                                    <button class="btn" on:click=on_pick_avatar>
                                        "Change photo"
                                    </button>
                                    <input
                                        node_ref=file_input
                                        class="account-page__file"
                                        type="file"
                                        accept="image/*"
                                        on:change=on_avatar_change
                                    />
                                </div>
                            </div>
                        </header>

                        <label class="account-page__label">
                            "Name"
                            <input
                                class="account-page__input"
                                type="text"
                                placeholder="Your name"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="account-page__label">
                            "Email"
                            <input
                                class="account-page__input account-page__input--readonly"
                                type="email"
                                readonly=true
                                disabled=true
                                prop:value=move || email.get()
                            />
                            <span class="account-page__muted">"Email cannot be changed"</span>
                        </label>
                        <button
                            class="btn btn--primary"
                            disabled=move || saving_profile.get()
                            on:click=on_save_profile
                        >
                            {move || if saving_profile.get() { "Saving..." } else { "Save changes" }}
                        </button>
                    </section>

                    <section class="account-page__card">
                        <h2>"Change password"</h2>
                        <label class="account-page__label">
                            "Current password"
                            <input
                                class="account-page__input"
                                type="password"
                                placeholder="Enter your current password"
                                prop:value=move || current_password.get()
                                on:input=move |ev| current_password.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="account-page__label">
                            "New password"
                            <input
                                class="account-page__input"
                                type="password"
                                placeholder="At least 6 characters"
                                prop:value=move || new_password.get()
                                on:input=move |ev| new_password.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="account-page__label">
                            "Confirm new password"
                            <input
                                class="account-page__input"
                                type="password"
                                placeholder="Repeat the new password"
                                prop:value=move || confirm_password.get()
                                on:input=move |ev| confirm_password.set(event_target_value(&ev))
                            />
                        </label>
                        <button
                            class="btn"
                            disabled=move || saving_password.get()
                            on:click=on_change_password
                        >
                            {move || {
                                if saving_password.get() { "Updating..." } else { "Update password" }
                            }}
                        </button>
                    </section>
                </div>

                {move || {
                    crop_image_url.get().and_then(|url| {
                        auth.get_untracked().user.map(|user| {
                            view! {
                                <AvatarCropDialog
                                    user_id=user.id
                                    name=name.get_untracked()
                                    image_url=url
                                    on_close=on_crop_close
                                    on_saved=on_crop_saved
                                />
                            }
                        })
                    })
                }}
            </Show>
        </div>
    }
}
