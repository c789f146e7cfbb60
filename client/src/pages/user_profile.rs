//! Public user profile: display info plus the recipes they authored.
//!
//! TRADE-OFFS
//! ==========
//! The public user endpoint may be missing or failing independently of the
//! recipes endpoint; when it does, the header falls back to the author
//! fields denormalized onto the user's recipes.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use models::{PublicUser, Recipe};

use crate::components::avatar::Avatar;
use crate::components::recipe_card::RecipeCard;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

/// Header identity from the public endpoint, or from the first recipe's
/// author fields when the endpoint failed.
#[must_use]
pub fn resolve_profile(
    user_id: &str,
    fetched: Option<PublicUser>,
    recipes: &[Recipe],
) -> Option<PublicUser> {
    if fetched.is_some() {
        return fetched;
    }
    recipes.first().map(|first| PublicUser {
        id: user_id.to_owned(),
        name: first.user_name.clone(),
        avatar_url: first.user_avatar.clone(),
    })
}

#[cfg(test)]
#[path = "user_profile_test.rs"]
mod user_profile_test;

#[component]
pub fn UserProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let params = use_params_map();

    let profile = RwSignal::new(None::<PublicUser>);
    let recipes = RwSignal::new(Vec::<Recipe>::new());
    let favorite_ids = RwSignal::new(Vec::<String>::new());
    let loading = RwSignal::new(true);
    let failed = RwSignal::new(false);

    let profile_id = move || params.read().get("id").unwrap_or_default();

    #[cfg(feature = "hydrate")]
    {
        let last_load = RwSignal::new(None::<(String, Option<String>)>);
        Effect::new(move || {
            let id = profile_id();
            let viewer_id = auth.get().user_id();
            if id.is_empty() {
                return;
            }
            let key = (id.clone(), viewer_id.clone());
            if last_load.get_untracked().as_ref() == Some(&key) {
                return;
            }
            last_load.set(Some(key));

            leptos::task::spawn_local(async move {
                loading.set(true);
                failed.set(false);

                let Some(user_recipes) = crate::net::api::fetch_user_recipes(&id).await else {
                    failed.set(true);
                    loading.set(false);
                    return;
                };
                let fetched = crate::net::api::fetch_public_user(&id).await;
                profile.set(resolve_profile(&id, fetched, &user_recipes));
                recipes.set(user_recipes);

                if let Some(viewer_id) = viewer_id {
                    if let Some(rows) = crate::net::api::fetch_favorites(&viewer_id).await {
                        favorite_ids.set(rows.into_iter().map(|f| f.recipe_id).collect());
                    }
                } else {
                    favorite_ids.set(Vec::new());
                }
                loading.set(false);
            });
        });
    }

    let on_favorite_toggle = Callback::new(move |recipe_id: String| {
        let Some(viewer_id) = auth.get_untracked().user_id() else {
            return;
        };
        let currently = favorite_ids.get_untracked().contains(&recipe_id);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::toggle_favorite(&viewer_id, &recipe_id, currently).await {
                Ok(true) => favorite_ids.update(|ids| ids.push(recipe_id)),
                Ok(false) => favorite_ids.update(|ids| ids.retain(|id| *id != recipe_id)),
                Err(e) => crate::components::toast::show(
                    ui,
                    crate::state::ui::ToastKind::Error,
                    e,
                ),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (viewer_id, recipe_id, currently, ui, profile_id);
        }
    });

    view! {
        <div class="profile-page">
            <Show when=move || loading.get()>
                <p class="profile-page__status">"Loading profile..."</p>
            </Show>

            <Show when=move || failed.get()>
                <p class="profile-page__status">"Could not load this user's profile."</p>
            </Show>

            {move || {
                profile.get().map(|user| {
                    view! {
                        <header class="profile-page__header">
                            <Avatar name=user.name.clone() src=user.avatar_url.clone() large=true/>
                            <div>
                                <h1>{user.name.clone()}</h1>
                                <p class="profile-page__subtitle">
                                    {format!("{} recipes shared", recipes.get().len())}
                                </p>
                            </div>
                        </header>
                    }
                })
            }}

            <Show when=move || !loading.get() && !failed.get() && recipes.get().is_empty()>
                <p class="profile-page__status">"This user has not shared any recipes yet."</p>
            </Show>

            <div class="recipe-grid">
                {move || {
                    recipes
                        .get()
                        .into_iter()
                        .map(|recipe| {
                            let id = recipe.id.clone();
                            let is_favorite = Signal::derive(move || {
                                favorite_ids.get().contains(&id)
                            });
                            view! {
                                <RecipeCard
                                    recipe=recipe
                                    is_favorite=is_favorite
                                    on_favorite_toggle=on_favorite_toggle
                                />
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
