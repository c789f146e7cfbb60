//! Favorites page: the signed-in user's saved recipes.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use models::Recipe;

use crate::components::recipe_card::RecipeCard;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::format::count_label;
use crate::util::guard::install_guest_redirect;

#[component]
pub fn FavoritesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    install_guest_redirect(auth, "/", navigate.clone());

    let favorite_recipes = RwSignal::new(Vec::<Recipe>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    {
        let loaded = RwSignal::new(false);
        Effect::new(move || {
            let Some(user_id) = auth.get().user_id() else {
                return;
            };
            if loaded.get_untracked() {
                return;
            }
            loaded.set(true);
            leptos::task::spawn_local(async move {
                if let Some(rows) = crate::net::api::fetch_favorites(&user_id).await {
                    let ids: Vec<String> = rows.into_iter().map(|f| f.recipe_id).collect();
                    if let Some(all) = crate::net::api::fetch_recipes().await {
                        favorite_recipes.set(
                            all.into_iter().filter(|r| ids.contains(&r.id)).collect(),
                        );
                    }
                }
                loading.set(false);
            });
        });
    }

    // Hearts on this page only ever remove.
    let on_favorite_toggle = Callback::new(move |recipe_id: String| {
        let Some(user_id) = auth.get_untracked().user_id() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::toggle_favorite(&user_id, &recipe_id, true).await {
                Ok(_) => {
                    favorite_recipes.update(|list| list.retain(|r| r.id != recipe_id));
                }
                Err(e) => crate::components::toast::show(
                    ui,
                    crate::state::ui::ToastKind::Error,
                    e,
                ),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user_id, recipe_id, ui);
        }
    });

    let subtitle = move || {
        let count = favorite_recipes.get().len();
        if count == 0 {
            "You have not saved any recipes yet".to_owned()
        } else {
            count_label(count, "recipe saved", "recipes saved")
        }
    };

    view! {
        <div class="favorites-page">
            <header class="favorites-page__header">
                <span class="favorites-page__icon" aria-hidden="true">"♥"</span>
                <div>
                    <h1>"My favorite recipes"</h1>
                    <p class="favorites-page__subtitle">{subtitle}</p>
                </div>
            </header>

            <Show when=move || loading.get()>
                <p class="favorites-page__status">"Loading favorites..."</p>
            </Show>

            <Show when=move || !loading.get() && favorite_recipes.get().is_empty()>
                <div class="favorites-page__empty">
                    <h2>"No favorites yet"</h2>
                    <p>
                        "Browse our recipes and save the ones you love by clicking the heart."
                    </p>
                    <a class="btn btn--primary" href="/">"Explore recipes"</a>
                </div>
            </Show>

            <div class="recipe-grid">
                {move || {
                    favorite_recipes
                        .get()
                        .into_iter()
                        .map(|recipe| {
                            view! {
                                <RecipeCard
                                    recipe=recipe
                                    is_favorite=Signal::derive(|| true)
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
