//! My-recipes page: the recipes the signed-in user published.

use leptos::prelude::*;

use models::Recipe;

use crate::components::my_recipe_card::MyRecipeCard;
use crate::components::toast;
use crate::state::auth::AuthState;
use crate::state::ui::{ToastKind, UiState};

#[component]
pub fn MyRecipesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let my_recipes = RwSignal::new(Vec::<Recipe>::new());
    let favorite_ids = RwSignal::new(Vec::<String>::new());
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
                if let Some(mine) = crate::net::api::fetch_user_recipes(&user_id).await {
                    my_recipes.set(mine);
                }
                if let Some(rows) = crate::net::api::fetch_favorites(&user_id).await {
                    favorite_ids.set(rows.into_iter().map(|f| f.recipe_id).collect());
                }
                loading.set(false);
            });
        });
    }

    let on_favorite_toggle = Callback::new(move |recipe_id: String| {
        let Some(user_id) = auth.get_untracked().user_id() else {
            return;
        };
        let currently = favorite_ids.get_untracked().contains(&recipe_id);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::toggle_favorite(&user_id, &recipe_id, currently).await {
                Ok(true) => favorite_ids.update(|ids| ids.push(recipe_id)),
                Ok(false) => favorite_ids.update(|ids| ids.retain(|id| *id != recipe_id)),
                Err(e) => toast::show(ui, ToastKind::Error, e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user_id, recipe_id, currently);
        }
    });

    let on_delete = Callback::new(move |recipe_id: String| {
        my_recipes.update(|list| list.retain(|r| r.id != recipe_id));
        favorite_ids.update(|ids| ids.retain(|id| *id != recipe_id));
        toast::show(ui, ToastKind::Success, "Recipe deleted");
    });

    view! {
        <div class="my-recipes-page">
            <Show
                when=move || auth.get().is_authenticated() || auth.get().loading
                fallback=move || {
                    view! {
                        <div class="my-recipes-page__gate">
                            <h1>"Sign in required"</h1>
                            <p>"Sign in to see the recipes you have published."</p>
                        </div>
                    }
                }
            >
                <header class="my-recipes-page__header">
                    <h1>"My recipes"</h1>
                    <p>"Everything you have shared with the table."</p>
                </header>

                <Show when=move || loading.get()>
                    <p class="my-recipes-page__status">"Loading your recipes..."</p>
                </Show>

                <Show when=move || !loading.get() && my_recipes.get().is_empty()>
                    <div class="my-recipes-page__empty">
                        <p>"You have not published any recipes yet."</p>
                        <a class="btn btn--primary" href="/create">"Share your first recipe"</a>
                    </div>
                </Show>

                <div class="recipe-grid">
                    {move || {
                        my_recipes
                            .get()
                            .into_iter()
                            .map(|recipe| {
                                let id = recipe.id.clone();
                                let is_favorite = Signal::derive(move || {
                                    favorite_ids.get().contains(&id)
                                });
                                view! {
                                    <MyRecipeCard
                                        recipe=recipe
                                        is_favorite=is_favorite
                                        on_favorite_toggle=on_favorite_toggle
                                        on_delete=on_delete
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </div>
    }
}
