//! Home page: carousel, search controls, and the recipe grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only page that loads the full recipe list; search filters it
//! client-side without further requests. A `?category=` query parameter
//! (from category badges elsewhere) preselects the category filter.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use models::{Category, Recipe};

use crate::components::recipe_card::RecipeCard;
use crate::components::recipe_carousel::RecipeCarousel;
use crate::components::recipe_search::RecipeSearch;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::carousel::FEATURED_COUNT;
use crate::util::search::{SearchFilter, filter_recipes};

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let query = use_query_map();

    let all_recipes = RwSignal::new(Vec::<Recipe>::new());
    let shown = RwSignal::new(Vec::<Recipe>::new());
    let categories = RwSignal::new(Vec::<Category>::new());
    let favorites = RwSignal::new(Vec::<String>::new());
    let loading = RwSignal::new(true);

    let initial_category =
        Signal::derive(move || query.read().get("category").unwrap_or_default());

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            if let Some(recipes) = crate::net::api::fetch_recipes().await {
                let preset = initial_category.get_untracked();
                if preset.is_empty() {
                    shown.set(recipes.clone());
                } else {
                    let filter = SearchFilter { category: preset, ..SearchFilter::default() };
                    shown.set(filter_recipes(&recipes, &filter));
                    if let Some(section) = web_sys::window()
                        .and_then(|w| w.document())
                        .and_then(|d| d.get_element_by_id("results"))
                    {
                        section.scroll_into_view();
                    }
                }
                all_recipes.set(recipes);
            }
            loading.set(false);
            if let Some(loaded) = crate::net::api::fetch_categories().await {
                categories.set(loaded);
            }
        });

        // Favorites arrive once the session restore surfaces a user.
        let favorites_loaded = RwSignal::new(false);
        Effect::new(move || {
            let Some(user_id) = auth.get().user_id() else {
                return;
            };
            if favorites_loaded.get_untracked() {
                return;
            }
            favorites_loaded.set(true);
            leptos::task::spawn_local(async move {
                if let Some(rows) = crate::net::api::fetch_favorites(&user_id).await {
                    favorites.set(rows.into_iter().map(|f| f.recipe_id).collect());
                }
            });
        });
    }

    let on_search = Callback::new(move |filter: SearchFilter| {
        shown.set(filter_recipes(&all_recipes.get_untracked(), &filter));
    });

    let on_favorite_toggle = Callback::new(move |recipe_id: String| {
        let Some(user_id) = auth.get_untracked().user_id() else {
            return;
        };
        let currently = favorites.get_untracked().contains(&recipe_id);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::toggle_favorite(&user_id, &recipe_id, currently).await {
                Ok(true) => favorites.update(|f| f.push(recipe_id)),
                Ok(false) => favorites.update(|f| f.retain(|id| *id != recipe_id)),
                Err(e) => crate::components::toast::show(
                    ui,
                    crate::state::ui::ToastKind::Error,
                    e,
                ),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user_id, recipe_id, currently, ui);
        }
    });

    let featured = Signal::derive(move || {
        all_recipes.get().into_iter().take(FEATURED_COUNT).collect::<Vec<_>>()
    });

    let heading = move || {
        let total = all_recipes.get().len();
        let found = shown.get().len();
        if found == total {
            "All recipes".to_owned()
        } else {
            format!("{found} recipes found")
        }
    };

    view! {
        <div class="home-page">
            <section class="home-page__carousel">
                <RecipeCarousel recipes=featured/>
            </section>

            <section class="home-page__search">
                <h2>"Discover delicious recipes"</h2>
                <p class="home-page__search-blurb">
                    "Search by name, category, or ingredient to find your next favorite meal."
                </p>
                <RecipeSearch
                    categories=categories
                    initial_category=initial_category
                    on_search=on_search
                />
            </section>

            <section class="home-page__results" id="results">
                <h2>{heading}</h2>
                <Show when=move || loading.get()>
                    <p class="home-page__status">"Loading recipes..."</p>
                </Show>
                <Show when=move || !loading.get() && shown.get().is_empty()>
                    <p class="home-page__status">
                        "No recipes found. Try different search terms."
                    </p>
                </Show>
                <div class="recipe-grid">
                    {move || {
                        shown
                            .get()
                            .into_iter()
                            .map(|recipe| {
                                let id = recipe.id.clone();
                                let is_favorite = Signal::derive(move || {
                                    favorites.get().contains(&id)
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
            </section>
        </div>
    }
}
