//! Recipe card for grid views.
//!
//! DESIGN
//! ======
//! Keeps recipe list presentation consistent between home, favorites, and
//! public profiles. Each card lazily loads its own rating aggregate so grid
//! pages stay a single recipes request.

use leptos::prelude::*;

use models::{RatingSummary, Recipe};

use crate::components::avatar::Avatar;
use crate::components::star_rating::StarRating;
use crate::components::toast;
use crate::state::auth::AuthState;
use crate::state::ui::{ToastKind, UiState};

/// A clickable card linking to the recipe detail page, with a favorite
/// heart and an interactive rating row.
#[component]
pub fn RecipeCard(
    recipe: Recipe,
    #[prop(into)] is_favorite: Signal<bool>,
    on_favorite_toggle: Callback<String>,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let recipe_id = recipe.id.clone();
    let href = format!("/recipe/{}", recipe.id);
    let image = recipe.image_url.clone().unwrap_or_else(|| "/placeholder.svg".to_owned());
    let description = recipe
        .description
        .clone()
        .unwrap_or_else(|| "No description".to_owned());
    let category = recipe.category_name.clone();
    let prep_time = recipe.prep_time.clone();
    let servings = recipe.servings;
    let author_name = recipe.user_name.clone();
    let author_avatar = recipe.user_avatar.clone();

    let summary = RwSignal::new(RatingSummary::default());
    let my_rating = RwSignal::new(None::<u8>);

    #[cfg(feature = "hydrate")]
    {
        let id = recipe_id.clone();
        let user_id = auth.get_untracked().user_id();
        leptos::task::spawn_local(async move {
            if let Some(loaded) = crate::net::api::fetch_rating_summary(&id).await {
                summary.set(loaded);
            }
            if let Some(user_id) = user_id {
                if let Some(mine) = crate::net::api::fetch_my_rating(&user_id, &id).await {
                    my_rating.set(mine.rating);
                }
            }
        });
    }

    let rate_id = recipe_id.clone();
    let on_rate = Callback::new(move |value: u8| {
        let Some(user_id) = auth.get_untracked().user_id() else {
            toast::show(ui, ToastKind::Error, "Sign in to rate recipes");
            return;
        };
        let id = rate_id.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::rate_recipe(&user_id, &id, value).await {
                Ok(()) => {
                    my_rating.set(Some(value));
                    if let Some(refreshed) = crate::net::api::fetch_rating_summary(&id).await {
                        summary.set(refreshed);
                    }
                }
                Err(e) => toast::show(ui, ToastKind::Error, e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user_id, id, value);
        }
    });

    let heart_id = recipe_id.clone();
    let on_heart = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        if !auth.get_untracked().is_authenticated() {
            toast::show(ui, ToastKind::Error, "Sign in to save favorites");
            return;
        }
        on_favorite_toggle.run(heart_id.clone());
    };

    view! {
        <a class="recipe-card" href=href>
            <div class="recipe-card__media">
                <img class="recipe-card__image" src=image alt=recipe.title.clone()/>
                <button
                    class="recipe-card__heart"
                    class:recipe-card__heart--active=move || is_favorite.get()
                    on:click=on_heart
                    title="Save to favorites"
                    aria-label="Save to favorites"
                >
                    {move || if is_favorite.get() { "♥" } else { "♡" }}
                </button>
                {category.map(|name| view! { <span class="recipe-card__badge">{name}</span> })}
            </div>
            <div class="recipe-card__body">
                <h3 class="recipe-card__title">{recipe.title}</h3>
                <p class="recipe-card__description">{description}</p>
                <div class="recipe-card__meta">
                    {prep_time.map(|t| {
                        view! { <span class="recipe-card__meta-item">"⏱ " {t}</span> }
                    })}
                    {servings.map(|s| {
                        view! { <span class="recipe-card__meta-item">"👥 " {s}</span> }
                    })}
                    <span class="recipe-card__rating">
                        <StarRating
                            rating=my_rating
                            can_rate=Signal::derive(move || auth.get().is_authenticated())
                            on_rate=on_rate
                            compact=true
                        />
                        <span class="recipe-card__rating-average">
                            {move || {
                                let s = summary.get();
                                format!("{:.1} ({})", s.average, s.count)
                            }}
                        </span>
                    </span>
                </div>
            </div>
            <div class="recipe-card__footer">
                <Avatar name=author_name.clone() src=author_avatar/>
                <span class="recipe-card__author">{author_name}</span>
            </div>
        </a>
    }
}
