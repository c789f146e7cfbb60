//! Owner's recipe card with edit and delete actions.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use models::Recipe;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::state::ui::UiState;

/// Card variant for the my-recipes page: favorite heart plus edit/delete
/// buttons, with a confirmation dialog before deletion.
#[component]
pub fn MyRecipeCard(
    recipe: Recipe,
    #[prop(into)] is_favorite: Signal<bool>,
    on_favorite_toggle: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let recipe_id = recipe.id.clone();
    let title = recipe.title.clone();
    let href = format!("/recipe/{}", recipe.id);
    let edit_path = format!("/recipe/{}/edit", recipe.id);
    let image = recipe.image_url.clone().unwrap_or_else(|| "/placeholder.svg".to_owned());
    let description = recipe
        .description
        .clone()
        .unwrap_or_else(|| "No description".to_owned());
    let category = recipe.category_name.clone();
    let prep_time = recipe.prep_time.clone();
    let servings = recipe.servings;
    let difficulty = recipe.difficulty;

    let confirm_open = RwSignal::new(false);
    let deleting = RwSignal::new(false);

    let heart_id = recipe_id.clone();
    let on_heart = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        on_favorite_toggle.run(heart_id.clone());
    };

    let on_edit = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        navigate(&edit_path, NavigateOptions::default());
    };

    let on_delete_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        confirm_open.set(true);
    };

    let on_cancel = Callback::new(move |()| confirm_open.set(false));

    let delete_id = recipe_id.clone();
    let on_confirm = Callback::new(move |()| {
        if deleting.get_untracked() {
            return;
        }
        deleting.set(true);
        let id = delete_id.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_recipe(&id).await {
                Ok(()) => {
                    confirm_open.set(false);
                    on_delete.run(id);
                }
                Err(e) => crate::components::toast::show(
                    ui,
                    crate::state::ui::ToastKind::Error,
                    e,
                ),
            }
            deleting.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, ui);
        }
    });

    view! {
        <a class="recipe-card recipe-card--own" href=href>
            <div class="recipe-card__media">
                <img class="recipe-card__image" src=image alt=title.clone()/>
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
                    {difficulty.map(|d| {
                        view! { <span class="recipe-card__difficulty">{d.label()}</span> }
                    })}
                </div>
            </div>
            <div class="recipe-card__footer recipe-card__footer--actions">
                <button class="btn recipe-card__action" on:click=on_edit>
                    "Edit"
                </button>
                <button
                    class="btn recipe-card__action recipe-card__action--danger"
                    on:click=on_delete_click
                >
                    "Delete"
                </button>
            </div>
        </a>

        <Show when=move || confirm_open.get()>
            <ConfirmDialog
                title="Are you sure?"
                message=format!(
                    "This cannot be undone. The recipe \"{title}\" will be permanently deleted.",
                )
                confirm_label="Delete"
                busy=deleting
                on_cancel=on_cancel
                on_confirm=on_confirm
            />
        </Show>
    }
}
