//! Shared create/edit recipe form.
//!
//! ARCHITECTURE
//! ============
//! One component serves both flows. Creation posts a single multipart
//! request (`/api/recipes/with-image`); editing uploads a replacement image
//! first (when one was picked) and then PUTs the JSON update. Ingredient
//! rows re-render only on add/remove: row text lives in the DOM inputs and
//! is read back untracked, so typing never drops focus.

#[cfg(test)]
#[path = "recipe_form_test.rs"]
mod recipe_form_test;

use leptos::prelude::*;

use models::{Category, Difficulty, Ingredient, Recipe, validate};

use crate::state::ui::UiState;

/// Parse the category select value (`""` means unset).
#[must_use]
pub fn parsed_category(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// Parse the servings field; zero, negatives, and garbage mean unset.
#[must_use]
pub fn parsed_servings(raw: &str) -> Option<i64> {
    match raw.trim().parse::<i64>() {
        Ok(n) if n > 0 => Some(n),
        _ => None,
    }
}

/// Trimmed string, or `None` when blank.
#[must_use]
pub fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

#[cfg(feature = "hydrate")]
#[allow(clippy::too_many_arguments)]
fn build_create_form(
    user_id: &str,
    title: &str,
    description: Option<&str>,
    category_id: i64,
    prep_time: Option<&str>,
    cook_time: Option<&str>,
    servings: Option<i64>,
    difficulty: Difficulty,
    preparation: Option<&str>,
    ingredients: &[Ingredient],
    image: Option<&web_sys::File>,
) -> Result<web_sys::FormData, String> {
    let form = web_sys::FormData::new().map_err(|_| "form construction failed".to_owned())?;
    let set = |key: &str, value: &str| {
        drop(form.append_with_str(key, value));
    };
    set("userId", user_id);
    set("title", title);
    if let Some(description) = description {
        set("description", description);
    }
    set("categoryId", &category_id.to_string());
    if let Some(prep_time) = prep_time {
        set("prepTime", prep_time);
    }
    if let Some(cook_time) = cook_time {
        set("cookTime", cook_time);
    }
    if let Some(servings) = servings {
        set("servings", &servings.to_string());
    }
    set("difficulty", difficulty.as_str());
    if let Some(preparation) = preparation {
        set("preparation", preparation);
    }
    if !ingredients.is_empty() {
        let json = serde_json::to_string(ingredients).map_err(|e| e.to_string())?;
        set("ingredients", &json);
    }
    if let Some(file) = image {
        form.append_with_blob_and_filename("image", file, &file.name())
            .map_err(|_| "form construction failed".to_owned())?;
    }
    Ok(form)
}

/// Recipe form used by both the create and edit pages. `existing` switches
/// the component into edit mode; `on_success` receives the recipe id.
#[component]
pub fn RecipeForm(
    user_id: String,
    #[prop(optional)] existing: Option<Recipe>,
    on_success: Callback<String>,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let editing_id = existing.as_ref().map(|r| r.id.clone());
    let existing_image_url = existing.as_ref().and_then(|r| r.image_url.clone());

    let title = RwSignal::new(existing.as_ref().map(|r| r.title.clone()).unwrap_or_default());
    let description = RwSignal::new(
        existing.as_ref().and_then(|r| r.description.clone()).unwrap_or_default(),
    );
    let category_id = RwSignal::new(
        existing
            .as_ref()
            .and_then(|r| r.category_id)
            .map(|id| id.to_string())
            .unwrap_or_default(),
    );
    let prep_time =
        RwSignal::new(existing.as_ref().and_then(|r| r.prep_time.clone()).unwrap_or_default());
    let cook_time =
        RwSignal::new(existing.as_ref().and_then(|r| r.cook_time.clone()).unwrap_or_default());
    let servings = RwSignal::new(
        existing
            .as_ref()
            .and_then(|r| r.servings)
            .map(|n| n.to_string())
            .unwrap_or_default(),
    );
    let difficulty = RwSignal::new(
        existing
            .as_ref()
            .and_then(|r| r.difficulty)
            .map(|d| d.as_str().to_owned())
            .unwrap_or_default(),
    );
    let preparation = RwSignal::new(
        existing.as_ref().and_then(|r| r.preparation.clone()).unwrap_or_default(),
    );

    let initial_rows = existing
        .as_ref()
        .and_then(|r| r.ingredients.clone())
        .filter(|rows| !rows.is_empty())
        .unwrap_or_else(|| vec![Ingredient { name: String::new(), amount: String::new() }]);
    let row_count = RwSignal::new(initial_rows.len());
    let ingredients = RwSignal::new(initial_rows);

    let categories = RwSignal::new(Vec::<Category>::new());
    let error = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let preview_url = RwSignal::new(existing_image_url.clone());

    #[cfg(feature = "hydrate")]
    let image_file = RwSignal::new_local(None::<web_sys::File>);

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            if let Some(loaded) = crate::net::api::fetch_categories().await {
                categories.set(loaded);
            }
        });
    }

    let add_row = move |_| {
        ingredients.update(|rows| {
            rows.push(Ingredient { name: String::new(), amount: String::new() });
        });
        row_count.update(|n| *n += 1);
    };

    let on_image_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(file) = input.files().and_then(|list| list.get(0)) else {
                return;
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let size = file.size() as u64;
            if let Err(e) = validate::image_file(size, &file.type_()) {
                crate::components::toast::show(
                    ui,
                    crate::state::ui::ToastKind::Error,
                    e.to_string(),
                );
                input.set_value("");
                return;
            }
            if let Ok(url) = web_sys::Url::create_object_url_with_blob(&file) {
                if let Some(old) = preview_url.get_untracked() {
                    if old.starts_with("blob:") {
                        let _ = web_sys::Url::revoke_object_url(&old);
                    }
                }
                preview_url.set(Some(url));
            }
            image_file.set(Some(file));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, ui);
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        error.set(String::new());

        let parsed_cat = parsed_category(&category_id.get_untracked());
        let parsed_difficulty = difficulty.get_untracked().parse::<Difficulty>().ok();
        if let Err(e) = validate::recipe_required(
            &title.get_untracked(),
            parsed_cat,
            parsed_difficulty.is_some(),
            &description.get_untracked(),
        ) {
            error.set(e.to_string());
            return;
        }
        submitting.set(true);

        #[cfg(feature = "hydrate")]
        {
            let user_id = user_id.clone();
            let editing_id = editing_id.clone();
            let existing_image_url = existing_image_url.clone();
            leptos::task::spawn_local(async move {
                let rows = validate::usable_ingredients(&ingredients.get_untracked());
                let title_value = title.get_untracked().trim().to_owned();
                let description_value = non_empty(&description.get_untracked());
                let prep_value = non_empty(&prep_time.get_untracked());
                let cook_value = non_empty(&cook_time.get_untracked());
                let preparation_value = non_empty(&preparation.get_untracked());
                let servings_value = parsed_servings(&servings.get_untracked());
                let category_value = parsed_cat.unwrap_or_default();
                let difficulty_value = parsed_difficulty.unwrap_or(Difficulty::Easy);

                let outcome = if let Some(recipe_id) = editing_id {
                    let mut image_url = existing_image_url;
                    if let Some(file) = image_file.get_untracked() {
                        match crate::net::api::upload_image(&file, &file.name()).await {
                            Ok(url) => image_url = Some(url),
                            Err(e) => {
                                error.set(e);
                                submitting.set(false);
                                return;
                            }
                        }
                    }
                    let update = models::RecipeUpdate {
                        title: title_value,
                        description: description_value,
                        category_id: Some(category_value),
                        prep_time: prep_value,
                        cook_time: cook_value,
                        servings: servings_value,
                        difficulty: Some(difficulty_value),
                        preparation: preparation_value,
                        ingredients: Some(rows),
                        image_url,
                    };
                    crate::net::api::update_recipe(&recipe_id, &update).await.map(|r| r.id)
                } else {
                    let form = build_create_form(
                        &user_id,
                        &title_value,
                        description_value.as_deref(),
                        category_value,
                        prep_value.as_deref(),
                        cook_value.as_deref(),
                        servings_value,
                        difficulty_value,
                        preparation_value.as_deref(),
                        &rows,
                        image_file.get_untracked().as_ref(),
                    );
                    match form {
                        Ok(form) => crate::net::api::create_recipe_with_image(form).await.map(|r| r.id),
                        Err(e) => Err(e),
                    }
                };

                match outcome {
                    Ok(id) => on_success.run(id),
                    Err(e) => {
                        error.set(e.clone());
                        crate::components::toast::show(
                            ui,
                            crate::state::ui::ToastKind::Error,
                            e,
                        );
                    }
                }
                submitting.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&user_id, &editing_id);
            submitting.set(false);
        }
    };

    let description_counter = move || {
        format!("{}/{}", description.get().chars().count(), validate::MAX_DESCRIPTION_LEN)
    };

    view! {
        <form class="recipe-form" on:submit=on_submit>
            <Show when=move || !error.get().is_empty()>
                <p class="recipe-form__error">{move || error.get()}</p>
            </Show>

            <label class="recipe-form__label">
                "Title *"
                <input
                    class="recipe-form__input"
                    type="text"
                    placeholder="e.g. Paella Valenciana"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
            </label>

            <label class="recipe-form__label">
                <span class="recipe-form__label-row">
                    "Description"
                    <span
                        class="recipe-form__counter"
                        class:recipe-form__counter--over=move || {
                            description.get().chars().count() > validate::MAX_DESCRIPTION_LEN
                        }
                    >
                        {description_counter}
                    </span>
                </span>
                <textarea
                    class="recipe-form__textarea"
                    placeholder="Describe your recipe..."
                    rows="4"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
            </label>

            <div class="recipe-form__grid">
                <label class="recipe-form__label">
                    "Category *"
                    <select
                        class="recipe-form__select"
                        prop:value=move || category_id.get()
                        on:change=move |ev| category_id.set(event_target_value(&ev))
                    >
                        <option value="">"Pick a category..."</option>
                        {move || {
                            categories
                                .get()
                                .into_iter()
                                .map(|cat| {
                                    view! {
                                        <option value=cat.id.to_string()>{cat.name}</option>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>

                <label class="recipe-form__label">
                    "Difficulty *"
                    <select
                        class="recipe-form__select"
                        prop:value=move || difficulty.get()
                        on:change=move |ev| difficulty.set(event_target_value(&ev))
                    >
                        <option value="">"Pick a difficulty..."</option>
                        {Difficulty::ALL
                            .into_iter()
                            .map(|d| view! { <option value=d.as_str()>{d.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>

                <label class="recipe-form__label">
                    "Prep time"
                    <input
                        class="recipe-form__input"
                        type="text"
                        placeholder="e.g. 20 min"
                        prop:value=move || prep_time.get()
                        on:input=move |ev| prep_time.set(event_target_value(&ev))
                    />
                </label>

                <label class="recipe-form__label">
                    "Cook time"
                    <input
                        class="recipe-form__input"
                        type="text"
                        placeholder="e.g. 40 min"
                        prop:value=move || cook_time.get()
                        on:input=move |ev| cook_time.set(event_target_value(&ev))
                    />
                </label>

                <label class="recipe-form__label">
                    "Servings"
                    <input
                        class="recipe-form__input"
                        type="number"
                        min="1"
                        placeholder="4"
                        prop:value=move || servings.get()
                        on:input=move |ev| servings.set(event_target_value(&ev))
                    />
                </label>
            </div>

            <fieldset class="recipe-form__ingredients">
                <legend>"Ingredients"</legend>
                {move || {
                    let count = row_count.get();
                    (0..count)
                        .map(|index| {
                            let name_value = move || {
                                ingredients.with_untracked(|rows| {
                                    rows.get(index).map(|r| r.name.clone()).unwrap_or_default()
                                })
                            };
                            let amount_value = move || {
                                ingredients.with_untracked(|rows| {
                                    rows.get(index).map(|r| r.amount.clone()).unwrap_or_default()
                                })
                            };
                            view! {
                                <div class="recipe-form__ingredient-row">
                                    <input
                                        class="recipe-form__input"
                                        type="text"
                                        placeholder="Ingredient"
                                        prop:value=name_value
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            ingredients.update_untracked(|rows| {
                                                if let Some(row) = rows.get_mut(index) {
                                                    row.name = value;
                                                }
                                            });
                                        }
                                    />
                                    <input
                                        class="recipe-form__input"
                                        type="text"
                                        placeholder="Amount"
                                        prop:value=amount_value
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            ingredients.update_untracked(|rows| {
                                                if let Some(row) = rows.get_mut(index) {
                                                    row.amount = value;
                                                }
                                            });
                                        }
                                    />
                                    <button
                                        type="button"
                                        class="btn recipe-form__remove-row"
                                        disabled=move || row_count.get() <= 1
                                        on:click=move |_| {
                                            ingredients.update(|rows| {
                                                if rows.len() > 1 {
                                                    rows.remove(index);
                                                }
                                            });
                                            row_count.update(|n| *n = (*n - 1).max(1));
                                        }
                                        aria-label="Remove ingredient"
                                    >
                                        "✕"
                                    </button>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <button type="button" class="btn recipe-form__add-row" on:click=add_row>
                    "+ Add ingredient"
                </button>
            </fieldset>

            <label class="recipe-form__label">
                "Preparation"
                <textarea
                    class="recipe-form__textarea"
                    placeholder="Step-by-step preparation..."
                    rows="8"
                    prop:value=move || preparation.get()
                    on:input=move |ev| preparation.set(event_target_value(&ev))
                ></textarea>
            </label>

            <div class="recipe-form__image">
                <label class="recipe-form__label">
                    "Cover image"
                    <input
                        class="recipe-form__file"
                        type="file"
                        accept="image/*"
                        on:change=on_image_change
                    />
                </label>
                <Show when=move || preview_url.get().is_some()>
                    <img
                        class="recipe-form__preview"
                        src=move || preview_url.get().unwrap_or_default()
                        alt="Recipe image preview"
                    />
                </Show>
            </div>

            <button
                class="btn btn--primary recipe-form__submit"
                type="submit"
                disabled=move || submitting.get()
            >
                {move || if submitting.get() { "Saving..." } else { "Save recipe" }}
            </button>
        </form>
    }
}
