//! Search controls for the home page: query, ingredient, category,
//! difficulty.

#[cfg(test)]
#[path = "recipe_search_test.rs"]
mod recipe_search_test;

use leptos::prelude::*;

use models::{Category, Difficulty};

use crate::util::search::SearchFilter;

/// Assemble a [`SearchFilter`] from the raw control values. The difficulty
/// select reports wire values (`easy`/...); anything unparsable means
/// "no constraint".
#[must_use]
pub fn build_filter(
    query: &str,
    ingredient: &str,
    category: &str,
    difficulty: &str,
) -> SearchFilter {
    SearchFilter {
        query: query.to_owned(),
        ingredient: ingredient.to_owned(),
        category: category.to_owned(),
        difficulty: difficulty.parse::<Difficulty>().ok(),
    }
}

#[component]
pub fn RecipeSearch(
    #[prop(into)] categories: Signal<Vec<Category>>,
    #[prop(into)] initial_category: Signal<String>,
    on_search: Callback<SearchFilter>,
) -> impl IntoView {
    let query = RwSignal::new(String::new());
    let ingredient = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let difficulty = RwSignal::new(String::new());

    // A `?category=` link preselects the category control.
    Effect::new(move || {
        let preset = initial_category.get();
        if !preset.is_empty() {
            category.set(preset);
        }
    });

    let submit = Callback::new(move |()| {
        on_search.run(build_filter(
            &query.get_untracked(),
            &ingredient.get_untracked(),
            &category.get_untracked(),
            &difficulty.get_untracked(),
        ));
    });

    let on_clear = move |_| {
        query.set(String::new());
        ingredient.set(String::new());
        category.set(String::new());
        difficulty.set(String::new());
        on_search.run(SearchFilter::default());
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            submit.run(());
        }
    };

    let has_filters = move || {
        !query.get().is_empty()
            || !ingredient.get().is_empty()
            || !category.get().is_empty()
            || !difficulty.get().is_empty()
    };

    view! {
        <div class="recipe-search">
            <input
                class="recipe-search__input recipe-search__input--query"
                type="search"
                placeholder="Search recipes by name..."
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <input
                class="recipe-search__input"
                type="text"
                placeholder="Ingredient..."
                prop:value=move || ingredient.get()
                on:input=move |ev| ingredient.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <select
                class="recipe-search__select"
                prop:value=move || category.get()
                on:change=move |ev| category.set(event_target_value(&ev))
            >
                <option value="">"Category"</option>
                {move || {
                    categories
                        .get()
                        .into_iter()
                        .map(|cat| {
                            view! { <option value=cat.name.clone()>{cat.name.clone()}</option> }
                        })
                        .collect::<Vec<_>>()
                }}
            </select>
            <select
                class="recipe-search__select"
                prop:value=move || difficulty.get()
                on:change=move |ev| difficulty.set(event_target_value(&ev))
            >
                <option value="">"Difficulty"</option>
                {Difficulty::ALL
                    .into_iter()
                    .map(|d| {
                        view! { <option value=d.as_str()>{d.label()}</option> }
                    })
                    .collect::<Vec<_>>()}
            </select>
            <button class="btn btn--primary recipe-search__submit" on:click=move |_| submit.run(())>
                "Search"
            </button>
            <Show when=has_filters>
                <button
                    class="btn recipe-search__clear"
                    on:click=on_clear
                    title="Clear filters"
                >
                    "✕"
                </button>
            </Show>
        </div>
    }
}
