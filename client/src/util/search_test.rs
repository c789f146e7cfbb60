use super::*;
use models::Ingredient;

fn recipe(title: &str, description: Option<&str>, category: Option<&str>) -> Recipe {
    Recipe {
        id: format!("id-{title}"),
        title: title.to_owned(),
        description: description.map(str::to_owned),
        category_id: None,
        category_name: category.map(str::to_owned),
        image_url: None,
        ingredients: None,
        prep_time: None,
        cook_time: None,
        servings: None,
        difficulty: None,
        preparation: None,
        created_at: "2025-01-01T00:00:00Z".to_owned(),
        user_id: "u1".to_owned(),
        user_name: "Ana".to_owned(),
        user_avatar: None,
    }
}

fn with_ingredients(mut r: Recipe, names: &[&str]) -> Recipe {
    r.ingredients = Some(
        names
            .iter()
            .map(|n| Ingredient { name: (*n).to_owned(), amount: "1".to_owned() })
            .collect(),
    );
    r
}

fn with_difficulty(mut r: Recipe, d: Difficulty) -> Recipe {
    r.difficulty = Some(d);
    r
}

// =============================================================
// is_empty
// =============================================================

#[test]
fn default_filter_is_empty() {
    assert!(SearchFilter::default().is_empty());
}

#[test]
fn whitespace_only_query_counts_as_empty() {
    let filter = SearchFilter { query: "   ".to_owned(), ..SearchFilter::default() };
    assert!(filter.is_empty());
}

#[test]
fn any_set_control_makes_filter_nonempty() {
    let filter = SearchFilter { difficulty: Some(Difficulty::Easy), ..SearchFilter::default() };
    assert!(!filter.is_empty());
}

// =============================================================
// Query matching
// =============================================================

#[test]
fn empty_filter_matches_everything() {
    let recipes = [recipe("Paella", None, None), recipe("Gazpacho", None, None)];
    assert_eq!(filter_recipes(&recipes, &SearchFilter::default()).len(), 2);
}

#[test]
fn query_matches_title_case_insensitively() {
    let recipes = [recipe("Paella Valenciana", None, None), recipe("Gazpacho", None, None)];
    let filter = SearchFilter { query: "paella".to_owned(), ..SearchFilter::default() };
    let found = filter_recipes(&recipes, &filter);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Paella Valenciana");
}

#[test]
fn query_matches_description_too() {
    let recipes = [recipe("Soup", Some("Cold tomato classic"), None)];
    let filter = SearchFilter { query: "TOMATO".to_owned(), ..SearchFilter::default() };
    assert_eq!(filter_recipes(&recipes, &filter).len(), 1);
}

#[test]
fn query_misses_when_neither_field_contains_it() {
    let recipes = [recipe("Soup", Some("Cold tomato classic"), None)];
    let filter = SearchFilter { query: "rice".to_owned(), ..SearchFilter::default() };
    assert!(filter_recipes(&recipes, &filter).is_empty());
}

// =============================================================
// Category / ingredient / difficulty
// =============================================================

#[test]
fn category_matches_exact_name_only() {
    let recipes = [
        recipe("Paella", None, Some("Mains")),
        recipe("Flan", None, Some("Desserts")),
        recipe("Uncategorized", None, None),
    ];
    let filter = SearchFilter { category: "Mains".to_owned(), ..SearchFilter::default() };
    let found = filter_recipes(&recipes, &filter);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Paella");
}

#[test]
fn ingredient_matches_substring_of_name() {
    let recipes = [
        with_ingredients(recipe("Paella", None, None), &["Bomba rice", "saffron"]),
        with_ingredients(recipe("Flan", None, None), &["eggs", "milk"]),
        recipe("NoIngredients", None, None),
    ];
    let filter = SearchFilter { ingredient: "rice".to_owned(), ..SearchFilter::default() };
    let found = filter_recipes(&recipes, &filter);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Paella");
}

#[test]
fn difficulty_matches_exactly_and_skips_unset() {
    let recipes = [
        with_difficulty(recipe("Paella", None, None), Difficulty::Hard),
        with_difficulty(recipe("Flan", None, None), Difficulty::Easy),
        recipe("Unrated", None, None),
    ];
    let filter = SearchFilter { difficulty: Some(Difficulty::Hard), ..SearchFilter::default() };
    let found = filter_recipes(&recipes, &filter);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Paella");
}

#[test]
fn controls_combine_with_and() {
    let recipes = [
        with_difficulty(
            with_ingredients(recipe("Paella", None, Some("Mains")), &["rice"]),
            Difficulty::Medium,
        ),
        with_difficulty(
            with_ingredients(recipe("Risotto", None, Some("Mains")), &["rice"]),
            Difficulty::Hard,
        ),
    ];
    let filter = SearchFilter {
        ingredient: "rice".to_owned(),
        category: "Mains".to_owned(),
        difficulty: Some(Difficulty::Medium),
        ..SearchFilter::default()
    };
    let found = filter_recipes(&recipes, &filter);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Paella");
}
