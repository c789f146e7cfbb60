use super::*;

fn recipe_by(user_name: &str, avatar: Option<&str>) -> Recipe {
    Recipe {
        id: "r1".to_owned(),
        title: "Paella".to_owned(),
        description: None,
        category_id: None,
        category_name: None,
        image_url: None,
        ingredients: None,
        prep_time: None,
        cook_time: None,
        servings: None,
        difficulty: None,
        preparation: None,
        created_at: "2025-01-01T00:00:00Z".to_owned(),
        user_id: "u7".to_owned(),
        user_name: user_name.to_owned(),
        user_avatar: avatar.map(str::to_owned),
    }
}

#[test]
fn fetched_profile_wins() {
    let fetched = PublicUser { id: "u7".to_owned(), name: "Ana".to_owned(), avatar_url: None };
    let resolved = resolve_profile("u7", Some(fetched.clone()), &[recipe_by("Stale", None)]);
    assert_eq!(resolved, Some(fetched));
}

#[test]
fn falls_back_to_recipe_author_fields() {
    let resolved = resolve_profile("u7", None, &[recipe_by("Ana", Some("/a.jpg"))]);
    let resolved = resolved.unwrap();
    assert_eq!(resolved.id, "u7");
    assert_eq!(resolved.name, "Ana");
    assert_eq!(resolved.avatar_url.as_deref(), Some("/a.jpg"));
}

#[test]
fn nothing_to_resolve_without_endpoint_or_recipes() {
    assert_eq!(resolve_profile("u7", None, &[]), None);
}
