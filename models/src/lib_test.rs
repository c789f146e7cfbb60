use super::*;

// =============================================================
// Serde shape: camelCase wire fields
// =============================================================

#[test]
fn user_round_trips_camel_case() {
    let json = r#"{"id":"u1","name":"Ana","email":"ana@example.com","avatarUrl":"/a.jpg"}"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.name, "Ana");
    assert_eq!(user.avatar_url.as_deref(), Some("/a.jpg"));

    let back = serde_json::to_string(&user).unwrap();
    assert!(back.contains("\"avatarUrl\""));
    assert!(!back.contains("avatar_url"));
}

#[test]
fn user_avatar_defaults_to_none() {
    let json = r#"{"id":"u1","name":"Ana","email":"ana@example.com"}"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.avatar_url, None);
}

#[test]
fn recipe_deserializes_minimal_payload() {
    let json = r#"{
        "id": "r1",
        "title": "Paella",
        "createdAt": "2025-03-01T10:00:00Z",
        "userId": "u1",
        "userName": "Ana"
    }"#;
    let recipe: Recipe = serde_json::from_str(json).unwrap();
    assert_eq!(recipe.title, "Paella");
    assert_eq!(recipe.description, None);
    assert_eq!(recipe.ingredients, None);
    assert_eq!(recipe.servings, None);
    assert_eq!(recipe.difficulty, None);
}

#[test]
fn recipe_deserializes_full_payload() {
    let json = r#"{
        "id": "r1",
        "title": "Paella",
        "description": "Classic",
        "categoryId": 3,
        "categoryName": "Mains",
        "imageUrl": "/img/r1.jpg",
        "ingredients": [{"name": "rice", "amount": "200 g"}],
        "prepTime": "20 min",
        "cookTime": "40 min",
        "servings": 4,
        "difficulty": "medium",
        "preparation": "Cook it.",
        "createdAt": "2025-03-01T10:00:00Z",
        "userId": "u1",
        "userName": "Ana",
        "userAvatar": "/img/u1.jpg"
    }"#;
    let recipe: Recipe = serde_json::from_str(json).unwrap();
    assert_eq!(recipe.category_id, Some(3));
    assert_eq!(recipe.servings, Some(4));
    assert_eq!(recipe.difficulty, Some(Difficulty::Medium));
    assert_eq!(recipe.ingredients.as_ref().unwrap().len(), 1);
}

#[test]
fn recipe_accepts_float_shaped_integers() {
    let json = r#"{
        "id": "r1",
        "title": "Paella",
        "categoryId": 3.0,
        "servings": 4.0,
        "createdAt": "2025-03-01T10:00:00Z",
        "userId": "u1",
        "userName": "Ana"
    }"#;
    let recipe: Recipe = serde_json::from_str(json).unwrap();
    assert_eq!(recipe.category_id, Some(3));
    assert_eq!(recipe.servings, Some(4));
}

#[test]
fn recipe_rejects_fractional_servings() {
    let json = r#"{
        "id": "r1",
        "title": "Paella",
        "servings": 4.5,
        "createdAt": "2025-03-01T10:00:00Z",
        "userId": "u1",
        "userName": "Ana"
    }"#;
    assert!(serde_json::from_str::<Recipe>(json).is_err());
}

#[test]
fn rating_summary_count_accepts_float() {
    let summary: RatingSummary = serde_json::from_str(r#"{"average":4.5,"count":2.0}"#).unwrap();
    assert_eq!(summary.count, 2);
    assert!((summary.average - 4.5).abs() < f64::EPSILON);
}

#[test]
fn rating_summary_default_is_unrated() {
    let summary = RatingSummary::default();
    assert_eq!(summary.count, 0);
    assert!(summary.average.abs() < f64::EPSILON);
}

#[test]
fn user_rating_handles_null() {
    let rating: UserRating = serde_json::from_str(r#"{"rating":null}"#).unwrap();
    assert_eq!(rating.rating, None);
    let rating: UserRating = serde_json::from_str(r#"{"rating":4}"#).unwrap();
    assert_eq!(rating.rating, Some(4));
}

#[test]
fn favorite_uses_camel_case_keys() {
    let favorite: Favorite =
        serde_json::from_str(r#"{"userId":"u1","recipeId":"r9"}"#).unwrap();
    assert_eq!(favorite.recipe_id, "r9");
}

#[test]
fn comment_round_trips() {
    let json = r#"{
        "id": "c1",
        "content": "Great!",
        "createdAt": "2025-03-02T18:30:00Z",
        "userId": "u2",
        "userName": "Ben"
    }"#;
    let comment: Comment = serde_json::from_str(json).unwrap();
    assert_eq!(comment.user_name, "Ben");
    assert_eq!(comment.user_avatar, None);
}

#[test]
fn recipe_update_omits_unset_fields() {
    let update = RecipeUpdate { title: "Paella".to_owned(), ..RecipeUpdate::default() };
    let json = serde_json::to_string(&update).unwrap();
    assert_eq!(json, r#"{"title":"Paella"}"#);
}

#[test]
fn recipe_update_serializes_set_fields_camel_case() {
    let update = RecipeUpdate {
        title: "Paella".to_owned(),
        category_id: Some(3),
        difficulty: Some(Difficulty::Easy),
        ..RecipeUpdate::default()
    };
    let json = serde_json::to_string(&update).unwrap();
    assert!(json.contains("\"categoryId\":3"));
    assert!(json.contains("\"difficulty\":\"easy\""));
}

#[test]
fn profile_update_with_and_without_avatar() {
    let bare = ProfileUpdate { name: "Ana".to_owned(), avatar_url: None };
    assert_eq!(serde_json::to_string(&bare).unwrap(), r#"{"name":"Ana"}"#);

    let full = ProfileUpdate { name: "Ana".to_owned(), avatar_url: Some("/a.jpg".to_owned()) };
    assert!(serde_json::to_string(&full).unwrap().contains("\"avatarUrl\":\"/a.jpg\""));
}

// =============================================================
// Difficulty
// =============================================================

#[test]
fn difficulty_wire_values_are_lowercase() {
    assert_eq!(serde_json::to_string(&Difficulty::Easy).unwrap(), "\"easy\"");
    assert_eq!(serde_json::to_string(&Difficulty::Hard).unwrap(), "\"hard\"");
}

#[test]
fn difficulty_parses_from_wire_value() {
    assert_eq!("medium".parse::<Difficulty>(), Ok(Difficulty::Medium));
    assert_eq!("Fácil".parse::<Difficulty>(), Err(()));
    assert_eq!("".parse::<Difficulty>(), Err(()));
}

#[test]
fn difficulty_display_matches_as_str() {
    for d in Difficulty::ALL {
        assert_eq!(d.to_string(), d.as_str());
    }
}

#[test]
fn difficulty_labels_are_capitalized() {
    assert_eq!(Difficulty::Easy.label(), "Easy");
    assert_eq!(Difficulty::Medium.label(), "Medium");
    assert_eq!(Difficulty::Hard.label(), "Hard");
}

// =============================================================
// Security questions
// =============================================================

#[test]
fn fallback_questions_are_nonempty_and_numbered_from_one() {
    let questions = fallback_security_questions();
    assert_eq!(questions.len(), 10);
    assert_eq!(questions[0].id, 1);
    assert_eq!(questions[9].id, 10);
    assert!(questions.iter().all(|q| !q.question.is_empty()));
}

#[test]
fn security_question_id_accepts_float() {
    let q: SecurityQuestion =
        serde_json::from_str(r#"{"id":2.0,"question":"Where?"}"#).unwrap();
    assert_eq!(q.id, 2);
}
