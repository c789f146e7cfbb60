//! Shared wire DTOs for the external recipe API.
//!
//! DESIGN
//! ======
//! These types mirror the `/api` payloads (camelCase on the wire) so serde
//! round-trips stay lossless and every crate in the workspace speaks the same
//! schema. The backend itself is an external collaborator; nothing here
//! enforces lifecycle, only shape.

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

pub mod validate;

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// The authenticated user as returned by `/api/auth/login` and `/register`.
///
/// This is also the session object the client caches in browser
/// localStorage, so it must stay small and stable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account email; immutable from the client.
    pub email: String,
    /// Avatar image URL, if one has been uploaded.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Public projection of a user, served by `GET /api/users/:id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// A single ingredient row of a recipe.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name (e.g. `"rice"`).
    pub name: String,
    /// Free-form amount (e.g. `"200 g"`, `"2 cups"`).
    pub amount: String,
}

/// Recipe difficulty. Wire values are lowercase English.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All variants in menu order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Human-readable label for selects and badges.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Wire value, as serde serializes it.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(()),
        }
    }
}

/// A recipe as served by `GET /api/recipes` and `GET /api/recipes/:id`.
///
/// Author fields (`user_name`, `user_avatar`) are denormalized by the
/// backend so list views render without extra user lookups.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique recipe identifier.
    pub id: String,
    /// Recipe title.
    pub title: String,
    /// Short description, at most 500 characters.
    #[serde(default)]
    pub description: Option<String>,
    /// Category identifier, if categorized.
    #[serde(default, deserialize_with = "deserialize_opt_i64_from_number")]
    pub category_id: Option<i64>,
    /// Category display name, denormalized.
    #[serde(default)]
    pub category_name: Option<String>,
    /// Cover image URL, if uploaded.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Ingredient list; `None` when the author skipped it.
    #[serde(default)]
    pub ingredients: Option<Vec<Ingredient>>,
    /// Free-form preparation time (e.g. `"20 min"`).
    #[serde(default)]
    pub prep_time: Option<String>,
    /// Free-form cooking time.
    #[serde(default)]
    pub cook_time: Option<String>,
    /// Number of servings.
    #[serde(default, deserialize_with = "deserialize_opt_i64_from_number")]
    pub servings: Option<i64>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    /// Preparation steps as free text.
    #[serde(default)]
    pub preparation: Option<String>,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    /// Author user id.
    pub user_id: String,
    /// Author display name, denormalized.
    pub user_name: String,
    /// Author avatar URL, denormalized.
    #[serde(default)]
    pub user_avatar: Option<String>,
}

/// JSON body for `PUT /api/recipes/:id`.
///
/// `None` fields are omitted from the payload; the backend keeps their
/// current values.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeUpdate {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servings: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preparation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<Ingredient>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// JSON body for `PUT /api/users/:id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// A recipe category, served by `GET /api/categories`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub name: String,
}

/// A comment on a recipe.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub content: String,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    pub user_id: String,
    pub user_name: String,
    #[serde(default)]
    pub user_avatar: Option<String>,
}

/// Aggregate rating for a recipe, from `GET /api/recipes/:id/ratings`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RatingSummary {
    /// Mean of all ratings, 0.0 when unrated.
    pub average: f64,
    /// Number of ratings submitted.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub count: i64,
}

impl Default for RatingSummary {
    fn default() -> Self {
        Self { average: 0.0, count: 0 }
    }
}

/// The calling user's own rating of a recipe,
/// from `GET /api/users/:id/ratings/:recipeId`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRating {
    /// 1..=5, or `None` when the user has not rated yet.
    pub rating: Option<u8>,
}

/// A favorites join row, from `GET /api/users/:id/favorites`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub user_id: String,
    pub recipe_id: String,
}

/// A password-reset security question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityQuestion {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub question: String,
}

/// Built-in security questions used when `/api/auth/security-questions`
/// is unreachable, so the reset flow keeps working.
#[must_use]
pub fn fallback_security_questions() -> Vec<SecurityQuestion> {
    const QUESTIONS: [&str; 10] = [
        "What was the name of your first pet?",
        "In which city were you born?",
        "What is your favorite film?",
        "What was your favorite childhood meal?",
        "What is the name of your best childhood friend?",
        "What was your first car?",
        "What is your favorite song?",
        "Which primary school did you attend?",
        "What is your favorite sport?",
        "What is your favorite book?",
    ];
    QUESTIONS
        .iter()
        .enumerate()
        .map(|(i, q)| SecurityQuestion {
            id: i64::try_from(i).unwrap_or(0) + 1,
            question: (*q).to_owned(),
        })
        .collect()
}

fn deserialize_opt_i64_from_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(v) => i64_from_value(&v).map(Some).map_err(D::Error::custom),
    }
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    i64_from_value(&value).map_err(D::Error::custom)
}

// Some backends serialize counters as floats (`3.0`); accept any
// integer-compatible number instead of failing the whole payload.
fn i64_from_value(value: &serde_json::Value) -> Result<i64, String> {
    let serde_json::Value::Number(number) = value else {
        return Err("expected number".to_owned());
    };
    if let Some(int) = number.as_i64() {
        return Ok(int);
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    if let Some(float) = number.as_f64()
        && float.is_finite()
        && float.fract() == 0.0
        && float >= i64::MIN as f64
        && float <= i64::MAX as f64
    {
        return Ok(float as i64);
    }
    Err("expected integer-compatible number".to_owned())
}
