//! REST API helpers for communicating with the external backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against relative
//! `/api/...` paths (the host proxies them upstream).
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Reads return `Option` and writes return `Result<_, String>` so fetch
//! failures degrade UI behavior (empty lists, inline messages) without
//! crashing hydration. Backend error bodies of the shape `{ "error": msg }`
//! are surfaced verbatim when present.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use models::{
    Category, Comment, Favorite, PublicUser, ProfileUpdate, RatingSummary, Recipe,
    RecipeUpdate, SecurityQuestion, User, UserRating, fallback_security_questions,
};
#[cfg(feature = "hydrate")]
use serde::Deserialize;

// =============================================================
// Endpoint paths
// =============================================================

#[cfg(any(test, feature = "hydrate"))]
fn recipe_endpoint(recipe_id: &str) -> String {
    format!("/api/recipes/{recipe_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn recipe_ratings_endpoint(recipe_id: &str) -> String {
    format!("/api/recipes/{recipe_id}/ratings")
}

#[cfg(any(test, feature = "hydrate"))]
fn recipe_comments_endpoint(recipe_id: &str) -> String {
    format!("/api/recipes/{recipe_id}/comments")
}

#[cfg(any(test, feature = "hydrate"))]
fn recipe_comment_endpoint(recipe_id: &str, comment_id: &str, user_id: &str) -> String {
    format!("/api/recipes/{recipe_id}/comments/{comment_id}?userId={user_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_endpoint(user_id: &str) -> String {
    format!("/api/users/{user_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_password_endpoint(user_id: &str) -> String {
    format!("/api/users/{user_id}/password")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_recipes_endpoint(user_id: &str) -> String {
    format!("/api/users/{user_id}/recipes")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_favorites_endpoint(user_id: &str) -> String {
    format!("/api/users/{user_id}/favorites")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_favorite_endpoint(user_id: &str, recipe_id: &str) -> String {
    format!("/api/users/{user_id}/favorites/{recipe_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_rating_endpoint(user_id: &str, recipe_id: &str) -> String {
    format!("/api/users/{user_id}/ratings/{recipe_id}")
}

// =============================================================
// Failure messages
// =============================================================

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    if status == 401 {
        "Invalid email or password".to_owned()
    } else {
        format!("sign in failed: {status}")
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn register_failed_message(status: u16) -> String {
    if status == 409 {
        "An account with that email already exists".to_owned()
    } else {
        format!("registration failed: {status}")
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Pull the backend's `{ "error": msg }` body, falling back to a generic
/// status message.
#[cfg(feature = "hydrate")]
async fn error_message(resp: gloo_net::http::Response, fallback: String) -> String {
    match resp.json::<ErrorBody>().await {
        Ok(ErrorBody { error: Some(msg) }) => msg,
        _ => fallback,
    }
}

#[cfg(feature = "hydrate")]
async fn fetch_json<T: serde::de::DeserializeOwned>(url: &str) -> Option<T> {
    let resp = gloo_net::http::Request::get(url).send().await.ok()?;
    if !resp.ok() {
        return None;
    }
    resp.json::<T>().await.ok()
}

// =============================================================
// Auth
// =============================================================

/// Sign in via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns a user-facing message when the request fails or the backend
/// rejects the credentials.
pub async fn login(email: &str, password: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let fallback = login_failed_message(resp.status());
            return Err(error_message(resp, fallback).await);
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /api/auth/register`. The optional security
/// question id + answer feed the password-reset flow later.
///
/// # Errors
///
/// Returns a user-facing message; a 409 maps to the duplicate-email text.
pub async fn register(
    name: &str,
    email: &str,
    password: &str,
    security: Option<(i64, &str)>,
) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let mut payload =
            serde_json::json!({ "name": name, "email": email, "password": password });
        if let (Some((question_id, answer)), Some(map)) = (security, payload.as_object_mut()) {
            map.insert("securityQuestionId".to_owned(), serde_json::json!(question_id));
            map.insert("securityAnswer".to_owned(), serde_json::json!(answer));
        }
        let resp = gloo_net::http::Request::post("/api/auth/register")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let fallback = register_failed_message(resp.status());
            return Err(error_message(resp, fallback).await);
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, password, security);
        Err("not available on server".to_owned())
    }
}

#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
struct SecurityQuestionsBody {
    questions: Option<Vec<SecurityQuestion>>,
}

/// Fetch the full security-question catalog from
/// `GET /api/auth/security-questions`, falling back to the built-in list
/// when the endpoint is unreachable so the reset flow keeps working.
pub async fn fetch_security_questions() -> Vec<SecurityQuestion> {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = fetch_json::<SecurityQuestionsBody>("/api/auth/security-questions").await
        else {
            return fallback_security_questions();
        };
        match body.questions {
            Some(questions) if !questions.is_empty() => questions,
            _ => fallback_security_questions(),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        fallback_security_questions()
    }
}

#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
struct SecurityQuestionBody {
    question: SecurityQuestion,
}

/// Look up the security question registered for an account via
/// `POST /api/auth/security-question`.
///
/// # Errors
///
/// Returns a user-facing message when the account is unknown or the
/// request fails.
pub async fn fetch_security_question(email: &str) -> Result<SecurityQuestion, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email });
        let resp = gloo_net::http::Request::post("/api/auth/security-question")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let fallback = request_failed_message(resp.status());
            return Err(error_message(resp, fallback).await);
        }
        let body: SecurityQuestionBody = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.question)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err("not available on server".to_owned())
    }
}

/// Reset a forgotten password via `POST /api/auth/reset-password`.
///
/// # Errors
///
/// Returns a user-facing message when the answer is rejected or the
/// request fails.
pub async fn reset_password(
    email: &str,
    question_id: i64,
    answer: &str,
    new_password: &str,
) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "email": email,
            "questionId": question_id,
            "answer": answer,
            "newPassword": new_password,
        });
        let resp = gloo_net::http::Request::post("/api/auth/reset-password")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let fallback = request_failed_message(resp.status());
            return Err(error_message(resp, fallback).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, question_id, answer, new_password);
        Err("not available on server".to_owned())
    }
}

// =============================================================
// Recipes
// =============================================================

/// Fetch every recipe from `GET /api/recipes`.
/// Returns `None` on failure or on the server.
pub async fn fetch_recipes() -> Option<Vec<Recipe>> {
    #[cfg(feature = "hydrate")]
    {
        fetch_json("/api/recipes").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch one recipe from `GET /api/recipes/{id}`.
pub async fn fetch_recipe(recipe_id: &str) -> Option<Recipe> {
    #[cfg(feature = "hydrate")]
    {
        fetch_json(&recipe_endpoint(recipe_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = recipe_id;
        None
    }
}

/// Fetch the category catalog from `GET /api/categories`.
pub async fn fetch_categories() -> Option<Vec<Category>> {
    #[cfg(feature = "hydrate")]
    {
        fetch_json("/api/categories").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Publish a recipe with its cover image via the multipart
/// `POST /api/recipes/with-image` endpoint.
///
/// # Errors
///
/// Returns the backend's error message or a status fallback.
#[cfg(feature = "hydrate")]
pub async fn create_recipe_with_image(form: web_sys::FormData) -> Result<Recipe, String> {
    let resp = gloo_net::http::Request::post("/api/recipes/with-image")
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        let fallback = request_failed_message(resp.status());
        return Err(error_message(resp, fallback).await);
    }
    resp.json::<Recipe>().await.map_err(|e| e.to_string())
}

/// Update a recipe via `PUT /api/recipes/{id}`. A replacement image is
/// uploaded separately with [`upload_image`] and referenced by URL.
///
/// # Errors
///
/// Returns the backend's error message or a status fallback.
pub async fn update_recipe(recipe_id: &str, update: &RecipeUpdate) -> Result<Recipe, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(&recipe_endpoint(recipe_id))
            .json(update)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let fallback = request_failed_message(resp.status());
            return Err(error_message(resp, fallback).await);
        }
        resp.json::<Recipe>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (recipe_id, update);
        Err("not available on server".to_owned())
    }
}

/// Delete a recipe via `DELETE /api/recipes/{id}`.
///
/// # Errors
///
/// Returns a status message when the backend refuses.
pub async fn delete_recipe(recipe_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&recipe_endpoint(recipe_id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = recipe_id;
        Err("not available on server".to_owned())
    }
}

/// Upload an image blob via multipart `POST /api/upload`; returns the
/// public URL the backend stored it under.
///
/// # Errors
///
/// Returns the backend's error message or a status fallback.
#[cfg(feature = "hydrate")]
pub async fn upload_image(blob: &web_sys::Blob, filename: &str) -> Result<String, String> {
    #[derive(Debug, Deserialize)]
    struct UploadBody {
        url: String,
    }

    let form = web_sys::FormData::new().map_err(|_| "form construction failed".to_owned())?;
    form.append_with_blob_and_filename("image", blob, filename)
        .map_err(|_| "form construction failed".to_owned())?;

    let resp = gloo_net::http::Request::post("/api/upload")
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        let fallback = request_failed_message(resp.status());
        return Err(error_message(resp, fallback).await);
    }
    let body: UploadBody = resp.json().await.map_err(|e| e.to_string())?;
    Ok(body.url)
}

// =============================================================
// Ratings and comments
// =============================================================

/// Fetch the aggregate rating from `GET /api/recipes/{id}/ratings`.
pub async fn fetch_rating_summary(recipe_id: &str) -> Option<RatingSummary> {
    #[cfg(feature = "hydrate")]
    {
        fetch_json(&recipe_ratings_endpoint(recipe_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = recipe_id;
        None
    }
}

/// Fetch the caller's own rating from `GET /api/users/{id}/ratings/{recipeId}`.
pub async fn fetch_my_rating(user_id: &str, recipe_id: &str) -> Option<UserRating> {
    #[cfg(feature = "hydrate")]
    {
        fetch_json(&user_rating_endpoint(user_id, recipe_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, recipe_id);
        None
    }
}

/// Submit a 1..=5 rating via `PUT /api/users/{id}/ratings/{recipeId}`.
///
/// # Errors
///
/// Returns a status message when the backend refuses.
pub async fn rate_recipe(user_id: &str, recipe_id: &str, rating: u8) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "rating": rating });
        let resp = gloo_net::http::Request::put(&user_rating_endpoint(user_id, recipe_id))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, recipe_id, rating);
        Err("not available on server".to_owned())
    }
}

/// Fetch a recipe's comments from `GET /api/recipes/{id}/comments`.
pub async fn fetch_comments(recipe_id: &str) -> Option<Vec<Comment>> {
    #[cfg(feature = "hydrate")]
    {
        fetch_json(&recipe_comments_endpoint(recipe_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = recipe_id;
        None
    }
}

/// Post a comment via `POST /api/recipes/{id}/comments`; returns the
/// created comment (author fields filled in by the caller's session).
///
/// # Errors
///
/// Returns the backend's error message or a status fallback.
pub async fn post_comment(recipe_id: &str, user_id: &str, content: &str) -> Result<Comment, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "content": content, "userId": user_id });
        let resp = gloo_net::http::Request::post(&recipe_comments_endpoint(recipe_id))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let fallback = request_failed_message(resp.status());
            return Err(error_message(resp, fallback).await);
        }
        resp.json::<Comment>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (recipe_id, user_id, content);
        Err("not available on server".to_owned())
    }
}

/// Delete an own comment via
/// `DELETE /api/recipes/{id}/comments/{commentId}?userId=...`.
///
/// # Errors
///
/// Returns a status message when the backend refuses.
pub async fn delete_comment(recipe_id: &str, comment_id: &str, user_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = recipe_comment_endpoint(recipe_id, comment_id, user_id);
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (recipe_id, comment_id, user_id);
        Err("not available on server".to_owned())
    }
}

// =============================================================
// Users, favorites, profile
// =============================================================

/// Fetch a user's public profile from `GET /api/users/{id}`.
pub async fn fetch_public_user(user_id: &str) -> Option<PublicUser> {
    #[cfg(feature = "hydrate")]
    {
        fetch_json(&user_endpoint(user_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        None
    }
}

/// Fetch the recipes a user authored from `GET /api/users/{id}/recipes`.
pub async fn fetch_user_recipes(user_id: &str) -> Option<Vec<Recipe>> {
    #[cfg(feature = "hydrate")]
    {
        fetch_json(&user_recipes_endpoint(user_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        None
    }
}

/// Fetch the caller's favorites from `GET /api/users/{id}/favorites`.
pub async fn fetch_favorites(user_id: &str) -> Option<Vec<Favorite>> {
    #[cfg(feature = "hydrate")]
    {
        fetch_json(&user_favorites_endpoint(user_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        None
    }
}

/// Add or remove a favorite and return the new favorite flag.
///
/// # Errors
///
/// Returns a status message when the backend refuses; local state is left
/// unchanged by callers in that case.
pub async fn toggle_favorite(
    user_id: &str,
    recipe_id: &str,
    currently_favorite: bool,
) -> Result<bool, String> {
    #[cfg(feature = "hydrate")]
    {
        if currently_favorite {
            let resp = gloo_net::http::Request::delete(&user_favorite_endpoint(user_id, recipe_id))
                .send()
                .await
                .map_err(|e| e.to_string())?;
            if !resp.ok() {
                return Err(request_failed_message(resp.status()));
            }
            Ok(false)
        } else {
            let payload = serde_json::json!({ "recipeId": recipe_id });
            let resp = gloo_net::http::Request::post(&user_favorites_endpoint(user_id))
                .json(&payload)
                .map_err(|e| e.to_string())?
                .send()
                .await
                .map_err(|e| e.to_string())?;
            if !resp.ok() {
                return Err(request_failed_message(resp.status()));
            }
            Ok(true)
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, recipe_id, currently_favorite);
        Err("not available on server".to_owned())
    }
}

/// Update name and/or avatar via `PUT /api/users/{id}`; returns the
/// refreshed user for the session cache.
///
/// # Errors
///
/// Returns the backend's error message or a status fallback.
pub async fn update_profile(user_id: &str, update: &ProfileUpdate) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(&user_endpoint(user_id))
            .json(update)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let fallback = request_failed_message(resp.status());
            return Err(error_message(resp, fallback).await);
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, update);
        Err("not available on server".to_owned())
    }
}

/// Change the account password via `PUT /api/users/{id}/password`.
///
/// # Errors
///
/// Returns the backend's error message (e.g. wrong current password) or a
/// status fallback.
pub async fn change_password(
    user_id: &str,
    current_password: &str,
    new_password: &str,
) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "currentPassword": current_password,
            "newPassword": new_password,
        });
        let resp = gloo_net::http::Request::put(&user_password_endpoint(user_id))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let fallback = request_failed_message(resp.status());
            return Err(error_message(resp, fallback).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, current_password, new_password);
        Err("not available on server".to_owned())
    }
}
