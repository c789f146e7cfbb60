//! Client-side form validation rules.
//!
//! DESIGN
//! ======
//! The backend is authoritative; these checks exist to reject obviously bad
//! input before a network round-trip and to drive inline form feedback. Each
//! rule is a plain function so pages and dialogs share identical limits.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use thiserror::Error;

use crate::Ingredient;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Maximum accepted image upload size in bytes (5 MiB).
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// Maximum recipe description length in characters.
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// A rejected form input, with a user-facing message.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Password must be at least {MIN_PASSWORD_LEN} characters")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Current password is required")]
    CurrentPasswordRequired,
    #[error("Title is required")]
    TitleRequired,
    #[error("Category is required")]
    CategoryRequired,
    #[error("Difficulty is required")]
    DifficultyRequired,
    #[error("Description cannot exceed {MAX_DESCRIPTION_LEN} characters")]
    DescriptionTooLong,
    #[error("Image cannot exceed 5MB")]
    ImageTooLarge,
    #[error("Only image files are allowed")]
    NotAnImage,
    #[error("Rating must be between 1 and 5")]
    RatingOutOfRange,
}

/// Validate a registration form.
///
/// # Errors
///
/// Returns the first failing rule: empty name/email, short password, or a
/// confirmation mismatch.
pub fn registration(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::NameRequired);
    }
    if email.trim().is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    password_strength(password)?;
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

/// Validate a password-change form.
///
/// # Errors
///
/// Returns the first failing rule: missing current password, short new
/// password, or a confirmation mismatch.
pub fn password_change(
    current: &str,
    new: &str,
    confirm: &str,
) -> Result<(), ValidationError> {
    if current.is_empty() {
        return Err(ValidationError::CurrentPasswordRequired);
    }
    password_strength(new)?;
    if new != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

/// Minimum password length rule, shared by registration, password change,
/// and the reset flow.
///
/// # Errors
///
/// Returns [`ValidationError::PasswordTooShort`] below [`MIN_PASSWORD_LEN`].
pub fn password_strength(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

/// Validate a picked image file by size and MIME type.
///
/// # Errors
///
/// Returns [`ValidationError::ImageTooLarge`] over [`MAX_IMAGE_BYTES`] and
/// [`ValidationError::NotAnImage`] for non-`image/*` MIME types.
pub fn image_file(size_bytes: u64, mime_type: &str) -> Result<(), ValidationError> {
    if size_bytes > MAX_IMAGE_BYTES {
        return Err(ValidationError::ImageTooLarge);
    }
    if !mime_type.starts_with("image/") {
        return Err(ValidationError::NotAnImage);
    }
    Ok(())
}

/// Validate the required recipe fields and the description cap.
///
/// # Errors
///
/// Returns the first failing rule: blank title, missing category or
/// difficulty, or an over-long description.
pub fn recipe_required(
    title: &str,
    category_id: Option<i64>,
    difficulty_set: bool,
    description: &str,
) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::TitleRequired);
    }
    if category_id.is_none() {
        return Err(ValidationError::CategoryRequired);
    }
    if !difficulty_set {
        return Err(ValidationError::DifficultyRequired);
    }
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::DescriptionTooLong);
    }
    Ok(())
}

/// Validate a star-rating value.
///
/// # Errors
///
/// Returns [`ValidationError::RatingOutOfRange`] outside 1..=5.
pub fn rating(value: u8) -> Result<(), ValidationError> {
    if (1..=5).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::RatingOutOfRange)
    }
}

/// Keep only ingredient rows where both name and amount are non-blank,
/// trimming whitespace. Empty trailing rows are a normal artifact of the
/// add-row UI.
#[must_use]
pub fn usable_ingredients(rows: &[Ingredient]) -> Vec<Ingredient> {
    rows.iter()
        .filter(|row| !row.name.trim().is_empty() && !row.amount.trim().is_empty())
        .map(|row| Ingredient {
            name: row.name.trim().to_owned(),
            amount: row.amount.trim().to_owned(),
        })
        .collect()
}
