use super::*;

// =============================================================
// Passwords
// =============================================================

#[test]
fn password_strength_rejects_short() {
    assert_eq!(password_strength("12345"), Err(ValidationError::PasswordTooShort));
}

#[test]
fn password_strength_accepts_exact_minimum() {
    assert_eq!(password_strength("123456"), Ok(()));
}

#[test]
fn password_strength_counts_chars_not_bytes() {
    // Six characters, more than six bytes.
    assert_eq!(password_strength("ñañañá"), Ok(()));
}

#[test]
fn registration_requires_name_and_email() {
    assert_eq!(
        registration("  ", "a@b.com", "secret1", "secret1"),
        Err(ValidationError::NameRequired)
    );
    assert_eq!(
        registration("Ana", "", "secret1", "secret1"),
        Err(ValidationError::EmailRequired)
    );
}

#[test]
fn registration_rejects_mismatched_confirmation() {
    assert_eq!(
        registration("Ana", "a@b.com", "secret1", "secret2"),
        Err(ValidationError::PasswordMismatch)
    );
}

#[test]
fn registration_accepts_valid_input() {
    assert_eq!(registration("Ana", "a@b.com", "secret1", "secret1"), Ok(()));
}

#[test]
fn password_change_requires_current() {
    assert_eq!(
        password_change("", "secret1", "secret1"),
        Err(ValidationError::CurrentPasswordRequired)
    );
}

#[test]
fn password_change_checks_new_password_rules() {
    assert_eq!(
        password_change("old", "abc", "abc"),
        Err(ValidationError::PasswordTooShort)
    );
    assert_eq!(
        password_change("old", "secret1", "secret2"),
        Err(ValidationError::PasswordMismatch)
    );
    assert_eq!(password_change("old", "secret1", "secret1"), Ok(()));
}

// =============================================================
// Images
// =============================================================

#[test]
fn image_file_rejects_oversize() {
    assert_eq!(
        image_file(MAX_IMAGE_BYTES + 1, "image/png"),
        Err(ValidationError::ImageTooLarge)
    );
}

#[test]
fn image_file_accepts_exact_limit() {
    assert_eq!(image_file(MAX_IMAGE_BYTES, "image/jpeg"), Ok(()));
}

#[test]
fn image_file_rejects_non_image_mime() {
    assert_eq!(image_file(1024, "application/pdf"), Err(ValidationError::NotAnImage));
    assert_eq!(image_file(1024, ""), Err(ValidationError::NotAnImage));
}

// =============================================================
// Recipes
// =============================================================

#[test]
fn recipe_required_checks_each_field_in_order() {
    assert_eq!(
        recipe_required(" ", Some(1), true, ""),
        Err(ValidationError::TitleRequired)
    );
    assert_eq!(
        recipe_required("Paella", None, true, ""),
        Err(ValidationError::CategoryRequired)
    );
    assert_eq!(
        recipe_required("Paella", Some(1), false, ""),
        Err(ValidationError::DifficultyRequired)
    );
}

#[test]
fn recipe_required_enforces_description_cap() {
    let long = "x".repeat(MAX_DESCRIPTION_LEN + 1);
    assert_eq!(
        recipe_required("Paella", Some(1), true, &long),
        Err(ValidationError::DescriptionTooLong)
    );
    let exact = "x".repeat(MAX_DESCRIPTION_LEN);
    assert_eq!(recipe_required("Paella", Some(1), true, &exact), Ok(()));
}

#[test]
fn rating_bounds() {
    assert_eq!(rating(0), Err(ValidationError::RatingOutOfRange));
    assert_eq!(rating(1), Ok(()));
    assert_eq!(rating(5), Ok(()));
    assert_eq!(rating(6), Err(ValidationError::RatingOutOfRange));
}

// =============================================================
// Ingredients
// =============================================================

fn row(name: &str, amount: &str) -> Ingredient {
    Ingredient { name: name.to_owned(), amount: amount.to_owned() }
}

#[test]
fn usable_ingredients_drops_blank_rows() {
    let rows = [row("rice", "200 g"), row("", ""), row("salt", "   ")];
    let kept = usable_ingredients(&rows);
    assert_eq!(kept, vec![row("rice", "200 g")]);
}

#[test]
fn usable_ingredients_trims_whitespace() {
    let rows = [row("  rice ", " 200 g ")];
    assert_eq!(usable_ingredients(&rows), vec![row("rice", "200 g")]);
}

#[test]
fn usable_ingredients_empty_input() {
    assert!(usable_ingredients(&[]).is_empty());
}

#[test]
fn validation_errors_render_user_messages() {
    assert_eq!(
        ValidationError::PasswordTooShort.to_string(),
        "Password must be at least 6 characters"
    );
    assert_eq!(ValidationError::ImageTooLarge.to_string(), "Image cannot exceed 5MB");
    assert_eq!(
        ValidationError::DescriptionTooLong.to_string(),
        "Description cannot exceed 500 characters"
    );
}
