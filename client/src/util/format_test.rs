use super::*;

// --- comment_timestamp ---

#[test]
fn formats_iso_timestamp_with_minutes() {
    assert_eq!(
        comment_timestamp("2025-03-02T18:30:00Z").as_deref(),
        Some("02/03/2025 18:30")
    );
}

#[test]
fn formats_timestamp_without_seconds_or_zone() {
    assert_eq!(
        comment_timestamp("2024-12-31T09:05").as_deref(),
        Some("31/12/2024 09:05")
    );
}

#[test]
fn rejects_date_only_input() {
    assert_eq!(comment_timestamp("2025-03-02"), None);
}

#[test]
fn rejects_garbage() {
    assert_eq!(comment_timestamp(""), None);
    assert_eq!(comment_timestamp("not a date"), None);
    assert_eq!(comment_timestamp("20-03-2025T10:00"), None);
    assert_eq!(comment_timestamp("2025-03-02Tab:cd"), None);
}

// --- truncate ---

#[test]
fn truncate_leaves_short_text_alone() {
    assert_eq!(truncate("short", 150), "short");
}

#[test]
fn truncate_cuts_and_appends_ellipsis() {
    assert_eq!(truncate("abcdef", 3), "abc...");
}

#[test]
fn truncate_boundary_is_inclusive() {
    assert_eq!(truncate("abc", 3), "abc");
}

#[test]
fn truncate_counts_chars_not_bytes() {
    assert_eq!(truncate("ññññ", 2), "ññ...");
}

// --- category_href ---

#[test]
fn category_href_encodes_spaces_and_symbols() {
    assert_eq!(category_href("Main Dishes"), "/?category=Main%20Dishes");
    assert_eq!(category_href("Soups & Stews"), "/?category=Soups%20%26%20Stews");
}

#[test]
fn category_href_plain_name_passes_through() {
    assert_eq!(category_href("Desserts"), "/?category=Desserts");
}

// --- count_label ---

#[test]
fn count_label_picks_singular_and_plural() {
    assert_eq!(count_label(1, "recipe saved", "recipes saved"), "1 recipe saved");
    assert_eq!(count_label(0, "recipe saved", "recipes saved"), "0 recipes saved");
    assert_eq!(count_label(3, "recipe saved", "recipes saved"), "3 recipes saved");
}
