use super::*;

#[test]
fn build_filter_copies_text_controls() {
    let filter = build_filter("paella", "rice", "Mains", "");
    assert_eq!(filter.query, "paella");
    assert_eq!(filter.ingredient, "rice");
    assert_eq!(filter.category, "Mains");
    assert_eq!(filter.difficulty, None);
}

#[test]
fn build_filter_parses_difficulty_wire_values() {
    assert_eq!(build_filter("", "", "", "easy").difficulty, Some(Difficulty::Easy));
    assert_eq!(build_filter("", "", "", "hard").difficulty, Some(Difficulty::Hard));
}

#[test]
fn build_filter_treats_unknown_difficulty_as_unset() {
    assert_eq!(build_filter("", "", "", "impossible").difficulty, None);
    assert_eq!(build_filter("", "", "", "").difficulty, None);
}

#[test]
fn empty_controls_build_empty_filter() {
    assert!(build_filter("", "", "", "").is_empty());
}
