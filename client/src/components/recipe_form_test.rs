use super::*;

// --- parsed_category ---

#[test]
fn parsed_category_reads_select_values() {
    assert_eq!(parsed_category("3"), Some(3));
    assert_eq!(parsed_category(" 12 "), Some(12));
}

#[test]
fn parsed_category_unset_for_blank_or_garbage() {
    assert_eq!(parsed_category(""), None);
    assert_eq!(parsed_category("mains"), None);
}

// --- parsed_servings ---

#[test]
fn parsed_servings_accepts_positive_integers() {
    assert_eq!(parsed_servings("4"), Some(4));
    assert_eq!(parsed_servings(" 10 "), Some(10));
}

#[test]
fn parsed_servings_rejects_zero_negative_and_garbage() {
    assert_eq!(parsed_servings("0"), None);
    assert_eq!(parsed_servings("-2"), None);
    assert_eq!(parsed_servings("four"), None);
    assert_eq!(parsed_servings(""), None);
}

// --- non_empty ---

#[test]
fn non_empty_trims_and_keeps_content() {
    assert_eq!(non_empty("  20 min "), Some("20 min".to_owned()));
}

#[test]
fn non_empty_drops_blank_input() {
    assert_eq!(non_empty(""), None);
    assert_eq!(non_empty("   "), None);
}
