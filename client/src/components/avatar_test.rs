use super::*;

#[test]
fn initial_takes_first_letter_uppercased() {
    assert_eq!(initial("ana"), "A");
    assert_eq!(initial("Ben"), "B");
}

#[test]
fn initial_skips_leading_whitespace() {
    assert_eq!(initial("  carla"), "C");
}

#[test]
fn initial_falls_back_to_question_mark() {
    assert_eq!(initial(""), "?");
    assert_eq!(initial("   "), "?");
}

#[test]
fn initial_handles_multibyte_names() {
    assert_eq!(initial("ñora"), "Ñ");
}
