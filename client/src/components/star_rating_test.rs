use super::*;

#[test]
fn unrated_fills_nothing() {
    for star in 1..=5 {
        assert!(!filled(None, star));
    }
}

#[test]
fn rating_fills_up_to_its_value() {
    assert!(filled(Some(3), 1));
    assert!(filled(Some(3), 3));
    assert!(!filled(Some(3), 4));
}

#[test]
fn five_fills_everything() {
    for star in 1..=5 {
        assert!(filled(Some(5), star));
    }
}
