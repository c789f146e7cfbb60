#![cfg(not(feature = "hydrate"))]

use super::*;

fn ana() -> User {
    User {
        id: "u1".to_owned(),
        name: "Ana".to_owned(),
        email: "ana@example.com".to_owned(),
        avatar_url: None,
    }
}

#[test]
fn load_is_none_without_a_browser() {
    assert!(load().is_none());
}

#[test]
fn save_and_clear_are_noops_but_callable() {
    save(&ana());
    clear();
    assert!(load().is_none());
}
