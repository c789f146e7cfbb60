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
fn default_state_is_loading_and_signed_out() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
    assert_eq!(state.user_id(), None);
}

#[test]
fn authenticated_state_exposes_user_id() {
    let state = AuthState { user: Some(ana()), loading: false };
    assert!(state.is_authenticated());
    assert_eq!(state.user_id().as_deref(), Some("u1"));
}
