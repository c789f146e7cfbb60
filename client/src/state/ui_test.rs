use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn ui_state_default_is_light_with_no_toast() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert_eq!(state.toast, None);
    assert_eq!(state.toast_seq, 0);
}

#[test]
fn toast_kind_default_is_success() {
    assert_eq!(ToastKind::default(), ToastKind::Success);
}

// =============================================================
// Toast lifecycle
// =============================================================

#[test]
fn push_toast_sets_message_and_bumps_seq() {
    let mut state = UiState::default();
    let seq = state.push_toast(ToastKind::Error, "failed");
    assert_eq!(seq, 1);
    assert_eq!(
        state.toast,
        Some(Toast { message: "failed".to_owned(), kind: ToastKind::Error })
    );
}

#[test]
fn dismiss_toast_clears_matching_seq() {
    let mut state = UiState::default();
    let seq = state.push_toast(ToastKind::Success, "saved");
    state.dismiss_toast(seq);
    assert_eq!(state.toast, None);
}

#[test]
fn dismiss_toast_ignores_stale_seq() {
    let mut state = UiState::default();
    let first = state.push_toast(ToastKind::Success, "saved");
    state.push_toast(ToastKind::Error, "failed");
    state.dismiss_toast(first);
    // The newer toast survives the stale dismiss.
    assert!(state.toast.is_some());
    assert_eq!(state.toast.as_ref().map(|t| t.kind), Some(ToastKind::Error));
}
