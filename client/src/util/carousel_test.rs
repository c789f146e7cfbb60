use super::*;

// --- next_index ---

#[test]
fn next_advances_by_one() {
    assert_eq!(next_index(0, 5), 1);
    assert_eq!(next_index(3, 5), 4);
}

#[test]
fn next_wraps_to_first() {
    assert_eq!(next_index(4, 5), 0);
}

#[test]
fn next_handles_empty_and_single() {
    assert_eq!(next_index(0, 0), 0);
    assert_eq!(next_index(0, 1), 0);
}

// --- prev_index ---

#[test]
fn prev_goes_back_by_one() {
    assert_eq!(prev_index(4, 5), 3);
}

#[test]
fn prev_wraps_to_last() {
    assert_eq!(prev_index(0, 5), 4);
}

#[test]
fn prev_handles_empty_and_single() {
    assert_eq!(prev_index(0, 0), 0);
    assert_eq!(prev_index(0, 1), 0);
}

// --- reset_index ---

#[test]
fn reset_keeps_valid_index() {
    assert_eq!(reset_index(2, 5), 2);
}

#[test]
fn reset_clamps_out_of_range_to_zero() {
    assert_eq!(reset_index(5, 5), 0);
    assert_eq!(reset_index(2, 0), 0);
}
