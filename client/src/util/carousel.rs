//! Index arithmetic for the featured-recipe carousel.
//!
//! The carousel auto-advances on a fixed interval and wraps at both ends;
//! when the slide list shrinks under the current index, the index resets to
//! the first slide.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

/// Seconds between automatic slide advances.
pub const AUTOPLAY_SECS: u64 = 5;

/// Number of recipes shown as featured slides.
pub const FEATURED_COUNT: usize = 5;

/// The slide after `current`, wrapping to the first.
#[must_use]
pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current + 1) % len
}

/// The slide before `current`, wrapping to the last.
#[must_use]
pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current + len - 1) % len
}

/// Keep `current` valid after the slide list changed length.
#[must_use]
pub fn reset_index(current: usize, len: usize) -> usize {
    if current >= len { 0 } else { current }
}
