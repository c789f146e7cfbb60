//! Interactive 1..=5 star rating row.

#[cfg(test)]
#[path = "star_rating_test.rs"]
mod star_rating_test;

use leptos::prelude::*;

/// Whether star number `star` renders filled for the given rating.
#[must_use]
pub fn filled(rating: Option<u8>, star: u8) -> bool {
    rating.unwrap_or(0) >= star
}

/// Five clickable stars reflecting the caller's own rating.
///
/// Clicks are swallowed (`prevent_default` + `stop_propagation`) because the
/// row usually sits inside a card-level link.
#[component]
pub fn StarRating(
    #[prop(into)] rating: Signal<Option<u8>>,
    #[prop(into)] can_rate: Signal<bool>,
    on_rate: Callback<u8>,
    #[prop(optional)] compact: bool,
) -> impl IntoView {
    view! {
        <span class="star-rating" class:star-rating--compact=compact>
            {(1..=5u8)
                .map(|star| {
                    view! {
                        <button
                            type="button"
                            class="star-rating__star"
                            class:star-rating__star--filled=move || filled(rating.get(), star)
                            title=move || {
                                if can_rate.get() {
                                    format!("Rate {star}")
                                } else {
                                    "Sign in to rate".to_owned()
                                }
                            }
                            on:click=move |ev: leptos::ev::MouseEvent| {
                                ev.prevent_default();
                                ev.stop_propagation();
                                on_rate.run(star);
                            }
                        >
                            "★"
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </span>
    }
}
