//! User avatar with an initial-letter fallback.

#[cfg(test)]
#[path = "avatar_test.rs"]
mod avatar_test;

use leptos::prelude::*;

/// Uppercased first character of a display name, `"?"` when empty.
#[must_use]
pub fn initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
}

/// Round avatar image; falls back to the name's initial when no image URL
/// is available.
#[component]
pub fn Avatar(
    name: String,
    src: Option<String>,
    #[prop(optional)] large: bool,
) -> impl IntoView {
    let fallback = initial(&name);

    view! {
        <span class="avatar" class:avatar--large=large>
            {match src {
                Some(url) => view! {
                    <img class="avatar__image" src=url alt=name/>
                }
                .into_any(),
                None => view! {
                    <span class="avatar__fallback" aria-hidden="true">{fallback}</span>
                }
                .into_any(),
            }}
        </span>
    }
}
