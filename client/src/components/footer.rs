//! Site footer with brand blurb and navigation links.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__inner">
                <div class="footer__brand">
                    <span class="footer__logo">"Ladle"</span>
                    <p class="footer__blurb">
                        "Discover, share, and rate home-cooked recipes."
                    </p>
                </div>
                <nav class="footer__nav">
                    <h3 class="footer__heading">"Browse"</h3>
                    <ul>
                        <li><a href="/">"Home"</a></li>
                        <li><a href="/favorites">"Favorites"</a></li>
                        <li><a href="/my-recipes">"My recipes"</a></li>
                        <li><a href="/create">"Share a recipe"</a></li>
                    </ul>
                </nav>
            </div>
        </footer>
    }
}
