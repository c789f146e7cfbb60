//! Theme preference handling for light/dark mode.
//!
//! The resolved theme lands on `<html data-theme="...">` so the stylesheet
//! can switch custom properties. Resolution order: stored preference, then
//! the `prefers-color-scheme` media query, then light. All of this is
//! browser-only behavior; SSR paths no-op so server rendering stays
//! deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "ladle_theme";

#[cfg(feature = "hydrate")]
fn stored_preference() -> Option<bool> {
    let storage = web_sys::window()?.local_storage().ok()??;
    match storage.get_item(STORAGE_KEY).ok()?? {
        value if value == "dark" => Some(true),
        value if value == "light" => Some(false),
        _ => None,
    }
}

#[cfg(feature = "hydrate")]
fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|mq| mq.matches())
}

/// Resolve the dark-mode flag for app startup.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        stored_preference().unwrap_or_else(system_prefers_dark)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Write the `data-theme` attribute on the document element.
pub fn apply(dark: bool) {
    #[cfg(feature = "hydrate")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(el) = root {
            let _ = el.set_attribute("data-theme", if dark { "dark" } else { "light" });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dark;
    }
}

/// Flip the theme, apply it, and persist the choice.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if let Some(storage) = storage {
            let _ = storage.set_item(STORAGE_KEY, if next { "dark" } else { "light" });
        }
    }
    next
}
