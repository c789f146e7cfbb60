//! Display formatting helpers: timestamps, truncation, category links.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Characters of description shown on a carousel slide before truncation.
pub const CAROUSEL_DESCRIPTION_LEN: usize = 150;

/// Format an ISO 8601 timestamp (`2025-03-02T18:30:00Z`) as
/// `02/03/2025 18:30` for comment bylines.
///
/// Returns `None` when the input does not look like an ISO timestamp;
/// callers render nothing rather than a broken date.
#[must_use]
pub fn comment_timestamp(iso: &str) -> Option<String> {
    let (date, time) = iso.split_once('T')?;
    let mut date_parts = date.splitn(3, '-');
    let year = date_parts.next()?;
    let month = date_parts.next()?;
    let day = date_parts.next()?;
    if year.len() != 4 || month.len() != 2 || day.len() != 2 {
        return None;
    }
    if !year.chars().all(|c| c.is_ascii_digit())
        || !month.chars().all(|c| c.is_ascii_digit())
        || !day.chars().all(|c| c.is_ascii_digit())
    {
        return None;
    }

    let mut time_parts = time.splitn(3, ':');
    let hour = time_parts.next()?;
    let minute = time_parts.next()?;
    if hour.len() != 2
        || minute.len() != 2
        || !hour.chars().all(|c| c.is_ascii_digit())
        || !minute.chars().all(|c| c.is_ascii_digit())
    {
        return None;
    }

    Some(format!("{day}/{month}/{year} {hour}:{minute}"))
}

/// Truncate a description to `max` characters, appending an ellipsis when
/// anything was cut. Operates on characters, not bytes, so multi-byte text
/// never splits mid-character.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_owned();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{cut}...")
}

/// Build the home-page link that preselects a category filter.
#[must_use]
pub fn category_href(name: &str) -> String {
    format!("/?category={}", urlencoding::encode(name))
}

/// `"1 recipe saved"` / `"n recipes saved"` style count labels.
#[must_use]
pub fn count_label(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}
