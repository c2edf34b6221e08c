//! URL slugs for tiles.
//!
//! Slugs are non-empty identifiers composed of lowercase ASCII letters,
//! digits, and single hyphens, with no hyphen at either end.

/// Derive a slug from a title.
///
/// Runs of anything outside `[a-z0-9-]` (after lowercasing) become one `-`,
/// repeated hyphens collapse, and leading/trailing hyphens are dropped. The
/// result may be empty; callers treat that as a validation failure.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for ch in title.to_lowercase().chars() {
        let ch = if is_slug_char(ch) { ch } else { '-' };
        if ch == '-' && (slug.is_empty() || slug.ends_with('-')) {
            continue;
        }
        slug.push(ch);
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Return `true` when `value` matches `^[a-z0-9-]+$`.
pub fn is_valid_slug(value: &str) -> bool {
    !value.is_empty() && value.chars().all(is_slug_char)
}

fn is_slug_char(ch: char) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-'
}
