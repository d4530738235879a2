//! Identifier derivation for label/input association.

/// Derive an id-safe slug from display text.
///
/// Lowercases, collapses every run of characters outside `[a-z0-9]` to a
/// single `-`, and trims hyphens from both ends. Idempotent.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}
