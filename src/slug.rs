//! Client-name slugging for output paths.

/// Fallback slug used when the input reduces to nothing. An empty slug
/// would collapse the per-client directory into the output root.
pub const FALLBACK_SLUG: &str = "client";

/// Derive a filesystem-safe slug from a client display name.
///
/// Lowercases, replaces every run of non-alphanumeric characters with a
/// single `-`, and strips leading/trailing `-`. Pure and idempotent.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}
