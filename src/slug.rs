//! Slug generation for public menu URLs.
//!
//! A slug is the lowercase, URL-safe derivation of a display name, used both
//! when publishing a branch link and when resolving one. The same function
//! runs on both sides, so a link built from a stored name always matches the
//! name it came from.
//!
//! Restaurant and branch names are frequently non-Latin (Arabic names are the
//! common case), so the slug keeps *all* Unicode letters and numbers rather
//! than transliterating or stripping to ASCII. An earlier revision stripped
//! non-ASCII letters, which turned names like `اليرموك` into empty slugs and
//! broke their public links — that behavior must not come back.

use unicode_normalization::UnicodeNormalization;

/// Derive a URL slug from a display name.
///
/// The algorithm, in order:
/// 1. Unicode-normalize to decomposed form (NFKD), so accents split from
///    their base letters.
/// 2. Keep only Unicode letters, Unicode numbers, whitespace, and hyphens.
///    Combining marks are dropped here, which is what turns `é` into `e`.
/// 3. Trim leading/trailing whitespace.
/// 4. Collapse every run of whitespace and/or hyphens into a single hyphen.
/// 5. Lowercase.
///
/// Pure function of its input. Empty and whitespace-only names produce the
/// empty string; callers must never treat an empty slug as a match target.
pub fn slugify(name: &str) -> String {
    let kept: String = name
        .nfkd()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '-')
        .collect();

    let mut slug = String::with_capacity(kept.len());
    let mut pending_separator = false;
    for ch in kept.trim().chars() {
        if ch.is_whitespace() || ch == '-' {
            pending_separator = true;
        } else {
            if pending_separator {
                slug.push('-');
                pending_separator = false;
            }
            slug.extend(ch.to_lowercase());
        }
    }
    // A name ending in a hyphen keeps it (only whitespace is trimmed).
    if pending_separator {
        slug.push('-');
    }
    slug
}
