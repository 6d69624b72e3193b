//! Slug helpers.
//!
//! Slugs are the URL-safe identifiers derived from document names and used
//! as the route segment for category and product pages.

/// Maximum slug length accepted by the content schema.
pub const MAX_SLUG_LEN: usize = 96;

/// Derive a slug from a document name.
///
/// Lowercases, maps runs of non-alphanumeric characters to a single `-`,
/// trims leading/trailing dashes, and truncates to [`MAX_SLUG_LEN`].
///
/// # Examples
///
/// ```
/// use agropure_core::slug::slugify;
///
/// assert_eq!(slugify("Premium Wheat"), "premium-wheat");
/// assert_eq!(slugify("  Pulses & Lentils "), "pulses-lentils");
/// ```
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    out.truncate(MAX_SLUG_LEN);
    out
}

/// Synthesize a display title from a slug by uppercasing its first
/// character, leaving the rest untouched ("oilseeds" -> "Oilseeds").
pub fn capitalize(slug: &str) -> String {
    let mut chars = slug.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Check that a stored slug has the shape `slugify` would produce.
pub fn is_valid(slug: &str) -> bool {
    !slug.is_empty()
        && slug.len() <= MAX_SLUG_LEN
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_basic() {
        assert_eq!(slugify("Basmati Rice"), "basmati-rice");
    }

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("Pulses & Lentils"), "pulses-lentils");
        assert_eq!(slugify("--Maize--"), "maize");
    }

    #[test]
    fn slugify_truncates() {
        let long = "a".repeat(200);
        assert_eq!(slugify(&long).len(), MAX_SLUG_LEN);
    }

    #[test]
    fn capitalize_first_char_only() {
        assert_eq!(capitalize("oilseeds"), "Oilseeds");
        assert_eq!(capitalize("unknown-slug"), "Unknown-slug");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn valid_slug_shapes() {
        assert!(is_valid("wheat"));
        assert!(is_valid("pulses-lentils"));
        assert!(!is_valid(""));
        assert!(!is_valid("-wheat"));
        assert!(!is_valid("Wheat"));
    }
}
