//! URL slugs derived from book titles

use unicode_normalization::UnicodeNormalization;

/// Convert a title into a lowercase, hyphenated, ASCII-only slug.
///
/// Accents are folded through NFKD decomposition, characters other than
/// alphanumerics, `_`, `-` and whitespace are dropped, and runs of
/// whitespace or hyphens collapse into a single `-`.
pub fn slugify(value: &str) -> String {
    let ascii: String = value
        .nfkd()
        .filter(char::is_ascii)
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-' || c.is_ascii_whitespace())
        .collect::<String>()
        .to_lowercase();

    let mut slug = String::with_capacity(ascii.len());
    let mut pending_dash = false;
    for c in ascii.trim().chars() {
        if c == '-' || c.is_ascii_whitespace() {
            pending_dash = true;
            continue;
        }
        if pending_dash && !slug.is_empty() {
            slug.push('-');
        }
        pending_dash = false;
        slug.push(c);
    }

    slug.trim_matches(|c| c == '-' || c == '_').to_string()
}

/// Whether a path segment can be a slug at all (`[-a-zA-Z0-9_]+`)
pub fn is_valid_slug(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_title() {
        assert_eq!(slugify("Harry Potter 1"), "harry-potter-1");
        assert_eq!(slugify("Loard of the Rings"), "loard-of-the-rings");
    }

    #[test]
    fn test_slugify_punctuation_and_spacing() {
        assert_eq!(slugify("  My Story!  "), "my-story");
        assert_eq!(slugify("Rock -- and   Roll"), "rock-and-roll");
        assert_eq!(slugify("-_edge_-"), "edge");
        assert_eq!(slugify("snake_case title"), "snake_case-title");
    }

    #[test]
    fn test_slugify_folds_accents() {
        assert_eq!(slugify("Les Misérables"), "les-miserables");
        assert_eq!(slugify("Ærø"), "r");
        assert_eq!(slugify("日本"), "");
    }

    #[test]
    fn test_is_valid_slug() {
        assert!(is_valid_slug("harry-potter-1"));
        assert!(is_valid_slug("snake_case"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("no spaces"));
        assert!(!is_valid_slug("caf\u{e9}"));
    }
}
