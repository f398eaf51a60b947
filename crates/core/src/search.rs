//! Helpers for substring search.

/// Escape character used in `LIKE` / `ILIKE` patterns built here.
pub const LIKE_ESCAPE: char = '\\';

/// Build a `LIKE` pattern matching any value that contains `needle` literally.
///
/// `%`, `_` and the escape character itself are escaped so user input never
/// acts as a wildcard.
pub fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_wrapped() {
        assert_eq!(contains_pattern("alpha"), "%alpha%");
    }

    #[test]
    fn wildcards_are_escaped() {
        assert_eq!(contains_pattern("50%_off"), r"%50\%\_off%");
    }

    #[test]
    fn backslash_is_escaped() {
        assert_eq!(contains_pattern(r"a\b"), r"%a\\b%");
    }

    #[test]
    fn unicode_passes_through() {
        assert_eq!(contains_pattern("Amélie"), "%Amélie%");
    }
}
