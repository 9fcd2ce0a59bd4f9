use crate::tables::{country_matchers, first_match, MatchPolicy};
use crate::text;

/// Resolves free-text country input to a canonical country code.
///
/// Match order: exact case-insensitive code match, then whole-word alias
/// match on the folded input, in table order. When nothing matches the
/// original input is returned unchanged — a typo surfaces verbatim instead
/// of silently becoming an unrelated country.
pub fn normalize_country(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    if let Some(code) = first_match(country_matchers(), trimmed, MatchPolicy::Exact) {
        return code.to_string();
    }

    let folded = text::fold(trimmed);
    if let Some(code) = first_match(country_matchers(), &folded, MatchPolicy::WholeWord) {
        return code.to_string();
    }

    input.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_input_matches_exactly() {
        assert_eq!(normalize_country("FR"), "FR");
        assert_eq!(normalize_country("fr"), "FR");
        assert_eq!(normalize_country(" gb "), "GB");
    }

    #[test]
    fn alias_input_matches_after_folding() {
        assert_eq!(normalize_country("France"), "FR");
        assert_eq!(normalize_country("Deutschland"), "DE");
        assert_eq!(normalize_country("Royaume-Uni"), "GB");
        assert_eq!(normalize_country("ÉTATS-UNIS"), "US");
    }

    #[test]
    fn alias_matches_as_whole_word_inside_longer_input() {
        assert_eq!(normalize_country("the Netherlands"), "NL");
    }

    #[test]
    fn no_match_returns_input_unchanged() {
        assert_eq!(normalize_country("Atlantis"), "Atlantis");
        assert_eq!(normalize_country("Frnce"), "Frnce");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(normalize_country(""), "");
        assert_eq!(normalize_country("   "), "");
    }
}
