use crate::tables::{first_match, state_matchers, MatchPolicy};
use crate::text;

/// Resolves free-text state/province input to a canonical state code,
/// scoped to an already-normalized country code.
///
/// Countries without a state table, and inputs that match nothing in the
/// country's table, yield the empty string. That keeps the invariant that a
/// normalized state is either valid for its country or absent; the original
/// text is never passed through.
pub fn normalize_state(input: &str, country: &str) -> String {
    let Some(matchers) = state_matchers(country) else {
        return String::new();
    };

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    if let Some(code) = first_match(matchers, trimmed, MatchPolicy::Exact) {
        return code.to_string();
    }

    let folded = text::fold(trimmed);
    if let Some(code) = first_match(matchers, &folded, MatchPolicy::WholeWord) {
        return code.to_string();
    }

    String::new()
}
