use crate::tables::dialing_prefix;

/// Splits `s` after its first `n` characters, or returns `None` when the
/// string is not longer than that.
fn split_after_chars(s: &str, n: usize) -> Option<(&str, &str)> {
    let (idx, _) = s.char_indices().nth(n)?;
    Some(s.split_at(idx))
}

/// Rewrites free-text phone input into the canonical
/// `"+<dialing prefix> <national number>"` form for the given
/// already-normalized country code.
///
/// International inputs whose prefix does not belong to the target country
/// go through a permissive best-effort split; the emitted pseudo-prefix is
/// a raw guess, not a validated country code. A country with no registered
/// dialing prefix returns the stripped input unchanged.
pub fn normalize_phone(input: &str, country: &str) -> String {
    let cleaned: String = input
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '.' | '(' | ')'))
        .collect();
    if cleaned.is_empty() {
        return String::new();
    }

    let Some(prefix) = dialing_prefix(country) else {
        return cleaned;
    };

    if let Some(rest) = cleaned.strip_prefix('+') {
        if let Some(national) = rest.strip_prefix(prefix) {
            return format!("+{} {}", prefix, national);
        }
        // Foreign international prefix, code not extractable: first three
        // characters then the remainder.
        return match split_after_chars(&cleaned, 3) {
            Some((guess, national)) => format!("{} {}", guess, national),
            None => cleaned,
        };
    }

    if let Some(rest) = cleaned.strip_prefix("00") {
        if let Some(national) = rest.strip_prefix(prefix) {
            return format!("+{} {}", prefix, national);
        }
        // Unknown foreign prefix behind the international-access code: take
        // the next two characters as a raw guess.
        return match split_after_chars(rest, 2) {
            Some((guess, national)) => format!("+{} {}", guess, national),
            None => cleaned,
        };
    }

    // National format: drop the leading trunk digit.
    let national = match split_after_chars(&cleaned, 1) {
        Some((_, national)) => national,
        None => "",
    };
    format!("+{} {}", prefix, national)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn national_input_drops_trunk_digit_and_applies_prefix() {
        assert_eq!(normalize_phone("06 12 34 56 78", "FR"), "+33 612345678");
        assert_eq!(normalize_phone("(06) 12.34-56.78", "FR"), "+33 612345678");
        assert_eq!(normalize_phone("030 1234567", "DE"), "+49 301234567");
    }

    #[test]
    fn international_input_with_matching_prefix_is_recognized() {
        assert_eq!(normalize_phone("+33612345678", "FR"), "+33 612345678");
        assert_eq!(normalize_phone("+33 6 12 34 56 78", "FR"), "+33 612345678");
    }

    #[test]
    fn international_input_with_foreign_prefix_is_split_best_effort() {
        // German number normalized against FR: the first three characters
        // are emitted as a pseudo-prefix, not a validated country code.
        assert_eq!(normalize_phone("+49301234567", "FR"), "+49 301234567");
        assert_eq!(normalize_phone("+3581234567", "FR"), "+35 81234567");
    }

    #[test]
    fn access_code_input_with_matching_prefix_is_rewritten() {
        assert_eq!(normalize_phone("0033612345678", "FR"), "+33 612345678");
    }

    #[test]
    fn access_code_input_with_foreign_prefix_guesses_two_characters() {
        assert_eq!(normalize_phone("0049301234567", "FR"), "+49 301234567");
    }

    #[test]
    fn empty_input_short_circuits() {
        assert_eq!(normalize_phone("", "FR"), "");
        assert_eq!(normalize_phone(" - ", "FR"), "");
    }

    #[test]
    fn unknown_country_returns_stripped_input() {
        assert_eq!(normalize_phone("06 12 34 56 78", "XX"), "0612345678");
    }

    #[test]
    fn inputs_too_short_to_slice_fall_back_to_stripped_input() {
        assert_eq!(normalize_phone("+1", "FR"), "+1");
        assert_eq!(normalize_phone("0012", "FR"), "0012");
    }
}
