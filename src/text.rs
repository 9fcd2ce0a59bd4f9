//! Stateless string transforms shared by the field normalizers.
//!
//! `fold` produces lossy lowercase keys used only for alias matching;
//! `cleanup` is the transform actually applied to values before they are
//! sent to the remote side.

/// ASCII replacement for one accented Latin-1/Latin-Extended character.
/// Characters outside the table pass through unchanged.
fn ascii_equivalent(c: char) -> Option<&'static str> {
    let replacement = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => "a",
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'Ā' | 'Ă' | 'Ą' => "A",
        'æ' => "ae",
        'Æ' => "AE",
        'ç' | 'ć' | 'č' => "c",
        'Ç' | 'Ć' | 'Č' => "C",
        'ď' | 'đ' | 'ð' => "d",
        'Ď' | 'Đ' | 'Ð' => "D",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => "e",
        'È' | 'É' | 'Ê' | 'Ë' | 'Ē' | 'Ĕ' | 'Ė' | 'Ę' | 'Ě' => "E",
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' | 'ı' => "i",
        'Ì' | 'Í' | 'Î' | 'Ï' | 'Ī' | 'Į' | 'İ' => "I",
        'ł' => "l",
        'Ł' => "L",
        'ñ' | 'ń' | 'ň' => "n",
        'Ñ' | 'Ń' | 'Ň' => "N",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => "o",
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' | 'Ō' | 'Ő' => "O",
        'œ' => "oe",
        'Œ' => "OE",
        'ŕ' | 'ř' => "r",
        'Ŕ' | 'Ř' => "R",
        'ś' | 'š' | 'ş' => "s",
        'Ś' | 'Š' | 'Ş' => "S",
        'ß' => "ss",
        'ť' | 'ţ' | 'þ' => "t",
        'Ť' | 'Ţ' | 'Þ' => "T",
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => "u",
        'Ù' | 'Ú' | 'Û' | 'Ü' | 'Ū' | 'Ů' | 'Ű' => "U",
        'ý' | 'ÿ' => "y",
        'Ý' | 'Ÿ' => "Y",
        'ź' | 'ż' | 'ž' => "z",
        'Ź' | 'Ż' | 'Ž' => "Z",
        _ => return None,
    };
    Some(replacement)
}

/// Canonical form for one typographic glyph. The HTML-entity forms are the
/// tokens the remote API stores for marks it cannot represent.
fn punctuation_equivalent(c: char) -> Option<&'static str> {
    let replacement = match c {
        '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{2032}' => "'",
        '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{2033}' => "\"",
        '\u{2014}' => "&mdash;",
        '\u{2013}' => "-",
        '\u{2022}' => "*",
        '\u{2122}' => "&trade;",
        '\u{00A9}' => "&copy;",
        '\u{00AE}' => "&reg;",
        '\u{2026}' => "...",
        '\u{00A0}' => " ",
        _ => return None,
    };
    Some(replacement)
}

/// Replaces accented characters with their unaccented ASCII equivalents.
pub fn strip_accents(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match ascii_equivalent(c) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(c),
        }
    }
    out
}

/// Maps typographic quotes, dashes and mark glyphs to their canonical forms.
pub fn canonicalize_punctuation(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match punctuation_equivalent(c) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(c),
        }
    }
    out
}

/// Lossy matching key: accents stripped, punctuation canonicalized, dashes
/// and underscores opened into spaces, commas dropped, lower-cased.
///
/// Never send the result to the remote side; it exists only to compare
/// free-text input against alias tables.
pub fn fold(input: &str) -> String {
    let canonical = canonicalize_punctuation(&strip_accents(input));
    let mut out = String::with_capacity(canonical.len());
    for c in canonical.chars() {
        match c {
            '-' | '_' => out.push(' '),
            ',' => {}
            _ => out.extend(c.to_lowercase()),
        }
    }
    out
}

/// Outbound value transform: punctuation canonicalization with case and
/// accents preserved.
pub fn cleanup(input: &str) -> String {
    canonicalize_punctuation(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_strips_accents_and_lowercases() {
        assert_eq!(fold("CAFÉ"), "cafe");
        assert_eq!(fold("Orléans"), "orleans");
    }

    #[test]
    fn fold_opens_dashes_and_drops_commas() {
        assert_eq!(fold("Saint-Étienne, Loire"), "saint etienne loire");
        assert_eq!(fold("new_york"), "new york");
    }

    #[test]
    fn strip_accents_expands_ligatures() {
        assert_eq!(strip_accents("œuf"), "oeuf");
        assert_eq!(strip_accents("Ærø"), "AEro");
        assert_eq!(strip_accents("straße"), "strasse");
    }

    #[test]
    fn strip_accents_passes_unknown_characters_through() {
        assert_eq!(strip_accents("京都 123"), "京都 123");
    }

    #[test]
    fn cleanup_canonicalizes_marks_and_preserves_case() {
        assert_eq!(cleanup("—"), "&mdash;");
        assert_eq!(cleanup("Ace™ Ltd"), "Ace&trade; Ltd");
        assert_eq!(cleanup("“Quoted” — déjà"), "\"Quoted\" &mdash; déjà");
    }

    #[test]
    fn cleanup_leaves_plain_ascii_alone() {
        assert_eq!(cleanup("12 Main Street"), "12 Main Street");
    }
}
