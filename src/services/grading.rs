//! Answer grading - business capability layer
//!
//! Typed input and expected answer both pass through the same normalization
//! pipeline before comparison: Unicode NFC, dash folding, whitespace
//! removal, case folding. Typing practice forgives spacing, dash variants
//! and letter case, nothing else.

use unicode_normalization::UnicodeNormalization;

/// Fold the dash variants seen in spreadsheet content to ASCII hyphen-minus.
///
/// U+2013 en dash, U+2014 em dash, U+2212 minus sign, U+FF0D fullwidth
/// hyphen-minus.
fn fold_dash(c: char) -> char {
    match c {
        '\u{2013}' | '\u{2014}' | '\u{2212}' | '\u{FF0D}' => '-',
        _ => c,
    }
}

/// Normalize without case folding
///
/// Used for hidden exit-code matching, which is case-sensitive.
pub fn normalize_keep_case(text: &str) -> String {
    let nfc: String = text.nfc().collect();
    let folded: String = nfc.chars().map(fold_dash).collect();
    // split_whitespace covers every Unicode whitespace run
    folded.split_whitespace().collect()
}

/// Full normalization pipeline
pub fn normalize(text: &str) -> String {
    normalize_keep_case(text).to_lowercase()
}

/// Compare a typed answer against the expected proverb
pub fn answers_match(input: &str, expected: &str) -> bool {
    normalize(input) == normalize(expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unicode_equivalent_forms_normalize_equal() {
        // "가" as a precomposed syllable vs. decomposed jamo
        let composed = "\u{AC00}";
        let decomposed = "\u{1100}\u{1161}";
        assert_eq!(normalize(composed), normalize(decomposed));
        assert!(answers_match(decomposed, composed));

        // Latin e + combining acute vs. precomposed é
        assert!(answers_match("caf\u{0065}\u{0301}", "caf\u{00E9}"));
    }

    #[test]
    fn whitespace_runs_collapse_to_nothing() {
        assert_eq!(normalize(" a \t b\u{00A0}c \n"), "abc");
        assert!(answers_match("look before\tyou  leap", "lookbeforeyouleap"));
    }

    #[test]
    fn dash_variants_fold_to_ascii_hyphen() {
        for dash in ['\u{2013}', '\u{2014}', '\u{2212}', '\u{FF0D}'] {
            let input = format!("well{}known", dash);
            assert!(answers_match(&input, "well-known"), "failed for {:?}", dash);
        }
    }

    #[test]
    fn comparison_is_case_insensitive() {
        assert!(answers_match("A Stitch In Time", "a stitch in time"));
        assert_eq!(normalize("ABC"), "abc");
    }

    #[test]
    fn keep_case_variant_preserves_case() {
        assert_eq!(normalize_keep_case(" Se Cret "), "SeCret");
        assert_ne!(normalize_keep_case("SECRET"), normalize_keep_case("secret"));
    }

    #[test]
    fn different_answers_do_not_match() {
        assert!(!answers_match("a bird in the hand", "a bird in the bush"));
    }
}
