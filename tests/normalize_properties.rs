//! Property tests for text normalization and key assembly.

mod common;

use common::{data, marc_json, BOOK_LEADER};
use goldrush::config::FIXED_KEY_WIDTH;
use goldrush::matchkey;
use goldrush::normalize::{pad_content, strip_punctuation, unaccent, PUNCTUATION};
use proptest::prelude::*;

proptest! {
    #[test]
    fn pad_content_has_exact_width(text in ".{0,120}", width in 0usize..100) {
        prop_assert_eq!(pad_content(&text, width).chars().count(), width);
    }

    #[test]
    fn pad_content_never_emits_spaces(text in "[a-z ]{0,40}") {
        prop_assert!(!pad_content(&text, 50).contains(' '));
    }

    #[test]
    fn strip_punctuation_with_underscore_is_idempotent(text in ".{0,80}") {
        let once = strip_punctuation(&text, '_');
        prop_assert_eq!(strip_punctuation(&once, '_'), once.clone());
    }

    #[test]
    fn strip_punctuation_removes_the_whole_set(text in ".{0,80}") {
        let stripped = strip_punctuation(&text, '_');
        for c in PUNCTUATION.iter().filter(|&&c| c != '_') {
            prop_assert!(!stripped.contains(*c));
        }
        prop_assert!(!stripped.contains('%'));
        prop_assert!(!stripped.contains('&'));
    }

    #[test]
    fn unaccent_leaves_ascii_alone(text in "[ -~]{0,80}") {
        // ^ and ` carry the Diacritic property
        let expected: String = text.chars().filter(|c| !matches!(c, '^' | '`')).collect();
        prop_assert_eq!(unaccent(&text), expected);
    }

    #[test]
    fn key_length_is_stable(title in "\\PC{0,200}", author in "\\PC{0,60}") {
        let input = marc_json(
            BOOK_LEADER,
            vec![
                data("100", &[("a", author.as_str())]),
                data("245", &[("a", title.as_str())]),
            ],
        );
        let key = matchkey(&input).unwrap();
        // Lower-casing can expand a character into several, never shrink one
        prop_assert!(key.chars().count() >= FIXED_KEY_WIDTH);
        prop_assert_eq!(matchkey(&input).unwrap(), key);
    }
}
