//! Text normalization shared by the match key segments.
//!
//! Three operations cover every segment:
//!
//! - [`strip_punctuation`] — percent escapes, one leading article, quote and
//!   brace removal, `&` spelled out, then a fixed punctuation set replaced
//! - [`unaccent`] — canonical decomposition with diacritics removed
//! - [`pad_content`] — space collapsing and fixed-width pad/truncate with `_`
//!
//! The punctuation set is exact. Adding or dropping a character changes keys
//! and breaks matching against keys produced elsewhere.

use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Characters replaced by [`strip_punctuation`], in code point order.
pub const PUNCTUATION: [char; 29] = [
    ' ', '!', '"', '#', '$', '(', ')', '*', '+', ',', '-', '.', '/', ':', ';', '<', '=', '>',
    '?', '@', '[', '\\', ']', '^', '_', '`', '|', '~', '\u{00A9}',
];

/// Fill character for padded segments
pub const PAD_CHAR: char = '_';

lazy_static! {
    static ref LEADING_ARTICLE: Regex = Regex::new(r"^(?i) *(?:a|an|the) +").unwrap();
    static ref DIACRITIC: Regex = Regex::new(r"\p{Diacritic}").unwrap();
    static ref SPACE_RUN: Regex = Regex::new(r" +").unwrap();
}

/// Strip punctuation from a key part, replacing it with `replacement`.
///
/// Steps, in order:
/// 1. `%22` and then any remaining `%` become `replacement`
/// 2. one leading `a`, `an` or `the` followed by spaces is removed
///    (case-insensitive, leading spaces allowed)
/// 3. `'`, `{` and `}` are deleted
/// 4. `&` becomes `and`
/// 5. every character of [`PUNCTUATION`] becomes `replacement`
///
/// Stripping twice equals stripping once only with `_` as the replacement.
/// With `' '` an article hidden behind a deleted quote (`'the x`) survives the
/// first pass and is removed by the second.
///
/// # Examples
///
/// ```
/// use goldrush::normalize::strip_punctuation;
///
/// assert_eq!(strip_punctuation("The Great Gatsby", '_'), "Great_Gatsby");
/// assert_eq!(strip_punctuation("Therapist's Guide", '_'), "Therapists_Guide");
/// assert_eq!(strip_punctuation("Rock & roll!", ' '), "Rock and roll ");
/// ```
#[must_use]
pub fn strip_punctuation(text: &str, replacement: char) -> String {
    let mut buf = [0u8; 4];
    let replacement_str: &str = replacement.encode_utf8(&mut buf);

    let escaped = text.replace("%22", replacement_str).replace('%', replacement_str);
    let without_article = LEADING_ARTICLE.replace(&escaped, "");

    without_article
        .chars()
        .filter(|c| !matches!(c, '\'' | '{' | '}'))
        .fold(String::with_capacity(text.len()), |mut out, c| {
            if c == '&' {
                out.push_str("and");
            } else if PUNCTUATION.contains(&c) {
                out.push(replacement);
            } else {
                out.push(c);
            }
            out
        })
}

/// Decompose to NFD and drop every diacritic code point.
///
/// # Examples
///
/// ```
/// use goldrush::normalize::unaccent;
///
/// assert_eq!(unaccent("Crème brûlée"), "Creme brulee");
/// assert_eq!(unaccent("Dvořák"), "Dvorak");
/// ```
#[must_use]
pub fn unaccent(text: &str) -> String {
    let decomposed: String = text.nfd().collect();
    DIACRITIC.replace_all(&decomposed, "").into_owned()
}

/// [`unaccent`] lifted over optional field data; absence passes through.
#[must_use]
pub fn normalize_and_unaccent(text: Option<&str>) -> Option<String> {
    text.map(unaccent)
}

/// Collapse spaces, turn them into `_`, and fit the result to exactly `width`
/// characters by truncating or right-padding with `_`.
///
/// # Examples
///
/// ```
/// use goldrush::normalize::pad_content;
///
/// assert_eq!(pad_content("a  b", 6), "a_b___");
/// assert_eq!(pad_content("abcdefgh", 4), "abcd");
/// ```
#[must_use]
pub fn pad_content(text: &str, width: usize) -> String {
    let collapsed = SPACE_RUN.replace_all(text, " ");
    let mut padded: String = collapsed
        .chars()
        .map(|c| if c == ' ' { PAD_CHAR } else { c })
        .take(width)
        .collect();
    let len = padded.chars().count();
    padded.extend(std::iter::repeat(PAD_CHAR).take(width - len));
    padded
}
