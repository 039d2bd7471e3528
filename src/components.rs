//! Segment builders for GoldRush match keys.
//!
//! Each builder receives already extracted field data (`None` when absent)
//! and returns its segment at the width fixed in [`crate::config`]. Builders
//! never fail: missing or unusable data yields the segment's default.
//!
//! The builders with several candidate sources (publication year, publisher
//! name, electronic indicator) list their candidates in priority order and
//! stop at the first acceptable one.

use crate::config::{
    ElectronicDocumentRule, AUTHOR_WIDTH, EDITION_WIDTH, GDCN_MAX_LEN, GMD_WIDTH,
    INCLUSIVE_DATES_WIDTH, PAGINATION_WIDTH, PUBLICATION_YEAR_WIDTH, PUBLISHER_WIDTH,
    TITLE_NUMBER_WIDTH, TITLE_PART_ITEM_WIDTH, TITLE_PART_WIDTH, TITLE_WIDTH,
};
use crate::normalize::{pad_content, strip_punctuation, unaccent};
use crate::record::Record;
use lazy_static::lazy_static;
use regex::Regex;

/// Publication year used when no source yields one
pub const UNKNOWN_YEAR: &str = "0000";

/// Year value that means "unknown" in 008 and is never accepted
const OPEN_YEAR: &str = "9999";

/// Leading letters of spelled-out ordinals and the edition they stand for
const ORDINAL_WORDS: [(&str, &str); 10] = [
    ("fir", "1"),
    ("sec", "2"),
    ("thi", "3"),
    ("fou", "4"),
    ("fif", "5"),
    ("six", "6"),
    ("sev", "7"),
    ("eig", "8"),
    ("nin", "9"),
    ("ten", "10"),
];

lazy_static! {
    static ref FOUR_DIGITS: Regex = Regex::new(r"[0-9]{4}").unwrap();
    /// Longest run first
    static ref EDITION_NUMBERS: [Regex; 3] = [
        Regex::new(r"[0-9]{3}").unwrap(),
        Regex::new(r"[0-9]{2}").unwrap(),
        Regex::new(r"[0-9]").unwrap(),
    ];
    // Word boundaries are ASCII-only: a non-ASCII letter does not extend a word
    static ref ELECTRONIC_RESOURCE: Regex =
        Regex::new(r"(?i)(?-u:\b)electronic resource(?-u:\b)").unwrap();
    static ref ELECTRONIC_REPRODUCTION: Regex =
        Regex::new(r"(?i)(?-u:\b)electronic reproduction(?-u:\b)").unwrap();
    static ref ONLINE_RESOURCE: Regex =
        Regex::new(r"(?i)(?-u:\b)online resource(?-u:\b)").unwrap();
}

/// Title from 245 $a, $b and $p.
///
/// Each present subfield is stripped of punctuation (space replacement) and
/// trimmed; the pieces are joined without separator, unaccented and padded.
#[must_use]
pub fn title(parts: &[Option<&str>]) -> String {
    let joined: String = parts
        .iter()
        .flatten()
        .map(|part| strip_punctuation(part, ' ').trim().to_string())
        .collect();
    pad_content(&unaccent(&joined), TITLE_WIDTH)
}

/// General medium designator from 245 $h, reduced to ASCII letters and digits.
#[must_use]
pub fn general_medium_designator(gmd: Option<&str>) -> String {
    let reduced: String = gmd
        .map(unaccent)
        .unwrap_or_default()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect();
    pad_content(&reduced, GMD_WIDTH)
}

/// Publication year from 008, then 264 $c, then 260 $c.
///
/// Candidates in priority order:
/// 1. 008 positions 11-14 (date 2)
/// 2. 008 positions 7-10 (date 1)
/// 3. digits of 264 $c
/// 4. digits of 260 $c
///
/// A candidate is accepted when its digits contain a four digit run and are
/// not `9999`. Without any accepted candidate the year is [`UNKNOWN_YEAR`].
///
/// # Examples
///
/// ```
/// use goldrush::components::publication_year;
///
/// let fixed = "040520s9999    xx            000 0 eng d";
/// assert_eq!(publication_year(Some(fixed), Some("c2004."), None), "2004");
/// assert_eq!(publication_year(None, None, Some("[n.d.]")), "0000");
/// ```
#[must_use]
pub fn publication_year(
    fixed_data: Option<&str>,
    rda_date: Option<&str>,
    imprint_date: Option<&str>,
) -> String {
    let candidates: [(Option<&str>, fn(&str) -> Option<String>); 4] = [
        (fixed_data, date2_from_fixed_data),
        (fixed_data, date1_from_fixed_data),
        (rda_date, year_from_statement),
        (imprint_date, year_from_statement),
    ];

    let year = candidates
        .iter()
        .find_map(|&(source, extract)| source.and_then(extract))
        .unwrap_or_else(|| UNKNOWN_YEAR.to_string());
    pad_content(&year, PUBLICATION_YEAR_WIDTH)
}

fn date2_from_fixed_data(fixed_data: &str) -> Option<String> {
    accept_year(digits(fixed_data.chars().skip(11).take(4)))
}

fn date1_from_fixed_data(fixed_data: &str) -> Option<String> {
    accept_year(digits(fixed_data.chars().skip(7).take(4)))
}

fn year_from_statement(statement: &str) -> Option<String> {
    accept_year(digits(statement.chars()))
}

fn digits(chars: impl Iterator<Item = char>) -> String {
    chars.filter(char::is_ascii_digit).collect()
}

/// `digits` holds only ASCII digits, so four or more of them form a run.
fn accept_year(digits: String) -> Option<String> {
    (digits.len() >= 4 && digits != OPEN_YEAR).then_some(digits)
}

/// Pagination: the first four consecutive digits of 300 $a.
#[must_use]
pub fn pagination(extent: Option<&str>) -> String {
    let found = extent
        .and_then(|extent| FOUR_DIGITS.find(extent))
        .map_or("", |m| m.as_str());
    pad_content(found, PAGINATION_WIDTH)
}

/// Edition statement from 250 $a.
///
/// The first run of three digits wins, then two, then one. Without digits the
/// first three letters are looked up as a spelled-out ordinal.
///
/// # Examples
///
/// ```
/// use goldrush::components::edition_statement;
///
/// assert_eq!(edition_statement(Some("Third edition")), "3__");
/// assert_eq!(edition_statement(Some("2nd ed.")), "2__");
/// assert_eq!(edition_statement(Some("Rev. ed.")), "___");
/// ```
#[must_use]
pub fn edition_statement(edition: Option<&str>) -> String {
    let number = edition.map(unaccent).and_then(|text| {
        EDITION_NUMBERS
            .iter()
            .find_map(|re| re.find(&text))
            .map(|m| m.as_str().to_string())
            .or_else(|| ordinal_word(&text).map(str::to_string))
    });
    pad_content(number.as_deref().unwrap_or(""), EDITION_WIDTH)
}

fn ordinal_word(text: &str) -> Option<&'static str> {
    let prefix = text.chars().take(3).collect::<String>().to_lowercase();
    ORDINAL_WORDS
        .iter()
        .find(|(word, _)| *word == prefix)
        .map(|&(_, number)| number)
}

/// Publisher name from 264 $b, falling back to 260 $b.
///
/// 264 is used whenever it is present, even if 260 is also present. The name
/// is unaccented, lower-cased, stripped of punctuation and left without spaces.
#[must_use]
pub fn publisher_name(rda_publisher: Option<&str>, imprint_publisher: Option<&str>) -> String {
    let candidates = [rda_publisher, imprint_publisher];

    let name = candidates
        .into_iter()
        .flatten()
        .next()
        .map(|name| unaccent(name).to_lowercase())
        .unwrap_or_default();
    let squeezed = strip_punctuation(&name, ' ').replace(' ', "");
    pad_content(&squeezed, PUBLISHER_WIDTH)
}

/// Type of record: leader position 6, only for leaders longer than 10 characters.
///
/// This segment is not padded; a short leader contributes nothing.
#[must_use]
pub fn type_of_record(leader: &str) -> String {
    if leader.chars().count() > 10 {
        leader.chars().nth(6).map(String::from).unwrap_or_default()
    } else {
        String::new()
    }
}

/// Title part continuation from every 245 $p except the first.
///
/// The first $p already went into [`title`]. Each remaining part is unaccented,
/// trimmed, stripped with `_` and cut to ten characters before concatenation.
#[must_use]
pub fn title_part(parts: &[&str]) -> String {
    let continued: String = parts
        .iter()
        .skip(1)
        .flat_map(|part| {
            let cleaned = strip_punctuation(unaccent(part).trim(), '_');
            cleaned.chars().take(TITLE_PART_ITEM_WIDTH).collect::<Vec<_>>()
        })
        .collect();
    pad_content(&continued, TITLE_PART_WIDTH)
}

/// Title number from 245 $n.
#[must_use]
pub fn title_number(number: Option<&str>) -> String {
    let stripped = number
        .map(|number| strip_punctuation(number, '_'))
        .unwrap_or_default();
    pad_content(&stripped, TITLE_NUMBER_WIDTH)
}

/// Author from 100 $a, 110 $a and 111 $a; every present value contributes.
#[must_use]
pub fn author(names: &[Option<&str>]) -> String {
    let joined: String = names
        .iter()
        .flatten()
        .map(|name| unaccent(&strip_punctuation(name, '_')))
        .collect();
    pad_content(&joined, AUTHOR_WIDTH)
}

/// Inclusive dates from 245 $f, with spaces removed before stripping.
#[must_use]
pub fn inclusive_dates(dates: Option<&str>) -> String {
    let stripped = dates
        .map(|dates| strip_punctuation(&dates.replace(' ', ""), '_'))
        .unwrap_or_default();
    pad_content(&stripped, INCLUSIVE_DATES_WIDTH)
}

/// Government document classification number from 086 $a.
///
/// Not padded; capped at [`GDCN_MAX_LEN`] characters.
#[must_use]
pub fn government_document_number(number: Option<&str>) -> String {
    number
        .map(|number| {
            unaccent(&strip_punctuation(number, '_'))
                .chars()
                .take(GDCN_MAX_LEN)
                .collect()
        })
        .unwrap_or_default()
}

/// Evidence that a record describes an electronic resource, in priority order.
const ELECTRONIC_EVIDENCE: [fn(&Record) -> bool; 6] = [
    medium_is_electronic_resource,
    local_note_is_reproduction,
    reproduction_note_is_reproduction,
    extent_is_online_resource,
    physical_description_is_computer,
    carrier_type_is_computer,
];

/// Electronic indicator: `e` for electronic resources, `p` otherwise.
///
/// The checks run in order and the first hit decides:
/// 1. 245 $h mentions "electronic resource"
/// 2. 590 $a mentions "electronic reproduction"
/// 3. 533 $a mentions "electronic reproduction"
/// 4. 300 $a mentions "online resource"
/// 5. 007 starts with `c`
/// 6. 337 $a starts with `c`
/// 7. 086 and 856 are present (see [`ElectronicDocumentRule`])
#[must_use]
pub fn electronic_indicator(record: &Record, rule: ElectronicDocumentRule) -> char {
    let electronic = ELECTRONIC_EVIDENCE.iter().any(|check| check(record))
        || rule.applies(record.has_field("086"), record.has_field("856"));
    if electronic {
        'e'
    } else {
        'p'
    }
}

fn mentions(record: &Record, tag: &str, code: char, phrase: &Regex) -> bool {
    record
        .subfield(tag, code)
        .is_some_and(|value| phrase.is_match(&unaccent(value)))
}

fn medium_is_electronic_resource(record: &Record) -> bool {
    mentions(record, "245", 'h', &ELECTRONIC_RESOURCE)
}

fn local_note_is_reproduction(record: &Record) -> bool {
    mentions(record, "590", 'a', &ELECTRONIC_REPRODUCTION)
}

fn reproduction_note_is_reproduction(record: &Record) -> bool {
    mentions(record, "533", 'a', &ELECTRONIC_REPRODUCTION)
}

fn extent_is_online_resource(record: &Record) -> bool {
    mentions(record, "300", 'a', &ONLINE_RESOURCE)
}

fn physical_description_is_computer(record: &Record) -> bool {
    record
        .control_value("007")
        .is_some_and(|value| value.starts_with('c'))
}

fn carrier_type_is_computer(record: &Record) -> bool {
    record
        .subfield("337", 'a')
        .is_some_and(|value| value.starts_with('c'))
}
