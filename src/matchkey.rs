//! Match key assembly.
//!
//! A GoldRush match key is the concatenation of thirteen segments, always in
//! the order of [`Segment::ALL`], lower-cased as a whole. With a debug
//! delimiter configured every segment is prefixed with it, which makes the
//! segment boundaries visible.
//!
//! # Examples
//!
//! ```
//! use goldrush::{matchkey, MatchKeyConfig, matchkey_with_config};
//!
//! let input = r#"{
//!     "leader": "00000nam a2200000 a 4500",
//!     "fields": [
//!         {"008": "850101s1925    nyu           000 1 eng d"},
//!         {"100": {"ind1": "1", "ind2": " ", "subfields": [{"a": "Fitzgerald, F. Scott"}]}},
//!         {"245": {"ind1": "1", "ind2": "4", "subfields": [{"a": "The Great Gatsby"}]}}
//!     ]
//! }"#;
//!
//! let key = matchkey(input)?;
//! assert!(key.starts_with("great_gatsby_"));
//! assert_eq!(key.len(), goldrush::config::FIXED_KEY_WIDTH);
//!
//! let debug_key = matchkey_with_config(input, &MatchKeyConfig::debug())?;
//! assert_eq!(debug_key.matches('|').count(), 13);
//! # Ok::<(), goldrush::FormatError>(())
//! ```

use crate::components;
use crate::config::MatchKeyConfig;
use crate::error::Result;
use crate::marcjson;
use crate::record::Record;
use serde_json::Value;
use std::fmt;

/// The segments of a match key, in assembly order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// 245 $a $b $p
    Title,
    /// 245 $h
    GeneralMediumDesignator,
    /// 008, 264 $c, 260 $c
    PublicationYear,
    /// 300 $a
    Pagination,
    /// 250 $a
    EditionStatement,
    /// 264 $b, 260 $b
    PublisherName,
    /// Leader position 6
    TypeOfRecord,
    /// 245 $p after the first
    TitlePart,
    /// 245 $n
    TitleNumber,
    /// 100 $a, 110 $a, 111 $a
    Author,
    /// 245 $f
    InclusiveDates,
    /// 086 $a
    GovernmentDocumentNumber,
    /// Several fields, see [`components::electronic_indicator`]
    ElectronicIndicator,
}

impl Segment {
    /// Number of segments in a key
    pub const COUNT: usize = 13;

    /// Every segment in assembly order
    pub const ALL: [Segment; Segment::COUNT] = [
        Segment::Title,
        Segment::GeneralMediumDesignator,
        Segment::PublicationYear,
        Segment::Pagination,
        Segment::EditionStatement,
        Segment::PublisherName,
        Segment::TypeOfRecord,
        Segment::TitlePart,
        Segment::TitleNumber,
        Segment::Author,
        Segment::InclusiveDates,
        Segment::GovernmentDocumentNumber,
        Segment::ElectronicIndicator,
    ];

    /// Short name used when displaying a key breakdown.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Segment::Title => "title",
            Segment::GeneralMediumDesignator => "gmd",
            Segment::PublicationYear => "publication_year",
            Segment::Pagination => "pagination",
            Segment::EditionStatement => "edition",
            Segment::PublisherName => "publisher",
            Segment::TypeOfRecord => "type_of_record",
            Segment::TitlePart => "title_part",
            Segment::TitleNumber => "title_number",
            Segment::Author => "author",
            Segment::InclusiveDates => "inclusive_dates",
            Segment::GovernmentDocumentNumber => "gdcn",
            Segment::ElectronicIndicator => "electronic",
        }
    }

    fn build(self, record: &Record, config: &MatchKeyConfig) -> String {
        match self {
            Segment::Title => components::title(&[
                record.subfield("245", 'a'),
                record.subfield("245", 'b'),
                record.subfield("245", 'p'),
            ]),
            Segment::GeneralMediumDesignator => {
                components::general_medium_designator(record.subfield("245", 'h'))
            }
            Segment::PublicationYear => components::publication_year(
                record.control_value("008"),
                record.subfield("264", 'c'),
                record.subfield("260", 'c'),
            ),
            Segment::Pagination => components::pagination(record.subfield("300", 'a')),
            Segment::EditionStatement => {
                components::edition_statement(record.subfield("250", 'a'))
            }
            Segment::PublisherName => components::publisher_name(
                record.subfield("264", 'b'),
                record.subfield("260", 'b'),
            ),
            Segment::TypeOfRecord => components::type_of_record(&record.leader),
            Segment::TitlePart => {
                components::title_part(&record.get_multi_subfields("245", 'p'))
            }
            Segment::TitleNumber => components::title_number(record.subfield("245", 'n')),
            Segment::Author => components::author(&[
                record.subfield("100", 'a'),
                record.subfield("110", 'a'),
                record.subfield("111", 'a'),
            ]),
            Segment::InclusiveDates => components::inclusive_dates(record.subfield("245", 'f')),
            Segment::GovernmentDocumentNumber => {
                components::government_document_number(record.subfield("086", 'a'))
            }
            Segment::ElectronicIndicator => {
                components::electronic_indicator(record, config.electronic_document_rule)
                    .to_string()
            }
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A computed match key, kept segment by segment.
///
/// Segments hold the builders' output before case folding; [`fmt::Display`]
/// renders the final key (delimited if configured, lower-cased).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchKey {
    segments: [String; Segment::COUNT],
    delimiter: Option<char>,
}

impl MatchKey {
    /// Build every segment for a loaded record.
    #[must_use]
    pub fn from_record(record: &Record, config: &MatchKeyConfig) -> Self {
        MatchKey {
            segments: Segment::ALL.map(|segment| segment.build(record, config)),
            delimiter: config.delimiter,
        }
    }

    /// Value of one segment, before case folding.
    #[must_use]
    pub fn segment(&self, segment: Segment) -> &str {
        &self.segments[segment as usize]
    }

    /// Iterate over segments in assembly order.
    pub fn segments(&self) -> impl Iterator<Item = (Segment, &str)> {
        Segment::ALL
            .into_iter()
            .zip(self.segments.iter().map(String::as_str))
    }
}

impl fmt::Display for MatchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut key = String::new();
        for segment in &self.segments {
            if let Some(delimiter) = self.delimiter {
                key.push(delimiter);
            }
            key.push_str(segment);
        }
        f.write_str(&key.to_lowercase())
    }
}

/// Generate the production GoldRush match key for a MARC-in-JSON document.
///
/// # Errors
///
/// Returns a [`crate::FormatError`] if the document fails to load. Once the
/// record loads, a key is always produced.
pub fn matchkey(input: &str) -> Result<String> {
    matchkey_with_config(input, &MatchKeyConfig::default())
}

/// Generate a match key with explicit assembly options.
///
/// # Errors
///
/// Returns a [`crate::FormatError`] if the document fails to load.
pub fn matchkey_with_config(input: &str, config: &MatchKeyConfig) -> Result<String> {
    let record = marcjson::load(input)?;
    Ok(MatchKey::from_record(&record, config).to_string())
}

/// A pluggable way of deriving clustering keys from an ingest payload.
///
/// Implementations append zero or more keys and leave `keys` untouched when
/// they have nothing to contribute.
pub trait MatchKeyMethod {
    /// Derive keys from `payload`, appending them to `keys`.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::FormatError`] when the payload cannot be read by the
    /// method.
    fn keys(&self, payload: &Value, keys: &mut Vec<String>) -> Result<()>;
}

/// The GoldRush match key as a [`MatchKeyMethod`].
///
/// Accepts either a bare record or an ingest payload carrying the record under
/// `marc`, and contributes exactly one key.
///
/// # Examples
///
/// ```
/// use goldrush::{GoldRush, MatchKeyMethod};
/// use serde_json::json;
///
/// let payload = json!({
///     "marc": {
///         "leader": "00000nam a2200000 a 4500",
///         "fields": [{"001": "a1"}]
///     }
/// });
///
/// let mut keys = Vec::new();
/// GoldRush::default().keys(&payload, &mut keys)?;
/// assert_eq!(keys.len(), 1);
/// # Ok::<(), goldrush::FormatError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GoldRush {
    config: MatchKeyConfig,
}

impl GoldRush {
    /// GoldRush keys assembled with `config`.
    #[must_use]
    pub const fn new(config: MatchKeyConfig) -> Self {
        GoldRush { config }
    }

    /// The assembly options in use.
    #[must_use]
    pub const fn config(&self) -> &MatchKeyConfig {
        &self.config
    }
}

impl MatchKeyMethod for GoldRush {
    fn keys(&self, payload: &Value, keys: &mut Vec<String>) -> Result<()> {
        let record = marcjson::load_value(payload)?;
        keys.push(MatchKey::from_record(&record, &self.config).to_string());
        Ok(())
    }
}
