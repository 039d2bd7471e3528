//! Segment widths and assembly options for GoldRush match keys.
//!
//! The widths below belong to the frozen ruleset identified by
//! [`RULESET_VERSION`]. Keys produced with different widths never compare
//! equal, so they are constants rather than options.

use serde::Deserialize;
use std::fmt;

/// GoldRush ruleset implemented by this crate (specification of September 2021).
pub const RULESET_VERSION: &str = "1.1.0";

/// Title (245 $a $b $p)
pub const TITLE_WIDTH: usize = 70;
/// General medium designator (245 $h)
pub const GMD_WIDTH: usize = 5;
/// Publication year (008, 264 $c, 260 $c)
pub const PUBLICATION_YEAR_WIDTH: usize = 4;
/// Pagination (300 $a)
pub const PAGINATION_WIDTH: usize = 4;
/// Edition statement (250 $a)
pub const EDITION_WIDTH: usize = 3;
/// Publisher name (264 $b, 260 $b)
pub const PUBLISHER_WIDTH: usize = 5;
/// Type of record (leader/06), never padded
pub const TYPE_OF_RECORD_WIDTH: usize = 1;
/// Title part continuation (245 $p after the first)
pub const TITLE_PART_WIDTH: usize = 30;
/// Share of each continued title part before concatenation
pub const TITLE_PART_ITEM_WIDTH: usize = 10;
/// Title number (245 $n)
pub const TITLE_NUMBER_WIDTH: usize = 10;
/// Author (100 $a, 110 $a, 111 $a)
pub const AUTHOR_WIDTH: usize = 20;
/// Inclusive dates (245 $f)
pub const INCLUSIVE_DATES_WIDTH: usize = 15;
/// Upper bound for the unpadded government document classification number (086 $a)
pub const GDCN_MAX_LEN: usize = 32000;
/// Electronic indicator, `e` or `p`
pub const ELECTRONIC_WIDTH: usize = 1;

/// Length of a key whose leader yields a type of record and whose GDCN is
/// empty, without delimiters. The GDCN adds its own length on top.
pub const FIXED_KEY_WIDTH: usize = TITLE_WIDTH
    + GMD_WIDTH
    + PUBLICATION_YEAR_WIDTH
    + PAGINATION_WIDTH
    + EDITION_WIDTH
    + PUBLISHER_WIDTH
    + TYPE_OF_RECORD_WIDTH
    + TITLE_PART_WIDTH
    + TITLE_NUMBER_WIDTH
    + AUTHOR_WIDTH
    + INCLUSIVE_DATES_WIDTH
    + ELECTRONIC_WIDTH;

/// Which tag combination marks an "other electronic document".
///
/// Two published revisions of the ruleset disagree here. `RequireBoth` follows
/// the later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElectronicDocumentRule {
    /// Both 086 and 856 must be present
    #[default]
    RequireBoth,
    /// Either 086 or 856 suffices
    RequireEither,
}

impl ElectronicDocumentRule {
    /// Apply the rule to the presence of 086 and 856.
    #[must_use]
    pub const fn applies(self, has_086: bool, has_856: bool) -> bool {
        match self {
            Self::RequireBoth => has_086 && has_856,
            Self::RequireEither => has_086 || has_856,
        }
    }
}

impl fmt::Display for ElectronicDocumentRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequireBoth => write!(f, "086 and 856"),
            Self::RequireEither => write!(f, "086 or 856"),
        }
    }
}

/// Options for assembling a match key.
///
/// # Examples
///
/// ```
/// use goldrush::MatchKeyConfig;
///
/// // Production keys: no delimiter between segments
/// let config = MatchKeyConfig::default();
/// assert_eq!(config.delimiter, None);
///
/// // Debug keys: every segment prefixed with '|'
/// let config = MatchKeyConfig::debug();
/// assert_eq!(config.delimiter, Some('|'));
///
/// // Hosts may keep the options in JSON
/// let config: MatchKeyConfig =
///     serde_json::from_str(r#"{"electronic_document_rule": "require_either"}"#).unwrap();
/// assert_eq!(config.delimiter, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct MatchKeyConfig {
    /// Character prefixed to every segment, `None` for production keys.
    pub delimiter: Option<char>,

    /// Tag combination for the last electronic indicator check.
    pub electronic_document_rule: ElectronicDocumentRule,
}

impl MatchKeyConfig {
    /// Delimiter used when inspecting keys by eye
    pub const DEBUG_DELIMITER: char = '|';

    /// Configuration that separates segments with [`Self::DEBUG_DELIMITER`].
    #[must_use]
    pub const fn debug() -> Self {
        MatchKeyConfig {
            delimiter: Some(Self::DEBUG_DELIMITER),
            electronic_document_rule: ElectronicDocumentRule::RequireBoth,
        }
    }

    /// Replace the delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: Option<char>) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Replace the electronic document rule.
    #[must_use]
    pub const fn with_electronic_document_rule(mut self, rule: ElectronicDocumentRule) -> Self {
        self.electronic_document_rule = rule;
        self
    }
}
