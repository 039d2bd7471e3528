#![warn(missing_docs)]

//! # GoldRush match keys
//!
//! Deterministic match keys for MARC-in-JSON bibliographic records, used to
//! recognise records from different catalogs that describe the same
//! publication.
//!
//! A key is a flat string of fixed-width segments (title, medium, year,
//! pagination, edition, publisher, type of record, title parts, title number,
//! author, inclusive dates, government document number, electronic indicator),
//! each normalized so that cataloging differences in punctuation, articles,
//! accents and case do not separate matching records.
//!
//! ## Quick Start
//!
//! ```
//! use goldrush::matchkey;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let input = r#"{
//!     "leader": "01142cam  2200301 a 4500",
//!     "fields": [
//!         {"007": "cr |||||||||||"},
//!         {"245": {"ind1": "1", "ind2": "0", "subfields": [{"a": "Moby Dick"}]}}
//!     ]
//! }"#;
//!
//! let key = matchkey(input)?;
//! assert!(key.starts_with("moby_dick_"));
//! assert!(key.ends_with('e'));
//! # Ok(())
//! # }
//! ```
//!
//! The function is pure: no state is shared between calls and nothing is
//! logged, so it can be called from any number of threads at once.
//!
//! ## Modules
//!
//! - [`record`] — Record model (`Record`, `Field`, `DataField`, `Subfield`) and field access
//! - [`marcjson`] — Loading and validating MARC-in-JSON documents
//! - [`normalize`] — Punctuation stripping, unaccenting, padding
//! - [`components`] — One builder per key segment
//! - [`matchkey`] — Key assembly and the [`MatchKeyMethod`] trait
//! - [`config`] — Segment widths and assembly options
//! - [`error`] — Error types and result type

pub mod components;
pub mod config;
pub mod error;
pub mod marcjson;
pub mod matchkey;
pub mod normalize;
/// Record model (`Record`, `Field`, `DataField`, `Subfield`) and field access
pub mod record;

pub use config::{ElectronicDocumentRule, MatchKeyConfig, RULESET_VERSION};
pub use error::{FormatError, Result};
pub use matchkey::{matchkey, matchkey_with_config, GoldRush, MatchKey, MatchKeyMethod, Segment};
pub use record::{DataField, Field, FieldValue, Record, Subfield};
