//! MARC-in-JSON record structures and field access.
//!
//! This module provides the record model the match key pipeline reads from:
//! - [`Record`] — leader plus the ordered field sequence
//! - [`Field`] — one tagged entry, either a control value or a data field
//! - [`DataField`] — indicators plus ordered subfields
//! - [`Subfield`] — a single coded value
//!
//! Repeated tags are ordinary entries in [`Record::fields`]; document order is
//! preserved and the first occurrence wins for single-value access.
//!
//! # Examples
//!
//! ```
//! use goldrush::{DataField, Record};
//!
//! let record = Record::builder("00000nam a2200000 a 4500")
//!     .control_field_str("008", "850101s1984    nyu           000 0 eng d")
//!     .data_field(
//!         "245",
//!         DataField::builder('1', '0')
//!             .subfield_str('a', "The great Gatsby /")
//!             .build(),
//!     )
//!     .build();
//!
//! assert!(record.has_field("245"));
//! assert_eq!(record.subfield("245", 'a'), Some("The great Gatsby /"));
//! assert_eq!(record.subfield("245", 'b'), None);
//! ```

use smallvec::SmallVec;

/// A bibliographic record read from MARC-in-JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Record leader (fixed-length descriptive string, byte 6 is type of record)
    pub leader: String,
    /// Fields in document order, repeated tags included
    pub fields: Vec<Field>,
}

/// One entry of the record's field sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field tag (numeric, normally 3 digits)
    pub tag: String,
    /// Field content
    pub value: FieldValue,
}

/// Content of a field: a plain control value or indicators plus subfields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Plain string value (fixed fields such as 007 and 008)
    Control(String),
    /// Structured value with indicators and subfields
    Data(DataField),
}

/// A data field body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataField {
    /// First indicator
    pub indicator1: char,
    /// Second indicator
    pub indicator2: char,
    /// Subfields in document order (stored in `SmallVec` since most fields carry few subfields)
    pub subfields: SmallVec<[Subfield; 4]>,
}

/// A subfield within a data field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subfield {
    /// Subfield code (single character)
    pub code: char,
    /// Subfield value
    pub value: String,
}

impl Record {
    /// Create an empty record with the given leader
    #[must_use]
    pub fn new(leader: impl Into<String>) -> Self {
        Record {
            leader: leader.into(),
            fields: Vec::new(),
        }
    }

    /// Create a builder for fluently constructing records
    #[must_use]
    pub fn builder(leader: impl Into<String>) -> RecordBuilder {
        RecordBuilder {
            record: Record::new(leader),
        }
    }

    /// Append a field, keeping document order
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Check whether any field entry carries `tag`.
    #[must_use]
    pub fn has_field(&self, tag: &str) -> bool {
        self.fields.iter().any(|field| field.carries(tag))
    }

    /// Get a single value from the first field carrying `tag`.
    ///
    /// Only the first such field is consulted. A control value is returned as
    /// is. For a data field the first non-empty subfield with `code` is
    /// returned; without a code a data field yields `None`.
    ///
    /// `None` means the data is absent. It is never folded into an empty
    /// string, because emptiness after normalization means something different.
    #[must_use]
    pub fn get_field(&self, tag: &str, code: Option<char>) -> Option<&str> {
        let field = self.fields.iter().find(|field| field.carries(tag))?;
        match &field.value {
            FieldValue::Control(value) => Some(value.as_str()),
            FieldValue::Data(data) => code.and_then(|code| data.first_subfield(code)),
        }
    }

    /// Shorthand for [`Record::get_field`] with a subfield code.
    #[must_use]
    pub fn subfield(&self, tag: &str, code: char) -> Option<&str> {
        self.get_field(tag, Some(code))
    }

    /// Shorthand for [`Record::get_field`] without a subfield code.
    #[must_use]
    pub fn control_value(&self, tag: &str) -> Option<&str> {
        self.get_field(tag, None)
    }

    /// Collect every non-empty `code` subfield across all fields carrying `tag`.
    ///
    /// Unlike [`Record::get_field`], every occurrence of the tag contributes,
    /// in document order.
    #[must_use]
    pub fn get_multi_subfields(&self, tag: &str, code: char) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|field| field.carries(tag))
            .filter_map(|field| match &field.value {
                FieldValue::Data(data) => Some(data),
                FieldValue::Control(_) => None,
            })
            .flat_map(|data| data.subfields_by_code(code))
            .collect()
    }
}

/// Builder for [`Record`]
#[derive(Debug)]
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    /// Add a control field to the record being built
    #[must_use]
    pub fn control_field_str(mut self, tag: &str, value: &str) -> Self {
        self.record.add_field(Field::control(tag, value));
        self
    }

    /// Add a data field to the record being built
    #[must_use]
    pub fn data_field(mut self, tag: &str, data: DataField) -> Self {
        self.record.add_field(Field::data(tag, data));
        self
    }

    /// Add an already constructed field
    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.record.add_field(field);
        self
    }

    /// Build the record
    #[must_use]
    pub fn build(self) -> Record {
        self.record
    }
}

impl Field {
    /// Create a control field
    #[must_use]
    pub fn control(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Field {
            tag: tag.into(),
            value: FieldValue::Control(value.into()),
        }
    }

    /// Whether this entry counts as an occurrence of `tag`
    #[must_use]
    pub fn carries(&self, tag: &str) -> bool {
        self.tag == tag && !self.value.is_blank()
    }

    /// Create a data field
    #[must_use]
    pub fn data(tag: impl Into<String>, data: DataField) -> Self {
        Field {
            tag: tag.into(),
            value: FieldValue::Data(data),
        }
    }
}

impl FieldValue {
    /// A control value that is the empty string.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, FieldValue::Control(value) if value.is_empty())
    }
}

impl DataField {
    /// Create a data field with no subfields
    #[must_use]
    pub fn new(indicator1: char, indicator2: char) -> Self {
        DataField {
            indicator1,
            indicator2,
            subfields: SmallVec::new(),
        }
    }

    /// Create a builder for constructing data fields fluently
    #[must_use]
    pub fn builder(indicator1: char, indicator2: char) -> DataFieldBuilder {
        DataFieldBuilder {
            data: DataField::new(indicator1, indicator2),
        }
    }

    /// Add a subfield
    pub fn add_subfield(&mut self, code: char, value: String) {
        self.subfields.push(Subfield { code, value });
    }

    /// First non-empty value for a subfield code
    #[must_use]
    pub fn first_subfield(&self, code: char) -> Option<&str> {
        self.subfields_by_code(code).next()
    }

    /// Iterate over non-empty values with a specific code
    pub fn subfields_by_code(&self, code: char) -> impl Iterator<Item = &str> {
        self.subfields
            .iter()
            .filter(move |sf| sf.code == code && !sf.value.is_empty())
            .map(|sf| sf.value.as_str())
    }
}

/// Builder for [`DataField`]
#[derive(Debug)]
pub struct DataFieldBuilder {
    data: DataField,
}

impl DataFieldBuilder {
    /// Add a subfield using a string slice
    #[must_use]
    pub fn subfield_str(mut self, code: char, value: &str) -> Self {
        self.data.add_subfield(code, value.to_string());
        self
    }

    /// Build the data field
    #[must_use]
    pub fn build(self) -> DataField {
        self.data
    }
}
