//! Loading MARC-in-JSON documents into [`Record`]s.
//!
//! MARC-in-JSON is the JSON shape used by library ingest pipelines for MARC
//! records:
//!
//! - `leader` is a string member of the record object
//! - `fields` is an array of one-entry objects keyed by tag
//! - Control fields: `{tag: value}`
//! - Data fields: `{tag: {ind1, ind2, subfields: [{code: value}, ...]}}`
//!
//! The record may also arrive wrapped in an ingest payload as
//! `{"marc": {"leader": ..., "fields": [...]}}`.
//!
//! Validation is all-or-nothing and happens before any field is read: the
//! `fields` array must exist, be non-empty, start with a numerically tagged
//! entry, and the `leader` must be a non-empty string. Beyond that first entry
//! the body is read leniently; entries that do not fit the shape are skipped.

use crate::error::{FormatError, Result};
use crate::record::{DataField, Field, Record};
use serde_json::{Map, Value};

/// Parse and validate a MARC-in-JSON document.
///
/// # Examples
///
/// ```
/// use goldrush::marcjson;
///
/// let record = marcjson::load(
///     r#"{"leader": "00000nam a2200000 a 4500",
///         "fields": [{"001": "12345"},
///                    {"245": {"ind1": "1", "ind2": "0",
///                             "subfields": [{"a": "Title"}]}}]}"#,
/// )?;
/// assert_eq!(record.subfield("245", 'a'), Some("Title"));
/// # Ok::<(), goldrush::FormatError>(())
/// ```
///
/// # Errors
///
/// Returns a [`FormatError`] if the input is not JSON or fails structural
/// validation. No partial record is returned.
pub fn load(input: &str) -> Result<Record> {
    let json: Value = serde_json::from_str(input)?;
    load_value(&json)
}

/// Validate an already parsed JSON document and convert it to a [`Record`].
///
/// # Errors
///
/// Returns a [`FormatError`] naming the first structural expectation that
/// failed, checked in this order: object shape, `fields` present, `fields` an
/// array, `fields` non-empty, `fields[0]` numerically tagged, `leader` present.
pub fn load_value(json: &Value) -> Result<Record> {
    let mut obj = json.as_object().ok_or(FormatError::NotAnObject)?;
    if let Some(marc) = obj.get("marc") {
        obj = marc.as_object().ok_or(FormatError::NotAnObject)?;
    }

    let fields = obj
        .get("fields")
        .ok_or(FormatError::MissingFields)?
        .as_array()
        .ok_or(FormatError::FieldsNotArray)?;
    let first = fields.first().ok_or(FormatError::EmptyFields)?;
    validate_first_field(first)?;

    let leader = obj
        .get("leader")
        .and_then(Value::as_str)
        .filter(|leader| !leader.is_empty())
        .ok_or(FormatError::MissingLeader)?;

    let mut record = Record::new(leader);
    for item in fields {
        let Some(entry) = item.as_object() else {
            continue;
        };
        for (tag, value) in entry {
            if let Some(field) = parse_field(tag, value) {
                record.add_field(field);
            }
        }
    }

    Ok(record)
}

/// The keys of the first field, taken together, must form one numeric tag.
fn validate_first_field(first: &Value) -> Result<()> {
    let keys = match first {
        Value::Object(entry) => entry.keys().map(String::as_str).collect::<Vec<_>>().join(","),
        Value::String(s) => (0..s.chars().count())
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(","),
        Value::Array(items) => (0..items.len())
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(","),
        _ => String::new(),
    };

    if !keys.is_empty() && keys.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(FormatError::NonNumericTag(keys))
    }
}

fn parse_field(tag: &str, value: &Value) -> Option<Field> {
    match value {
        Value::String(s) => Some(Field::control(tag, s.as_str())),
        Value::Object(body) => Some(Field::data(tag, parse_data_field(body))),
        _ => None,
    }
}

fn parse_data_field(body: &Map<String, Value>) -> DataField {
    let indicator = |key: &str| {
        body.get(key)
            .and_then(Value::as_str)
            .and_then(|s| s.chars().next())
            .unwrap_or(' ')
    };
    let mut data = DataField::new(indicator("ind1"), indicator("ind2"));

    if let Some(subfields) = body.get("subfields").and_then(Value::as_array) {
        for sf in subfields.iter().filter_map(Value::as_object) {
            for (code, value) in sf {
                let mut chars = code.chars();
                // Codes are single characters; anything longer can never be looked up
                let (Some(code_char), None) = (chars.next(), chars.next()) else {
                    continue;
                };
                if let Some(str_value) = value.as_str() {
                    data.add_subfield(code_char, str_value.to_string());
                }
            }
        }
    }

    data
}
