//! Common test helpers shared across the integration tests.

#![allow(dead_code)]

use serde_json::{json, Value};

/// Leader used by most fixtures (type of record `a`).
pub const BOOK_LEADER: &str = "01142cam  2200301 a 4500";

/// Control field entry, `{tag: value}`.
pub fn control(tag: &str, value: &str) -> Value {
    json!({ tag: value })
}

/// Data field entry with blank indicators.
pub fn data(tag: &str, subfields: &[(&str, &str)]) -> Value {
    let subfields: Vec<Value> = subfields
        .iter()
        .map(|(code, value)| json!({ *code: *value }))
        .collect();
    json!({ tag: { "ind1": " ", "ind2": " ", "subfields": subfields } })
}

/// Serialize a MARC-in-JSON document with the given leader and fields.
pub fn marc_json(leader: &str, fields: Vec<Value>) -> String {
    json!({ "leader": leader, "fields": fields }).to_string()
}

/// A realistic monograph record exercising most segments.
pub fn monograph() -> String {
    marc_json(
        BOOK_LEADER,
        vec![
            control("001", "ocm00012345"),
            control("008", "040520s2004    nyua          001 0 eng  "),
            data("100", &[("a", "García Márquez, Gabriel,"), ("d", "1927-2014")]),
            data(
                "245",
                &[
                    ("a", "The general in his labyrinth :"),
                    ("b", "a novel /"),
                    ("c", "translated by Edith Grossman."),
                ],
            ),
            data("250", &[("a", "1st Vintage International ed.")]),
            data("260", &[("a", "New York :"), ("b", "Vintage Books,"), ("c", "2004.")]),
            data("300", &[("a", "285 p. ;"), ("c", "21 cm.")]),
        ],
    )
}

/// Split a production key into its segments using the known widths.
///
/// Only valid when the type of record segment is present and the GDCN is empty.
pub fn split_fixed_key(key: &str) -> Vec<String> {
    use goldrush::config::*;
    let widths = [
        TITLE_WIDTH,
        GMD_WIDTH,
        PUBLICATION_YEAR_WIDTH,
        PAGINATION_WIDTH,
        EDITION_WIDTH,
        PUBLISHER_WIDTH,
        TYPE_OF_RECORD_WIDTH,
        TITLE_PART_WIDTH,
        TITLE_NUMBER_WIDTH,
        AUTHOR_WIDTH,
        INCLUSIVE_DATES_WIDTH,
        ELECTRONIC_WIDTH,
    ];
    let chars: Vec<char> = key.chars().collect();
    let mut start = 0;
    widths
        .iter()
        .map(|width| {
            let segment: String = chars[start..start + width].iter().collect();
            start += width;
            segment
        })
        .collect()
}
