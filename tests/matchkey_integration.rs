//! Integration tests for match key generation from MARC-in-JSON input.

mod common;

use common::{control, data, marc_json, monograph, split_fixed_key, BOOK_LEADER};
use goldrush::config::{FIXED_KEY_WIDTH, TITLE_WIDTH};
use goldrush::{matchkey, matchkey_with_config, FormatError, MatchKeyConfig};

fn pad(text: &str, width: usize) -> String {
    format!("{text:_<width$}")
}

#[test]
fn test_monograph_key() {
    let key = matchkey(&monograph()).unwrap();

    let expected = [
        pad("general_in_his_labyrinthnovel", TITLE_WIDTH),
        pad("", 5),
        "2004".to_string(),
        pad("", 4),
        pad("1", 3),
        "vinta".to_string(),
        "a".to_string(),
        pad("", 30),
        pad("", 10),
        "garcia_marquez__gabr".to_string(),
        pad("", 15),
        "p".to_string(),
    ]
    .concat();

    assert_eq!(key, expected);
    assert_eq!(key.len(), FIXED_KEY_WIDTH);
}

#[test]
fn test_monograph_segments() {
    let key = matchkey(&monograph()).unwrap();
    let segments = split_fixed_key(&key);

    assert_eq!(segments[2], "2004");
    assert_eq!(segments[4], "1__");
    assert_eq!(segments[5], "vinta");
    assert_eq!(segments[6], "a");
    assert_eq!(segments[11], "p");
}

#[test]
fn test_deterministic() {
    let input = monograph();
    let first = matchkey(&input).unwrap();
    for _ in 0..10 {
        assert_eq!(matchkey(&input).unwrap(), first);
    }
}

#[test]
fn test_year_fallback_to_264() {
    let input = marc_json(
        BOOK_LEADER,
        vec![
            control("008", "040520s9999    nyu           000 0 eng d"),
            data("245", &[("a", "Title")]),
            data("264", &[("b", "Publisher"), ("c", "2004")]),
        ],
    );
    let key = matchkey(&input).unwrap();
    assert_eq!(split_fixed_key(&key)[2], "2004");
}

#[test]
fn test_year_fallback_to_default() {
    let input = marc_json(
        BOOK_LEADER,
        vec![
            control("008", "040520n        nyu           000 0 eng d"),
            data("260", &[("c", "[n.d.]")]),
        ],
    );
    let key = matchkey(&input).unwrap();
    assert_eq!(split_fixed_key(&key)[2], "0000");
}

#[test]
fn test_article_stripping_in_title() {
    let gatsby = matchkey(&marc_json(
        BOOK_LEADER,
        vec![data("245", &[("a", "The Great Gatsby")])],
    ))
    .unwrap();
    assert!(gatsby.starts_with("great_gatsby___"));

    let therapist = matchkey(&marc_json(
        BOOK_LEADER,
        vec![data("245", &[("a", "Therapist's Guide")])],
    ))
    .unwrap();
    assert!(therapist.starts_with("therapists_guide___"));
}

#[test]
fn test_differently_cataloged_records_share_a_key() {
    let first = marc_json(
        BOOK_LEADER,
        vec![
            control("008", "040520s2004    nyu           000 0 eng d"),
            data("100", &[("a", "Brontë, Charlotte,")]),
            data("245", &[("a", "Jane Eyre :"), ("b", "an autobiography /")]),
            data("260", &[("b", "Penguin,"), ("c", "2004.")]),
        ],
    );
    let second = marc_json(
        BOOK_LEADER,
        vec![
            control("001", "other-source-42"),
            data("100", &[("a", "BRONTE, CHARLOTTE,")]),
            data("245", &[("a", "JANE EYRE:"), ("b", "AN AUTOBIOGRAPHY")]),
            data("264", &[("b", "Penguin"), ("c", "©2004")]),
        ],
    );

    assert_eq!(matchkey(&first).unwrap(), matchkey(&second).unwrap());
}

#[test]
fn test_title_parts() {
    let input = marc_json(
        BOOK_LEADER,
        vec![
            data("245", &[("a", "Works."), ("p", "Poetry"), ("n", "v. 3")]),
            data("245", &[("p", "Drama and verse"), ("p", "Letters")]),
        ],
    );
    let key = matchkey(&input).unwrap();
    let segments = split_fixed_key(&key);

    assert!(segments[0].starts_with("workspoetry_"));
    assert_eq!(segments[7], pad("drama_and_letters", 30));
    assert_eq!(segments[8], pad("v__3", 10));
}

#[test]
fn test_gdcn_is_unpadded() {
    let input = marc_json(
        BOOK_LEADER,
        vec![
            data("086", &[("a", "Y 4.G 74/7:SE 2/3")]),
            data("245", &[("a", "Hearing")]),
        ],
    );
    let key = matchkey(&input).unwrap();
    assert_eq!(key.len(), FIXED_KEY_WIDTH + "y_4_g_74_7_se_2_3".len());
    assert!(key.ends_with("y_4_g_74_7_se_2_3p"));
}

#[test]
fn test_short_leader_drops_type_of_record() {
    let input = marc_json("00000nam", vec![data("245", &[("a", "Short")])]);
    let key = matchkey(&input).unwrap();
    assert_eq!(key.len(), FIXED_KEY_WIDTH - 1);
}

#[test]
fn test_electronic_from_007_only() {
    let input = marc_json(BOOK_LEADER, vec![control("007", "cr ")]);
    assert!(matchkey(&input).unwrap().ends_with('e'));

    let input = marc_json(BOOK_LEADER, vec![control("001", "x")]);
    assert!(matchkey(&input).unwrap().ends_with('p'));
}

#[test]
fn test_debug_delimiter_marks_segments() {
    let key = matchkey_with_config(&monograph(), &MatchKeyConfig::debug()).unwrap();
    let parts: Vec<&str> = key.split('|').collect();
    // Leading delimiter yields an empty first part
    assert_eq!(parts.len(), 14);
    assert_eq!(parts[0], "");
    assert_eq!(parts[3], "2004");
    assert_eq!(parts[12], "");
    assert_eq!(parts[13], "p");
}

#[test]
fn test_payload_envelope() {
    let bare = monograph();
    let wrapped = format!(r#"{{"marc": {bare}}}"#);
    assert_eq!(matchkey(&wrapped).unwrap(), matchkey(&bare).unwrap());
}

#[test]
fn test_format_errors() {
    let err = matchkey(r#"{"leader": "00000nam a2200000 a 4500"}"#).unwrap_err();
    assert!(matches!(err, FormatError::MissingFields));
    assert!(err.to_string().contains("fields"));

    let err = matchkey(r#"{"fields": [{"001": "x"}]}"#).unwrap_err();
    assert!(matches!(err, FormatError::MissingLeader));
    assert!(err.to_string().contains("leader"));

    let err = matchkey(r#"{"leader": "x", "fields": [{"leader": "x"}]}"#).unwrap_err();
    assert!(matches!(err, FormatError::NonNumericTag(_)));

    assert!(matches!(
        matchkey("<record/>").unwrap_err(),
        FormatError::Json(_)
    ));
}
