#![no_main]
//! Arbitrary input either fails to load or yields a key; it never panics.

use goldrush::{matchkey_with_config, MatchKeyConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let _ = matchkey_with_config(input, &MatchKeyConfig::default());
        let _ = matchkey_with_config(input, &MatchKeyConfig::debug());
    }
});
