// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target: dictionary and text parsing never panic.
//!
//! Whatever a parsed dictionary holds must survive a write/parse cycle
//! unchanged, since parsed words never contain whitespace.

#![no_main]

use acmatch::source;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(words) = source::parse_dictionary(data) {
        let written = source::format_dictionary(&words);
        let reparsed = source::parse_dictionary(&written).expect("written dictionary parses");
        assert_eq!(reparsed, words);
    }
    if let Ok(text) = source::parse_text(data) {
        assert!(!text.is_empty());
        assert!(!text.iter().any(u8::is_ascii_whitespace));
    }
});
