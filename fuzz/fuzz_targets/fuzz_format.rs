//! Fuzz target for card number formatting.
//!
//! Tests that formatting never panics and stays idempotent.

#![no_main]

use card_form::format;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // These should never panic
    let formatted = format::format_card_number(data);
    let _ = format::has_invalid_characters(data);
    let _ = format::first_invalid_character(data);
    let _ = format::split_into_segments(&formatted);

    assert_eq!(
        format::format_card_number(&formatted),
        formatted,
        "Formatting should be idempotent"
    );
    assert_eq!(
        format::strip_spaces(&formatted),
        format::strip_spaces(data),
        "Formatting should preserve characters"
    );
});
