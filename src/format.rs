//! Card number formatting utilities.
//!
//! The form displays card numbers in groups of four separated by a single
//! space. Pre-existing spaces are dropped before regrouping, so formatting
//! an already formatted value yields the same value.
//!
//! # Example
//!
//! ```
//! use card_form::format::{format_card_number, has_invalid_characters};
//!
//! assert_eq!(format_card_number("123456789"), "1234 5678 9");
//! assert_eq!(format_card_number("12 34 56"), "1234 56");
//!
//! assert!(!has_invalid_characters("1234 5678"));
//! assert!(has_invalid_characters("12a4"));
//! ```

/// Number of characters per display group.
pub const GROUP_SIZE: usize = 4;

/// Formats a card number with a space after every fourth character.
///
/// Spaces already in the input are removed first. No other characters are
/// filtered and the length is not capped.
///
/// # Example
///
/// ```
/// use card_form::format::format_card_number;
///
/// assert_eq!(format_card_number("1111222233334444"), "1111 2222 3333 4444");
/// assert_eq!(format_card_number("1111 2222 3333 4444"), "1111 2222 3333 4444");
/// assert_eq!(format_card_number("1234"), "1234");
/// assert_eq!(format_card_number(""), "");
/// ```
pub fn format_card_number(input: &str) -> String {
    let chars: Vec<char> = input.chars().filter(|c| *c != ' ').collect();

    let mut result = String::with_capacity(chars.len() + chars.len() / GROUP_SIZE);

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % GROUP_SIZE == 0 {
            result.push(' ');
        }
        result.push(*c);
    }

    result
}

/// Removes every space from the input.
///
/// # Example
///
/// ```
/// use card_form::format::strip_spaces;
///
/// assert_eq!(strip_spaces("1234 5678 9"), "123456789");
/// ```
pub fn strip_spaces(input: &str) -> String {
    input.chars().filter(|c| *c != ' ').collect()
}

/// Returns true if a character is allowed in the card number input.
///
/// Only ASCII digits and the space separator are accepted.
#[inline]
pub const fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == ' '
}

/// Returns true if the input contains anything other than digits and spaces.
///
/// # Example
///
/// ```
/// use card_form::format::has_invalid_characters;
///
/// assert!(!has_invalid_characters(""));
/// assert!(!has_invalid_characters("1234 5678"));
/// assert!(has_invalid_characters("1234-5678"));
/// assert!(has_invalid_characters("١٢٣")); // non-ASCII digits
/// ```
pub fn has_invalid_characters(input: &str) -> bool {
    !input.chars().all(is_number_char)
}

/// Finds the first character that is not a digit or a space.
///
/// Returns its character index and the character itself.
///
/// # Example
///
/// ```
/// use card_form::format::first_invalid_character;
///
/// assert_eq!(first_invalid_character("12a4"), Some((2, 'a')));
/// assert_eq!(first_invalid_character("1234"), None);
/// ```
pub fn first_invalid_character(input: &str) -> Option<(usize, char)> {
    input.chars().enumerate().find(|(_, c)| !is_number_char(*c))
}

/// Splits a formatted card number into its display groups.
///
/// # Example
///
/// ```
/// use card_form::format::{format_card_number, split_into_segments};
///
/// let formatted = format_card_number("123456789");
/// assert_eq!(split_into_segments(&formatted), vec!["1234", "5678", "9"]);
/// ```
pub fn split_into_segments(formatted: &str) -> Vec<&str> {
    formatted.split(' ').collect()
}
