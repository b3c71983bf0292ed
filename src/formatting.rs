//! Whitespace, capitalization and truncation helpers.

use crate::string_utils::{char_count, prefix, uppercase_first};
use unicode_segmentation::UnicodeSegmentation;

/// Upper-cases the first character, leaving the rest untouched.
pub fn capitalize_first_letter(input: &str) -> String {
    uppercase_first(input)
}

/// Capitalizes every whitespace-separated word: first character upper-case,
/// the rest lower-case. Whitespace is preserved as is.
///
/// # Examples
///
/// ```
/// use stringkit::formatting::titlecased;
///
/// assert_eq!(titlecased("HELLO WORLD"), "Hello World");
/// assert_eq!(titlecased("1st place"), "1st Place");
/// ```
pub fn titlecased(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut at_word_start = true;
    for c in input.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            result.push(c);
        } else if at_word_start {
            at_word_start = false;
            result.extend(c.to_uppercase());
        } else {
            result.extend(c.to_lowercase());
        }
    }
    result
}

/// Removes leading and trailing whitespace and newlines.
pub fn trimmed(input: &str) -> String {
    input.trim().to_string()
}

/// Collapses whitespace runs into single spaces and trims both ends.
pub fn remove_excess_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Shortens the input to at most `length` characters, ending it with
/// `trailing` when something was cut.
///
/// A zero length yields just the trailing marker, as does a length too
/// small to hold anything besides it.
///
/// # Examples
///
/// ```
/// use stringkit::formatting::truncated;
///
/// assert_eq!(truncated("hello world", 5, "..."), "he...");
/// assert_eq!(truncated("hello world", 8, "...more"), "h...more");
/// assert_eq!(truncated("hello", 10, "..."), "hello");
/// ```
pub fn truncated(input: &str, length: usize, trailing: &str) -> String {
    if length == 0 {
        return trailing.to_string();
    }
    if char_count(input) <= length {
        return input.to_string();
    }

    match length.checked_sub(char_count(trailing)) {
        Some(end) if end > 0 => format!("{}{}", prefix(input, end), trailing),
        _ => trailing.to_string(),
    }
}

/// Inserts `separator` every `stride` characters.
///
/// # Examples
///
/// ```
/// use stringkit::formatting::separated;
///
/// assert_eq!(separated("1234567890", 3, '-'), "123-456-789-0");
/// assert_eq!(separated("12345", 0, '-'), "12345");
/// ```
pub fn separated(input: &str, stride: usize, separator: char) -> String {
    if stride == 0 || input.is_empty() {
        return input.to_string();
    }

    let mut result = String::with_capacity(input.len() + input.len() / stride);
    for (index, grapheme) in input.graphemes(true).enumerate() {
        if index > 0 && index % stride == 0 {
            result.push(separator);
        }
        result.push_str(grapheme);
    }
    result
}

/// Reverses the order of the whitespace-separated words.
pub fn reverse_words(input: &str) -> String {
    input.split_whitespace().rev().collect::<Vec<_>>().join(" ")
}
