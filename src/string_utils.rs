//! Character-level primitives shared by the helpers.
//!
//! A "character" is a user-perceived character (an extended grapheme
//! cluster), so `"e\u{301}"` and `"🦀"` both count as one.

use unicode_segmentation::UnicodeSegmentation;

/// Returns the user-perceived characters of the input.
///
/// # Examples
///
/// ```
/// use stringkit::string_utils::graphemes;
///
/// assert_eq!(graphemes("ab🦀"), vec!["a", "b", "🦀"]);
/// assert_eq!(graphemes("e\u{301}x"), vec!["e\u{301}", "x"]);
/// ```
pub fn graphemes(input: &str) -> Vec<&str> {
    input.graphemes(true).collect()
}

/// Number of user-perceived characters in the input.
///
/// # Examples
///
/// ```
/// use stringkit::string_utils::char_count;
///
/// assert_eq!(char_count("hello"), 5);
/// assert_eq!(char_count("Привет"), 6);
/// assert_eq!(char_count("🦀🌟"), 2);
/// ```
pub fn char_count(input: &str) -> usize {
    input.graphemes(true).count()
}

/// Byte offset where the character at position `n` starts, or the input
/// length when `n` is past the end.
pub fn byte_offset(input: &str, n: usize) -> usize {
    input
        .grapheme_indices(true)
        .nth(n)
        .map_or(input.len(), |(idx, _)| idx)
}

/// The first `n` characters of the input (the whole input if shorter).
pub fn prefix(input: &str, n: usize) -> &str {
    &input[..byte_offset(input, n)]
}

/// The last `n` characters of the input (the whole input if shorter).
pub fn suffix(input: &str, n: usize) -> &str {
    let count = char_count(input);
    if n >= count {
        return input;
    }
    &input[byte_offset(input, count - n)..]
}

/// Upper-cases the first character and appends the rest untouched.
pub fn uppercase_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_count() {
        assert_eq!(char_count(""), 0);
        assert_eq!(char_count("abc"), 3);
        // Combining accent is part of the previous character
        assert_eq!(char_count("e\u{0301}"), 1);
        assert_eq!(char_count("こんにちは"), 5);
    }

    #[test]
    fn test_prefix_and_suffix() {
        assert_eq!(prefix("hello world", 5), "hello");
        assert_eq!(prefix("hello", 10), "hello");
        assert_eq!(prefix("hello", 0), "");
        assert_eq!(prefix("🦀🌟🦀", 2), "🦀🌟");

        assert_eq!(suffix("hello world", 5), "world");
        assert_eq!(suffix("hello", 10), "hello");
        assert_eq!(suffix("hello", 0), "");
        assert_eq!(suffix("Привет", 3), "вет");
    }

    #[test]
    fn test_byte_offset() {
        assert_eq!(byte_offset("abc", 0), 0);
        assert_eq!(byte_offset("abc", 2), 2);
        assert_eq!(byte_offset("abc", 3), 3);
        assert_eq!(byte_offset("абв", 1), 2);
    }

    #[test]
    fn test_uppercase_first() {
        assert_eq!(uppercase_first("hello"), "Hello");
        assert_eq!(uppercase_first("ßtraße"), "SStraße");
        assert_eq!(uppercase_first("1abc"), "1abc");
        assert_eq!(uppercase_first(""), "");
    }
}
