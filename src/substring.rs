//! Substring search, splitting and wrapping.
//!
//! Offsets and ranges returned here are byte positions into the input, so
//! they can be used directly to slice it.

use std::ops::Range;

use crate::string_utils::{char_count, graphemes, prefix, suffix};

/// Returns the text between the first occurrence of `start` and the first
/// occurrence of `end` after it.
///
/// # Examples
///
/// ```
/// use stringkit::substring::substring_between;
///
/// assert_eq!(substring_between("hello [world] test", "[", "]"), Some("world"));
/// assert_eq!(substring_between("hello] [world", "[", "]"), None);
/// ```
pub fn substring_between<'a>(input: &'a str, start: &str, end: &str) -> Option<&'a str> {
    let from = input.find(start)? + start.len();
    let to = input[from..].find(end)? + from;
    Some(&input[from..to])
}

/// Byte offset of the `occurrence`-th appearance (1-based) of `ch`.
pub fn index_of_nth_occurrence(input: &str, ch: char, occurrence: usize) -> Option<usize> {
    if occurrence == 0 {
        return None;
    }
    input
        .char_indices()
        .filter(|(_, c)| *c == ch)
        .nth(occurrence - 1)
        .map(|(idx, _)| idx)
}

/// Splits the input into consecutive pieces of `size` characters, the last
/// one possibly shorter.
///
/// A zero size or an empty input yields the input as the single piece.
///
/// # Examples
///
/// ```
/// use stringkit::substring::chunk;
///
/// assert_eq!(chunk("123456789", 3), vec!["123", "456", "789"]);
/// assert_eq!(chunk("12345", 2), vec!["12", "34", "5"]);
/// assert_eq!(chunk("12345", 0), vec!["12345"]);
/// ```
pub fn chunk(input: &str, size: usize) -> Vec<String> {
    if size == 0 || input.is_empty() {
        return vec![input.to_string()];
    }
    graphemes(input)
        .chunks(size)
        .map(|piece| piece.concat())
        .collect()
}

/// Greedy word wrap: words are appended to the current line while the line
/// stays within `max_len` characters, otherwise a new line is started. A
/// word longer than `max_len` is kept whole on its own line.
///
/// # Examples
///
/// ```
/// use stringkit::substring::word_wrap;
///
/// assert_eq!(word_wrap("hello world test", 10), vec!["hello", "world test"]);
/// assert_eq!(word_wrap("hello world", 0), vec!["hello world"]);
/// ```
pub fn word_wrap(input: &str, max_len: usize) -> Vec<String> {
    if max_len == 0 {
        return vec![input.to_string()];
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current_len = 0;
    for word in input.split_whitespace() {
        let word_len = char_count(word);
        match lines.last_mut() {
            Some(line) if current_len + 1 + word_len <= max_len => {
                line.push(' ');
                line.push_str(word);
                current_len += 1 + word_len;
            }
            _ => {
                lines.push(word.to_string());
                current_len = word_len;
            }
        }
    }

    if lines.is_empty() {
        lines.push(input.to_string());
    }
    lines
}

/// Word-wraps the input and joins the lines with `\n`.
pub fn smart_truncate(input: &str, max_len: usize) -> String {
    if max_len == 0 {
        return input.to_string();
    }
    word_wrap(input, max_len).join("\n")
}

/// All non-overlapping occurrences of `needle`, left to right.
///
/// An empty needle has no occurrences.
///
/// # Examples
///
/// ```
/// use stringkit::substring::ranges_of;
///
/// let text = "hello hello world hello";
/// assert_eq!(ranges_of(text, "hello"), vec![0..5, 6..11, 18..23]);
/// assert!(ranges_of(text, "").is_empty());
/// ```
pub fn ranges_of(input: &str, needle: &str) -> Vec<Range<usize>> {
    if needle.is_empty() {
        return Vec::new();
    }
    input
        .match_indices(needle)
        .map(|(start, matched)| start..start + matched.len())
        .collect()
}

/// The first `n` characters.
pub fn first_characters(input: &str, n: usize) -> String {
    prefix(input, n).to_string()
}

/// The last `n` characters.
pub fn last_characters(input: &str, n: usize) -> String {
    suffix(input, n).to_string()
}

/// Splits on any whitespace, dropping empty pieces.
pub fn words(input: &str) -> Vec<String> {
    input.split_whitespace().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_between() {
        assert_eq!(substring_between("hello [world] test", "[", "]"), Some("world"));
        assert_eq!(substring_between("<tag>content</tag>", "<tag>", "</tag>"), Some("content"));
        assert_eq!(
            substring_between("prefix-middle-suffix", "prefix-", "-suffix"),
            Some("middle")
        );
        assert_eq!(substring_between("[]", "[", "]"), Some(""));

        assert_eq!(substring_between("hello world", "[", "]"), None);
        assert_eq!(substring_between("", "[", "]"), None);
        assert_eq!(substring_between("[hello", "[", "]"), None);
        assert_eq!(substring_between("hello]", "[", "]"), None);
        assert_eq!(substring_between("hello [ world", "[", "]"), None);
    }

    #[test]
    fn test_substring_between_does_not_overlap() {
        // The end marker must start after the start marker ends
        assert_eq!(substring_between("abab", "aba", "ba"), None);
        assert_eq!(substring_between("--x--", "--", "--"), Some("x"));
    }

    #[test]
    fn test_index_of_nth_occurrence() {
        let text = "hello hello hello";
        assert_eq!(index_of_nth_occurrence(text, 'h', 1), Some(0));
        assert_eq!(index_of_nth_occurrence(text, 'h', 2), Some(6));
        assert_eq!(index_of_nth_occurrence(text, 'h', 3), Some(12));
        assert_eq!(index_of_nth_occurrence(text, 'h', 4), None);
        assert_eq!(index_of_nth_occurrence(text, 'o', 3), Some(16));
        assert_eq!(index_of_nth_occurrence(text, 'z', 1), None);
        assert_eq!(index_of_nth_occurrence(text, 'h', 0), None);
        assert_eq!(index_of_nth_occurrence("", 'h', 1), None);
    }

    #[test]
    fn test_chunk() {
        assert_eq!(chunk("123456789", 3), vec!["123", "456", "789"]);
        assert_eq!(chunk("12345", 2), vec!["12", "34", "5"]);
        assert_eq!(chunk("123", 5), vec!["123"]);
        assert_eq!(chunk("", 3), vec![""]);
        assert_eq!(chunk("12345", 0), vec!["12345"]);
        assert_eq!(chunk("12345", 1), vec!["1", "2", "3", "4", "5"]);
        assert_eq!(chunk("🦀🌟🦀", 2), vec!["🦀🌟", "🦀"]);
    }

    #[test]
    fn test_word_wrap() {
        assert_eq!(word_wrap("hello world test", 10), vec!["hello", "world test"]);
        assert_eq!(
            word_wrap("hello world test more", 10),
            vec!["hello", "world test", "more"]
        );
        assert_eq!(word_wrap("hello", 10), vec!["hello"]);
        assert_eq!(
            word_wrap("supercalifragilisticexpialidocious", 10),
            vec!["supercalifragilisticexpialidocious"]
        );
        assert_eq!(word_wrap("", 10), vec![""]);
        assert_eq!(word_wrap("hello world", 0), vec!["hello world"]);
    }

    #[test]
    fn test_word_wrap_long_word_in_the_middle() {
        assert_eq!(
            word_wrap("a incomprehensibilities b c", 5),
            vec!["a", "incomprehensibilities", "b c"]
        );
        assert_eq!(word_wrap("  hello   world  ", 11), vec!["hello world"]);
    }

    #[test]
    fn test_smart_truncate() {
        assert_eq!(smart_truncate("hello world test string", 10), "hello\nworld test\nstring");
        assert_eq!(smart_truncate("hello", 10), "hello");
        assert_eq!(
            smart_truncate("supercalifragilisticexpialidocious", 10),
            "supercalifragilisticexpialidocious"
        );
        assert_eq!(smart_truncate("hello world", 0), "hello world");
        assert_eq!(smart_truncate("", 10), "");
    }

    #[test]
    fn test_ranges_of() {
        let text = "hello hello world hello";
        let ranges = ranges_of(text, "hello");
        assert_eq!(ranges.len(), 3);
        assert_eq!(&text[ranges[0].clone()], "hello");
        assert_eq!(ranges[0].start, 0);
        assert_eq!(ranges[1].start, 6);
        assert_eq!(ranges[2].start, 18);

        assert!(ranges_of("", "test").is_empty());
        assert!(ranges_of("hello", "test").is_empty());
        assert!(ranges_of("test", "").is_empty());
    }

    #[test]
    fn test_ranges_of_non_overlapping() {
        assert_eq!(ranges_of("aaaa", "aa"), vec![0..2, 2..4]);
        assert_eq!(ranges_of("aaa", "aa"), vec![0..2]);
    }

    #[test]
    fn test_first_and_last_characters() {
        assert_eq!(first_characters("hello world", 5), "hello");
        assert_eq!(first_characters("hello", 10), "hello");
        assert_eq!(first_characters("hello", 0), "");
        assert_eq!(first_characters("", 5), "");

        assert_eq!(last_characters("hello world", 5), "world");
        assert_eq!(last_characters("hello", 10), "hello");
        assert_eq!(last_characters("hello", 0), "");
        assert_eq!(last_characters("", 5), "");
    }

    #[test]
    fn test_words() {
        assert_eq!(words("hello world test"), vec!["hello", "world", "test"]);
        assert_eq!(words("hello\nworld\ttest"), vec!["hello", "world", "test"]);
        assert_eq!(words("   hello   world   "), vec!["hello", "world"]);
        assert_eq!(words("hello"), vec!["hello"]);
        assert!(words("").is_empty());
        assert!(words("   ").is_empty());
    }
}
