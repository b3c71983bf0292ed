//! Regular-expression convenience wrappers.
//!
//! Patterns are compiled on every call. An invalid pattern never surfaces as
//! an error: each wrapper degrades to its empty result (`false`, an empty
//! collection or the unchanged input).

use std::collections::BTreeMap;

use regex::{NoExpand, Regex};

use crate::debug;
use crate::error::{Error, Result};

/// Compiles a pattern, reporting syntax problems as `Error::InvalidRegex`.
pub fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| Error::InvalidRegex {
        pattern: pattern.to_string(),
        cause: e.to_string(),
    })
}

/// Compiles the pattern or logs why it could not be compiled.
fn compile_or_log(pattern: &str) -> Option<Regex> {
    match compile(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            debug!("Ignoring pattern: {}", e);
            None
        }
    }
}

/// Checks whether the pattern matches anywhere in the input.
///
/// # Examples
///
/// ```
/// use stringkit::regex_utils::matches;
///
/// assert!(matches("12345", r"^\d+$"));
/// assert!(!matches("12345a", r"^\d+$"));
/// assert!(!matches("12345", "["));
/// ```
pub fn matches(input: &str, pattern: &str) -> bool {
    compile_or_log(pattern).is_some_and(|re| re.is_match(input))
}

/// All non-overlapping matches, left to right.
pub fn extract_matches(input: &str, pattern: &str) -> Vec<String> {
    compile_or_log(pattern).map_or_else(Vec::new, |re| {
        re.find_iter(input).map(|m| m.as_str().to_string()).collect()
    })
}

/// Capture groups of the first match keyed by group index (0 is the whole
/// match). Groups that did not participate in the match are left out.
///
/// # Examples
///
/// ```
/// use stringkit::regex_utils::extract_capture_groups;
///
/// let groups = extract_capture_groups("The date is 2023-05-15", r"(\d{4})-(\d{2})-(\d{2})");
/// assert_eq!(groups[&0], "2023-05-15");
/// assert_eq!(groups[&1], "2023");
/// assert_eq!(groups[&3], "15");
/// ```
pub fn extract_capture_groups(input: &str, pattern: &str) -> BTreeMap<usize, String> {
    let Some(re) = compile_or_log(pattern) else {
        return BTreeMap::new();
    };
    let Some(caps) = re.captures(input) else {
        return BTreeMap::new();
    };

    caps.iter()
        .enumerate()
        .filter_map(|(index, group)| group.map(|m| (index, m.as_str().to_string())))
        .collect()
}

/// Replaces every match with `replacement`, inserted literally (`$1` is not
/// expanded).
pub fn replacing(input: &str, pattern: &str, replacement: &str) -> String {
    match compile_or_log(pattern) {
        Some(re) => re.replace_all(input, NoExpand(replacement)).into_owned(),
        None => input.to_string(),
    }
}

/// Replaces the first match with `replacement`, inserted literally.
pub fn replacing_first(input: &str, pattern: &str, replacement: &str) -> String {
    match compile_or_log(pattern) {
        Some(re) => re.replace(input, NoExpand(replacement)).into_owned(),
        None => input.to_string(),
    }
}

/// Plain substring containment, optionally ignoring case. An empty needle
/// is always contained.
pub fn contains_string(input: &str, needle: &str, case_sensitive: bool) -> bool {
    if needle.is_empty() {
        return true;
    }
    if case_sensitive {
        input.contains(needle)
    } else {
        input.to_lowercase().contains(&needle.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHONE_PATTERN: &str = r"\d{3}[-]\d{3}[-]\d{4}|\(\d{3}\) \d{3}-\d{4}";

    #[test]
    fn test_compile() {
        assert!(compile(r"^\d+$").is_ok());
        match compile("[") {
            Err(Error::InvalidRegex { pattern, .. }) => assert_eq!(pattern, "["),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_matches() {
        assert!(matches("12345", r"^\d+$"));
        assert!(matches("hello", "^[a-z]+$"));
        assert!(matches("Hello 123", r"^[A-Za-z]+ \d+$"));
        assert!(!matches("12345a", r"^\d+$"));
        assert!(!matches("Hello", "^[a-z]+$"));
        assert!(!matches("", "^[a-z]+$"));
        assert!(!matches("12345", "["));
    }

    #[test]
    fn test_extract_matches() {
        let input = "The phone numbers are 123-456-7890 and (987) 654-3210";
        let result = extract_matches(input, PHONE_PATTERN);
        assert_eq!(result, vec!["123-456-7890", "(987) 654-3210"]);

        assert!(extract_matches("hello", r"\d+").is_empty());
        assert!(extract_matches("", r"\d+").is_empty());
        assert!(extract_matches("12345", "[").is_empty());
    }

    #[test]
    fn test_extract_capture_groups() {
        let result = extract_capture_groups("The date is 2023-05-15", r"(\d{4})-(\d{2})-(\d{2})");
        assert_eq!(result.len(), 4);
        assert_eq!(result[&0], "2023-05-15");
        assert_eq!(result[&1], "2023");
        assert_eq!(result[&2], "05");
        assert_eq!(result[&3], "15");

        assert!(extract_capture_groups("hello", r"(\d+)").is_empty());
        assert!(extract_capture_groups("", r"(\d+)").is_empty());
        assert!(extract_capture_groups("12345", "[").is_empty());
    }

    #[test]
    fn test_extract_capture_groups_skips_unmatched_groups() {
        let result = extract_capture_groups("abc", "(x)?(abc)");
        assert_eq!(result.len(), 2);
        assert!(!result.contains_key(&1));
        assert_eq!(result[&2], "abc");
    }

    #[test]
    fn test_replacing() {
        assert_eq!(
            replacing("My phone number is 123-456-7890", r"\d{3}-\d{3}-\d{4}", "XXX-XXX-XXXX"),
            "My phone number is XXX-XXX-XXXX"
        );
        assert_eq!(replacing("Numbers: 123, 456, 789", r"\d+", "X"), "Numbers: X, X, X");
        assert_eq!(replacing("hello", r"\d+", "X"), "hello");
        assert_eq!(replacing("", r"\d+", "X"), "");
        assert_eq!(replacing("12345", "[", "X"), "12345");
        // Replacement is literal
        assert_eq!(replacing("cost: 10", r"(\d+)", "$1 USD"), "cost: $1 USD");
    }

    #[test]
    fn test_replacing_first() {
        assert_eq!(replacing_first("Numbers: 123, 456, 789", r"\d+", "X"), "Numbers: X, 456, 789");
        assert_eq!(replacing_first("hello", r"\d+", "X"), "hello");
        assert_eq!(replacing_first("", r"\d+", "X"), "");
        assert_eq!(replacing_first("12345", "[", "X"), "12345");
    }

    #[test]
    fn test_contains_string() {
        assert!(contains_string("Hello World", "Hello", true));
        assert!(!contains_string("Hello World", "hello", true));
        assert!(contains_string("Hello World", "hello", false));
        assert!(!contains_string("", "hello", true));
        assert!(contains_string("hello", "", true));
    }
}
