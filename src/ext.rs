//! Method-style access to the helpers.
//!
//! Parameters that the free functions take explicitly (mask character,
//! visible counts, truncation marker, date format and style) are read from
//! the process-wide configuration here.
//!
//! # Examples
//!
//! ```
//! use stringkit::ext::StrExt;
//!
//! assert_eq!("helloWorld".camel_case_to_snake_case(), "hello_world");
//! assert_eq!("1234567890".mask_middle(), "1234**7890");
//! assert!("test@example.com".is_valid_email());
//! ```

use std::collections::BTreeMap;
use std::ops::Range;

use chrono::{DateTime, Utc};

use crate::config::Defaults;
use crate::config_manager::ConfigManager;
use crate::dates::{self, DateStyle};
use crate::styling::{self, TextStyle};
use crate::{case, formatting, localization, masking, regex_utils, substring, validation};

fn defaults() -> Defaults {
    ConfigManager::get().snapshot().defaults
}

pub trait StrExt {
    fn mask(&self, pattern: &str) -> String;
    fn mask_with(&self, pattern: &str, mask_char: char) -> String;
    fn mask_middle(&self) -> String;
    fn camel_case_to_snake_case(&self) -> String;
    fn snake_case_to_camel_case(&self) -> String;

    fn capitalize_first_letter(&self) -> String;
    fn titlecased(&self) -> String;
    fn trimmed(&self) -> String;
    fn remove_excess_whitespace(&self) -> String;
    fn truncated(&self, length: usize) -> String;
    fn separated(&self, stride: usize, separator: char) -> String;
    fn reverse_words(&self) -> String;

    fn substring_between(&self, start: &str, end: &str) -> Option<&str>;
    fn index_of_nth_occurrence(&self, ch: char, occurrence: usize) -> Option<usize>;
    fn chunk(&self, size: usize) -> Vec<String>;
    fn word_wrap(&self, max_len: usize) -> Vec<String>;
    fn smart_truncate(&self, max_len: usize) -> String;
    fn ranges_of(&self, needle: &str) -> Vec<Range<usize>>;
    fn first_characters(&self, n: usize) -> String;
    fn last_characters(&self, n: usize) -> String;
    fn words(&self) -> Vec<String>;

    fn is_valid_email(&self) -> bool;
    fn is_valid_url(&self) -> bool;
    fn is_numeric(&self) -> bool;
    fn is_alphabetic(&self) -> bool;
    fn is_alphanumeric(&self) -> bool;
    fn is_palindrome(&self) -> bool;
    fn is_valid_password(&self) -> bool;
    fn password_strength(&self) -> u8;
    fn is_blank(&self) -> bool;

    fn matches_pattern(&self, pattern: &str) -> bool;
    fn extract_matches(&self, pattern: &str) -> Vec<String>;
    fn extract_capture_groups(&self, pattern: &str) -> BTreeMap<usize, String>;
    fn replacing(&self, pattern: &str, replacement: &str) -> String;
    fn replacing_first(&self, pattern: &str, replacement: &str) -> String;
    fn contains_string(&self, needle: &str, case_sensitive: bool) -> bool;

    fn transliterate(&self) -> String;
    fn normalized(&self) -> String;
    fn slugified(&self) -> String;
    fn contains_cyrillic(&self) -> bool;
    fn contains_latin(&self) -> bool;
    fn escaped_for_xml(&self) -> String;
    fn escaped_for_html(&self) -> String;
    fn url_encoded(&self) -> String;
    fn url_decoded(&self) -> String;

    /// Parses with the configured date format.
    fn to_date(&self) -> Option<DateTime<Utc>>;
    fn to_date_with(&self, format: &str) -> Option<DateTime<Utc>>;
    fn is_valid_date(&self) -> bool;
    fn extract_dates(&self, format: &str) -> Vec<DateTime<Utc>>;

    fn styled(&self, style: &TextStyle) -> String;
    fn highlighting(&self, needle: &str, color: &str) -> String;
    fn to_bullet_list(&self, bullet: &str, indentation: usize) -> String;
}

impl StrExt for str {
    fn mask(&self, pattern: &str) -> String {
        masking::mask(self, pattern, defaults().mask_char)
    }

    fn mask_with(&self, pattern: &str, mask_char: char) -> String {
        masking::mask(self, pattern, mask_char)
    }

    fn mask_middle(&self) -> String {
        let defaults = defaults();
        masking::mask_middle(
            self,
            defaults.visible_prefix,
            defaults.visible_suffix,
            defaults.mask_char,
        )
    }

    fn camel_case_to_snake_case(&self) -> String {
        case::camel_case_to_snake_case(self)
    }

    fn snake_case_to_camel_case(&self) -> String {
        case::snake_case_to_camel_case(self)
    }

    fn capitalize_first_letter(&self) -> String {
        formatting::capitalize_first_letter(self)
    }

    fn titlecased(&self) -> String {
        formatting::titlecased(self)
    }

    fn trimmed(&self) -> String {
        formatting::trimmed(self)
    }

    fn remove_excess_whitespace(&self) -> String {
        formatting::remove_excess_whitespace(self)
    }

    fn truncated(&self, length: usize) -> String {
        formatting::truncated(self, length, &defaults().truncation_trailing)
    }

    fn separated(&self, stride: usize, separator: char) -> String {
        formatting::separated(self, stride, separator)
    }

    fn reverse_words(&self) -> String {
        formatting::reverse_words(self)
    }

    fn substring_between(&self, start: &str, end: &str) -> Option<&str> {
        substring::substring_between(self, start, end)
    }

    fn index_of_nth_occurrence(&self, ch: char, occurrence: usize) -> Option<usize> {
        substring::index_of_nth_occurrence(self, ch, occurrence)
    }

    fn chunk(&self, size: usize) -> Vec<String> {
        substring::chunk(self, size)
    }

    fn word_wrap(&self, max_len: usize) -> Vec<String> {
        substring::word_wrap(self, max_len)
    }

    fn smart_truncate(&self, max_len: usize) -> String {
        substring::smart_truncate(self, max_len)
    }

    fn ranges_of(&self, needle: &str) -> Vec<Range<usize>> {
        substring::ranges_of(self, needle)
    }

    fn first_characters(&self, n: usize) -> String {
        substring::first_characters(self, n)
    }

    fn last_characters(&self, n: usize) -> String {
        substring::last_characters(self, n)
    }

    fn words(&self) -> Vec<String> {
        substring::words(self)
    }

    fn is_valid_email(&self) -> bool {
        validation::is_valid_email(self)
    }

    fn is_valid_url(&self) -> bool {
        validation::is_valid_url(self)
    }

    fn is_numeric(&self) -> bool {
        validation::is_numeric(self)
    }

    fn is_alphabetic(&self) -> bool {
        validation::is_alphabetic(self)
    }

    fn is_alphanumeric(&self) -> bool {
        validation::is_alphanumeric(self)
    }

    fn is_palindrome(&self) -> bool {
        validation::is_palindrome(self)
    }

    fn is_valid_password(&self) -> bool {
        validation::is_valid_password(self)
    }

    fn password_strength(&self) -> u8 {
        validation::password_strength(self)
    }

    fn is_blank(&self) -> bool {
        validation::is_blank(self)
    }

    fn matches_pattern(&self, pattern: &str) -> bool {
        regex_utils::matches(self, pattern)
    }

    fn extract_matches(&self, pattern: &str) -> Vec<String> {
        regex_utils::extract_matches(self, pattern)
    }

    fn extract_capture_groups(&self, pattern: &str) -> BTreeMap<usize, String> {
        regex_utils::extract_capture_groups(self, pattern)
    }

    fn replacing(&self, pattern: &str, replacement: &str) -> String {
        regex_utils::replacing(self, pattern, replacement)
    }

    fn replacing_first(&self, pattern: &str, replacement: &str) -> String {
        regex_utils::replacing_first(self, pattern, replacement)
    }

    fn contains_string(&self, needle: &str, case_sensitive: bool) -> bool {
        regex_utils::contains_string(self, needle, case_sensitive)
    }

    fn transliterate(&self) -> String {
        localization::transliterate(self)
    }

    fn normalized(&self) -> String {
        localization::normalized(self)
    }

    fn slugified(&self) -> String {
        localization::slugified(self)
    }

    fn contains_cyrillic(&self) -> bool {
        localization::contains_cyrillic(self)
    }

    fn contains_latin(&self) -> bool {
        localization::contains_latin(self)
    }

    fn escaped_for_xml(&self) -> String {
        localization::escaped_for_xml(self)
    }

    fn escaped_for_html(&self) -> String {
        localization::escaped_for_html(self)
    }

    fn url_encoded(&self) -> String {
        localization::url_encoded(self)
    }

    fn url_decoded(&self) -> String {
        localization::url_decoded(self)
    }

    fn to_date(&self) -> Option<DateTime<Utc>> {
        dates::parse_date(self, &defaults().date_format, None, None)
    }

    fn to_date_with(&self, format: &str) -> Option<DateTime<Utc>> {
        dates::parse_date(self, format, None, None)
    }

    fn is_valid_date(&self) -> bool {
        self.to_date().is_some()
    }

    fn extract_dates(&self, format: &str) -> Vec<DateTime<Utc>> {
        dates::extract_dates(self, format)
    }

    fn styled(&self, style: &TextStyle) -> String {
        styling::styled(self, style)
    }

    fn highlighting(&self, needle: &str, color: &str) -> String {
        styling::highlighting(self, needle, color)
    }

    fn to_bullet_list(&self, bullet: &str, indentation: usize) -> String {
        styling::to_bullet_list(self, bullet, indentation)
    }
}

pub trait DateExt {
    /// Formats with the configured date format.
    fn to_date_string(&self) -> String;
    fn to_date_string_with(&self, format: &str) -> String;
    fn to_relative_string(&self) -> String;
    fn to_smart_date_string(&self) -> String;
    fn to_iso8601_string(&self) -> String;
    /// Formats with the configured date style.
    fn to_localized_string(&self) -> String;
    fn to_localized_string_with(&self, style: DateStyle) -> String;
}

impl DateExt for DateTime<Utc> {
    fn to_date_string(&self) -> String {
        dates::format_date(self, &defaults().date_format, None, None)
    }

    fn to_date_string_with(&self, format: &str) -> String {
        dates::format_date(self, format, None, None)
    }

    fn to_relative_string(&self) -> String {
        dates::to_relative_string(self, None)
    }

    fn to_smart_date_string(&self) -> String {
        dates::to_smart_date_string(self, &defaults().date_format)
    }

    fn to_iso8601_string(&self) -> String {
        dates::to_iso8601_string(self)
    }

    fn to_localized_string(&self) -> String {
        dates::to_localized_string(self, defaults().date_style, None)
    }

    fn to_localized_string_with(&self, style: DateStyle) -> String {
        dates::to_localized_string(self, style, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_str_ext_uses_default_parameters() {
        assert_eq!("1234567890".mask("#### #### ##"), "**** **** **");
        assert_eq!("1234567890".mask_with("## ##", 'x'), "xx xx");
        assert_eq!("1234567890".mask_middle(), "1234**7890");
        assert_eq!("hello world".truncated(5), "he...");
    }

    #[test]
    fn test_str_ext_delegates() {
        assert_eq!("hello_world".snake_case_to_camel_case(), "helloWorld");
        assert_eq!("hello [world]".substring_between("[", "]"), Some("world"));
        assert_eq!("123456789".chunk(3), vec!["123", "456", "789"]);
        assert!("12345".matches_pattern(r"^\d+$"));
        assert_eq!("a1b2".replacing(r"\d", "_"), "a_b_");
        assert_eq!("Привет мир".slugified(), "privet-mir");
        assert_eq!("e\u{301}cole".slugified(), "ecole");
        assert_eq!("école".normalized(), "e\u{301}cole");
        assert!("P@ssw0rd!".is_valid_password());
        assert!("   ".is_blank());
        assert_eq!("a\nb".to_bullet_list("-", 2), "- a\n- b");
    }

    #[test]
    fn test_str_ext_dates() {
        let date = "2023-01-15".to_date().unwrap();
        assert_eq!(Some(date), "2023-01-15".to_date_with("yyyy-MM-dd"));
        assert!("2023-01-15".is_valid_date());
        assert!(!"2023/01/15".is_valid_date());
        assert_eq!("on 2023-01-15".extract_dates("yyyy-MM-dd"), vec![date]);
    }

    #[test]
    fn test_date_ext() {
        let date = Utc.with_ymd_and_hms(2023, 5, 15, 14, 30, 45).unwrap();
        assert_eq!(date.to_iso8601_string(), "2023-05-15T14:30:45Z");
        assert_eq!(date.to_date_string_with("HH:mm").len(), 5);

        let parsed = date.to_date_string().to_date().unwrap();
        assert_eq!(parsed.to_date_string(), date.to_date_string());

        let earlier = Utc::now() - Duration::minutes(5);
        assert_eq!(earlier.to_relative_string(), "5 minutes ago");
        let old = Utc.with_ymd_and_hms(2020, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(old.to_smart_date_string(), old.to_date_string());
        assert!(!date.to_localized_string().is_empty());
        assert!(date
            .to_localized_string_with(DateStyle::Full)
            .contains("2023"));
    }
}
