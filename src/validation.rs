use once_cell::sync::Lazy;
use regex::Regex;
use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_segmentation::UnicodeSegmentation;
use url::Url;

use crate::constants::text::SPECIAL_CHARACTERS;
use crate::string_utils::char_count;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}$").unwrap());

/// Minimum length of an acceptable password
const MIN_PASSWORD_LENGTH: usize = 8;

fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

fn is_number(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::DecimalNumber | GeneralCategory::LetterNumber | GeneralCategory::OtherNumber
    )
}

/// Checks every user-perceived character against `predicate`, using the
/// base character of each cluster. Empty input never passes.
fn all_characters<F>(input: &str, predicate: F) -> bool
where
    F: Fn(char) -> bool,
{
    !input.is_empty()
        && input
            .graphemes(true)
            .all(|g| g.chars().next().is_some_and(&predicate))
}

/// Validates an e-mail address: `local@domain.tld`, with no leading,
/// trailing or doubled dots in the local part.
///
/// # Examples
///
/// ```
/// use stringkit::validation::is_valid_email;
///
/// assert!(is_valid_email("test@example.com"));
/// assert!(!is_valid_email("invalid-email"));
/// assert!(!is_valid_email("@example.com"));
/// assert!(!is_valid_email("test@"));
/// ```
pub fn is_valid_email(input: &str) -> bool {
    if !EMAIL_REGEX.is_match(input) {
        return false;
    }
    match input.split_once('@') {
        Some((local, _)) => !(local.contains("..") || local.starts_with('.') || local.ends_with('.')),
        None => false,
    }
}

/// Validates an absolute `http`/`https` URL with a host.
///
/// # Examples
///
/// ```
/// use stringkit::validation::is_valid_url;
///
/// assert!(is_valid_url("https://www.example.com"));
/// assert!(!is_valid_url("ftp://example.com"));
/// assert!(!is_valid_url("http://"));
/// ```
pub fn is_valid_url(input: &str) -> bool {
    match Url::parse(input) {
        Ok(url) => {
            matches!(url.scheme(), "http" | "https") && url.host_str().is_some_and(|h| !h.is_empty())
        }
        Err(_) => false,
    }
}

/// Non-empty and made only of numeric characters.
pub fn is_numeric(input: &str) -> bool {
    all_characters(input, is_number)
}

/// Non-empty and made only of letters.
pub fn is_alphabetic(input: &str) -> bool {
    all_characters(input, is_letter)
}

/// Non-empty and made only of letters and numeric characters.
pub fn is_alphanumeric(input: &str) -> bool {
    all_characters(input, |c| is_letter(c) || is_number(c))
}

/// Reads the same both ways, ignoring case and whitespace. Blank input
/// counts as a palindrome.
pub fn is_palindrome(input: &str) -> bool {
    let processed: String = input.to_lowercase().chars().filter(|c| !c.is_whitespace()).collect();
    processed.graphemes(true).eq(processed.graphemes(true).rev())
}

pub fn contains_digit(input: &str) -> bool {
    input.chars().any(is_number)
}

pub fn contains_uppercase(input: &str) -> bool {
    input.chars().any(char::is_uppercase)
}

pub fn contains_lowercase(input: &str) -> bool {
    input.chars().any(char::is_lowercase)
}

pub fn contains_special_character(input: &str) -> bool {
    input.chars().any(|c| SPECIAL_CHARACTERS.contains(c))
}

/// Scores a password from 0 to 5, one point per criterion met: minimum
/// length, a lowercase letter, an uppercase letter, a digit and a special
/// character.
///
/// # Examples
///
/// ```
/// use stringkit::validation::password_strength;
///
/// assert_eq!(password_strength(""), 0);
/// assert_eq!(password_strength("abc"), 1);
/// assert_eq!(password_strength("ComplexP@ssw0rd"), 5);
/// ```
pub fn password_strength(input: &str) -> u8 {
    [
        char_count(input) >= MIN_PASSWORD_LENGTH,
        contains_lowercase(input),
        contains_uppercase(input),
        contains_digit(input),
        contains_special_character(input),
    ]
    .iter()
    .filter(|met| **met)
    .count() as u8
}

/// At least eight characters with lowercase, uppercase, digit and special
/// characters.
pub fn is_valid_password(input: &str) -> bool {
    char_count(input) >= MIN_PASSWORD_LENGTH
        && contains_lowercase(input)
        && contains_uppercase(input)
        && contains_digit(input)
        && contains_special_character(input)
}

/// Empty or whitespace only.
pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}
