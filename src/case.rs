//! camelCase <-> snake_case conversion.

use crate::constants::text::SNAKE_SEPARATOR;
use crate::string_utils::uppercase_first;

/// Converts a camelCase (or PascalCase) identifier into snake_case.
///
/// A separator is inserted before an uppercase character that is not the
/// first one when the previous character was not uppercase, or when it
/// closes an acronym run (the previous character is uppercase and the next
/// one is lowercase). Everything is lower-cased.
///
/// # Examples
///
/// ```
/// use stringkit::case::camel_case_to_snake_case;
///
/// assert_eq!(camel_case_to_snake_case("helloWorld"), "hello_world");
/// assert_eq!(camel_case_to_snake_case("PDFDocument"), "pdf_document");
/// assert_eq!(camel_case_to_snake_case("helloWORLD"), "hello_world");
/// assert_eq!(camel_case_to_snake_case("URL"), "url");
/// ```
pub fn camel_case_to_snake_case(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut result = String::with_capacity(input.len() + 4);
    let mut prev_is_lower = false;

    for (index, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let closes_acronym = chars.get(index + 1).is_some_and(|next| next.is_lowercase());
            if index > 0 && (prev_is_lower || closes_acronym) {
                result.push(SNAKE_SEPARATOR);
            }
            prev_is_lower = false;
        } else {
            prev_is_lower = true;
        }
        result.extend(c.to_lowercase());
    }
    result
}

/// Converts a snake_case identifier into camelCase.
///
/// Inputs without a separator are returned unchanged. The first part is
/// lower-cased, every following part is capitalized.
///
/// # Examples
///
/// ```
/// use stringkit::case::snake_case_to_camel_case;
///
/// assert_eq!(snake_case_to_camel_case("hello_world_test"), "helloWorldTest");
/// assert_eq!(snake_case_to_camel_case("single"), "single");
/// ```
pub fn snake_case_to_camel_case(input: &str) -> String {
    let mut parts = input.split(SNAKE_SEPARATOR);
    let first = match parts.next() {
        Some(first) if input.contains(SNAKE_SEPARATOR) => first,
        _ => return input.to_string(),
    };

    let mut result = first.to_lowercase();
    for part in parts {
        result.push_str(&uppercase_first(&part.to_lowercase()));
    }
    result
}
