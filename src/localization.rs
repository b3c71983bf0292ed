//! Script detection, transliteration, slugs and escaping.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_normalization::UnicodeNormalization;

/// Characters left untouched by `url_encoded` besides ASCII alphanumerics
const URL_UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'!')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'+');

/// Russian Cyrillic to Latin
fn transliterate_char(c: char) -> Option<&'static str> {
    let latin = match c {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' | 'ё' => "e",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' => "y",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "kh",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "sch",
        'ъ' | 'ь' | 'Ъ' | 'Ь' => "",
        'ы' => "y",
        'э' => "e",
        'ю' => "yu",
        'я' => "ya",
        'А' => "A",
        'Б' => "B",
        'В' => "V",
        'Г' => "G",
        'Д' => "D",
        'Е' | 'Ё' => "E",
        'Ж' => "Zh",
        'З' => "Z",
        'И' => "I",
        'Й' => "Y",
        'К' => "K",
        'Л' => "L",
        'М' => "M",
        'Н' => "N",
        'О' => "O",
        'П' => "P",
        'Р' => "R",
        'С' => "S",
        'Т' => "T",
        'У' => "U",
        'Ф' => "F",
        'Х' => "Kh",
        'Ц' => "Ts",
        'Ч' => "Ch",
        'Ш' => "Sh",
        'Щ' => "Sch",
        'Ы' => "Y",
        'Э' => "E",
        'Ю' => "Yu",
        'Я' => "Ya",
        _ => return None,
    };
    Some(latin)
}

fn replace_chars<F>(input: &str, table: F) -> String
where
    F: Fn(char) -> Option<&'static str>,
{
    let mut result = String::with_capacity(input.len());
    for c in input.chars() {
        match table(c) {
            Some(replacement) => result.push_str(replacement),
            None => result.push(c),
        }
    }
    result
}

/// Transliterates Russian Cyrillic letters into Latin. Other characters are
/// kept as they are.
///
/// # Examples
///
/// ```
/// use stringkit::localization::transliterate;
///
/// assert_eq!(transliterate("Привет мир"), "Privet mir");
/// assert_eq!(transliterate("Привет123"), "Privet123");
/// ```
pub fn transliterate(input: &str) -> String {
    replace_chars(input, transliterate_char)
}

/// Builds a URL slug: Cyrillic is transliterated, accents are dropped, and
/// the lower-cased alphanumeric runs are joined with `-`.
///
/// # Examples
///
/// ```
/// use stringkit::localization::slugified;
///
/// assert_eq!(slugified("Hello World 123"), "hello-world-123");
/// assert_eq!(slugified("Привет мир"), "privet-mir");
/// assert_eq!(slugified("Crème Brûlée"), "creme-brulee");
/// ```
pub fn slugified(input: &str) -> String {
    let processed = if contains_cyrillic(input) {
        transliterate(input)
    } else {
        input.to_string()
    };
    let folded: String = processed
        .nfd()
        .filter(|c| !matches!(get_general_category(*c), GeneralCategory::NonspacingMark))
        .collect::<String>()
        .to_lowercase();

    folded
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Canonical decomposition (NFD): precomposed letters are split into a base
/// letter followed by combining marks.
///
/// # Examples
///
/// ```
/// use stringkit::localization::normalized;
///
/// assert_eq!(normalized("é"), "e\u{301}");
/// assert_eq!(normalized("abc"), "abc");
/// ```
pub fn normalized(input: &str) -> String {
    input.nfd().collect()
}

/// Any character in the Cyrillic block (U+0400 to U+04FF).
pub fn contains_cyrillic(input: &str) -> bool {
    input.chars().any(|c| ('\u{0400}'..='\u{04FF}').contains(&c))
}

/// Any basic Latin letter (A-Z, a-z).
pub fn contains_latin(input: &str) -> bool {
    input.chars().any(|c| c.is_ascii_alphabetic())
}

fn escape(input: &str, apostrophe: &str) -> String {
    let mut result = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str(apostrophe),
            _ => result.push(c),
        }
    }
    result
}

/// Escapes `& < > " '` as XML entities.
pub fn escaped_for_xml(input: &str) -> String {
    escape(input, "&apos;")
}

/// Escapes `& < > " '` as HTML entities (`'` becomes `&#39;`).
pub fn escaped_for_html(input: &str) -> String {
    escape(input, "&#39;")
}

/// Percent-encodes the UTF-8 bytes of everything but ASCII alphanumerics and
/// `-._~!*'()+`.
///
/// # Examples
///
/// ```
/// use stringkit::localization::url_encoded;
///
/// assert_eq!(url_encoded("Hello World"), "Hello%20World");
/// assert_eq!(url_encoded("a+b=c"), "a+b%3Dc");
/// ```
pub fn url_encoded(input: &str) -> String {
    utf8_percent_encode(input, URL_UNRESERVED).to_string()
}

/// Decodes percent escapes. Malformed escapes are kept literally and the
/// input is returned unchanged when the decoded bytes are not valid UTF-8.
pub fn url_decoded(input: &str) -> String {
    match percent_decode_str(input).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => input.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugified() {
        assert_eq!(slugified("Hello World"), "hello-world");
        assert_eq!(slugified("Привет мир"), "privet-mir");
        assert_eq!(slugified("Hello-World"), "hello-world");
        assert_eq!(slugified("Hello_World"), "hello-world");
        assert_eq!(slugified("Hello World 123"), "hello-world-123");
        assert_eq!(slugified("!@#$%^&*()"), "");
        assert_eq!(slugified(""), "");
    }

    #[test]
    fn test_slugified_folds_accents() {
        assert_eq!(slugified("Crème Brûlée"), "creme-brulee");
        assert_eq!(slugified("  Façade -- Größe "), "facade-große");
    }

    #[test]
    fn test_slugified_decomposed_and_extended_latin() {
        assert_eq!(slugified("e\u{301}cole"), "ecole");
        assert_eq!(slugified("E\u{301}COLE Normale"), "ecole-normale");
        assert_eq!(slugified("Tiếng Việt"), "tieng-viet");
        assert_eq!(slugified("Ǎ ṡ ȩ"), "a-s-e");
    }

    #[test]
    fn test_normalized() {
        assert_eq!(normalized("café"), "cafe\u{301}");
        assert_eq!(normalized("cafe\u{301}"), "cafe\u{301}");
        assert_eq!(normalized("Ệ"), "E\u{323}\u{302}");
        assert_eq!(normalized("Привет"), "Привет");
        assert_eq!(normalized(""), "");
        assert_eq!(normalized("й"), "и\u{306}");
    }

    #[test]
    fn test_transliterate() {
        assert_eq!(transliterate("Привет мир"), "Privet mir");
        assert_eq!(transliterate("ПРИВЕТ"), "PRIVET");
        assert_eq!(transliterate("привет"), "privet");
        assert_eq!(transliterate("Съешь ещё"), "Sesh esche");
        assert_eq!(transliterate("Щука и ёж"), "Schuka i ezh");
        assert_eq!(transliterate("Hello World"), "Hello World");
        assert_eq!(transliterate("Привет123"), "Privet123");
        assert_eq!(transliterate(""), "");
    }

    #[test]
    fn test_escaping() {
        assert_eq!(escaped_for_html("<div>"), "&lt;div&gt;");
        assert_eq!(escaped_for_html("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(escaped_for_html("'quoted'"), "&#39;quoted&#39;");
        assert_eq!(escaped_for_html("a & b"), "a &amp; b");
        assert_eq!(escaped_for_html("Hello World"), "Hello World");
        assert_eq!(escaped_for_html(""), "");

        assert_eq!(escaped_for_xml("<tag>"), "&lt;tag&gt;");
        assert_eq!(escaped_for_xml("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(escaped_for_xml("'quoted'"), "&apos;quoted&apos;");
        assert_eq!(escaped_for_xml("a & b"), "a &amp; b");
        assert_eq!(escaped_for_xml("&lt;"), "&amp;lt;");
        assert_eq!(escaped_for_xml(""), "");
    }

    #[test]
    fn test_url_coding() {
        assert_eq!(url_encoded("Hello World"), "Hello%20World");
        assert_eq!(url_encoded("a+b=c"), "a+b%3Dc");
        assert_eq!(
            url_encoded("Привет мир"),
            "%D0%9F%D1%80%D0%B8%D0%B2%D0%B5%D1%82%20%D0%BC%D0%B8%D1%80"
        );
        assert_eq!(url_encoded("!@#$%^&*()"), "!%40%23%24%25%5E%26*()");
        assert_eq!(url_encoded(""), "");

        assert_eq!(url_decoded("Hello%20World"), "Hello World");
        assert_eq!(url_decoded("a+b%3Dc"), "a+b=c");
        assert_eq!(url_decoded("%D0%9F%D1%80%D0%B8%D0%B2%D0%B5%D1%82"), "Привет");
        assert_eq!(url_decoded(""), "");
        assert_eq!(url_decoded("Invalid%"), "Invalid%");
        assert_eq!(url_decoded("%FF%FE"), "%FF%FE");
    }

    #[test]
    fn test_character_sets() {
        assert!(contains_cyrillic("Привет"));
        assert!(contains_cyrillic("Hello Привет"));
        assert!(!contains_cyrillic("Hello"));
        assert!(!contains_cyrillic(""));

        assert!(contains_latin("Hello"));
        assert!(contains_latin("Привет Hello"));
        assert!(!contains_latin("Привет"));
        assert!(!contains_latin("123"));
        assert!(!contains_latin(""));
    }
}
