use crate::constants::masking::PLACEHOLDER;
use crate::string_utils::{char_count, prefix, suffix};
use unicode_segmentation::UnicodeSegmentation;

/// Masks the input following a placeholder pattern.
///
/// Every `#` in the pattern consumes one input character and emits
/// `mask_char`; any other pattern character is copied as is without
/// consuming input. Processing stops as soon as either the pattern or the
/// input runs out, so a short input yields a short output.
///
/// # Arguments
///
/// * `input` - The text being masked
/// * `pattern` - The mask pattern
/// * `mask_char` - Replacement emitted for each placeholder
///
/// # Examples
///
/// ```
/// use stringkit::masking::mask;
///
/// assert_eq!(mask("1234567890", "#### #### ##", '*'), "**** **** **");
/// assert_eq!(mask("12345", "##", '*'), "**");
/// assert_eq!(mask("12", "#-#-#", '*'), "*-*");
/// assert_eq!(mask("", "###", '*'), "");
/// ```
pub fn mask(input: &str, pattern: &str, mask_char: char) -> String {
    if input.is_empty() || pattern.is_empty() {
        return String::new();
    }

    let mut remaining = input.graphemes(true);
    let mut result = String::with_capacity(pattern.len());

    for symbol in pattern.chars() {
        if symbol == PLACEHOLDER {
            if remaining.next().is_none() {
                break;
            }
            result.push(mask_char);
        } else {
            result.push(symbol);
        }

        if remaining.as_str().is_empty() {
            break;
        }
    }
    result
}

/// Hides the middle of the input, keeping `visible_prefix` leading and
/// `visible_suffix` trailing characters readable.
///
/// Inputs not longer than `visible_prefix + visible_suffix` are returned
/// unchanged.
///
/// # Examples
///
/// ```
/// use stringkit::masking::mask_middle;
///
/// assert_eq!(mask_middle("1234567890", 4, 4, '*'), "1234**7890");
/// assert_eq!(mask_middle("1234567890", 0, 4, '*'), "******7890");
/// assert_eq!(mask_middle("123", 2, 2, '*'), "123");
/// ```
pub fn mask_middle(input: &str, visible_prefix: usize, visible_suffix: usize, mask_char: char) -> String {
    let count = char_count(input);
    let visible = visible_prefix.saturating_add(visible_suffix);
    if count <= visible {
        return input.to_string();
    }

    let hidden = count - visible;
    let mut result = String::with_capacity(input.len());
    result.push_str(prefix(input, visible_prefix));
    result.extend(std::iter::repeat(mask_char).take(hidden));
    result.push_str(suffix(input, visible_suffix));
    result
}
