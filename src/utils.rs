use num::{Bounded, NumCast, Zero};

/// Parses an integer, saturating at the bounds of the target type.
///
/// Surrounding whitespace is ignored. Text that is not an integer yields
/// zero.
///
/// # Arguments
///
/// * `s` - The text to parse
///
/// # Returns
///
/// The parsed value, clamped to `T::min_value()..=T::max_value()`
///
/// # Examples
///
/// ```
/// use stringkit::utils::clamped_parse;
///
/// assert_eq!(clamped_parse::<u8>("255"), 255);
/// assert_eq!(clamped_parse::<u8>("256"), 255);
/// assert_eq!(clamped_parse::<u8>("-1"), 0);
/// assert_eq!(clamped_parse::<i8>("-5"), -5);
/// assert_eq!(clamped_parse::<u8>("abc"), 0);
/// ```
pub fn clamped_parse<T>(s: &str) -> T
where
    T: Bounded + Zero + NumCast + Copy,
{
    match s.trim().parse::<i128>() {
        Ok(value) => num::cast(value).unwrap_or_else(|| {
            if value < 0 {
                T::min_value()
            } else {
                T::max_value()
            }
        }),
        Err(_) => T::zero(),
    }
}
