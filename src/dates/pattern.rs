//! Date pattern compilation.
//!
//! Patterns use the LDML letters listed in [`Field`]. Text between single
//! quotes is literal, `''` is a literal quote, and any character that is not
//! an ASCII letter is literal as well.

use crate::error::{Error, Result};

/// A date or time field referenced by a run of pattern letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// `yyyy`
    Year4,
    /// `yy`, 2000-2099 on parse
    Year2,
    /// `y`
    Year,
    /// `MMMM`
    MonthName,
    /// `MMM`
    MonthAbbr,
    /// `MM`
    Month2,
    /// `M`
    Month,
    /// `dd`
    Day2,
    /// `d`
    Day,
    /// `EEEE`
    WeekdayName,
    /// `E`, `EE`, `EEE`
    WeekdayAbbr,
    /// `HH`
    Hour24Padded,
    /// `H`
    Hour24,
    /// `hh`
    Hour12Padded,
    /// `h`
    Hour12,
    /// `a`
    AmPm,
    /// `mm`
    Minute2,
    /// `m`
    Minute,
    /// `ss`
    Second2,
    /// `s`
    Second,
    /// `SSS`
    Millis,
}

impl Field {
    fn from_letters(letter: char, count: usize) -> Option<Field> {
        let field = match (letter, count) {
            ('y', 4) => Field::Year4,
            ('y', 2) => Field::Year2,
            ('y', 1) => Field::Year,
            ('M', 4) => Field::MonthName,
            ('M', 3) => Field::MonthAbbr,
            ('M', 2) => Field::Month2,
            ('M', 1) => Field::Month,
            ('d', 2) => Field::Day2,
            ('d', 1) => Field::Day,
            ('E', 4) => Field::WeekdayName,
            ('E', 1..=3) => Field::WeekdayAbbr,
            ('H', 2) => Field::Hour24Padded,
            ('H', 1) => Field::Hour24,
            ('h', 2) => Field::Hour12Padded,
            ('h', 1) => Field::Hour12,
            ('a', 1) => Field::AmPm,
            ('m', 2) => Field::Minute2,
            ('m', 1) => Field::Minute,
            ('s', 2) => Field::Second2,
            ('s', 1) => Field::Second,
            ('S', 3) => Field::Millis,
            _ => return None,
        };
        Some(field)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Field(Field),
    Literal(String),
}

fn push_literal(items: &mut Vec<Item>, text: &str) {
    if let Some(Item::Literal(last)) = items.last_mut() {
        last.push_str(text);
    } else {
        items.push(Item::Literal(text.to_string()));
    }
}

fn invalid(pattern: &str, cause: impl Into<String>) -> Error {
    Error::InvalidDateFormat {
        pattern: pattern.to_string(),
        cause: cause.into(),
    }
}

/// Compiles a pattern into its fields and literals. Adjacent literals are
/// merged.
///
/// # Examples
///
/// ```
/// use stringkit::dates::pattern::{compile, Field, Item};
///
/// let items = compile("yyyy-MM-dd").unwrap();
/// assert_eq!(items[0], Item::Field(Field::Year4));
/// assert_eq!(items[1], Item::Literal("-".to_string()));
/// assert!(compile("yyyy-QQ").is_err());
/// ```
pub fn compile(pattern: &str) -> Result<Vec<Item>> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut items = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == '\'' {
            if chars.get(i + 1) == Some(&'\'') {
                push_literal(&mut items, "'");
                i += 2;
                continue;
            }
            // Quoted section, '' inside it is an escaped quote
            let mut literal = String::new();
            i += 1;
            loop {
                match chars.get(i) {
                    None => return Err(invalid(pattern, "unterminated quote")),
                    Some('\'') if chars.get(i + 1) == Some(&'\'') => {
                        literal.push('\'');
                        i += 2;
                    }
                    Some('\'') => {
                        i += 1;
                        break;
                    }
                    Some(&other) => {
                        literal.push(other);
                        i += 1;
                    }
                }
            }
            push_literal(&mut items, &literal);
        } else if c.is_ascii_alphabetic() {
            let count = chars[i..].iter().take_while(|&&next| next == c).count();
            let field = Field::from_letters(c, count).ok_or_else(|| {
                invalid(pattern, format!("unsupported field '{}'", c.to_string().repeat(count)))
            })?;
            items.push(Item::Field(field));
            i += count;
        } else {
            push_literal(&mut items, c.encode_utf8(&mut [0; 4]));
            i += 1;
        }
    }

    Ok(items)
}
