//! ANSI terminal styling: colors, emphasis, highlighting and bullet lists.
//!
//! Colors are given as text in one of the following forms:
//! - `RGB(r,g,b)` : a 24-bit color, each component clamped to 0..=255
//! - `FIXED(n)` : an entry of the 256-color palette
//! - `NAME(name)` or just `name` : a named color such as `red` or `cyan`
//!
//! Unknown colors are ignored, leaving the text unstyled.

use nu_ansi_term::{Color, Style};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::debug;
use crate::substring::{ranges_of, word_wrap};
use crate::utils::clamped_parse;

static RGB_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^RGB\(\s*([0-9]+)\s*,\s*([0-9]+)\s*,\s*([0-9]+)\s*\)$").unwrap()
});

static FIXED_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:FIXED\(\s*([0-9]+)\s*\)|NAME\(\s*([[:alpha:]_ ]+?)\s*\))$").unwrap()
});

/// Bullet used by `to_bullet_list` when none is given
pub const DEFAULT_BULLET: &str = "•";

/// Parses a color description.
///
/// # Examples
///
/// ```
/// use nu_ansi_term::Color;
/// use stringkit::styling::parse_color;
///
/// assert_eq!(parse_color("RGB(255, 0, 10)"), Some(Color::Rgb(255, 0, 10)));
/// assert_eq!(parse_color("fixed(208)"), Some(Color::Fixed(208)));
/// assert_eq!(parse_color("NAME(red)"), Some(Color::Red));
/// assert_eq!(parse_color("cyan"), Some(Color::Cyan));
/// assert_eq!(parse_color("ultraviolet"), None);
/// ```
pub fn parse_color(color: &str) -> Option<Color> {
    let color = color.trim();
    if let Some(groups) = RGB_REGEX.captures(color) {
        let component = |i: usize| clamped_parse::<u8>(groups.get(i).map_or("", |m| m.as_str()));
        return Some(Color::Rgb(component(1), component(2), component(3)));
    }
    if let Some(groups) = FIXED_NAME_REGEX.captures(color) {
        return match (groups.get(1), groups.get(2)) {
            (Some(index), _) => Some(Color::Fixed(clamped_parse::<u8>(index.as_str()))),
            (None, Some(name)) => named_color(name.as_str()),
            (None, None) => None,
        };
    }
    named_color(color)
}

fn named_color(name: &str) -> Option<Color> {
    let normalized: String = name
        .chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .collect::<String>()
        .to_uppercase();

    match normalized.as_str() {
        "BLACK" => Some(Color::Black),
        "RED" => Some(Color::Red),
        "GREEN" => Some(Color::Green),
        "YELLOW" => Some(Color::Yellow),
        "BLUE" => Some(Color::Blue),
        "PURPLE" => Some(Color::Purple),
        "MAGENTA" => Some(Color::Magenta),
        "CYAN" => Some(Color::Cyan),
        "WHITE" => Some(Color::White),
        "DARKGRAY" | "DARKGREY" => Some(Color::DarkGray),
        "LIGHTGRAY" | "LIGHTGREY" => Some(Color::LightGray),
        "LIGHTRED" => Some(Color::LightRed),
        "LIGHTGREEN" => Some(Color::LightGreen),
        "LIGHTYELLOW" => Some(Color::LightYellow),
        "LIGHTBLUE" => Some(Color::LightBlue),
        "LIGHTPURPLE" => Some(Color::LightPurple),
        "LIGHTMAGENTA" => Some(Color::LightMagenta),
        "LIGHTCYAN" => Some(Color::LightCyan),
        _ => None,
    }
}

fn resolve(color: &str) -> Option<Color> {
    let resolved = parse_color(color);
    if resolved.is_none() {
        debug!("Ignoring unknown color \"{}\"", color);
    }
    resolved
}

/// Colors and emphasis applied by [`styled`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextStyle {
    pub foreground: Option<String>,
    pub background: Option<String>,
    pub bold: bool,
    pub underline: bool,
    pub strikethrough: bool,
}

impl TextStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fg(mut self, color: &str) -> Self {
        self.foreground = Some(color.to_string());
        self
    }

    pub fn on(mut self, color: &str) -> Self {
        self.background = Some(color.to_string());
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn strikethrough(mut self) -> Self {
        self.strikethrough = true;
        self
    }

    /// The terminal style, skipping colors that cannot be parsed.
    pub fn to_style(&self) -> Style {
        let mut style = Style::new();
        if let Some(fg) = self.foreground.as_deref().and_then(resolve) {
            style = style.fg(fg);
        }
        if let Some(bg) = self.background.as_deref().and_then(resolve) {
            style = style.on(bg);
        }
        if self.bold {
            style = style.bold();
        }
        if self.underline {
            style = style.underline();
        }
        if self.strikethrough {
            style = style.strikethrough();
        }
        style
    }
}

/// Paints the text with the given style.
///
/// # Examples
///
/// ```
/// use stringkit::styling::{styled, TextStyle};
///
/// assert_eq!(styled("hi", &TextStyle::new().fg("red")), "\u{1b}[31mhi\u{1b}[0m");
/// assert_eq!(styled("hi", &TextStyle::new()), "hi");
/// ```
pub fn styled(text: &str, style: &TextStyle) -> String {
    style.to_style().paint(text).to_string()
}

/// Colors every occurrence of `needle`. The text is returned unchanged when
/// the needle is empty or the color is unknown.
pub fn highlighting(text: &str, needle: &str, color: &str) -> String {
    let Some(color) = resolve(color) else {
        return text.to_string();
    };

    let mut result = String::with_capacity(text.len());
    let mut last = 0;
    for range in ranges_of(text, needle) {
        result.push_str(&text[last..range.start]);
        result.push_str(&color.paint(&text[range.clone()]).to_string());
        last = range.end;
    }
    result.push_str(&text[last..]);
    result
}

/// Renders text as a bulleted list, one item per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulletList {
    pub bullet: String,
    /// Spaces in front of the continuation lines of a wrapped item
    pub indentation: usize,
    pub bullet_color: Option<String>,
    /// Wrap items longer than this many characters
    pub width: Option<usize>,
}

impl Default for BulletList {
    fn default() -> Self {
        BulletList {
            bullet: DEFAULT_BULLET.to_string(),
            indentation: 2,
            bullet_color: None,
            width: None,
        }
    }
}

impl BulletList {
    pub fn new(bullet: &str, indentation: usize) -> Self {
        BulletList {
            bullet: bullet.to_string(),
            indentation,
            ..Default::default()
        }
    }

    pub fn bullet_color(mut self, color: &str) -> Self {
        self.bullet_color = Some(color.to_string());
        self
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn render(&self, text: &str) -> String {
        let marker = match self.bullet_color.as_deref().and_then(resolve) {
            Some(color) => color.paint(self.bullet.as_str()).to_string(),
            None => self.bullet.clone(),
        };
        let continuation = " ".repeat(self.indentation);

        text.split('\n')
            .map(|item| {
                let lines = match self.width {
                    Some(width) => word_wrap(item, width.saturating_sub(self.indentation)),
                    None => vec![item.to_string()],
                };
                let mut rendered = format!("{} {}", marker, lines[0]);
                for line in &lines[1..] {
                    rendered.push('\n');
                    rendered.push_str(&continuation);
                    rendered.push_str(line);
                }
                rendered
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Prefixes every line of the text with `bullet` and a space.
///
/// # Examples
///
/// ```
/// use stringkit::styling::to_bullet_list;
///
/// assert_eq!(to_bullet_list("one\ntwo", "-", 2), "- one\n- two");
/// ```
pub fn to_bullet_list(text: &str, bullet: &str, indentation: usize) -> String {
    BulletList::new(bullet, indentation).render(text)
}
