//! Module for shared constants used across the codebase

/// Masking defaults
pub mod masking {
    /// Placeholder marking a position to be masked in a mask pattern
    pub const PLACEHOLDER: char = '#';
    /// Default replacement character
    pub const DEFAULT_MASK_CHAR: char = '*';
    /// Default number of visible leading characters for `mask_middle`
    pub const DEFAULT_VISIBLE_PREFIX: usize = 4;
    /// Default number of visible trailing characters for `mask_middle`
    pub const DEFAULT_VISIBLE_SUFFIX: usize = 4;
}

pub mod text {
    /// Default trailing marker appended by `truncated`
    pub const DEFAULT_TRAILING: &str = "...";
    /// Separator used by snake_case identifiers
    pub const SNAKE_SEPARATOR: char = '_';
    /// Characters considered "special" by the password checks
    pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_-+=[]{}|:;'\"<>,.?/~`";
}

pub mod date {
    /// Default date format
    pub const DEFAULT_DATE_FORMAT: &str = "yyyy-MM-dd";
    /// ISO-8601 pattern used for UTC timestamps without fractional seconds
    pub const ISO8601_FORMAT: &str = "yyyy-MM-dd'T'HH:mm:ss'Z'";
    /// Default locale identifier
    pub const DEFAULT_LOCALE: &str = "en_US";
    /// Year used when a pattern carries no year field
    pub const DEFAULT_YEAR: i32 = 2000;
}

pub mod config {
    /// Environment variable holding the debug flag
    pub const DEBUG_ENV_VAR: &str = "STRINGKIT_DEBUG";
    /// Default configuration file name
    pub const DEFAULT_CONFIG_FILE: &str = "stringkit.toml";
}
