//! `stringkit` is a collection of string and date helpers: validation,
//! masking, case conversion, wrapping, regular-expression shortcuts,
//! transliteration and escaping, terminal styling, and locale-aware date
//! parsing and formatting backed by a shared formatter cache.
//!
//! Every helper is a free function in its module. The [`ext`] traits expose
//! the same helpers method-style and fill omitted parameters from the
//! process-wide configuration held by [`config_manager::ConfigManager`].
//!
//! Helpers never fail: inputs that do not match, malformed patterns and
//! out-of-range parameters produce `None`, `false`, an empty value or the
//! input unchanged. Set `STRINGKIT_DEBUG=1` to have these degraded paths
//! logged to stderr.
//!
//! "Hello world" example:
//! ```
//! use stringkit::prelude::*;
//!
//! assert_eq!("helloWorld".camel_case_to_snake_case(), "hello_world");
//! assert_eq!("1234567890".mask("#### #### ##"), "**** **** **");
//!
//! let date = parse_date("2023-01-15", "yyyy-MM-dd", None, Some("UTC")).unwrap();
//! assert_eq!(date.to_iso8601_string(), "2023-01-15T00:00:00Z");
//! ```

pub mod case;
pub mod config;
pub mod config_manager;
pub mod constants;
pub mod dates;
pub mod error;
pub mod ext;
pub mod formatting;
pub mod localization;
pub mod log;
pub mod masking;
pub mod regex_utils;
pub mod string_utils;
pub mod styling;
pub mod substring;
pub mod utils;
pub mod validation;

/// The stringkit prelude
///
/// This module re-exports the most commonly used items from stringkit.
/// You can use it with `use stringkit::prelude::*;` to bring all common items into scope.
pub mod prelude {
    // Re-export the extension traits
    pub use crate::ext::{DateExt, StrExt};

    // Re-export commonly used types
    pub use crate::config::Config;
    pub use crate::config_manager::ConfigManager;
    pub use crate::dates::{DateFormatter, DateStyle, FormatSpec, FormatterCache};
    pub use crate::error::{Error, Result};
    pub use crate::styling::TextStyle;

    // Re-export commonly used functions
    pub use crate::dates::{format_date, is_valid_date, parse_date};
}
