use std::env;

use nu_ansi_term::Color::Yellow;
use once_cell::sync::Lazy;

use crate::constants::config::DEBUG_ENV_VAR;

pub static DEBUG_ENABLED: Lazy<bool> = Lazy::new(|| {
    env::var(DEBUG_ENV_VAR).map_or(false, |log_level| log_level.eq("true") || log_level.eq("1"))
});

pub fn is_debug_enabled() -> bool {
    *DEBUG_ENABLED
}

/// Builds a debug message with details.
///
/// # Arguments
///
/// * `message` - The main message to log.
/// * `details` - Additional details, only included when debugging is enabled.
///
/// # Returns
///
/// A formatted string containing the message and details.
pub fn debug_message<M, D>(message: M, details: D) -> String
where
    M: AsRef<str>,
    D: AsRef<str>,
{
    if *DEBUG_ENABLED {
        format!("{}{}", message.as_ref(), details.as_ref())
    } else {
        message.as_ref().to_string()
    }
}

/// Paints a debug line. Used by the `debug!` macro so callers do not need
/// `nu_ansi_term` in scope.
#[doc(hidden)]
pub fn paint_debug(line: &str) -> String {
    Yellow.paint(line).to_string()
}

/// Logs a debug message to stderr with optional formatted arguments.
///
/// # Arguments
///
/// * `fmt` - The format string for the debug message.
/// * `args` - Optional arguments to be formatted into the message.
///
/// # Examples
///
/// ```
/// use stringkit::debug;
///
/// // Printed in yellow only when STRINGKIT_DEBUG is "true" or "1"
/// debug!("Formatter cache miss");
/// debug!("Compiled pattern {} into {} items", "yyyy-MM-dd", 5);
/// ```
#[macro_export]
macro_rules! debug {
    ($fmt:expr) => {
        if *$crate::log::DEBUG_ENABLED {
            eprintln!("{}", $crate::log::paint_debug(&format!("{}", $fmt)));
        }
    };
    ($fmt:expr, $($arg:tt)*) => {
        if *$crate::log::DEBUG_ENABLED {
            eprintln!("{}", $crate::log::paint_debug(&format!($fmt, $($arg)*)));
        }
    };
}
