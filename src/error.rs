use strum_macros::Display;
use thiserror::Error;

#[derive(Debug, Display)]
pub enum ConfigType {
    #[strum(serialize = "Main config")]
    MAIN,
}

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid regular expression \"{pattern}\". Cause : {cause}")]
    InvalidRegex { pattern: String, cause: String },
    #[error("invalid date format \"{pattern}\". Cause : {cause}")]
    InvalidDateFormat { pattern: String, cause: String },
    #[error("unknown time zone \"{0}\"")]
    UnknownTimeZone(String),
    #[error("unable to read configuration file {file:?}. Cause : {cause}")]
    ConfigReadError { file: String, cause: String },
    #[error("unable to parse {location} file {file:?}. Cause : {cause}")]
    SerdeTomlError {
        location: ConfigType,
        file: String,
        cause: String,
    },
    #[error(transparent)]
    Io(#[from] ::std::io::Error),
    #[error("{0}")]
    Msg(String),
}

impl From<&'static str> for Error {
    fn from(s: &'static str) -> Self {
        Error::Msg(s.to_owned())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Msg(s)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
