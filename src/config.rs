use std::fs::File;
use std::io::Read;
use std::path::Path;

use nu_ansi_term::Color::Yellow;
use serde::Deserialize;

use crate::constants::config::DEFAULT_CONFIG_FILE;
use crate::constants::{date, masking, text};
use crate::dates::DateStyle;
use crate::error::*;
use crate::{debug, log};

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Defaults {
    pub mask_char: char,
    pub visible_prefix: usize,
    pub visible_suffix: usize,
    pub date_format: String,
    pub locale: String,
    pub time_zone: Option<String>,
    pub truncation_trailing: String,
    pub date_style: DateStyle,
}

impl Default for Defaults {
    fn default() -> Defaults {
        Defaults {
            mask_char: masking::DEFAULT_MASK_CHAR,
            visible_prefix: masking::DEFAULT_VISIBLE_PREFIX,
            visible_suffix: masking::DEFAULT_VISIBLE_SUFFIX,
            date_format: date::DEFAULT_DATE_FORMAT.to_string(),
            locale: date::DEFAULT_LOCALE.to_string(),
            time_zone: None,
            truncation_trailing: text::DEFAULT_TRAILING.to_string(),
            date_style: DateStyle::Medium,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Config::default()
    }

    /// Parses a configuration from its TOML representation.
    ///
    /// # Arguments
    /// * `content` - The TOML document
    ///
    /// # Returns
    /// The parsed configuration, missing keys take their default values
    pub fn from_toml(content: &str) -> Result<Config> {
        Self::from_toml_named(content, "<inline>")
    }

    fn from_toml_named(content: &str, file: &str) -> Result<Config> {
        toml::from_str(content).map_err(|e| Error::SerdeTomlError {
            location: ConfigType::MAIN,
            file: file.to_string(),
            cause: e.message().to_string(),
        })
    }

    /// Loads the configuration stored in the given file.
    ///
    /// # Arguments
    /// * `file_path` - Path of the TOML configuration file
    pub fn load<P: AsRef<Path>>(file_path: P) -> Result<Config> {
        let file_path = file_path.as_ref();
        let content = parse(file_path).map_err(|e| Error::ConfigReadError {
            file: file_path.display().to_string(),
            cause: log::debug_message(
                e.to_string(),
                Yellow
                    .paint(format!("\n[Config path] {}", file_path.to_string_lossy()))
                    .to_string(),
            ),
        })?;
        Self::from_toml_named(&content, &file_path.display().to_string())
    }

    /// Loads `stringkit.toml` from the given directory, falling back to the
    /// defaults when the file does not exist.
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<Config> {
        let file_path = dir.as_ref().join(DEFAULT_CONFIG_FILE);
        if file_path.is_file() {
            Self::load(file_path)
        } else {
            debug!("No configuration at {}, using defaults", file_path.display());
            Ok(Config::default())
        }
    }
}

pub fn parse(file_path: &Path) -> Result<String> {
    let mut config_content = String::new();
    File::open(file_path)?.read_to_string(&mut config_content)?;
    Ok(config_content)
}
