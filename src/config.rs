use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;
use validator::Validate;

use crate::core::GenericResult;
use crate::time::{DEFAULT_DATE_FORMATS, DateNormalizer};

pub const DEFAULT_CONFIG_PATH: &str = "~/.portfolio-report/config.yaml";

#[derive(Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_holding_prefix")]
    #[validate(length(min = 1))]
    pub holding_prefix: String,

    #[serde(default = "default_export_prefix")]
    #[validate(length(min = 1))]
    pub export_prefix: String,

    #[serde(default = "default_dividend_prefix")]
    #[validate(length(min = 1))]
    pub dividend_prefix: String,

    #[serde(default = "default_extension")]
    #[validate(length(min = 1))]
    pub extension: String,

    #[serde(default)]
    pub ledger_order: LedgerOrder,

    #[serde(default = "default_date_formats")]
    #[validate(length(min = 1))]
    pub date_formats: Vec<String>,

    #[validate(nested)]
    pub logo: Option<LogoConfig>,
}

impl Config {
    /// Loads the configuration from the specified path or, if it's not specified, from the
    /// default location falling back to the default configuration when there is no such file.
    pub fn new(path: Option<&str>) -> GenericResult<Config> {
        if let Some(path) = path {
            return Config::load(path);
        }

        let path = shellexpand::tilde(DEFAULT_CONFIG_PATH).to_string();
        if Path::new(&path).exists() {
            return Config::load(&path);
        }

        debug!("There is no {} configuration file. Using the default configuration.", path);
        Ok(Config::default())
    }

    pub fn load(path: &str) -> GenericResult<Config> {
        let path = shellexpand::tilde(path).to_string();
        debug!("Loading configuration from {}...", path);

        let data = fs::read(&path).map_err(|e| format!(
            "Unable to read {:?}: {}", path, e))?;

        Config::parse(&data).map_err(|e| format!(
            "Error while reading {:?} configuration file: {}", path, e).into())
    }

    pub fn parse(data: &[u8]) -> GenericResult<Config> {
        let mut config: Config = serde_yaml::from_slice(data)?;
        config.validate()?;

        for format in &config.date_formats {
            if !format.contains('%') {
                return Err!("Invalid date format: {:?}", format);
            }
        }

        if let Some(logo) = config.logo.as_mut() {
            logo.path = shellexpand::tilde(&logo.path).to_string();
        }

        Ok(config)
    }

    pub fn date_normalizer(&self) -> DateNormalizer {
        DateNormalizer::new(&self.date_formats)
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            holding_prefix: default_holding_prefix(),
            export_prefix: default_export_prefix(),
            dividend_prefix: default_dividend_prefix(),
            extension: default_extension(),
            ledger_order: LedgerOrder::default(),
            date_formats: default_date_formats(),
            logo: None,
        }
    }
}

/// Defines which ledger row is the seeding (initial investment) transaction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all="kebab-case")]
pub enum LedgerOrder {
    /// The ledger lists the newest transactions first, so the seeding one is the last row.
    #[default]
    NewestFirst,
    /// The ledger lists the oldest transactions first, so the seeding one is the first row.
    OldestFirst,
}

#[derive(Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct LogoConfig {
    #[validate(length(min = 1))]
    pub path: String,

    #[serde(default = "default_logo_width")]
    #[validate(range(min = 1))]
    pub width: u32,

    #[serde(default = "default_logo_height")]
    #[validate(range(min = 1))]
    pub height: u32,
}

fn default_holding_prefix() -> String {
    "Holding".to_owned()
}

fn default_export_prefix() -> String {
    "Export".to_owned()
}

fn default_dividend_prefix() -> String {
    "Dividend".to_owned()
}

fn default_extension() -> String {
    ".xlsx".to_owned()
}

fn default_date_formats() -> Vec<String> {
    DEFAULT_DATE_FORMATS.iter().map(ToString::to_string).collect()
}

fn default_logo_width() -> u32 {
    990
}

fn default_logo_height() -> u32 {
    120
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_config() {
        let config = Config::parse(b"{}").unwrap();
        assert_eq!(config.holding_prefix, "Holding");
        assert_eq!(config.export_prefix, "Export");
        assert_eq!(config.dividend_prefix, "Dividend");
        assert_eq!(config.extension, ".xlsx");
        assert_eq!(config.ledger_order, LedgerOrder::NewestFirst);
        assert_eq!(config.date_formats, default_date_formats());
        assert!(config.logo.is_none());
    }

    #[test]
    fn full_config() {
        let config = Config::parse(indoc!(br#"
            holding_prefix: Holdings
            extension: .xlsm
            ledger_order: oldest-first
            date_formats: ["%m/%d/%Y"]
            logo:
              path: /srv/branding/letterhead.png
              height: 100
        "#)).unwrap();

        assert_eq!(config.holding_prefix, "Holdings");
        assert_eq!(config.export_prefix, "Export");
        assert_eq!(config.extension, ".xlsm");
        assert_eq!(config.ledger_order, LedgerOrder::OldestFirst);
        assert_eq!(config.date_formats, vec![s!("%m/%d/%Y")]);

        let logo = config.logo.unwrap();
        assert_eq!(logo.path, "/srv/branding/letterhead.png");
        assert_eq!((logo.width, logo.height), (990, 100));
    }

    #[test]
    fn invalid_config() {
        assert!(Config::parse(b"unknown_option: 1").is_err());
        assert!(Config::parse(b"holding_prefix: ''").is_err());
        assert!(Config::parse(b"date_formats: []").is_err());
        assert!(Config::parse(b"date_formats: [dd-mm-yyyy]").is_err());
        assert!(Config::parse(b"logo: {path: logo.png, width: 0}").is_err());
    }
}
