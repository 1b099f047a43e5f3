//! Environment configuration for the CLI.
//!
//! Values come from the process environment, after loading a `.env` file
//! when one exists. Command-line flags override them.

use std::path::PathBuf;

use anyhow::Context;
use clap::ValueEnum;
use folioreport_core::Locale;
use folioreport_document::PageSize;

const DEFAULT_OUTPUT_DIR: &str = "./reports";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    fn parse_lenient(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub output_dir: PathBuf,
    pub locale: Locale,
    pub page_size: PageSize,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let output_dir = lookup("FOLIOREPORT_OUTPUT_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string());

        let locale = match lookup("FOLIOREPORT_LOCALE") {
            Some(value) => value
                .parse::<Locale>()
                .context("Invalid FOLIOREPORT_LOCALE")?,
            None => Locale::default(),
        };

        let page_size = match lookup("FOLIOREPORT_PAGE_SIZE") {
            Some(value) => value
                .parse::<PageSize>()
                .context("Invalid FOLIOREPORT_PAGE_SIZE")?,
            None => PageSize::default(),
        };

        let log_format = lookup("FOLIOREPORT_LOG_FORMAT")
            .map(|value| LogFormat::parse_lenient(&value))
            .unwrap_or_default();

        Ok(Config {
            output_dir: PathBuf::from(output_dir),
            locale,
            page_size,
            log_format,
        })
    }
}
