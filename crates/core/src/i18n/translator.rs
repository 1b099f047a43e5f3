//! Localized string lookup.
//!
//! Strings returned by a [`Translator`] are opaque text for the report
//! pipeline: they are laid out, never parsed.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use log::warn;
use serde_json::Value;

use crate::errors::{Error, Result, ValidationError};

const EN_CATALOG: &str = include_str!("locales/en.json");
const ES_CATALOG: &str = include_str!("locales/es.json");

/// Key → text lookup with `{placeholder}` interpolation.
pub trait Translator: Send + Sync {
    /// Returns the text for `key`, or the key itself when it is unknown.
    fn t(&self, key: &str) -> String;

    /// Like [`Translator::t`], replacing `{name}` placeholders with `args`.
    fn t_with(&self, key: &str, args: &[(&str, String)]) -> String {
        interpolate(&self.t(key), args)
    }
}

/// Supported report languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    fn embedded_catalog(&self) -> &'static str {
        match self {
            Locale::En => EN_CATALOG,
            Locale::Es => ES_CATALOG,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase();
        // Accept region-qualified tags such as "es-ES" or "en_US".
        let language = normalized
            .split(['-', '_'])
            .next()
            .unwrap_or_default();
        match language {
            "en" => Ok(Locale::En),
            "es" => Ok(Locale::Es),
            _ => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unsupported locale '{}'",
                s
            )))),
        }
    }
}

/// Flat catalog of translated templates keyed by dotted path.
#[derive(Debug, Clone)]
pub struct Catalog {
    locale: Locale,
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Loads the catalog embedded in the binary for `locale`.
    pub fn load(locale: Locale) -> Result<Self> {
        Self::from_json_str(locale, locale.embedded_catalog())
    }

    /// Parses a nested JSON object into a flat catalog.
    ///
    /// `{"report": {"title": "Asset Report"}}` yields the key `report.title`.
    pub fn from_json_str(locale: Locale, json: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(json)
            .map_err(|e| Error::Locale(format!("{} catalog is not valid JSON: {}", locale, e)))?;
        if !root.is_object() {
            return Err(Error::Locale(format!(
                "{} catalog must be a JSON object",
                locale
            )));
        }

        let mut entries = HashMap::new();
        flatten_into(&mut entries, String::new(), &root);
        Ok(Self { locale, entries })
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl Translator for Catalog {
    fn t(&self, key: &str) -> String {
        match self.entries.get(key) {
            Some(text) => text.clone(),
            None => {
                warn!("Missing {} translation for key '{}'", self.locale, key);
                key.to_string()
            }
        }
    }
}

fn flatten_into(entries: &mut HashMap<String, String>, prefix: String, value: &Value) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_into(entries, path, child);
            }
        }
        Value::String(text) => {
            entries.insert(prefix, text.clone());
        }
        Value::Null => {}
        other => {
            entries.insert(prefix, other.to_string());
        }
    }
}

/// Replaces every `{name}` in `template` with its value from `args`.
/// Unknown placeholders are left untouched.
pub fn interpolate(template: &str, args: &[(&str, String)]) -> String {
    args.iter().fold(template.to_string(), |text, (name, value)| {
        text.replace(&format!("{{{}}}", name), value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalogs_share_keys() {
        let en = Catalog::load(Locale::En).unwrap();
        let es = Catalog::load(Locale::Es).unwrap();
        assert!(!en.is_empty());
        assert_eq!(en.len(), es.len());
        for key in en.entries.keys() {
            assert!(es.contains(key), "es catalog is missing '{}'", key);
        }
    }

    #[test]
    fn test_nested_keys_are_flattened() {
        let catalog = Catalog::load(Locale::En).unwrap();
        assert_eq!(catalog.t("report.sections.summary"), "Financial Summary");
        assert_eq!(
            catalog.t("assets.fields.commodityTypes.other"),
            "Other"
        );
    }

    #[test]
    fn test_missing_key_returns_key() {
        let catalog = Catalog::load(Locale::Es).unwrap();
        assert_eq!(catalog.t("report.nope"), "report.nope");
    }

    #[test]
    fn test_t_with_interpolates() {
        let catalog =
            Catalog::from_json_str(Locale::En, r#"{"greet": "Hi {name}, {name}! {other}"}"#)
                .unwrap();
        assert_eq!(
            catalog.t_with("greet", &[("name", "Ana".to_string())]),
            "Hi Ana, Ana! {other}"
        );
    }

    #[test]
    fn test_invalid_catalog_is_an_error() {
        assert!(matches!(
            Catalog::from_json_str(Locale::En, "[1, 2]"),
            Err(Error::Locale(_))
        ));
        assert!(matches!(
            Catalog::from_json_str(Locale::En, "{"),
            Err(Error::Locale(_))
        ));
    }

    #[test]
    fn test_locale_parsing() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("es-ES".parse::<Locale>().unwrap(), Locale::Es);
        assert_eq!("EN_us".parse::<Locale>().unwrap(), Locale::En);
        assert!("fr".parse::<Locale>().is_err());
    }
}
