//! Country name localization
//!
//! The picker does not resolve translations itself. Hosts hand it a
//! [`CountryLocalizations`] implementation that maps ISO codes to display
//! names for the active locale.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Lookup of localized country names by ISO code
pub trait CountryLocalizations {
    fn country_name(&self, country_code: &str) -> Option<String>;
}

/// No translations available; every localized name stays absent
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocalizations;

impl CountryLocalizations for NoLocalizations {
    fn country_name(&self, _country_code: &str) -> Option<String> {
        None
    }
}

impl<F> CountryLocalizations for F
where
    F: Fn(&str) -> Option<String>,
{
    fn country_name(&self, country_code: &str) -> Option<String> {
        self(country_code)
    }
}

/// In-memory code → name table, e.g. one locale loaded from JSON
///
/// ```json
/// { "DE": "Allemagne", "FR": "France", "WW": "Monde entier" }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizationTable {
    names: HashMap<String, String>,
}

impl LocalizationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: HashMap<String, String> =
            serde_json::from_str(json).map_err(|source| CatalogError::Localization { source })?;
        let mut table = Self::new();
        for (code, name) in raw {
            table.insert(&code, name);
        }
        Ok(table)
    }

    /// Keys are stored uppercased so lookups are case-insensitive
    pub fn insert(&mut self, country_code: &str, name: impl Into<String>) {
        self.names
            .insert(country_code.trim().to_uppercase(), name.into());
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl CountryLocalizations for LocalizationTable {
    fn country_name(&self, country_code: &str) -> Option<String> {
        self.names.get(&country_code.to_uppercase()).cloned()
    }
}

/// Collapse every run of whitespace into a single space and trim the ends
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lookup_is_case_insensitive() {
        let table = LocalizationTable::from_json(r#"{"de": "Allemagne", "FR": "France"}"#).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.country_name("DE").as_deref(), Some("Allemagne"));
        assert_eq!(table.country_name("fr").as_deref(), Some("France"));
        assert_eq!(table.country_name("XX"), None);
    }

    #[test]
    fn test_table_rejects_non_string_values() {
        let err = LocalizationTable::from_json(r#"{"DE": 5}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Localization { .. }));
        assert!(err.to_string().starts_with("malformed localization table"));
    }

    #[test]
    fn test_closure_localizations() {
        let l10n = |code: &str| (code == "JP").then(|| "Japon".to_string());
        assert_eq!(l10n.country_name("JP").as_deref(), Some("Japon"));
        assert_eq!(l10n.country_name("US"), None);
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  Côte \t d'Ivoire\n"), "Côte d'Ivoire");
        assert_eq!(collapse_whitespace(""), "");
    }
}
