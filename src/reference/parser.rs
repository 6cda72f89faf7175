// Country parsing
// Resolves user or config input to a catalog record.
//
// parse/try_parse accept an ISO code only. parse_any/try_parse_any also accept
// a calling code ("+44") or a country name, tried in that order.

use super::{Country, CountryCatalog, WORLD_WIDE_CODE};
use crate::error::CatalogError;
use crate::l10n::CountryLocalizations;

impl CountryCatalog {
    /// Resolve an ISO code. `WW` returns the sentinel without touching the
    /// catalog.
    pub fn parse(&self, code: &str) -> Result<&Country, CatalogError> {
        self.try_parse(code)
            .ok_or_else(|| CatalogError::NotFound(code.to_string()))
    }

    /// Same as [`CountryCatalog::parse`], `None` instead of an error
    pub fn try_parse(&self, code: &str) -> Option<&Country> {
        if code.trim().eq_ignore_ascii_case(WORLD_WIDE_CODE) {
            return Some(Country::world_wide());
        }
        self.find_by_code(code)
    }

    /// Resolve free text: ISO code, then calling code, then English or
    /// localized name
    pub fn parse_any(
        &self,
        text: &str,
        l10n: Option<&dyn CountryLocalizations>,
    ) -> Result<&Country, CatalogError> {
        self.try_parse_any(text, l10n)
            .ok_or_else(|| CatalogError::NotFound(text.to_string()))
    }

    pub fn try_parse_any(
        &self,
        text: &str,
        l10n: Option<&dyn CountryLocalizations>,
    ) -> Option<&Country> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        if text.len() == 2 {
            if let Some(country) = self.try_parse(text) {
                return Some(country);
            }
        }
        if looks_like_phone_code(text) {
            if let Some(country) = self.find_by_phone_code(text) {
                return Some(country);
            }
        }
        self.find_by_name(text, l10n)
    }
}

fn looks_like_phone_code(text: &str) -> bool {
    let digits = text.strip_prefix('+').unwrap_or(text).trim();
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::l10n::LocalizationTable;
    use crate::reference::small_catalog;

    #[test]
    fn test_parse_known_code() {
        let catalog = small_catalog();
        assert_eq!(catalog.parse("US").unwrap().name, "United States");
        assert_eq!(catalog.parse("fr").unwrap().key(), "FR");
    }

    #[test]
    fn test_parse_world_wide() {
        let catalog = small_catalog();
        assert!(catalog.parse("WW").unwrap().is_world_wide());
        assert!(catalog.try_parse("WW").unwrap().is_world_wide());
    }

    #[test]
    fn test_unknown_code() {
        let catalog = small_catalog();
        for code in ["XX", "JP", "", "USA"] {
            assert!(catalog.try_parse(code).is_none(), "{} should not resolve", code);
            let err = catalog.parse(code).unwrap_err();
            assert!(matches!(err, CatalogError::NotFound(ref c) if c == code));
        }
    }

    #[test]
    fn test_parse_any() {
        let catalog = small_catalog();
        let mut table = LocalizationTable::new();
        table.insert("GB", "Royaume-Uni");

        assert_eq!(catalog.parse_any("gb", None).unwrap().key(), "GB");
        assert_eq!(catalog.parse_any("+33", None).unwrap().key(), "FR");
        assert_eq!(catalog.parse_any("1829", None).unwrap().phone_code, "1829");
        assert_eq!(catalog.parse_any("germany", None).unwrap().key(), "DE");
        assert_eq!(catalog.parse_any("Royaume-Uni", Some(&table)).unwrap().key(), "GB");
        assert!(catalog.parse_any("ww", None).unwrap().is_world_wide());
        assert!(catalog.parse_any("+999", None).is_err());
        assert!(catalog.try_parse_any("   ", None).is_none());
    }
}
