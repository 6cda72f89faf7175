// Reference data module - country catalog backed by the embedded phone-code
// dataset (countries.json, one entry per ISO code / calling-code variant).
//
// Some countries appear more than once with different calling codes
// (Dominican Republic +1809/+1829/+1849, Puerto Rico +1787/+1939). Lookups by
// code return the first entry; list views decide whether to collapse them.

pub mod country;
pub mod parser;

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use crate::error::CatalogError;
use crate::l10n::CountryLocalizations;
pub use country::{Country, WORLD_WIDE_CODE};

const DATASET: &str = include_str!("countries.json");

/// Lazily-parsed embedded catalog
static BUILTIN: OnceLock<CountryCatalog> = OnceLock::new();

/// Ordered list of all countries, with an index for O(1) lookup by code
#[derive(Debug, Clone)]
pub struct CountryCatalog {
    countries: Vec<Country>,
    /// ISO code -> position of its first entry
    by_code: HashMap<String, usize>,
}

impl CountryCatalog {
    /// The embedded dataset, parsed on first use.
    ///
    /// A malformed embedded dataset is a packaging defect with no degraded
    /// mode, so it aborts here.
    pub fn builtin() -> &'static CountryCatalog {
        BUILTIN.get_or_init(|| match Self::from_json(DATASET) {
            Ok(catalog) => catalog,
            Err(e) => panic!("embedded country dataset is invalid: {}", e),
        })
    }

    /// Parse a dataset in the embedded JSON format.
    /// Any malformed entry rejects the whole dataset.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let countries: Vec<Country> =
            serde_json::from_str(json).map_err(|source| CatalogError::Parse { source })?;
        Self::from_countries(countries)
    }

    /// Build a catalog from records, preserving their order
    pub fn from_countries(countries: Vec<Country>) -> Result<Self, CatalogError> {
        let mut by_code = HashMap::with_capacity(countries.len());
        for (index, country) in countries.iter().enumerate() {
            let code = country.key();
            let valid = code.len() == 2 && code.chars().all(|c| c.is_ascii_uppercase());
            if !valid || country.is_world_wide() {
                return Err(CatalogError::InvalidCode {
                    index,
                    code: code.to_string(),
                });
            }
            by_code.entry(code.to_string()).or_insert(index);
        }
        log::debug!(
            "Loaded country catalog: {} entries, {} distinct codes",
            countries.len(),
            by_code.len()
        );
        Ok(Self { countries, by_code })
    }

    /// All records in dataset order
    pub fn all(&self) -> &[Country] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// The "World Wide" sentinel; never part of [`CountryCatalog::all`]
    pub fn world_wide(&self) -> &'static Country {
        Country::world_wide()
    }

    /// Look up a country by ISO code (case-insensitive). `WW` yields the
    /// sentinel.
    pub fn find_by_code(&self, code: &str) -> Option<&Country> {
        let code = code.trim().to_uppercase();
        if code == WORLD_WIDE_CODE {
            return Some(Country::world_wide());
        }
        self.by_code.get(&code).map(|&i| &self.countries[i])
    }

    /// Every record whose code is listed in `codes`, in catalog order.
    /// Repeated or unknown codes have no effect.
    pub fn find_by_codes<S: AsRef<str>>(&self, codes: &[S]) -> Vec<&Country> {
        let wanted: HashSet<String> = codes
            .iter()
            .map(|c| c.as_ref().trim().to_uppercase())
            .collect();
        self.countries
            .iter()
            .filter(|c| wanted.contains(c.key()))
            .collect()
    }

    /// Look up by English name, or by localized name when `l10n` is given
    /// (both case-insensitive)
    pub fn find_by_name(
        &self,
        name: &str,
        l10n: Option<&dyn CountryLocalizations>,
    ) -> Option<&Country> {
        let wanted = name.trim().to_lowercase();
        if wanted.is_empty() {
            return None;
        }
        let sentinel: &Country = Country::world_wide();
        std::iter::once(sentinel)
            .chain(self.countries.iter())
            .find(|c| {
                c.name.to_lowercase() == wanted
                    || l10n
                        .and_then(|l| l.country_name(c.key()))
                        .map(|n| n.to_lowercase() == wanted)
                        .unwrap_or(false)
            })
    }

    /// First record with the given calling code; `+` and whitespace ignored
    pub fn find_by_phone_code(&self, phone_code: &str) -> Option<&Country> {
        let wanted: String = phone_code
            .chars()
            .filter(|c| *c != '+' && !c.is_whitespace())
            .collect();
        if wanted.is_empty() {
            return None;
        }
        self.countries.iter().find(|c| c.phone_code == wanted)
    }
}

#[cfg(test)]
pub(crate) fn small_catalog() -> CountryCatalog {
    use country::test_country;
    CountryCatalog::from_countries(vec![
        test_country("US", "1", "United States"),
        test_country("GB", "44", "United Kingdom"),
        test_country("FR", "33", "France"),
        test_country("DO", "1809", "Dominican Republic"),
        test_country("DO", "1829", "Dominican Republic"),
        test_country("DE", "49", "Germany"),
    ])
    .unwrap()
}
