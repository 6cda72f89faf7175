// Country record
// One entry of the phone-code dataset plus the per-session localized name.
//
// Serialized field names follow the dataset keys (e164_cc, iso2_cc, ...), so
// the same struct reads the embedded JSON and writes the interop form.

use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::l10n::{collapse_whitespace, CountryLocalizations};

/// ISO code of the synthetic "no specific country" entry
pub const WORLD_WIDE_CODE: &str = "WW";

static WORLD_WIDE: OnceLock<Country> = OnceLock::new();

/// A single country as offered by the picker.
///
/// Identity is the ISO code alone: two records with the same `country_code`
/// compare equal and hash identically, even when they carry different phone
/// codes (e.g. the +1809 / +1829 variants of the Dominican Republic).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Country {
    /// Country calling code without the leading `+` (empty for the sentinel)
    #[serde(rename = "e164_cc")]
    pub phone_code: String,
    /// ISO 3166-1 alpha-2 code
    #[serde(rename = "iso2_cc")]
    pub country_code: String,
    /// Subscriber-number length code
    pub e164_sc: i32,
    pub geographic: bool,
    pub level: i32,
    /// Canonical English name
    pub name: String,
    /// Example national number
    pub example: String,
    pub display_name: String,
    #[serde(default)]
    full_example_with_plus_sign: Option<String>,
    #[serde(rename = "display_name_no_e164_cc")]
    pub display_name_no_country_code: String,
    pub e164_key: String,
    /// Only ever set through [`Country::localize`]
    #[serde(default)]
    name_localized: Option<String>,
}

impl Country {
    /// The "World Wide" sentinel. Immutable and shared; sessions localize a
    /// copy of it instead of touching this one.
    pub fn world_wide() -> &'static Country {
        WORLD_WIDE.get_or_init(|| Country {
            phone_code: String::new(),
            country_code: WORLD_WIDE_CODE.to_string(),
            e164_sc: -1,
            geographic: false,
            level: -1,
            name: "World Wide".to_string(),
            example: String::new(),
            display_name: "World Wide (WW)".to_string(),
            full_example_with_plus_sign: None,
            display_name_no_country_code: "World Wide".to_string(),
            e164_key: String::new(),
            name_localized: None,
        })
    }

    /// Identity key used for every set/map operation over records
    pub fn key(&self) -> &str {
        &self.country_code
    }

    pub fn is_world_wide(&self) -> bool {
        self.country_code == WORLD_WIDE_CODE
    }

    pub fn name_localized(&self) -> Option<&str> {
        self.name_localized.as_deref()
    }

    /// Localized name when one was resolved, English name otherwise
    pub fn localized_name_or_default(&self) -> &str {
        self.name_localized.as_deref().unwrap_or(&self.name)
    }

    /// Second construction phase: a copy of this record carrying the
    /// localized name from `l10n` (whitespace runs collapsed).
    pub fn localize(&self, l10n: &dyn CountryLocalizations) -> Country {
        let name_localized = l10n
            .country_name(&self.country_code)
            .map(|name| collapse_whitespace(&name));
        Country {
            name_localized,
            ..self.clone()
        }
    }

    /// Example number in international format, e.g. `+12015550123`
    pub fn full_example_with_plus_sign(&self) -> String {
        if let Some(full) = &self.full_example_with_plus_sign {
            return full.clone();
        }
        if self.phone_code.is_empty() {
            return String::new();
        }
        format!("+{}{}", self.phone_code, self.example)
    }

    /// Flag built from regional indicator symbols; the globe for the sentinel
    pub fn flag_emoji(&self) -> String {
        if self.is_world_wide() {
            return "\u{1F30D}".to_string();
        }
        self.country_code
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .filter_map(|c| {
                let offset = c.to_ascii_uppercase() as u32 - 'A' as u32;
                char::from_u32(0x1F1E6 + offset)
            })
            .collect()
    }
}

impl PartialEq for Country {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Country {}

impl Hash for Country {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

#[cfg(test)]
pub(crate) fn test_country(code: &str, phone: &str, name: &str) -> Country {
    Country {
        phone_code: phone.to_string(),
        country_code: code.to_string(),
        e164_sc: 0,
        geographic: true,
        level: 1,
        name: name.to_string(),
        example: "5550123".to_string(),
        display_name: format!("{} ({}) [+{}]", name, code, phone),
        full_example_with_plus_sign: None,
        display_name_no_country_code: format!("{} ({})", name, code),
        e164_key: format!("{}-{}-0", phone, code),
        name_localized: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::l10n::{LocalizationTable, NoLocalizations};
    use std::collections::HashSet;

    #[test]
    fn test_equality_uses_country_code_only() {
        let a = test_country("DO", "1809", "Dominican Republic");
        let b = test_country("DO", "1829", "Dominican Republic");
        let c = test_country("US", "1", "United States");
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<Country> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_world_wide_sentinel() {
        let ww = Country::world_wide();
        assert!(ww.is_world_wide());
        assert_eq!(ww.phone_code, "");
        assert_eq!(ww.name, "World Wide");
        assert_eq!(ww.full_example_with_plus_sign(), "");
        assert_eq!(ww.flag_emoji(), "\u{1F30D}");
    }

    #[test]
    fn test_localize_produces_new_record() {
        let mut table = LocalizationTable::new();
        table.insert("FR", "  la   France ");
        let fr = test_country("FR", "33", "France");

        let localized = fr.localize(&table);
        assert_eq!(localized.name_localized(), Some("la France"));
        assert_eq!(fr.name_localized(), None);
        assert_eq!(fr.localize(&NoLocalizations).localized_name_or_default(), "France");
    }

    #[test]
    fn test_localize_leaves_shared_sentinel_untouched() {
        let mut table = LocalizationTable::new();
        table.insert("WW", "Monde entier");
        let local = Country::world_wide().localize(&table);
        assert_eq!(local.name_localized(), Some("Monde entier"));
        assert_eq!(Country::world_wide().name_localized(), None);
    }

    #[test]
    fn test_flag_emoji() {
        assert_eq!(test_country("US", "1", "United States").flag_emoji(), "\u{1F1FA}\u{1F1F8}");
        assert_eq!(test_country("fr", "33", "France").flag_emoji(), "\u{1F1EB}\u{1F1F7}");
    }

    #[test]
    fn test_full_example_falls_back_to_phone_and_example() {
        let us = test_country("US", "1", "United States");
        assert_eq!(us.full_example_with_plus_sign(), "+15550123");
    }

    #[test]
    fn test_serialized_form_uses_dataset_keys() {
        let mut table = LocalizationTable::new();
        table.insert("GB", "Royaume-Uni");
        let gb = test_country("GB", "44", "United Kingdom").localize(&table);

        let value = serde_json::to_value(&gb).unwrap();
        assert_eq!(value["iso2_cc"], "GB");
        assert_eq!(value["e164_cc"], "44");
        assert_eq!(value["display_name_no_e164_cc"], "United Kingdom (GB)");
        assert_eq!(value["name_localized"], "Royaume-Uni");

        let back: Country = serde_json::from_value(value).unwrap();
        assert_eq!(back.name_localized(), Some("Royaume-Uni"));
    }
}
