// =============================================================================
// Country list pipeline
// =============================================================================
//
// Stage order matters, each one feeds the next:
//
//   catalog -> localize -> custom sort -> collapse calling-code variants
//           -> exclude | country_filter -> (+ World Wide in front)
//
// Favorites are resolved separately from the catalog and are NOT removed from
// the main list. Search only ever narrows the assembled main list.

use std::cmp::Ordering;
use std::collections::HashSet;

use super::options::PickerOptions;
use crate::l10n::CountryLocalizations;
use crate::reference::{Country, CountryCatalog};

/// Caller-supplied ordering for the main list
pub type CountryComparator = Box<dyn Fn(&Country, &Country) -> Ordering>;

/// Normalized search input: trimmed, leading `+` removed, lowercased
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim();
        let stripped = trimmed.strip_prefix('+').unwrap_or(trimmed).trim();
        Self {
            needle: stripped.to_lowercase(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.needle
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Prefix match on calling code, English name, ISO code or localized name
    pub fn matches(&self, country: &Country) -> bool {
        if self.is_empty() {
            return true;
        }
        let needle = self.needle.as_str();
        country.phone_code.to_lowercase().starts_with(needle)
            || country.name.to_lowercase().starts_with(needle)
            || country.country_code.to_lowercase().starts_with(needle)
            || country
                .name_localized()
                .map(|n| n.to_lowercase().starts_with(needle))
                .unwrap_or(false)
    }
}

/// Positions in `list` of the records matching `query`, in list order
pub(crate) fn search_indices(list: &[Country], query: &SearchQuery) -> Vec<usize> {
    list.iter()
        .enumerate()
        .filter(|(_, c)| query.matches(c))
        .map(|(i, _)| i)
        .collect()
}

/// Keep the first record of every country code
pub fn dedup_by_code(list: Vec<Country>) -> Vec<Country> {
    let mut seen = HashSet::new();
    list.into_iter()
        .filter(|c| seen.insert(c.key().to_string()))
        .collect()
}

/// Apply `exclude`, or failing that `country_filter`
pub fn apply_code_rules(mut list: Vec<Country>, options: &PickerOptions) -> Vec<Country> {
    if let Some(exclude) = &options.exclude {
        let codes = code_set(exclude);
        list.retain(|c| !codes.contains(c.key()));
    } else if let Some(filter) = &options.country_filter {
        let codes = code_set(filter);
        list.retain(|c| codes.contains(c.key()));
    }
    list
}

/// Main list before World Wide and search: localized, sorted, collapsed and
/// filtered per `options`
pub fn build_base_list(
    catalog: &CountryCatalog,
    options: &PickerOptions,
    comparator: Option<&dyn Fn(&Country, &Country) -> Ordering>,
    l10n: &dyn CountryLocalizations,
) -> Vec<Country> {
    // Comparators may look at localized names, so localize first
    let mut list: Vec<Country> = catalog.all().iter().map(|c| c.localize(l10n)).collect();

    if let Some(compare) = comparator {
        list.sort_by(|a, b| compare(a, b));
    }
    if !options.show_phone_code {
        list = dedup_by_code(list);
    }

    log_unknown_codes(catalog, "exclude", options.exclude.as_deref());
    log_unknown_codes(catalog, "country_filter", options.country_filter.as_deref());
    apply_code_rules(list, options)
}

/// Favorites in catalog order, localized. Calling-code variants collapse
/// like the main list does. Empty when none were requested.
pub fn resolve_favorites(
    catalog: &CountryCatalog,
    options: &PickerOptions,
    l10n: &dyn CountryLocalizations,
) -> Vec<Country> {
    let Some(favorite) = options.favorite.as_deref().filter(|f| !f.is_empty()) else {
        return Vec::new();
    };
    log_unknown_codes(catalog, "favorite", Some(favorite));
    let favorites: Vec<Country> = catalog
        .find_by_codes(favorite)
        .into_iter()
        .map(|c| c.localize(l10n))
        .collect();
    if options.show_phone_code {
        favorites
    } else {
        dedup_by_code(favorites)
    }
}

/// Final main list: World Wide (when enabled) followed by `base`
pub fn assemble(
    base: Vec<Country>,
    options: &PickerOptions,
    l10n: &dyn CountryLocalizations,
) -> Vec<Country> {
    if !options.show_world_wide {
        return base;
    }
    let mut list = Vec::with_capacity(base.len() + 1);
    list.push(Country::world_wide().localize(l10n));
    list.extend(base);
    list
}

fn code_set(codes: &[String]) -> HashSet<String> {
    codes.iter().map(|c| c.trim().to_uppercase()).collect()
}

fn log_unknown_codes(catalog: &CountryCatalog, field: &str, codes: Option<&[String]>) {
    for code in codes.unwrap_or_default() {
        if catalog.find_by_code(code).is_none() {
            log::debug!("Ignoring unknown country code '{}' in {}", code, field);
        }
    }
}
