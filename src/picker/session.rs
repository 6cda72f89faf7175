// =============================================================================
// Picker Session - one opening of the picker
// =============================================================================

use std::cmp::Ordering;
use std::fmt;

use super::filter::{
    assemble, build_base_list, resolve_favorites, search_indices, CountryComparator, SearchQuery,
};
use super::options::PickerOptions;
use super::{PickerOutcome, Row};
use crate::error::PickerError;
use crate::l10n::CountryLocalizations;
use crate::reference::{Country, CountryCatalog};

/// Replaces the default row text
pub type RowLabel = Box<dyn Fn(&Country) -> String>;

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Lists not built yet
    Uninitialized,
    /// Loaded, search box empty: favorites visible
    Idle,
    /// Loaded, non-empty query: favorites hidden
    Searching,
}

/// Validated picker setup. Open it against a catalog to get a session.
pub struct CountryPicker {
    options: PickerOptions,
    comparator: Option<CountryComparator>,
    row_label: Option<RowLabel>,
}

impl fmt::Debug for CountryPicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountryPicker")
            .field("options", &self.options)
            .field("comparator", &self.comparator.is_some())
            .field("row_label", &self.row_label.is_some())
            .finish()
    }
}

impl CountryPicker {
    /// Fails with [`PickerError::ConflictingFilters`] when both `exclude` and
    /// `country_filter` are set
    pub fn new(options: PickerOptions) -> Result<Self, PickerError> {
        options.validate()?;
        Ok(Self {
            options,
            comparator: None,
            row_label: None,
        })
    }

    /// Sort the main list with `compare` (stable, applied after localization)
    pub fn with_comparator<F>(mut self, compare: F) -> Self
    where
        F: Fn(&Country, &Country) -> Ordering + 'static,
    {
        self.comparator = Some(Box::new(compare));
        self
    }

    pub fn with_row_label<F>(mut self, label: F) -> Self
    where
        F: Fn(&Country) -> String + 'static,
    {
        self.row_label = Some(Box::new(label));
        self
    }

    pub fn options(&self) -> &PickerOptions {
        &self.options
    }

    pub fn open<'a>(
        self,
        catalog: &'a CountryCatalog,
        l10n: &'a dyn CountryLocalizations,
    ) -> PickerSession<'a> {
        PickerSession {
            picker: self,
            catalog,
            l10n,
            state: SessionState::Uninitialized,
            countries: Vec::new(),
            favorites: Vec::new(),
            query: SearchQuery::default(),
            visible: Vec::new(),
        }
    }
}

/// Lists and search state for one picker opening
pub struct PickerSession<'a> {
    picker: CountryPicker,
    catalog: &'a CountryCatalog,
    l10n: &'a dyn CountryLocalizations,
    state: SessionState,
    /// Main list, World Wide included
    countries: Vec<Country>,
    favorites: Vec<Country>,
    query: SearchQuery,
    /// Indices into `countries` matching `query`
    visible: Vec<usize>,
}

impl fmt::Debug for PickerSession<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerSession")
            .field("picker", &self.picker)
            .field("state", &self.state)
            .field("countries", &self.countries.len())
            .field("favorites", &self.favorites.len())
            .field("query", &self.query)
            .field("visible", &self.visible.len())
            .finish()
    }
}

impl<'a> PickerSession<'a> {
    /// Build the lists. Only the first call does any work; returns whether
    /// this call did.
    pub fn load(&mut self) -> bool {
        if self.state != SessionState::Uninitialized {
            return false;
        }
        let options = &self.picker.options;
        let base = build_base_list(
            self.catalog,
            options,
            self.picker.comparator.as_deref(),
            self.l10n,
        );
        self.countries = assemble(base, options, self.l10n);
        self.favorites = resolve_favorites(self.catalog, options, self.l10n);
        self.visible = (0..self.countries.len()).collect();
        self.state = SessionState::Idle;

        log::info!(
            "Country picker loaded: {} countries, {} favorites",
            self.countries.len(),
            self.favorites.len()
        );
        true
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn options(&self) -> &PickerOptions {
        &self.picker.options
    }

    /// Search box changed. Loads the session first if needed.
    pub fn set_query(&mut self, raw: &str) {
        self.load();
        self.query = SearchQuery::new(raw);
        self.visible = search_indices(&self.countries, &self.query);
        self.state = if self.query.is_empty() {
            SessionState::Idle
        } else {
            SessionState::Searching
        };
        log::trace!(
            "Country search '{}': {} of {} match",
            self.query.as_str(),
            self.visible.len(),
            self.countries.len()
        );
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Main list entries matching the current query
    pub fn countries(&self) -> Vec<&Country> {
        self.visible.iter().map(|&i| &self.countries[i]).collect()
    }

    /// Resolved favorites, whether or not they are currently shown
    pub fn favorites(&self) -> &[Country] {
        &self.favorites
    }

    pub fn shows_favorites(&self) -> bool {
        self.state == SessionState::Idle && !self.favorites.is_empty()
    }

    /// Everything to render, top to bottom. Empty before [`Self::load`].
    pub fn rows(&self) -> Vec<Row<'_>> {
        let mut rows = Vec::with_capacity(self.favorites.len() + 1 + self.visible.len());
        if self.shows_favorites() {
            rows.extend(self.favorites.iter().map(Row::Favorite));
            rows.push(Row::Divider);
        }
        rows.extend(self.visible.iter().map(|&i| Row::Country(&self.countries[i])));
        rows
    }

    /// Row text: flag, localized name and, when enabled, the calling code
    pub fn label(&self, country: &Country) -> String {
        if let Some(label) = &self.picker.row_label {
            return label(country);
        }
        let mut text = format!(
            "{} {}",
            country.flag_emoji(),
            country.localized_name_or_default()
        );
        if self.picker.options.show_phone_code && !country.is_world_wide() {
            text.push_str(&format!(" (+{})", country.phone_code));
        }
        text
    }

    /// Pick a displayed country by ISO code, ending the session
    pub fn select(self, code: &str) -> Result<PickerOutcome, PickerError> {
        let code = code.trim().to_uppercase();
        let chosen = self
            .rows()
            .iter()
            .filter_map(|row| row.country())
            .find(|c| c.key() == code)
            .cloned();
        match chosen {
            Some(country) => Ok(self.finish(country)),
            None => Err(PickerError::NotDisplayed(code)),
        }
    }

    /// Pick the country at `index` in [`Self::rows`], ending the session
    pub fn select_row(self, index: usize) -> Result<PickerOutcome, PickerError> {
        let chosen = self
            .rows()
            .get(index)
            .and_then(|row| row.country())
            .cloned();
        match chosen {
            Some(country) => Ok(self.finish(country)),
            None => Err(PickerError::NoSuchRow(index)),
        }
    }

    /// Close without a selection
    pub fn dismiss(self) -> PickerOutcome {
        log::info!("Country picker dismissed");
        PickerOutcome::Dismissed
    }

    fn finish(self, country: Country) -> PickerOutcome {
        log::info!("Country selected: {} (+{})", country.key(), country.phone_code);
        PickerOutcome::Selected(country)
    }
}
