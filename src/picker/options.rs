//! Picker options
//!
//! Plain data describing one picker session. Loadable from JSON so hosts can
//! keep picker setups in config files; closures (comparator, row label) are
//! attached separately on [`super::CountryPicker`].

use serde::{Deserialize, Serialize};

use crate::error::PickerError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerOptions {
    /// Show calling codes next to names; also keeps every calling-code
    /// variant of a country instead of collapsing them
    pub show_phone_code: bool,
    /// ISO codes to hide
    pub exclude: Option<Vec<String>>,
    /// ISO codes to show exclusively (cannot be combined with `exclude`)
    pub country_filter: Option<Vec<String>>,
    /// ISO codes shown as a leading group while no search is active
    pub favorite: Option<Vec<String>>,
    /// Prepend the "World Wide" entry
    pub show_world_wide: bool,
    /// Host hint: render the search field
    pub show_search: bool,
    /// Host hint: focus the search field when the picker opens
    pub search_autofocus: bool,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            show_phone_code: false,
            exclude: None,
            country_filter: None,
            favorite: None,
            show_world_wide: false,
            show_search: true,
            search_autofocus: false,
        }
    }
}

impl PickerOptions {
    pub fn from_json(json: &str) -> Result<Self, PickerError> {
        let options: Self =
            serde_json::from_str(json).map_err(|source| PickerError::Config { source })?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), PickerError> {
        if self.exclude.is_some() && self.country_filter.is_some() {
            return Err(PickerError::ConflictingFilters);
        }
        Ok(())
    }

    /// Favorites were requested (non-empty list)
    pub fn has_favorites(&self) -> bool {
        self.favorite.as_ref().is_some_and(|f| !f.is_empty())
    }
}
