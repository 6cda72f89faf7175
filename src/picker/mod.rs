// =============================================================================
// Country Picker - list composition and session state
// =============================================================================
//
// A picker session turns the catalog into what the host renders:
//
//   [favorites] [divider] [World Wide] [countries...]
//
// Favorites and the divider are only shown while the search box is empty.
// Session lifecycle:
//
//   Uninitialized --load()--> Idle <--set_query()--> Searching
//
// load() runs once; later calls are no-ops. A session ends by being consumed
// through select() / select_row() / dismiss(), so it yields at most one
// outcome.

mod filter;
mod options;
mod session;

pub use filter::{
    apply_code_rules, assemble, build_base_list, dedup_by_code, resolve_favorites,
    CountryComparator, SearchQuery,
};
pub use options::PickerOptions;
pub use session::{CountryPicker, PickerSession, RowLabel, SessionState};

use crate::reference::Country;

/// One line of the rendered picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row<'a> {
    Favorite(&'a Country),
    /// Separates the favorites group from the main list
    Divider,
    Country(&'a Country),
}

impl<'a> Row<'a> {
    pub fn country(&self) -> Option<&'a Country> {
        match *self {
            Row::Favorite(c) | Row::Country(c) => Some(c),
            Row::Divider => None,
        }
    }
}

/// How a picker session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    Selected(Country),
    Dismissed,
}

impl PickerOutcome {
    pub fn selected(&self) -> Option<&Country> {
        match self {
            PickerOutcome::Selected(c) => Some(c),
            PickerOutcome::Dismissed => None,
        }
    }
}
