// Country Picker Library
// Catalog, localization hooks and list composition for country pickers.
// Rendering is left to the host UI.

pub mod error;
pub mod l10n;
pub mod picker;
pub mod reference;

pub use error::{CatalogError, PickerError};
pub use l10n::{CountryLocalizations, LocalizationTable, NoLocalizations};
pub use picker::{CountryPicker, PickerOptions, PickerOutcome, PickerSession, Row, SessionState};
pub use reference::{Country, CountryCatalog};
