//! Error types for catalog loading and picker sessions

use thiserror::Error;

/// Failures while loading or querying the country catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Dataset is not valid JSON or an entry is missing a required field
    #[error("malformed country dataset: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    /// Localization table is not a JSON object of code -> name strings
    #[error("malformed localization table: {source}")]
    Localization {
        #[source]
        source: serde_json::Error,
    },

    /// Entry carries an ISO code that is not two ASCII letters
    #[error("dataset entry {index} has invalid country code '{code}'")]
    InvalidCode { index: usize, code: String },

    /// Code (or name / phone code) does not resolve to any record
    #[error("country not found: {0}")]
    NotFound(String),
}

/// Failures while configuring or driving a picker session
#[derive(Debug, Error)]
pub enum PickerError {
    /// `exclude` and `country_filter` were both supplied
    #[error("`exclude` and `country_filter` cannot be used together")]
    ConflictingFilters,

    /// Selection of a country that is not among the displayed rows
    #[error("country '{0}' is not displayed in this picker")]
    NotDisplayed(String),

    /// Row index that does not hold a selectable country
    #[error("row {0} is not a selectable country")]
    NoSuchRow(usize),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid picker options: {source}")]
    Config {
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize selection: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
