use thiserror::Error;

/// Unified error type for the entire portfolio-insights-core library.
///
/// Only structural problems with the data source are errors. Malformed cells
/// never surface here: they resolve to field defaults during loading.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Portfolio source has no header row")]
    MissingHeader,

    #[error("Portfolio source has a header but no data rows")]
    NoDataRows,

    #[error("Failed to read portfolio source '{source_name}': {message}")]
    Source {
        source_name: String,
        message: String,
    },
}

impl CoreError {
    /// Build a [`CoreError::Source`] for the named row source.
    pub fn unreadable(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        CoreError::Source {
            source_name: source_name.into(),
            message: message.into(),
        }
    }
}
