use thiserror::Error;

/// Conditions the filter-aggregate path reports instead of a result.
///
/// Neither is a transport failure: handlers turn both into placeholder
/// content (an HTML snippet or a JSON `error` field) with status 200.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// At least one dimension was given zero allowed values.
    #[error("Please select at least one filter.")]
    EmptySelection,

    /// Both dimensions are non-empty but no row matches them.
    #[error("No data matches your filters.")]
    NoMatch,
}

#[derive(Debug, Error)]
pub enum TipboardError {
    #[error("Dataset error: {0}")]
    Dataset(#[from] csv::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, TipboardError>;
