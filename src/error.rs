use thiserror::Error;

/// Top-level error type for centerline extraction.
#[derive(Debug, Error)]
pub enum BoxlineError {
    #[error(transparent)]
    Section(#[from] SectionError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to the section input: shape flag, dimensions, host records.
#[derive(Debug, Error)]
pub enum SectionError {
    #[error("unsupported section shape: {0}")]
    UnsupportedShape(String),

    #[error("dimension {name} = {value} must be a finite, non-negative length")]
    InvalidDimension { name: &'static str, value: f64 },

    #[error("dimension group {group} has {actual} entries, expected at least {expected}")]
    WrongLength {
        group: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("missing field in host record: {0}")]
    MissingField(String),

    #[error("section {0} is not a PSC box section")]
    NotBoxSection(String),

    #[error("section {0} not found")]
    NotFound(u32),

    #[error("malformed host record: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to operation parameters.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`BoxlineError`].
pub type Result<T> = std::result::Result<T, BoxlineError>;
