use thiserror::Error;

#[derive(Error, Debug)]
pub enum MtlError {
    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}
