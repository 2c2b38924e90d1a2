use crate::domain::cake::CakeType;
use crate::domain::validation::ValidationErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Template error: {0}")]
    TemplateError(#[from] tera::Error),
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),
    #[error("No price for {cake_type} with {layers} layer(s)")]
    PricingFailure { cake_type: CakeType, layers: i64 },
    #[error("Unparseable order date: {0:?}")]
    DateParseFailure(String),
    #[error("Failed to persist order: {0}")]
    PersistenceFailure(#[source] Box<OrderError>),
    #[error("Internal error: {0}")]
    InternalError(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, OrderError>;
