use crate::types::TableKind;
use thiserror::Error;

pub type InsightResult<T> = Result<T, InsightError>;

#[derive(Error, Debug)]
pub enum InsightError {
    #[error("required input table not supplied: {0}")]
    MissingInput(TableKind),

    #[error("table `{table}` is missing required column `{column}`")]
    Schema { table: TableKind, column: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl InsightError {
    /// True for failures that abort the whole run before or during ingest.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            InsightError::MissingInput(_) | InsightError::Schema { .. }
        )
    }
}
