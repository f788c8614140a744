use std::path::PathBuf;

use crate::store::RowIndex;

/// Errors raised while building the recommender.
///
/// Everything here is a startup error except `RowOutOfBounds`, which only
/// shows up on the fallible query path and is swallowed by
/// `Recommender::get_recommendations`.
#[derive(thiserror::Error, Debug)]
pub enum RecommenderError {
    #[error("Data source not found: {}", .0.display())]
    DataSourceMissing(PathBuf),

    #[error("Data source is empty: {}", .0.display())]
    EmptyDataSource(PathBuf),

    #[error("Data source is missing required column: {0}")]
    MissingColumn(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Row {row} is out of bounds for a corpus of {len} items")]
    RowOutOfBounds { row: RowIndex, len: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, RecommenderError>;
