use crate::types::year::Year;
use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RentalDataError {
    #[error("Failed to read rental CSV '{0}'")]
    CsvRead(PathBuf, #[source] PolarsError),

    #[error("Required column '{column}' not found in '{source_name}'")]
    MissingColumn { source_name: String, column: String },

    #[error("Failed to parse column '{column}' of '{source_name}'")]
    ColumnParse {
        source_name: String,
        column: String,
        #[source]
        source: PolarsError,
    },

    #[error("Year {0} cannot be represented as a calendar date range")]
    YearOutOfRange(Year),

    #[error("Failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),

    #[error("Unexpected value in column '{column}': {message}")]
    UnexpectedData { column: String, message: String },
}
