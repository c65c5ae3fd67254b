use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to create output directory '{0}'")]
    OutputDirCreation(PathBuf, #[source] std::io::Error),

    #[error("Failed to write dashboard page '{0}'")]
    PageWrite(PathBuf, #[source] std::io::Error),

    #[error("Failed to copy logo '{0}'")]
    LogoCopy(PathBuf, #[source] std::io::Error),

    #[error("Chart file '{0}' was not written")]
    ChartMissing(PathBuf),

    #[error("Failed building chart data: {0}")]
    ChartData(#[from] PolarsError),
}
