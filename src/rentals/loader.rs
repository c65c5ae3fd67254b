use crate::frames::rental_frame::RentalLazyFrame;
use crate::rentals::error::RentalDataError;
use crate::rentals::schema::{COUNT, DATE, MONTH, REQUIRED_COLUMNS, WEEKDAY, WINDSPEED, YEAR};
use log::{debug, info, warn};
use polars::prelude::*;
use std::path::{Path, PathBuf};

const IN_MEMORY_SOURCE: &str = "<in-memory frame>";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Reads the cleaned rental CSV and turns it into a typed [`RentalLazyFrame`].
///
/// The CSV is read eagerly and fully normalised before returning, so a missing file,
/// a missing column or an unparseable value fails here rather than halfway through
/// rendering.
pub struct RentalDataLoader {
    path: PathBuf,
}

impl RentalDataLoader {
    pub fn new(path: &Path) -> RentalDataLoader {
        RentalDataLoader {
            path: path.to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the CSV file (with header) into a normalised frame.
    ///
    /// # Errors
    ///
    /// * [`RentalDataError::CsvRead`] if the file cannot be opened or parsed as CSV.
    /// * [`RentalDataError::MissingColumn`] if `dateday`, `count` or `windspeed` is absent.
    /// * [`RentalDataError::ColumnParse`] if a date is not in `YYYY-MM-DD` form, or a
    ///   present `count` or `windspeed` value is not a number.
    pub fn load(&self) -> Result<RentalLazyFrame, RentalDataError> {
        info!("Loading rental records from {:?}", self.path);

        let df = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(self.path.clone()))
            .map_err(|e| RentalDataError::CsvRead(self.path.clone(), e))?
            .finish()
            .map_err(|e| RentalDataError::CsvRead(self.path.clone(), e))?;

        info!(
            "Read {} rows and {} columns from {:?}",
            df.height(),
            df.width(),
            self.path
        );

        normalise(df, &self.path.display().to_string())
    }

    /// Normalises a frame that is already in memory, with the same column contract
    /// as the CSV file.
    pub fn from_frame(df: DataFrame) -> Result<RentalLazyFrame, RentalDataError> {
        normalise(df, IN_MEMORY_SOURCE)
    }
}

fn normalise(df: DataFrame, source_name: &str) -> Result<RentalLazyFrame, RentalDataError> {
    for column in REQUIRED_COLUMNS {
        if df.column(column).is_err() {
            warn!("Column '{}' missing from {}", column, source_name);
            return Err(RentalDataError::MissingColumn {
                source_name: source_name.to_string(),
                column: column.to_string(),
            });
        }
    }

    let date_expr = if df.column(DATE)?.dtype() == &DataType::Date {
        col(DATE)
    } else {
        col(DATE).str().to_date(StrptimeOptions {
            format: Some(DATE_FORMAT.into()),
            strict: true,
            exact: true,
            ..Default::default()
        })
    };

    // One conversion at a time, so a failure names the column that caused it
    let conversions = [
        (DATE, date_expr),
        (COUNT, col(COUNT).strict_cast(DataType::Int64)),
        (WINDSPEED, col(WINDSPEED).strict_cast(DataType::Float64)),
    ];
    let mut typed = df;
    for (column, expr) in conversions {
        typed = typed
            .lazy()
            .with_column(expr.alias(column))
            .collect()
            .map_err(|e| {
                warn!("Column '{}' of {} could not be converted: {}", column, source_name, e);
                RentalDataError::ColumnParse {
                    source_name: source_name.to_string(),
                    column: column.to_string(),
                    source: e,
                }
            })?;
    }

    let derived = typed
        .lazy()
        .with_columns([
            col(DATE).dt().year().cast(DataType::Int32).alias(YEAR),
            col(DATE).dt().month().cast(DataType::Int32).alias(MONTH),
            col(DATE).dt().weekday().cast(DataType::Int32).alias(WEEKDAY),
        ])
        .collect()?;

    debug!(
        "Normalised {} rental records from {} ({} columns)",
        derived.height(),
        source_name,
        derived.width()
    );

    Ok(RentalLazyFrame::new(derived.lazy()))
}
