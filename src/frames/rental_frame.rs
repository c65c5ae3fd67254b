//! Contains the `RentalLazyFrame` structure for lazy operations on daily bike rental records.

use crate::filtering::RentalFrameFilterExt;
use crate::rentals::error::RentalDataError;
use crate::types::month_of_year::MonthOfYear;
use crate::types::year::Year;
use polars::prelude::{DataFrame, Expr, LazyFrame, PolarsResult};

/// Represents a row of the cleaned rental dataset.
/// (Note: not used by the lazy pipeline, this documents the normalised schema
/// produced by [`crate::RentalDataLoader`]).
#[allow(dead_code)]
struct RentalRecord {
    dateday: chrono::NaiveDate,
    count: Option<i64>,
    windspeed: Option<f64>,
    year: i32,
    month: i32,   // 1..=12
    weekday: i32, // ISO, Monday = 1
}

/// A wrapper around a Polars `LazyFrame` holding normalised rental records.
///
/// Every aggregation in this crate takes a `&RentalLazyFrame` and clones the
/// underlying plan, so the same frame can be aggregated any number of times.
///
/// Instances are obtained via [`crate::RentalDataLoader::load`] or
/// [`crate::RentalDataLoader::from_frame`].
#[derive(Clone)]
pub struct RentalLazyFrame {
    /// The underlying Polars LazyFrame containing the rental data.
    pub frame: LazyFrame,
}

impl RentalLazyFrame {
    /// Wraps a `LazyFrame` that already follows the normalised rental schema.
    pub fn new(frame: LazyFrame) -> Self {
        Self { frame }
    }

    /// Returns a new `RentalLazyFrame` with `predicate` applied lazily.
    /// The original frame is unchanged.
    pub fn filter(&self, predicate: Expr) -> RentalLazyFrame {
        RentalLazyFrame::new(self.frame.clone().filter(predicate))
    }

    /// Keeps only the records dated within `year`.
    ///
    /// # Errors
    ///
    /// Returns [`RentalDataError::YearOutOfRange`] if the year has no valid date range.
    pub fn get_for_year(&self, year: Year) -> Result<RentalLazyFrame, RentalDataError> {
        let period = year
            .date_period()
            .ok_or(RentalDataError::YearOutOfRange(year))?;
        Ok(RentalLazyFrame::new(
            self.frame.clone().filter_dates(period.start, period.end),
        ))
    }

    /// Keeps only the records whose month is one of `months`, in any year.
    pub fn get_for_months(&self, months: &[MonthOfYear]) -> RentalLazyFrame {
        RentalLazyFrame::new(self.frame.clone().filter_months(months))
    }

    pub fn collect(&self) -> PolarsResult<DataFrame> {
        self.frame.clone().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rentals::loader::RentalDataLoader;
    use crate::rentals::schema::{COUNT, DATE, MONTH, WINDSPEED, YEAR};
    use polars::prelude::*;

    fn rentals() -> Result<RentalLazyFrame, Box<dyn std::error::Error>> {
        let df = df!(
            DATE => ["2011-06-30", "2011-07-01", "2012-07-01", "2012-12-31"],
            COUNT => [10i64, 20, 30, 40],
            WINDSPEED => [0.1f64, 0.2, 0.3, 0.4],
        )?;
        Ok(RentalDataLoader::from_frame(df)?)
    }

    #[test]
    fn test_get_for_year_keeps_boundaries() -> Result<(), Box<dyn std::error::Error>> {
        let df = rentals()?.get_for_year(Year(2012))?.collect()?;
        assert_eq!(df.height(), 2);
        let years = df.column(YEAR)?.i32()?;
        assert!(years.into_iter().all(|y| y == Some(2012)));
        Ok(())
    }

    #[test]
    fn test_get_for_year_out_of_range() -> Result<(), Box<dyn std::error::Error>> {
        let result = rentals()?.get_for_year(Year(i32::MAX));
        assert!(matches!(result, Err(RentalDataError::YearOutOfRange(_))));
        Ok(())
    }

    #[test]
    fn test_get_for_months_spans_years() -> Result<(), Box<dyn std::error::Error>> {
        let df = rentals()?.get_for_months(&[MonthOfYear::Jul]).collect()?;
        assert_eq!(df.height(), 2);
        let months = df.column(MONTH)?.i32()?;
        assert!(months.into_iter().all(|m| m == Some(7)));
        Ok(())
    }

    #[test]
    fn test_filter_does_not_modify_original() -> Result<(), Box<dyn std::error::Error>> {
        let rentals = rentals()?;
        let busy = rentals.filter(col(COUNT).gt(lit(25i64)));
        assert_eq!(busy.collect()?.height(), 2);
        assert_eq!(rentals.collect()?.height(), 4);
        Ok(())
    }
}
