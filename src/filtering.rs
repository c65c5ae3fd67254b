use crate::rentals::schema::{DATE, MONTH};
use crate::types::month_of_year::MonthOfYear;
use chrono::NaiveDate;
use polars::prelude::{col, lit, DataType, Expr, LazyFrame};

pub trait RentalFrameFilterExt {
    /// Filters a rental LazyFrame by a NaiveDate range (inclusive).
    /// Assumes the 'dateday' column is of polars `Date` type.
    ///
    /// # Returns
    /// A new `LazyFrame` with the filter applied. Potential errors
    /// occur during execution (e.g., `collect`).
    fn filter_dates(self, start_date: NaiveDate, end_date: NaiveDate) -> LazyFrame;

    /// Keeps only the records whose 'month' column is one of `months`.
    /// An empty slice keeps nothing.
    fn filter_months(self, months: &[MonthOfYear]) -> LazyFrame;

    /// Drops every row where any of `columns` is null.
    fn drop_missing(self, columns: &[&str]) -> LazyFrame;
}

impl RentalFrameFilterExt for LazyFrame {
    fn filter_dates(self, start_date: NaiveDate, end_date: NaiveDate) -> LazyFrame {
        self.filter(
            col(DATE)
                .cast(DataType::Date)
                .gt_eq(lit(start_date))
                .and(col(DATE).cast(DataType::Date).lt_eq(lit(end_date))),
        )
    }

    fn filter_months(self, months: &[MonthOfYear]) -> LazyFrame {
        let predicate = months
            .iter()
            .map(|month| col(MONTH).eq(lit(month.number() as i32)))
            .reduce(Expr::or)
            .unwrap_or(lit(false));
        self.filter(predicate)
    }

    fn drop_missing(self, columns: &[&str]) -> LazyFrame {
        let predicate = columns
            .iter()
            .map(|name| col(*name).is_not_null())
            .reduce(Expr::and)
            .unwrap_or(lit(true));
        self.filter(predicate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rentals::loader::RentalDataLoader;
    use crate::rentals::schema::{COUNT, WINDSPEED};
    use polars::prelude::*;

    fn sample_frame() -> Result<LazyFrame, Box<dyn std::error::Error>> {
        let df = df!(
            DATE => ["2011-01-15", "2011-05-03", "2011-12-31", "2012-01-01", "2012-05-20"],
            COUNT => [Some(100i64), None, Some(300), Some(400), Some(500)],
            WINDSPEED => [Some(0.1f64), Some(0.2), None, Some(0.4), Some(0.5)],
        )?;
        Ok(RentalDataLoader::from_frame(df)?.frame)
    }

    #[test]
    fn test_filter_dates_is_inclusive() -> Result<(), Box<dyn std::error::Error>> {
        let start = NaiveDate::from_ymd_opt(2011, 5, 3).unwrap();
        let end = NaiveDate::from_ymd_opt(2012, 1, 1).unwrap();
        let df = sample_frame()?.filter_dates(start, end).collect()?;
        assert_eq!(df.height(), 3);
        Ok(())
    }

    #[test]
    fn test_filter_months() -> Result<(), Box<dyn std::error::Error>> {
        let df = sample_frame()?
            .filter_months(&[MonthOfYear::Jan, MonthOfYear::May])
            .collect()?;
        assert_eq!(df.height(), 4);

        let none = sample_frame()?.filter_months(&[]).collect()?;
        assert_eq!(none.height(), 0);
        Ok(())
    }

    #[test]
    fn test_drop_missing() -> Result<(), Box<dyn std::error::Error>> {
        let df = sample_frame()?.drop_missing(&[WINDSPEED, COUNT]).collect()?;
        assert_eq!(df.height(), 3);

        let untouched = sample_frame()?.drop_missing(&[]).collect()?;
        assert_eq!(untouched.height(), 5);
        Ok(())
    }
}
