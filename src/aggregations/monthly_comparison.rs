//! Monthly rental totals for a year, and the 2011 vs 2012 comparison built from them.

use crate::frames::rental_frame::RentalLazyFrame;
use crate::rentals::error::RentalDataError;
use crate::rentals::schema::{COUNT, MONTH};
use crate::types::month_of_year::MonthOfYear;
use crate::types::year::Year;
use log::debug;
use polars::prelude::*;

/// Years compared by the monthly trend chart.
pub const COMPARED_YEARS: (Year, Year) = (Year(2011), Year(2012));

/// Label column of [`MonthlyComparison::to_frame`].
pub const MONTH_LABEL: &str = "month";

/// Summed rental counts of one year, one slot per calendar month.
///
/// A month without any record is `None` rather than `0`, so charts leave a gap
/// instead of drawing a drop to zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlySeries {
    pub year: Year,
    totals: [Option<i64>; 12],
}

impl MonthlySeries {
    pub fn new(year: Year, totals: [Option<i64>; 12]) -> Self {
        Self { year, totals }
    }

    pub fn get(&self, month: MonthOfYear) -> Option<i64> {
        self.totals[month.index()]
    }

    /// Always 12.
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.iter().all(Option::is_none)
    }

    /// Months in calendar order with their totals.
    pub fn iter(&self) -> impl Iterator<Item = (MonthOfYear, Option<i64>)> + '_ {
        MonthOfYear::ALL
            .into_iter()
            .zip(self.totals.iter().copied())
    }

    pub fn values(&self) -> Vec<Option<i64>> {
        self.totals.to_vec()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyComparison {
    pub first: MonthlySeries,
    pub second: MonthlySeries,
}

impl MonthlyComparison {
    /// Wide frame for charting: a `month` label column followed by one column per year,
    /// named after the year. Missing months stay null.
    pub fn to_frame(&self) -> PolarsResult<DataFrame> {
        let labels: Vec<&str> = MonthOfYear::ALL
            .iter()
            .map(|month| month.abbreviation())
            .collect();
        DataFrame::new(vec![
            Column::new(MONTH_LABEL.into(), labels),
            Column::new(self.first.year.to_string().into(), self.first.values()),
            Column::new(self.second.year.to_string().into(), self.second.values()),
        ])
    }
}

/// Sums `count` per calendar month of `year`.
///
/// The result always has twelve entries, Jan through Dec. A year without records
/// yields an all-missing series, not an error.
pub fn monthly_totals(
    rentals: &RentalLazyFrame,
    year: Year,
) -> Result<MonthlySeries, RentalDataError> {
    let grouped = rentals
        .get_for_year(year)?
        .frame
        .group_by([col(MONTH)])
        .agg([col(COUNT).sum().alias(COUNT)])
        .collect()?;

    let months = grouped.column(MONTH)?.i32()?;
    let sums = grouped.column(COUNT)?.i64()?;

    let mut totals = [None; 12];
    for (month, sum) in months.into_iter().zip(sums.into_iter()) {
        let Some(month) = month else {
            continue;
        };
        let month = u32::try_from(month)
            .ok()
            .and_then(MonthOfYear::from_number)
            .ok_or_else(|| RentalDataError::UnexpectedData {
                column: MONTH.to_string(),
                message: format!("{month} is not a month number"),
            })?;
        totals[month.index()] = sum;
    }

    debug!(
        "Monthly totals for {}: {} of 12 months present",
        year,
        totals.iter().filter(|t| t.is_some()).count()
    );

    Ok(MonthlySeries::new(year, totals))
}

/// Monthly totals of 2011 and 2012, side by side.
pub fn monthly_comparison(rentals: &RentalLazyFrame) -> Result<MonthlyComparison, RentalDataError> {
    let (first, second) = COMPARED_YEARS;
    Ok(MonthlyComparison {
        first: monthly_totals(rentals, first)?,
        second: monthly_totals(rentals, second)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rentals::loader::RentalDataLoader;
    use crate::rentals::schema::{DATE, WINDSPEED};

    fn rentals(
        dates: &[&str],
        counts: &[Option<i64>],
    ) -> Result<RentalLazyFrame, Box<dyn std::error::Error>> {
        let windspeed = vec![Some(0.2f64); dates.len()];
        let df = df!(
            DATE => dates,
            COUNT => counts,
            WINDSPEED => windspeed,
        )?;
        Ok(RentalDataLoader::from_frame(df)?)
    }

    #[test]
    fn test_monthly_totals_sums_per_month() -> Result<(), Box<dyn std::error::Error>> {
        let rentals = rentals(
            &["2011-01-01", "2011-01-02", "2011-03-15", "2012-01-01"],
            &[Some(985), Some(801), Some(1000), Some(2294)],
        )?;

        let series = monthly_totals(&rentals, Year(2011))?;
        assert_eq!(series.len(), 12);
        assert_eq!(series.get(MonthOfYear::Jan), Some(1786));
        assert_eq!(series.get(MonthOfYear::Feb), None);
        assert_eq!(series.get(MonthOfYear::Mar), Some(1000));
        assert_eq!(series.get(MonthOfYear::Dec), None);
        Ok(())
    }

    #[test]
    fn test_monthly_totals_has_twelve_entries_in_calendar_order(
    ) -> Result<(), Box<dyn std::error::Error>> {
        let rentals = rentals(&["2012-11-05", "2012-02-29"], &[Some(5), Some(7)])?;
        let series = monthly_totals(&rentals, Year(2012))?;

        let months: Vec<MonthOfYear> = series.iter().map(|(month, _)| month).collect();
        assert_eq!(months, MonthOfYear::ALL.to_vec());
        assert_eq!(series.values().len(), 12);
        Ok(())
    }

    #[test]
    fn test_only_2011_rows_leaves_2012_all_missing() -> Result<(), Box<dyn std::error::Error>> {
        let rentals = rentals(
            &["2011-04-01", "2011-08-12", "2011-12-31"],
            &[Some(10), Some(20), Some(30)],
        )?;

        let comparison = monthly_comparison(&rentals)?;
        assert_eq!(comparison.first.year, Year(2011));
        assert_eq!(comparison.second.year, Year(2012));
        assert!(comparison.second.is_empty());
        assert!(comparison.second.iter().all(|(_, total)| total.is_none()));
        assert_eq!(comparison.first.get(MonthOfYear::Aug), Some(20));
        Ok(())
    }

    #[test]
    fn test_aggregating_twice_gives_identical_sums() -> Result<(), Box<dyn std::error::Error>> {
        let rentals = rentals(
            &["2011-05-01", "2011-05-02", "2012-05-01"],
            &[Some(3), Some(4), Some(5)],
        )?;
        let first_run = monthly_comparison(&rentals)?;
        let second_run = monthly_comparison(&rentals)?;
        assert_eq!(first_run, second_run);
        Ok(())
    }

    #[test]
    fn test_missing_counts_do_not_hide_the_month() -> Result<(), Box<dyn std::error::Error>> {
        let rentals = rentals(&["2011-06-01", "2011-06-02"], &[Some(40), None])?;
        let series = monthly_totals(&rentals, Year(2011))?;
        assert_eq!(series.get(MonthOfYear::Jun), Some(40));
        Ok(())
    }

    #[test]
    fn test_to_frame_layout() -> Result<(), Box<dyn std::error::Error>> {
        let rentals = rentals(&["2011-02-01", "2012-03-01"], &[Some(1), Some(2)])?;
        let df = monthly_comparison(&rentals)?.to_frame()?;

        assert_eq!(df.shape(), (12, 3));
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(names, vec!["month", "2011", "2012"]);

        let labels = df.column(MONTH_LABEL)?.str()?;
        assert_eq!(labels.get(0), Some("Jan"));
        assert_eq!(labels.get(11), Some("Dec"));

        let totals_2011 = df.column("2011")?.i64()?;
        assert_eq!(totals_2011.get(0), None);
        assert_eq!(totals_2011.get(1), Some(1));
        assert_eq!(totals_2011.null_count(), 11);
        Ok(())
    }
}
