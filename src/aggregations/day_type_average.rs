//! Average daily rentals per (day type, month).

use crate::frames::rental_frame::RentalLazyFrame;
use crate::rentals::error::RentalDataError;
use crate::rentals::schema::{COUNT, DAY_TYPE, MONTH, WEEKDAY};
use crate::types::day_type::{DayType, FIRST_WEEKEND_ISO_DAY};
use crate::types::month_of_year::MonthOfYear;
use log::debug;
use polars::prelude::*;

/// May through September, the window shown by the weekday/weekend chart.
pub const SUMMER_MONTHS: [MonthOfYear; 5] = [
    MonthOfYear::May,
    MonthOfYear::Jun,
    MonthOfYear::Jul,
    MonthOfYear::Aug,
    MonthOfYear::Sep,
];

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DayTypeMonthlyAverage {
    pub day_type: DayType,
    pub month: MonthOfYear,
    /// `None` when every record of the group has a missing count.
    pub mean_count: Option<f64>,
}

/// Means sorted by day type, then calendar month.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DayTypeAverages {
    entries: Vec<DayTypeMonthlyAverage>,
}

impl DayTypeAverages {
    pub fn new(mut entries: Vec<DayTypeMonthlyAverage>) -> Self {
        entries.sort_by_key(|entry| (entry.day_type, entry.month));
        Self { entries }
    }

    pub fn entries(&self) -> &[DayTypeMonthlyAverage] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mean for one combination. `None` if the combination had no records.
    pub fn get(&self, day_type: DayType, month: MonthOfYear) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.day_type == day_type && entry.month == month)
            .and_then(|entry| entry.mean_count)
    }

    /// Restricts the result to `months`, e.g. [`SUMMER_MONTHS`].
    pub fn for_months(&self, months: &[MonthOfYear]) -> DayTypeAverages {
        DayTypeAverages {
            entries: self
                .entries
                .iter()
                .filter(|entry| months.contains(&entry.month))
                .copied()
                .collect(),
        }
    }

    /// Long frame with `day_type`, `month` and `count` columns, in entry order.
    pub fn to_frame(&self) -> PolarsResult<DataFrame> {
        entries_to_frame(&self.entries)
    }
}

pub(crate) fn entries_to_frame(entries: &[DayTypeMonthlyAverage]) -> PolarsResult<DataFrame> {
    let day_types: Vec<&str> = entries.iter().map(|e| e.day_type.label()).collect();
    let months: Vec<&str> = entries.iter().map(|e| e.month.abbreviation()).collect();
    let means: Vec<Option<f64>> = entries.iter().map(|e| e.mean_count).collect();
    DataFrame::new(vec![
        Column::new(DAY_TYPE.into(), day_types),
        Column::new(MONTH.into(), months),
        Column::new(COUNT.into(), means),
    ])
}

/// `Weekend` from [`FIRST_WEEKEND_ISO_DAY`] on, `Weekday` otherwise.
fn day_type_expr() -> Expr {
    when(col(WEEKDAY).gt_eq(lit(FIRST_WEEKEND_ISO_DAY as i32)))
        .then(lit(DayType::Weekend.label()))
        .otherwise(lit(DayType::Weekday.label()))
}

/// Labels each record Weekday/Weekend and averages `count` per (day type, month).
///
/// Every month present in `rentals` is aggregated; callers wanting a window use
/// [`DayTypeAverages::for_months`]. Combinations without records are absent.
pub fn day_type_averages(rentals: &RentalLazyFrame) -> Result<DayTypeAverages, RentalDataError> {
    let grouped = rentals
        .frame
        .clone()
        .filter(col(MONTH).is_not_null())
        .with_column(day_type_expr().alias(DAY_TYPE))
        .group_by([col(DAY_TYPE), col(MONTH)])
        .agg([col(COUNT).mean().alias(COUNT)])
        .collect()?;

    let day_types = grouped.column(DAY_TYPE)?.str()?;
    let months = grouped.column(MONTH)?.i32()?;
    let means = grouped.column(COUNT)?.f64()?;

    let mut entries = Vec::with_capacity(grouped.height());
    for ((day_type, month), mean_count) in day_types
        .into_iter()
        .zip(months.into_iter())
        .zip(means.into_iter())
    {
        let (Some(day_type), Some(month)) = (day_type, month) else {
            continue;
        };
        let day_type = day_type
            .parse::<DayType>()
            .map_err(|e| RentalDataError::UnexpectedData {
                column: DAY_TYPE.to_string(),
                message: e.to_string(),
            })?;
        let month = u32::try_from(month)
            .ok()
            .and_then(MonthOfYear::from_number)
            .ok_or_else(|| RentalDataError::UnexpectedData {
                column: MONTH.to_string(),
                message: format!("{month} is not a month number"),
            })?;
        entries.push(DayTypeMonthlyAverage {
            day_type,
            month,
            mean_count,
        });
    }

    debug!("{} (day type, month) averages", entries.len());
    Ok(DayTypeAverages::new(entries))
}
