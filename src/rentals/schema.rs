//! Column names of the normalised rental frame.

/// Calendar date of the record, parsed to a polars `Date`.
pub const DATE: &str = "dateday";
/// Total rentals that day.
pub const COUNT: &str = "count";
pub const WINDSPEED: &str = "windspeed";

// Derived by the loader.
pub const YEAR: &str = "year";
pub const MONTH: &str = "month";
pub const WEEKDAY: &str = "weekday";

// Produced by aggregations.
pub const DAY_TYPE: &str = "day_type";

/// Columns that must be present in the source CSV.
pub const REQUIRED_COLUMNS: [&str; 3] = [DATE, COUNT, WINDSPEED];
