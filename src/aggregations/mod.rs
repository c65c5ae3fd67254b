pub mod day_type_average;
pub mod monthly_comparison;
pub mod windspeed;
