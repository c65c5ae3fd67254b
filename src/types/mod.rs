pub mod day_type;
pub mod month_of_year;
pub mod year;
