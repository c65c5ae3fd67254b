mod aggregations;
mod dashboard;
mod error;
mod filtering;
mod frames;
mod render;
mod rentals;
mod types;

pub use dashboard::*;
pub use error::DashboardError;

pub use aggregations::day_type_average::*;
pub use aggregations::monthly_comparison::*;
pub use aggregations::windspeed::*;

pub use filtering::RentalFrameFilterExt;
pub use frames::rental_frame::RentalLazyFrame;

pub use render::charts::*;
pub use render::error::RenderError;
pub use render::page::{escape_html, ChartSection, DashboardPage, INDEX_FILE};

pub use rentals::error::RentalDataError;
pub use rentals::loader::RentalDataLoader;
pub use rentals::schema;

pub use types::day_type::{DayType, ParseDayTypeError};
pub use types::month_of_year::{MonthOfYear, ParseMonthError};
pub use types::year::{StartEndDate, Year};
