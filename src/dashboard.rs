//! Entry point tying the loader, the aggregations and the renderer together.
//!
//! Every call to [`Dashboard::run`] reads the CSV again and recomputes all results;
//! nothing is kept between runs.

use crate::aggregations::day_type_average::{day_type_averages, DayTypeAverages, SUMMER_MONTHS};
use crate::aggregations::monthly_comparison::{monthly_comparison, MonthlyComparison};
use crate::aggregations::windspeed::{windspeed_correlation, windspeed_effect, WindspeedSample};
use crate::error::DashboardError;
use crate::frames::rental_frame::RentalLazyFrame;
use crate::render::charts::{
    monthly_trend_chart, weekday_weekend_chart, windspeed_chart, write_chart, ChartKind,
};
use crate::render::error::RenderError;
use crate::render::page::{ChartSection, DashboardPage};
use crate::rentals::loader::RentalDataLoader;
use bon::bon;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_PATH: &str = "clean_data.csv";
pub const DEFAULT_LOGO_PATH: &str = "logo.png";
pub const DEFAULT_OUTPUT_DIR: &str = "dashboard";
pub const DEFAULT_TITLE: &str = "Baim: Bike Sharing Dashboard";

const WELCOME: &str = "Welcome to the bike rental analysis dashboard!";
const INTRODUCTION: &str = "This dashboard analyses bike rental data in depth: \
the monthly trend, the influence of windspeed, and how rentals differ between \
weekdays and weekends.";
const MONTHLY_CAPTION: &str = "Bike rentals in 2012 were generally higher than in 2011. \
Almost every month of 2012 saw more rentals than the same month a year earlier. Both \
years follow a similar shape, rising sharply towards the middle of the year, with June \
2012 clearly above June 2011. Cycling grew in popularity from one year to the next.";
const WINDSPEED_CAPTION: &str = "Windspeed and the number of rentals in 2011 show a weak, \
negative correlation. Windier days see slightly fewer rentals, but the effect is small \
and windspeed does not explain rental volume to any significant degree.";
const WEEKDAY_WEEKEND_CAPTION: &str = "From May to September, weekend rentals were \
generally higher than weekday rentals, except in July and August. May, June and \
September favour the weekend, while July and August see more rentals on weekdays, \
showing that the weekly pattern shifts over the summer.";
const FOOTER: &str = "Copyright \u{a9} 2024 by Muhammad Ibrahim";

/// Where the dashboard reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub logo_path: PathBuf,
    pub output_dir: PathBuf,
    pub title: String,
}

/// Results of the three aggregations, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub monthly: MonthlyComparison,
    pub windspeed: Vec<WindspeedSample>,
    pub windspeed_correlation: Option<f64>,
    /// Already restricted to [`SUMMER_MONTHS`].
    pub day_types: DayTypeAverages,
}

/// Files written by [`Dashboard::render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDashboard {
    pub index: PathBuf,
    pub charts: Vec<PathBuf>,
    pub logo: Option<PathBuf>,
}

/// # Examples
///
/// ```no_run
/// use bikeshare_dashboard::Dashboard;
///
/// # fn main() -> Result<(), bikeshare_dashboard::DashboardError> {
/// let dashboard = Dashboard::builder()
///     .data_path("data/clean_data.csv")
///     .output_dir("target/dashboard")
///     .build();
/// let rendered = dashboard.run()?;
/// println!("Open {}", rendered.index.display());
/// # Ok(())
/// # }
/// ```
pub struct Dashboard {
    config: DashboardConfig,
}

#[bon]
impl Dashboard {
    /// Creates a dashboard. Every setting is optional:
    ///
    /// * `data_path`: rental CSV, default `clean_data.csv`.
    /// * `logo_path`: sidebar image, default `logo.png`. A missing logo is not an error.
    /// * `output_dir`: where the page and charts go, default `dashboard`.
    /// * `title`: sidebar and page title, default `Baim: Bike Sharing Dashboard`.
    #[builder]
    pub fn new(
        #[builder(into)] data_path: Option<PathBuf>,
        #[builder(into)] logo_path: Option<PathBuf>,
        #[builder(into)] output_dir: Option<PathBuf>,
        #[builder(into)] title: Option<String>,
    ) -> Self {
        Self {
            config: DashboardConfig {
                data_path: data_path.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH)),
                logo_path: logo_path.unwrap_or_else(|| PathBuf::from(DEFAULT_LOGO_PATH)),
                output_dir: output_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
                title: title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            },
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Loads, aggregates and renders in one go.
    pub fn run(&self) -> Result<RenderedDashboard, DashboardError> {
        let rentals = self.load()?;
        let data = Self::compute(&rentals)?;
        self.render(&data)
    }

    pub fn load(&self) -> Result<RentalLazyFrame, DashboardError> {
        Ok(RentalDataLoader::new(&self.config.data_path).load()?)
    }

    /// Runs the three aggregations independently over the same frame.
    pub fn compute(rentals: &RentalLazyFrame) -> Result<DashboardData, DashboardError> {
        let monthly = monthly_comparison(rentals)?;
        let windspeed = windspeed_effect(rentals)?;
        let day_types = day_type_averages(rentals)?.for_months(&SUMMER_MONTHS);

        info!(
            "Aggregated {} windspeed samples and {} day type averages",
            windspeed.len(),
            day_types.len()
        );

        Ok(DashboardData {
            windspeed_correlation: windspeed_correlation(&windspeed),
            monthly,
            windspeed,
            day_types,
        })
    }

    /// Writes the three charts, the logo and `index.html` into the output directory.
    pub fn render(&self, data: &DashboardData) -> Result<RenderedDashboard, DashboardError> {
        let dir = &self.config.output_dir;
        fs::create_dir_all(dir).map_err(|e| RenderError::OutputDirCreation(dir.clone(), e))?;

        let charts = vec![
            write_chart(
                monthly_trend_chart(&data.monthly)?,
                ChartKind::MonthlyTrend,
                dir,
            )?,
            write_chart(
                windspeed_chart(&data.windspeed)?,
                ChartKind::WindspeedEffect,
                dir,
            )?,
            write_chart(
                weekday_weekend_chart(&data.day_types)?,
                ChartKind::WeekdayWeekend,
                dir,
            )?,
        ];

        let logo = copy_logo(&self.config.logo_path, dir)?;
        let logo_file = logo
            .as_ref()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().to_string());

        let index = self.page(data, logo_file).write(dir)?;
        Ok(RenderedDashboard {
            index,
            charts,
            logo,
        })
    }

    fn page(&self, data: &DashboardData, logo_file: Option<String>) -> DashboardPage {
        let windspeed_caption = match data.windspeed_correlation {
            Some(r) => format!("{WINDSPEED_CAPTION} (Pearson r = {r:.3})"),
            None => WINDSPEED_CAPTION.to_string(),
        };

        DashboardPage {
            title: self.config.title.clone(),
            welcome: WELCOME.to_string(),
            introduction: INTRODUCTION.to_string(),
            logo_file,
            sections: vec![
                ChartSection {
                    heading: "Monthly Rental Trend".to_string(),
                    chart: ChartKind::MonthlyTrend,
                    caption: MONTHLY_CAPTION.to_string(),
                },
                ChartSection {
                    heading: "Effect of Windspeed on Rentals".to_string(),
                    chart: ChartKind::WindspeedEffect,
                    caption: windspeed_caption,
                },
                ChartSection {
                    heading: "Weekday vs Weekend Rentals (May-September)".to_string(),
                    chart: ChartKind::WeekdayWeekend,
                    caption: WEEKDAY_WEEKEND_CAPTION.to_string(),
                },
            ],
            footer: FOOTER.to_string(),
        }
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Dashboard::builder().build()
    }
}

/// Copies the logo next to the page. A missing logo only logs a warning.
fn copy_logo(logo_path: &Path, dir: &Path) -> Result<Option<PathBuf>, RenderError> {
    if !logo_path.is_file() {
        warn!(
            "Logo {:?} not found, rendering sidebar without it",
            logo_path
        );
        return Ok(None);
    }
    let Some(file_name) = logo_path.file_name() else {
        return Ok(None);
    };
    let target = dir.join(file_name);
    fs::copy(logo_path, &target).map_err(|e| RenderError::LogoCopy(logo_path.to_path_buf(), e))?;
    Ok(Some(target))
}
