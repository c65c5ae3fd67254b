//! Builds the three dashboard charts with `plotlars` and writes them as standalone HTML.

use crate::aggregations::day_type_average::{entries_to_frame, DayTypeAverages};
use crate::aggregations::monthly_comparison::{MonthlyComparison, MONTH_LABEL};
use crate::aggregations::windspeed::{samples_to_frame, WindspeedSample};
use crate::render::error::RenderError;
use crate::rentals::schema::{COUNT, DAY_TYPE, MONTH, WINDSPEED};
use log::info;
use polars::prelude::*;
use plotlars::{Axis, BarPlot, Legend, Line, Plot, Rgb, ScatterPlot, Shape, Text, TimeSeriesPlot};
use std::path::{Path, PathBuf};

/// The charts shown on the dashboard, in page order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ChartKind {
    MonthlyTrend,
    WindspeedEffect,
    WeekdayWeekend,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [
        ChartKind::MonthlyTrend,
        ChartKind::WindspeedEffect,
        ChartKind::WeekdayWeekend,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            ChartKind::MonthlyTrend => "monthly_trend.html",
            ChartKind::WindspeedEffect => "windspeed_effect.html",
            ChartKind::WeekdayWeekend => "weekday_weekend.html",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ChartKind::MonthlyTrend => "Bike Rentals 2011 vs 2012",
            ChartKind::WindspeedEffect => "Effect of Windspeed on Rentals",
            ChartKind::WeekdayWeekend => "Weekday vs Weekend Rentals (May-September)",
        }
    }
}

/// Line chart of monthly totals, the later year drawn first.
pub fn monthly_trend_chart(comparison: &MonthlyComparison) -> Result<TimeSeriesPlot, RenderError> {
    let df = comparison.to_frame()?;
    let earlier = comparison.first.year.to_string();
    let later = comparison.second.year.to_string();

    Ok(TimeSeriesPlot::builder()
        .data(&df)
        .x(MONTH_LABEL)
        .y(later.as_str())
        .additional_series(vec![earlier.as_str()])
        .size(8)
        .colors(vec![Rgb(0, 128, 0), Rgb(0, 0, 255)])
        .lines(vec![Line::Solid, Line::Solid])
        .with_shape(true)
        .shapes(vec![Shape::Circle, Shape::Circle])
        .plot_title(Text::from(ChartKind::MonthlyTrend.title()).size(16))
        .legend_title(Text::from("Year"))
        .legend(&Legend::new().x(0.02).y(0.98))
        .x_title("Month")
        .y_title("Rentals")
        .x_axis(&Axis::new().show_grid(true))
        .y_axis(&Axis::new().show_grid(true))
        .build())
}

pub fn windspeed_chart(samples: &[WindspeedSample]) -> Result<ScatterPlot, RenderError> {
    let df = samples_to_frame(samples)?;

    Ok(ScatterPlot::builder()
        .data(&df)
        .x(WINDSPEED)
        .y(COUNT)
        .opacity(0.6)
        .size(8)
        .colors(vec![Rgb(0, 0, 255)])
        .shapes(vec![Shape::X])
        .plot_title(Text::from(ChartKind::WindspeedEffect.title()).size(16))
        .x_title("Windspeed")
        .y_title("Rentals")
        .x_axis(&Axis::new().show_grid(true))
        .y_axis(&Axis::new().show_grid(true))
        .build())
}

/// Frame for the grouped bar chart. plotlars takes its groups from `unique()`, which
/// follows the physical order of a categorical, so `month` is encoded as one whose
/// categories appear in calendar order.
fn bar_chart_frame(averages: &DayTypeAverages) -> PolarsResult<DataFrame> {
    let mut entries = averages.entries().to_vec();
    entries.sort_by_key(|entry| (entry.month, entry.day_type));

    entries_to_frame(&entries)?
        .lazy()
        .with_column(col(MONTH).cast(DataType::Categorical(None, CategoricalOrdering::Physical)))
        .collect()
}

/// Grouped bars of mean rentals, one group per day type, one bar per month in
/// calendar order.
pub fn weekday_weekend_chart(averages: &DayTypeAverages) -> Result<BarPlot, RenderError> {
    let df = bar_chart_frame(averages)?;

    Ok(BarPlot::builder()
        .data(&df)
        .labels(DAY_TYPE)
        .values(COUNT)
        .group(MONTH)
        // seaborn "Set2"
        .colors(vec![
            Rgb(102, 194, 165),
            Rgb(252, 141, 98),
            Rgb(141, 160, 203),
            Rgb(231, 138, 195),
            Rgb(166, 216, 84),
        ])
        .plot_title(Text::from(ChartKind::WeekdayWeekend.title()).size(16))
        .x_title("Day Type")
        .y_title("Average Rentals")
        .legend_title(Text::from("Month"))
        .legend(&Legend::new().x(0.9).y(0.98))
        .y_axis(&Axis::new().show_grid(true))
        .build())
}

/// Writes `chart` to `dir` under the file name of `kind`.
///
/// # Errors
///
/// [`RenderError::ChartMissing`] if the file is absent after writing.
pub fn write_chart(chart: impl Plot, kind: ChartKind, dir: &Path) -> Result<PathBuf, RenderError> {
    let path = dir.join(kind.file_name());
    chart.write_html(path.to_string_lossy().to_string());

    if !path.is_file() {
        return Err(RenderError::ChartMissing(path));
    }
    info!("Wrote {:?} chart to {:?}", kind, path);
    Ok(path)
}
