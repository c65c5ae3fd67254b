use crate::filtering::RentalFrameFilterExt;
use crate::frames::rental_frame::RentalLazyFrame;
use crate::rentals::error::RentalDataError;
use crate::rentals::schema::{COUNT, WINDSPEED};
use crate::types::year::Year;
use log::debug;
use polars::prelude::*;

/// Year plotted by the windspeed scatter.
pub const WINDSPEED_YEAR: Year = Year(2011);

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WindspeedSample {
    pub windspeed: f64,
    pub count: i64,
}

/// `(windspeed, count)` pairs of every record in `year` where both values are present.
///
/// Pairs keep the order of the input. No aggregation is performed.
pub fn windspeed_samples(
    rentals: &RentalLazyFrame,
    year: Year,
) -> Result<Vec<WindspeedSample>, RentalDataError> {
    let df = rentals
        .get_for_year(year)?
        .frame
        .select([col(WINDSPEED), col(COUNT)])
        .drop_missing(&[WINDSPEED, COUNT])
        .collect()?;

    let windspeeds = df.column(WINDSPEED)?.f64()?;
    let counts = df.column(COUNT)?.i64()?;

    let samples: Vec<WindspeedSample> = windspeeds
        .into_iter()
        .zip(counts.into_iter())
        .filter_map(|(windspeed, count)| {
            Some(WindspeedSample {
                windspeed: windspeed?,
                count: count?,
            })
        })
        .collect();

    debug!("{} windspeed samples for {}", samples.len(), year);
    Ok(samples)
}

/// Windspeed samples of 2011.
pub fn windspeed_effect(rentals: &RentalLazyFrame) -> Result<Vec<WindspeedSample>, RentalDataError> {
    windspeed_samples(rentals, WINDSPEED_YEAR)
}

/// Frame with `windspeed` and `count` columns, for the scatter chart.
pub fn samples_to_frame(samples: &[WindspeedSample]) -> PolarsResult<DataFrame> {
    let windspeeds: Vec<f64> = samples.iter().map(|s| s.windspeed).collect();
    let counts: Vec<i64> = samples.iter().map(|s| s.count).collect();
    DataFrame::new(vec![
        Column::new(WINDSPEED.into(), windspeeds),
        Column::new(COUNT.into(), counts),
    ])
}

/// Pearson correlation between windspeed and rental count.
///
/// `None` with fewer than two samples or when either variable is constant.
pub fn windspeed_correlation(samples: &[WindspeedSample]) -> Option<f64> {
    if samples.len() < 2 {
        return None;
    }
    let n = samples.len() as f64;
    let mean_x = samples.iter().map(|s| s.windspeed).sum::<f64>() / n;
    let mean_y = samples.iter().map(|s| s.count as f64).sum::<f64>() / n;

    let (mut covariance, mut variance_x, mut variance_y) = (0.0, 0.0, 0.0);
    for sample in samples {
        let dx = sample.windspeed - mean_x;
        let dy = sample.count as f64 - mean_y;
        covariance += dx * dy;
        variance_x += dx * dx;
        variance_y += dy * dy;
    }

    let denominator = (variance_x * variance_y).sqrt();
    if denominator == 0.0 {
        return None;
    }
    Some(covariance / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rentals::loader::RentalDataLoader;
    use crate::rentals::schema::DATE;

    fn rentals() -> Result<RentalLazyFrame, Box<dyn std::error::Error>> {
        let df = df!(
            DATE => ["2011-01-01", "2011-01-02", "2011-01-03", "2011-01-04", "2012-01-01"],
            COUNT => [Some(985i64), Some(801), None, Some(1562), Some(2294)],
            WINDSPEED => [Some(0.16f64), None, Some(0.25), Some(0.19), Some(0.30)],
        )?;
        Ok(RentalDataLoader::from_frame(df)?)
    }

    #[test]
    fn test_samples_exclude_missing_values() -> Result<(), Box<dyn std::error::Error>> {
        let samples = windspeed_effect(&rentals()?)?;
        assert_eq!(
            samples,
            vec![
                WindspeedSample {
                    windspeed: 0.16,
                    count: 985
                },
                WindspeedSample {
                    windspeed: 0.19,
                    count: 1562
                },
            ]
        );
        Ok(())
    }

    #[test]
    fn test_missing_windspeed_is_excluded_even_with_count() -> Result<(), Box<dyn std::error::Error>>
    {
        let samples = windspeed_effect(&rentals()?)?;
        assert!(samples.iter().all(|s| s.count != 801));
        Ok(())
    }

    #[test]
    fn test_samples_never_exceed_year_subset() -> Result<(), Box<dyn std::error::Error>> {
        let rentals = rentals()?;
        let year_rows = rentals.get_for_year(WINDSPEED_YEAR)?.collect()?.height();
        let samples = windspeed_effect(&rentals)?;
        assert!(samples.len() <= year_rows);
        Ok(())
    }

    #[test]
    fn test_no_rows_for_year_gives_empty_result() -> Result<(), Box<dyn std::error::Error>> {
        let samples = windspeed_samples(&rentals()?, Year(2013))?;
        assert!(samples.is_empty());
        assert_eq!(samples_to_frame(&samples)?.height(), 0);
        Ok(())
    }

    #[test]
    fn test_samples_to_frame() -> Result<(), Box<dyn std::error::Error>> {
        let samples = windspeed_effect(&rentals()?)?;
        let df = samples_to_frame(&samples)?;
        assert_eq!(df.shape(), (2, 2));
        assert_eq!(df.column(COUNT)?.i64()?.get(1), Some(1562));
        Ok(())
    }

    #[test]
    fn test_correlation() {
        let perfect: Vec<WindspeedSample> = (0..5)
            .map(|i| WindspeedSample {
                windspeed: i as f64 * 0.1,
                count: 1000 - i * 100,
            })
            .collect();
        let r = windspeed_correlation(&perfect).unwrap();
        assert!((r + 1.0).abs() < 1e-9, "Expected -1.0, got {}", r);

        assert_eq!(windspeed_correlation(&perfect[..1]), None);

        let constant = vec![
            WindspeedSample {
                windspeed: 0.2,
                count: 10,
            };
            3
        ];
        assert_eq!(windspeed_correlation(&constant), None);
    }
}
