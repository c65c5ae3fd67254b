use chrono::{Datelike, NaiveDate, Weekday};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// ISO number (Monday = 1) of Saturday; it and Sunday make up the weekend.
pub const FIRST_WEEKEND_ISO_DAY: u32 = 6;

/// Binary classification of a calendar day.
///
/// Saturday and Sunday are [`DayType::Weekend`], every other day is a [`DayType::Weekday`].
/// `Weekday` sorts before `Weekend`, matching the alphabetical order of the labels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub enum DayType {
    Weekday,
    Weekend,
}

impl DayType {
    pub const ALL: [DayType; 2] = [DayType::Weekday, DayType::Weekend];

    pub fn from_weekday(weekday: Weekday) -> Self {
        if weekday.number_from_monday() >= FIRST_WEEKEND_ISO_DAY {
            DayType::Weekend
        } else {
            DayType::Weekday
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_weekday(date.weekday())
    }

    /// Classifies an ISO weekday number (Monday = 1 .. Sunday = 7).
    pub fn from_iso_weekday(number: u32) -> Option<Self> {
        match number {
            1..=7 if number >= FIRST_WEEKEND_ISO_DAY => Some(DayType::Weekend),
            1..=7 => Some(DayType::Weekday),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DayType::Weekday => "Weekday",
            DayType::Weekend => "Weekend",
        }
    }
}

impl Display for DayType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDayTypeError(pub String);

impl Display for ParseDayTypeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is neither 'Weekday' nor 'Weekend'", self.0)
    }
}

impl std::error::Error for ParseDayTypeError {}

impl FromStr for DayType {
    type Err = ParseDayTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Weekday" => Ok(DayType::Weekday),
            "Weekend" => Ok(DayType::Weekend),
            other => Err(ParseDayTypeError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_day_of_a_week_is_classified() {
        // 2012-05-28 is a Monday
        let monday = NaiveDate::from_ymd_opt(2012, 5, 28).unwrap();
        let labels: Vec<DayType> = monday
            .iter_days()
            .take(7)
            .map(DayType::from_date)
            .collect();
        assert_eq!(
            labels,
            vec![
                DayType::Weekday,
                DayType::Weekday,
                DayType::Weekday,
                DayType::Weekday,
                DayType::Weekday,
                DayType::Weekend,
                DayType::Weekend,
            ]
        );
    }

    #[test]
    fn test_iso_weekday_numbers() {
        assert_eq!(DayType::from_iso_weekday(5), Some(DayType::Weekday));
        assert_eq!(DayType::from_iso_weekday(6), Some(DayType::Weekend));
        assert_eq!(DayType::from_iso_weekday(7), Some(DayType::Weekend));
        assert_eq!(DayType::from_iso_weekday(0), None);
        assert_eq!(DayType::from_iso_weekday(8), None);
    }

    #[test]
    fn test_label_round_trips_through_from_str() {
        for day_type in DayType::ALL {
            assert_eq!(day_type.label().parse::<DayType>(), Ok(day_type));
        }
        assert!("Holiday".parse::<DayType>().is_err());
    }
}
