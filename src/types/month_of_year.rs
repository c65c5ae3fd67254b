//! Calendar months, independent of any particular year.

use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A month of the year, ordered by calendar position (January first).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub enum MonthOfYear {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl MonthOfYear {
    /// All twelve months in calendar order.
    pub const ALL: [MonthOfYear; 12] = [
        MonthOfYear::Jan,
        MonthOfYear::Feb,
        MonthOfYear::Mar,
        MonthOfYear::Apr,
        MonthOfYear::May,
        MonthOfYear::Jun,
        MonthOfYear::Jul,
        MonthOfYear::Aug,
        MonthOfYear::Sep,
        MonthOfYear::Oct,
        MonthOfYear::Nov,
        MonthOfYear::Dec,
    ];

    /// Month number, 1 for January through 12 for December.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    /// Zero-based position, usable as an index into a 12 element array.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_number(number: u32) -> Option<Self> {
        match number {
            1..=12 => Some(Self::ALL[(number - 1) as usize]),
            _ => None,
        }
    }

    /// Three letter English abbreviation, as produced by `strftime("%b")`.
    pub fn abbreviation(self) -> &'static str {
        match self {
            MonthOfYear::Jan => "Jan",
            MonthOfYear::Feb => "Feb",
            MonthOfYear::Mar => "Mar",
            MonthOfYear::Apr => "Apr",
            MonthOfYear::May => "May",
            MonthOfYear::Jun => "Jun",
            MonthOfYear::Jul => "Jul",
            MonthOfYear::Aug => "Aug",
            MonthOfYear::Sep => "Sep",
            MonthOfYear::Oct => "Oct",
            MonthOfYear::Nov => "Nov",
            MonthOfYear::Dec => "Dec",
        }
    }
}

impl Display for MonthOfYear {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMonthError(pub String);

impl Display for ParseMonthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a month abbreviation", self.0)
    }
}

impl std::error::Error for ParseMonthError {}

impl FromStr for MonthOfYear {
    type Err = ParseMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|month| month.abbreviation().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseMonthError(s.to_string()))
    }
}
