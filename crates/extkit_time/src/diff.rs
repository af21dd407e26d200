//! SQL-style date differences.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDateTime};
use extkit_foundation::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The unit a [`date_diff`] is measured in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DatePart {
    /// Calendar years (`year`, `yy`, `yyyy`).
    Year,
    /// Calendar quarters (`quarter`, `qq`, `q`).
    Quarter,
    /// Calendar months (`month`, `mm`, `m`).
    Month,
    /// Whole elapsed days (`day`, `dd`, `d`).
    Day,
    /// Whole elapsed weeks (`week`, `wk`, `ww`).
    Week,
    /// Whole elapsed hours (`hour`, `hh`).
    Hour,
    /// Whole elapsed minutes (`minute`, `mi`, `n`).
    Minute,
    /// Whole elapsed seconds (`second`, `ss`, `s`).
    Second,
    /// Whole elapsed milliseconds (`millisecond`, `ms`).
    Millisecond,
}

impl DatePart {
    /// Every part, from largest to smallest.
    pub const ALL: [DatePart; 9] = [
        DatePart::Year,
        DatePart::Quarter,
        DatePart::Month,
        DatePart::Week,
        DatePart::Day,
        DatePart::Hour,
        DatePart::Minute,
        DatePart::Second,
        DatePart::Millisecond,
    ];

    /// Returns the canonical name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            DatePart::Year => "year",
            DatePart::Quarter => "quarter",
            DatePart::Month => "month",
            DatePart::Day => "day",
            DatePart::Week => "week",
            DatePart::Hour => "hour",
            DatePart::Minute => "minute",
            DatePart::Second => "second",
            DatePart::Millisecond => "millisecond",
        }
    }
}

impl fmt::Display for DatePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DatePart {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let part = match s.trim().to_lowercase().as_str() {
            "year" | "yy" | "yyyy" => DatePart::Year,
            "quarter" | "qq" | "q" => DatePart::Quarter,
            "month" | "mm" | "m" => DatePart::Month,
            "day" | "dd" | "d" => DatePart::Day,
            "week" | "wk" | "ww" => DatePart::Week,
            "hour" | "hh" => DatePart::Hour,
            "minute" | "mi" | "n" => DatePart::Minute,
            "second" | "ss" | "s" => DatePart::Second,
            "millisecond" | "ms" => DatePart::Millisecond,
            _ => {
                tracing::trace!(part = s, "unknown date part");
                return Err(Error::parse(s, "date part"));
            }
        };
        Ok(part)
    }
}

/// Returns `end - start` measured in `part`.
///
/// Year, quarter and month count calendar boundaries crossed, ignoring the
/// time of day: 31 January to 1 February is one month. The other parts count
/// whole elapsed units, truncated toward zero. The result is negative when
/// `end` precedes `start`.
#[must_use]
pub fn date_diff(start: NaiveDateTime, end: NaiveDateTime, part: DatePart) -> i64 {
    let years = i64::from(end.year() - start.year());
    let start_month = i64::from(start.month0());
    let end_month = i64::from(end.month0());
    let elapsed = end - start;
    match part {
        DatePart::Year => years,
        DatePart::Quarter => years * 4 + end_month / 3 - start_month / 3,
        DatePart::Month => years * 12 + end_month - start_month,
        DatePart::Day => elapsed.num_days(),
        DatePart::Week => elapsed.num_days() / 7,
        DatePart::Hour => elapsed.num_hours(),
        DatePart::Minute => elapsed.num_minutes(),
        DatePart::Second => elapsed.num_seconds(),
        DatePart::Millisecond => elapsed.num_milliseconds(),
    }
}
