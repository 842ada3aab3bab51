//! Reporting periods
//!
//! Weekly, monthly and yearly windows used to total expenses. Weeks start on
//! Monday; all ranges are inclusive on both ends.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar window size for spending totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    Week,
    #[default]
    Month,
    Year,
}

impl ReportPeriod {
    /// The inclusive `(start, end)` range of this period containing `date`
    pub fn range_containing(&self, date: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self {
            Self::Week => {
                let start =
                    date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
                (start, start + Duration::days(6))
            }
            Self::Month => {
                let start = date.with_day(1).unwrap_or(date);
                let next_month = if date.month() == 12 {
                    NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
                } else {
                    NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
                };
                let end = next_month.and_then(|d| d.pred_opt()).unwrap_or(date);
                (start, end)
            }
            Self::Year => {
                let start = NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date);
                let end = NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(date);
                (start, end)
            }
        }
    }

    /// Human-readable label for the period containing `date`
    pub fn label(&self, date: NaiveDate) -> String {
        let (start, _) = self.range_containing(date);
        match self {
            Self::Week => format!("Week of {}", start.format("%b %-d, %Y")),
            Self::Month => start.format("%B %Y").to_string(),
            Self::Year => start.format("%Y").to_string(),
        }
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Week => write!(f, "weekly"),
            Self::Month => write!(f, "monthly"),
            Self::Year => write!(f, "yearly"),
        }
    }
}

impl FromStr for ReportPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "week" | "weekly" => Ok(Self::Week),
            "month" | "monthly" => Ok(Self::Month),
            "year" | "yearly" => Ok(Self::Year),
            other => Err(format!(
                "Invalid period '{}'. Use week, month, or year.",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_starts_monday() {
        // 2024-03-28 is a Thursday
        let (start, end) = ReportPeriod::Week.range_containing(date(2024, 3, 28));
        assert_eq!(start, date(2024, 3, 25));
        assert_eq!(end, date(2024, 3, 31));
    }

    #[test]
    fn test_month_range() {
        assert_eq!(
            ReportPeriod::Month.range_containing(date(2024, 2, 10)),
            (date(2024, 2, 1), date(2024, 2, 29))
        );
        assert_eq!(
            ReportPeriod::Month.range_containing(date(2024, 12, 31)),
            (date(2024, 12, 1), date(2024, 12, 31))
        );
    }

    #[test]
    fn test_year_range() {
        assert_eq!(
            ReportPeriod::Year.range_containing(date(2024, 7, 4)),
            (date(2024, 1, 1), date(2024, 12, 31))
        );
    }

    #[test]
    fn test_parse_and_label() {
        assert_eq!("Weekly".parse::<ReportPeriod>().unwrap(), ReportPeriod::Week);
        assert!("daily".parse::<ReportPeriod>().is_err());
        assert_eq!(ReportPeriod::Month.label(date(2024, 3, 28)), "March 2024");
    }
}
