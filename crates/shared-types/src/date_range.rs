//! Last-modified date ranges and the quick options that stand in for them.
//!
//! Every function that depends on "now" takes the current date explicitly;
//! [`today`] is the only place the wall clock is read.

use chrono::{Datelike, Days, Local, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Date format used on the wire and in the date pickers.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Bounds on an item's last-modified date. Either side may be open.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastModifiedDateRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_after: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_before: Option<String>,
}

/// The quick options offered by the date filter, in enumeration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateRangeOption {
    #[default]
    All,
    Today,
    LastSevenDays,
    LastMonth,
    ThisYear,
}

pub const ALL_DATE_RANGE_OPTIONS: &[DateRangeOption] = &[
    DateRangeOption::All,
    DateRangeOption::Today,
    DateRangeOption::LastSevenDays,
    DateRangeOption::LastMonth,
    DateRangeOption::ThisYear,
];

impl DateRangeOption {
    pub fn display_name(&self) -> &'static str {
        match self {
            DateRangeOption::All => "All",
            DateRangeOption::Today => "Today",
            DateRangeOption::LastSevenDays => "Last seven days",
            DateRangeOption::LastMonth => "Last month",
            DateRangeOption::ThisYear => "This year",
        }
    }

    /// Parse a display name back into an option, falling back to `All`.
    pub fn from_display_name(s: &str) -> Self {
        ALL_DATE_RANGE_OPTIONS
            .iter()
            .copied()
            .find(|o| o.display_name() == s)
            .unwrap_or_default()
    }

    /// Lower bound this option stands for, or `None` for no bound.
    pub fn lower_bound(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            DateRangeOption::All => None,
            DateRangeOption::Today => Some(today),
            DateRangeOption::LastSevenDays => today.checked_sub_days(Days::new(7)),
            // chrono clamps to the last day of the shorter month (Mar 31 -> Feb 28/29)
            DateRangeOption::LastMonth => today.checked_sub_months(Months::new(1)),
            DateRangeOption::ThisYear => NaiveDate::from_ymd_opt(today.year(), 1, 1),
        }
    }
}

/// The current local date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` string, ignoring anything after the date part.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let date_part = s.get(..10).unwrap_or(s);
    NaiveDate::parse_from_str(date_part, DATE_FORMAT).ok()
}

/// Each quick option paired with its lower bound as a date string.
pub fn date_range_options(today: NaiveDate) -> Vec<(DateRangeOption, Option<String>)> {
    ALL_DATE_RANGE_OPTIONS
        .iter()
        .map(|option| (*option, option.lower_bound(today).map(format_date)))
        .collect()
}

/// Range for a quick option. `modified_before` is always open.
pub fn option_to_range(option: DateRangeOption, today: NaiveDate) -> LastModifiedDateRange {
    LastModifiedDateRange {
        modified_after: option.lower_bound(today).map(format_date),
        modified_before: None,
    }
}

/// Quick option matching a range.
///
/// Returns `All` for a missing range or lower bound, and for any lower bound
/// that is not exactly one of the quick options' values as of `today`. A
/// custom range therefore reads back as `All`.
pub fn range_to_option(range: Option<&LastModifiedDateRange>, today: NaiveDate) -> DateRangeOption {
    let Some(after) = range
        .and_then(|r| r.modified_after.as_deref())
        .filter(|a| !a.is_empty())
    else {
        return DateRangeOption::All;
    };

    date_range_options(today)
        .into_iter()
        .find(|(_, bound)| bound.as_deref() == Some(after))
        .map(|(option, _)| option)
        .unwrap_or(DateRangeOption::All)
}
