//! Helpers for dashboard statistics.

use chrono::NaiveDate;

/// Format string for monthly trend labels, e.g. `Jan 2025`.
pub const MONTH_LABEL_FORMAT: &str = "%b %Y";

/// Label a month bucket (any date inside the month) as `Mon YYYY`.
pub fn month_label(month: NaiveDate) -> String {
    month.format(MONTH_LABEL_FORMAT).to_string()
}
