//! Display formatting for dates, ratings, and avatars.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::PrimitiveDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const SHORT_DATE: &[BorrowedFormatItem<'_>] = format_description!("[month repr:short] [day padding:none], [year]");
const LONG_DATE: &[BorrowedFormatItem<'_>] = format_description!("[month repr:long] [day padding:none], [year]");
const CLOCK_TIME: &[BorrowedFormatItem<'_>] = format_description!("[hour repr:12]:[minute] [period]");
const MONTH_SHORT: &[BorrowedFormatItem<'_>] = format_description!("[month repr:short]");

fn render(at: PrimitiveDateTime, format: &[BorrowedFormatItem<'_>]) -> String {
    at.format(format).unwrap_or_else(|e| {
        leptos::logging::warn!("failed to format {at}: {e}");
        String::new()
    })
}

/// "Sep 15, 2025"
pub fn short_date(at: PrimitiveDateTime) -> String {
    render(at, SHORT_DATE)
}

/// "September 15, 2025"
pub fn long_date(at: PrimitiveDateTime) -> String {
    render(at, LONG_DATE)
}

/// "06:00 PM"
pub fn clock_time(at: PrimitiveDateTime) -> String {
    render(at, CLOCK_TIME)
}

/// "Sep", for the date badge on the detail page.
pub fn month_short(at: PrimitiveDateTime) -> String {
    render(at, MONTH_SHORT)
}

/// One decimal place, or "-" for unrated locations.
pub fn rating(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_owned(), |r| format!("{r:.1}"))
}

/// Upper-cased first character of a username for avatar bubbles.
pub fn initial(username: &str) -> String {
    username.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
}
