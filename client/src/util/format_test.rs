use time::macros::datetime;

use super::*;

// =============================================================
// Dates
// =============================================================

#[test]
fn short_and_long_dates_use_us_month_names() {
    let at = datetime!(2025-09-05 18:00:00);
    assert_eq!(short_date(at), "Sep 5, 2025");
    assert_eq!(long_date(at), "September 5, 2025");
    assert_eq!(month_short(at), "Sep");
}

#[test]
fn clock_time_is_twelve_hour_with_period() {
    assert_eq!(clock_time(datetime!(2025-11-20 18:00:00)), "06:00 PM");
    assert_eq!(clock_time(datetime!(2025-11-20 09:30:00)), "09:30 AM");
    assert_eq!(clock_time(datetime!(2025-11-20 00:15:00)), "12:15 AM");
    assert_eq!(clock_time(datetime!(2025-11-20 12:00:00)), "12:00 PM");
}

// =============================================================
// Ratings and initials
// =============================================================

#[test]
fn rating_has_one_decimal_or_dash() {
    assert_eq!(rating(Some(4.5)), "4.5");
    assert_eq!(rating(Some(4.0)), "4.0");
    assert_eq!(rating(None), "-");
}

#[test]
fn initial_is_uppercase_first_char() {
    assert_eq!(initial("maria"), "M");
    assert_eq!(initial("You"), "Y");
    assert_eq!(initial(""), "");
}
