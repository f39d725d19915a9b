//! Fixed-locale date formatting for the passport page.
//!
//! All dates render in day/month/year order: the birth date as `10/12/1815`,
//! the issued and expiry dates as `29 August 2026`. There is no locale
//! negotiation; the convention is baked in. A birth date that does not parse
//! renders as the literal `Invalid Date` rather than failing the view.

use chrono::{Datelike as _, Months, NaiveDate};

/// Shown in place of a birth date that could not be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// How long a passport stays "valid", in years.
pub const VALIDITY_YEARS: u32 = 10;

/// Parses a `YYYY-MM-DD` intake value. The form does not force the format,
/// so this is where malformed input is caught.
pub fn parse_birth_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Birth date as `dd/mm/YYYY`, or [`INVALID_DATE`] if unparseable.
pub fn format_birth_date(raw: &str) -> String {
    match parse_birth_date(raw) {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => INVALID_DATE.to_owned(),
    }
}

/// Issued/expiry style: zero-padded day, month spelled out, e.g. `05 March 2026`.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%d %B %Y").to_string()
}

/// Expiry is ten years after issue, same day and month. A 29 February issue
/// date clamps to 28 February when the target year is not a leap year.
pub fn expiry_date(issued: NaiveDate) -> NaiveDate {
    issued
        .with_year(issued.year() + VALIDITY_YEARS as i32)
        .or_else(|| issued.checked_add_months(Months::new(VALIDITY_YEARS * 12)))
        .unwrap_or(issued)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_birth_date() {
        assert_eq!(format_birth_date("1815-12-10"), "10/12/1815");
        assert_eq!(format_birth_date("1990-01-05"), "05/01/1990");
        assert_eq!(format_birth_date(" 1990-01-05 "), "05/01/1990");
    }

    #[test]
    fn test_malformed_birth_date_degrades() {
        assert_eq!(format_birth_date("not-a-date"), INVALID_DATE);
        assert_eq!(format_birth_date("1990-13-40"), INVALID_DATE);
        assert_eq!(format_birth_date(""), INVALID_DATE);
    }

    #[test]
    fn test_format_long_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 29).expect("valid date");
        assert_eq!(format_long_date(date), "29 August 2026");
        let date = NaiveDate::from_ymd_opt(2026, 3, 5).expect("valid date");
        assert_eq!(format_long_date(date), "05 March 2026");
    }

    #[test]
    fn test_expiry_is_ten_years_out() {
        let issued = NaiveDate::from_ymd_opt(2026, 8, 29).expect("valid date");
        let expiry = expiry_date(issued);
        assert_eq!(expiry.year(), issued.year() + 10);
        assert_eq!(expiry.month(), issued.month());
        assert_eq!(expiry.day(), issued.day());
    }

    #[test]
    fn test_expiry_clamps_leap_day() {
        let issued = NaiveDate::from_ymd_opt(2024, 2, 29).expect("valid leap day");
        let expiry = expiry_date(issued);
        assert_eq!(expiry, NaiveDate::from_ymd_opt(2034, 2, 28).expect("valid date"));
    }
}
