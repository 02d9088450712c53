//! Rupiah and Indonesian date formatting shared by the record tables.

use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use time::macros::format_description;
use time::{Date, Month, OffsetDateTime, Weekday};

use crate::error::KeuanganError;

pub const CURRENCY_PREFIX: &str = "Rp";

/// Group the digits of `n` in threes with `.` as the separator.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let head = match digits.len() % 3 {
        0 => 3,
        h => h,
    };
    std::iter::once(&digits[..head])
        .chain((head..digits.len()).step_by(3).map(|i| &digits[i..i + 3]))
        .join(".")
}

/// `1234567` -> `1.234.567`
pub fn format_number(value: i64) -> String {
    let grouped = group_thousands(value.unsigned_abs());
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// `1500000` -> `Rp 1.500.000`, `-2500` -> `-Rp 2.500`
pub fn format_rupiah(amount: i64) -> String {
    let grouped = group_thousands(amount.unsigned_abs());
    if amount < 0 {
        format!("-{} {}", CURRENCY_PREFIX, grouped)
    } else {
        format!("{} {}", CURRENCY_PREFIX, grouped)
    }
}

/// Rounds to whole rupiah first; NaN formats as zero.
pub fn format_rupiah_decimal(amount: f64) -> String {
    format_rupiah(amount.round() as i64)
}

/// Parse a user-entered amount such as `Rp 1.500.000`, `-Rp2.500`,
/// `1500000` or `1.500.000,75`. Any decimal part is dropped.
pub fn parse_rupiah(input: &str) -> Result<i64, KeuanganError> {
    lazy_static! {
        static ref RE_AMOUNT: Regex = Regex::new(
            r"(?i)^\s*(-)?\s*(?:rp\.?)?\s*(-)?\s*(\d{1,3}(?:[.\s]\d{3})+|\d+)(?:,(\d+))?\s*$"
        )
        .unwrap();
    }

    let invalid = || KeuanganError::InvalidAmount(input.to_string());
    let caps = RE_AMOUNT.captures(input).ok_or_else(invalid)?;

    let negative = match (caps.get(1), caps.get(2)) {
        (Some(_), Some(_)) => return Err(invalid()),
        (None, None) => false,
        _ => true,
    };
    let digits: String = caps
        .get(3)
        .ok_or_else(invalid)?
        .as_str()
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    let magnitude: i128 = digits.parse().map_err(|_| invalid())?;
    let value = if negative { -magnitude } else { magnitude };

    log::debug!("Parsed amount '{}' -> {}", input.trim(), value);
    i64::try_from(value).map_err(|_| invalid())
}

pub fn month_name(month: Month) -> &'static str {
    match month {
        Month::January => "Januari",
        Month::February => "Februari",
        Month::March => "Maret",
        Month::April => "April",
        Month::May => "Mei",
        Month::June => "Juni",
        Month::July => "Juli",
        Month::August => "Agustus",
        Month::September => "September",
        Month::October => "Oktober",
        Month::November => "November",
        Month::December => "Desember",
    }
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Monday => "Senin",
        Weekday::Tuesday => "Selasa",
        Weekday::Wednesday => "Rabu",
        Weekday::Thursday => "Kamis",
        Weekday::Friday => "Jumat",
        Weekday::Saturday => "Sabtu",
        Weekday::Sunday => "Minggu",
    }
}

/// `19 Oktober 2026`
pub fn format_date(date: Date) -> String {
    format!("{} {} {}", date.day(), month_name(date.month()), date.year())
}

/// `19/10/2026`
pub fn format_date_short(date: Date) -> String {
    format!("{:02}/{:02}/{}", date.day(), u8::from(date.month()), date.year())
}

/// `Senin, 19 Oktober 2026`
pub fn format_date_with_weekday(date: Date) -> String {
    format!("{}, {}", weekday_name(date.weekday()), format_date(date))
}

/// `19 Oktober 2026 14:05`
pub fn format_datetime(datetime: OffsetDateTime) -> String {
    format!(
        "{} {:02}:{:02}",
        format_date(datetime.date()),
        datetime.hour(),
        datetime.minute()
    )
}

/// Parse an ISO `YYYY-MM-DD` date as stored by the backend.
pub fn parse_date(input: &str) -> Result<Date, KeuanganError> {
    let format = format_description!("[year]-[month]-[day]");
    Ok(Date::parse(input.trim(), &format)?)
}

/// One-line footer for a list of transactions
pub fn format_entries_summary(count: usize, total: i64) -> String {
    if count == 0 {
        return "Tidak ada transaksi".to_string();
    }
    format!("{} transaksi, total {}", count, format_rupiah(total))
}
