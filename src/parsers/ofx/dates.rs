use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;

// 14 digits followed by a bracketed GMT offset and zone label, the way some
// banks stamp DTPOSTED: 20240115143022[-3:BRT]. Fractional offsets like
// [+5.5:IST] occur too.
static BRACKETED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{14})\[([+-]?\d{1,2}(?:\.\d{1,2})?)(?::([A-Za-z0-9/_+-]+))?\]$")
        .expect("bracketed date pattern")
});

/// Turns the format's assorted date encodings into a UTC instant.
///
/// Candidates are tried in order, first hit wins: bracketed-offset form,
/// fixed-width numerics (most specific first, read as UTC), delimited
/// year-first dates, and a generic ISO-8601 parse as a last resort.
/// Impossible calendar dates are rejected, never clamped. Returns `None`
/// for anything irrecoverable — the caller owns the fallback policy.
pub fn parse_statement_date(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let value = raw?.trim();
    if value.is_empty() {
        return None;
    }

    let parsed = from_bracketed(value)
        .or_else(|| from_fixed_width(value))
        .or_else(|| from_delimited(value))
        .or_else(|| from_iso(value));

    if parsed.is_none() {
        tracing::warn!(value, "could not parse statement date");
    }
    parsed
}

/// The digit block is wall-clock time in the bracketed offset.
fn from_bracketed(value: &str) -> Option<DateTime<Utc>> {
    let captures = BRACKETED.captures(value)?;
    let local = NaiveDateTime::parse_from_str(&captures[1], "%Y%m%d%H%M%S").ok()?;
    let hours: f64 = captures[2].parse().ok()?;
    let offset = FixedOffset::east_opt((hours * 3600.0).round() as i32)?;
    Some(local.and_local_timezone(offset).single()?.with_timezone(&Utc))
}

fn from_fixed_width(value: &str) -> Option<DateTime<Utc>> {
    // Some exporters append fractional seconds: 20251224000000.000
    let digits = match value.split_once('.') {
        Some((head, fraction))
            if !fraction.is_empty() && fraction.bytes().all(|b| b.is_ascii_digit()) =>
        {
            head
        }
        Some(_) => return None,
        None => value,
    };
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let naive = match digits.len() {
        14 => NaiveDateTime::parse_from_str(digits, "%Y%m%d%H%M%S").ok()?,
        12 => NaiveDateTime::parse_from_str(digits, "%Y%m%d%H%M").ok()?,
        8 => NaiveDate::parse_from_str(digits, "%Y%m%d")
            .ok()?
            .and_hms_opt(0, 0, 0)?,
        _ => return None,
    };
    Some(naive.and_utc())
}

fn from_delimited(value: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y/%m/%d"))
        .ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}

fn from_iso(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
