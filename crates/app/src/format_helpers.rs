//! Shared formatting utilities for the UI layer.
//!
//! Numbers are grouped with commas, money carries two decimals, and dates
//! render as "Jan 20, 2024".

use chrono::{DateTime, NaiveDate, Utc};

/// Group digits in thousands: `125000` → "125,000".
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Dollar amount with grouped whole part: `485720.0` → "$485,720.00".
pub fn format_money(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${}.{:02}", format_count(cents / 100), cents % 100)
}

/// Compact form for stat cards: "125K", "1.2M".
pub fn format_compact(n: u64) -> String {
    match n {
        0..=999 => n.to_string(),
        1_000..=999_999 => trim_decimal(n as f64 / 1_000.0, "K"),
        _ => trim_decimal(n as f64 / 1_000_000.0, "M"),
    }
}

fn trim_decimal(value: f64, suffix: &str) -> String {
    let s = format!("{value:.1}");
    let s = s.strip_suffix(".0").unwrap_or(&s);
    format!("{s}{suffix}")
}

/// Percentage with at most one decimal: `7.5` → "7.5%", `40.0` → "40%".
pub fn format_percent(value: f64) -> String {
    trim_decimal(value, "%")
}

/// "Jan 15, 2024".
pub fn format_date_human(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// "Jan 26, 2024 10:30 AM" in UTC.
pub fn format_datetime_human(ts: DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y %-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn count_grouping() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(125_000), "125,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn money() {
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(625.5), "$625.50");
        assert_eq!(format_money(851.25), "$851.25");
        assert_eq!(format_money(485_720.0), "$485,720.00");
        assert_eq!(format_money(-12.5), "-$12.50");
    }

    #[test]
    fn compact() {
        assert_eq!(format_compact(850), "850");
        assert_eq!(format_compact(125_000), "125K");
        assert_eq!(format_compact(10_800), "10.8K");
        assert_eq!(format_compact(1_340_000), "1.3M");
        assert_eq!(format_compact(2_000_000), "2M");
    }

    #[test]
    fn percent() {
        assert_eq!(format_percent(40.0), "40%");
        assert_eq!(format_percent(7.5), "7.5%");
        assert_eq!(format_percent(12.5), "12.5%");
    }

    #[test]
    fn dates() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date_human(date), "Jan 5, 2024");

        let ts = DateTime::parse_from_rfc3339("2024-01-26T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_datetime_human(ts), "Jan 26, 2024 10:30 AM");

        let ts = DateTime::parse_from_rfc3339("2024-01-25T14:15:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_datetime_human(ts), "Jan 25, 2024 2:15 PM");
    }
}
