//! Display Formatting
//!
//! Currency, number and date formatting shared by the CLI and the browser
//! views. Grouping and dates follow the en-US conventions.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Currency prefix used for all amounts
pub const CURRENCY: &str = "R";

/// Amounts at or above this magnitude switch to exponential notation
pub const EXPONENTIAL_THRESHOLD: f64 = 1_000_000.0;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Dashboard amount: `R2.50e+6` from one million up, `R12,345.67` below
pub fn format_amount(amount: f64) -> String {
    if amount.abs() >= EXPONENTIAL_THRESHOLD {
        format!("{}{}", CURRENCY, to_exponential(amount, 2))
    } else {
        format!("{}{}", CURRENCY, group_decimal(amount, 2))
    }
}

/// Grouped two-decimal amount without the exponential switch (`R1,234,567.00`)
pub fn format_grouped_amount(amount: f64) -> String {
    format!("{}{}", CURRENCY, group_decimal(amount, 2))
}

/// Fixed two-decimal amount with a space after the symbol (`R 150.00`)
pub fn format_fixed_amount(amount: f64) -> String {
    format!("{} {:.2}", CURRENCY, amount)
}

/// Raw amount as the API sent it (`R 15000`, `R 1500.5`); `-` when absent
pub fn format_plain_amount(amount: Option<f64>) -> String {
    match amount {
        Some(v) => format!("{} {}", CURRENCY, plain_number(v)),
        None => "-".to_string(),
    }
}

/// Shortest decimal form of a number, integers without a fraction
pub fn plain_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Exponential notation with a signed exponent (`2.50e+6`, `1.23e-7`)
pub fn to_exponential(value: f64, digits: usize) -> String {
    let raw = format!("{:.*e}", digits, value);
    match raw.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        Some((mantissa, exp)) => format!("{}e{}", mantissa, exp),
        None => raw,
    }
}

/// Fixed-point with comma thousands separators (`12,345.67`)
pub fn group_decimal(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Short month name for a 1-based month number
pub fn month_abbrev(month: u32) -> &'static str {
    match month {
        1..=12 => MONTHS[(month - 1) as usize],
        _ => "???",
    }
}

/// Parse the date formats the API emits (RFC 3339, naive ISO, plain date)
pub fn parse_api_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Short date (`5/1/2024`); unparseable input is shown as-is
pub fn format_date(raw: &str) -> String {
    use chrono::Datelike;

    match parse_api_date(raw) {
        Some(d) => format!("{}/{}/{}", d.month(), d.day(), d.year()),
        None => raw.to_string(),
    }
}
