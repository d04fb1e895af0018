//! Presentation formatting for amounts, durations, dates and clock times.
//!
//! This is the only place where values are rounded. Aggregation keeps full
//! precision and every renderer (console tables, CSV, Excel, PDF) formats
//! through these functions at the output boundary.
//!
//! ## Format Specifications
//!
//! - Money: two decimals, currency prefix (`€170.00`)
//! - Hours: two decimals from minutes (`510` → `8.50`)
//! - Durations: `8h 30m`, with `-` for an absent or zero duration
//! - Dates: `dd/mm/yyyy`
//! - Timestamps: `15 de enero de 2025, 14:30`
//! - Clock times: `HH:MM`, with `-` when absent
//!
//! ## Examples
//!
//! ```rust
//! use hourly::libs::formatter::{format_money, format_hours, format_duration};
//!
//! assert_eq!(format_money(170.0, "€"), "€170.00");
//! assert_eq!(format_hours(510), "8.50");
//! assert_eq!(format_duration(Some(510)), "8h 30m");
//! ```

use crate::libs::interval::ClockTime;
use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Marker appended to text cut by [`truncate`].
pub const ELLIPSIS: &str = "...";

/// Rounds to two decimals for display.
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Rounds to two decimals and prefixes the currency symbol.
pub fn format_money(amount: f64, currency: &str) -> String {
    format!("{}{:.2}", currency, amount)
}

/// Minutes as decimal hours with two decimals.
pub fn format_hours(minutes: u64) -> String {
    format!("{:.2}", minutes as f64 / 60.0)
}

/// Hours with one decimal and an `h` suffix, as shown on summary tiles.
pub fn format_hours_compact(hours: f64) -> String {
    format!("{:.1}h", hours)
}

/// Whole minutes with an `m` suffix, as shown on summary tiles.
pub fn format_minutes_compact(minutes: f64) -> String {
    format!("{:.0}m", minutes)
}

/// Formats a number of minutes as `Xh Ym`; absent or zero durations render as `-`.
pub fn format_duration(minutes: Option<u32>) -> String {
    match minutes {
        Some(minutes) if minutes > 0 => format!("{}h {}m", minutes / 60, minutes % 60),
        _ => "-".to_string(),
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Long Spanish timestamp used in report headers, e.g. `15 de enero de 2025, 14:30`.
pub fn format_timestamp_long(at: NaiveDateTime) -> String {
    let month = MONTHS_ES[at.month0() as usize];
    format!("{} de {} de {}, {}", at.day(), month, at.year(), at.format("%H:%M"))
}

pub fn format_time(time: Option<ClockTime>) -> String {
    time.map(|t| t.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Cuts `text` to `max_chars` characters, appending [`ELLIPSIS`] when something was cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars).collect();
    cut.push_str(ELLIPSIS);
    cut
}
