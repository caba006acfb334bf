//! Small display helpers

use chrono::{Datelike, Local};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Render today's date for the desk header, e.g. "5th Aug 2025"
pub fn header_date() -> String {
    let now = Local::now();
    format_header_date(now.day(), now.month(), now.year())
}

fn format_header_date(day: u32, month: u32, year: i32) -> String {
    format!(
        "{}{} {} {}",
        day,
        ordinal_suffix(day),
        MONTHS[(month - 1) as usize],
        year
    )
}

/// English ordinal suffix for a day of month
fn ordinal_suffix(day: u32) -> &'static str {
    if (4..=20).contains(&day) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}
