//! Natural-language date parsing
//!
//! Turns a tagged date span into an absolute calendar date. Handles
//! ISO and slash dates (day first), month-name forms with or without a
//! day, and relative phrases anchored to a supplied "today". Spans
//! that fit none of the forms parse to nothing and are discarded by
//! the caller.

use chrono::{Duration, Months, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ORDINAL: Regex = Regex::new(r"(\d{1,2})(?:st|nd|rd|th)\b").unwrap();
    static ref DAYS_AGO: Regex = Regex::new(r"^(\d+)\s+days?\s+ago$").unwrap();
}

/// Parse a date span into an absolute date
///
/// # Arguments
/// * `span` - Tagged date text
/// * `today` - Anchor for relative phrases
///
/// # Returns
/// The resolved date, or None when the span fits no known form
pub fn parse_natural(span: &str, today: NaiveDate) -> Option<NaiveDate> {
    let normalized = ORDINAL
        .replace_all(&span.trim().to_lowercase(), "$1")
        .to_string();

    if let Some(date) = parse_relative(&normalized, today) {
        return Some(date);
    }

    if let Ok(date) = NaiveDate::parse_from_str(&normalized, "%Y-%m-%d") {
        return Some(date);
    }

    // Slash dates are read day-first
    if let Ok(date) = NaiveDate::parse_from_str(&normalized, "%d/%m/%Y") {
        return Some(date);
    }

    parse_month_form(&normalized)
}

/// Relative phrases anchored to today
fn parse_relative(span: &str, today: NaiveDate) -> Option<NaiveDate> {
    match span {
        "today" => return Some(today),
        "yesterday" => return Some(today - Duration::days(1)),
        "tomorrow" => return Some(today + Duration::days(1)),
        "last week" => return Some(today - Duration::days(7)),
        "last month" => return today.checked_sub_months(Months::new(1)),
        "last year" => return today.checked_sub_months(Months::new(12)),
        _ => {}
    }

    if let Some(caps) = DAYS_AGO.captures(span) {
        let days: i64 = caps.get(1)?.as_str().parse().ok()?;
        return Some(today - Duration::days(days));
    }

    None
}

/// Month-name forms: "june 1 2023", "1 june 2023", "june 2023"
fn parse_month_form(span: &str) -> Option<NaiveDate> {
    let cleaned = span.replace(',', " ");
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();

    match tokens.as_slice() {
        [month, day, year] if month_number(month).is_some() => {
            build_date(year, month_number(month)?, day.parse().ok()?)
        }
        [day, month, year] if month_number(month).is_some() => {
            build_date(year, month_number(month)?, day.parse().ok()?)
        }
        [month, year] if month_number(month).is_some() => {
            build_date(year, month_number(month)?, 1)
        }
        _ => None,
    }
}

fn build_date(year: &str, month: u32, day: u32) -> Option<NaiveDate> {
    let year: i32 = year.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Month number for a full name or common three-letter prefix
fn month_number(token: &str) -> Option<u32> {
    const NAMES: [&str; 12] = [
        "january", "february", "march", "april", "may", "june",
        "july", "august", "september", "october", "november", "december",
    ];

    NAMES.iter().position(|name| {
        token == *name || (token.len() >= 3 && name.starts_with(token))
    }).map(|i| i as u32 + 1)
}
