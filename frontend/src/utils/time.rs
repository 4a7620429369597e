use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::config;

fn app_time_zone() -> Tz {
    config::current_time_zone()
}

pub fn now_in_app_tz() -> DateTime<Tz> {
    Utc::now().with_timezone(&app_time_zone())
}

pub fn today_in_app_tz() -> NaiveDate {
    now_in_app_tz().date_naive()
}

pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// vi-VN short date (`2/1/2025`); unparseable input is shown verbatim.
pub fn format_vi_date(raw: &str) -> String {
    let date = parse_iso_date(raw).or_else(|| {
        DateTime::parse_from_rfc3339(raw.trim())
            .ok()
            .map(|dt| dt.with_timezone(&app_time_zone()).date_naive())
    });
    match date {
        Some(date) => date.format("%-d/%-m/%Y").to_string(),
        None => raw.to_string(),
    }
}

/// Sidebar label for a conversation's last activity relative to `now`.
pub fn format_conversation_timestamp(raw: &str, now: DateTime<Tz>) -> String {
    let Ok(parsed) = DateTime::parse_from_rfc3339(raw.trim()) else {
        return raw.to_string();
    };
    let local = parsed.with_timezone(&now.timezone());
    let elapsed = now.signed_duration_since(local);
    if elapsed < Duration::hours(24) {
        local.format("%H:%M").to_string()
    } else if elapsed < Duration::hours(24 * 7) {
        local.format("%a").to_string()
    } else {
        local.format("%b %-d").to_string()
    }
}

pub fn format_message_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw.trim()) {
        Ok(parsed) => parsed
            .with_timezone(&app_time_zone())
            .format("%H:%M %-d/%-m/%Y")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}
