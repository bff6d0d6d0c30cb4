// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Calendar day of a timestamp as `YYYY-MM-DD`.
pub fn calendar_day(date: DateTime<Utc>) -> String {
    date.date_naive().format("%Y-%m-%d").to_string()
}

/// Today's calendar day in UTC as `YYYY-MM-DD`.
///
/// Streak and login bookkeeping compare these strings directly, so the
/// server's notion of "today" is always UTC.
pub fn today_utc() -> String {
    calendar_day(Utc::now())
}

/// Parse a `YYYY-MM-DD` string.
pub fn parse_calendar_day(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
