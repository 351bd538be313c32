use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DISPLAY_DATE: &str = "%B %-d, %Y";

/// Formats a stored publish date as `"January 5, 2024"`.
///
/// Accepts RFC 3339 timestamps, `YYYY-MM-DD HH:MM:SS`, and bare
/// `YYYY-MM-DD`. Anything else is returned unchanged; empty input gives an
/// empty string.
pub fn format_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    match parse_date(trimmed) {
        Some(date) => date.format(DISPLAY_DATE).to_string(),
        None => raw.to_string(),
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    for pattern in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, pattern) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Uppercased first character of an author name, for the avatar bubble.
pub fn author_initial(name: &str) -> Option<String> {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
}

pub fn read_time_label(minutes: u32) -> String {
    format!("{} min read", minutes)
}

/// Product details worth showing next to the description: non-empty after
/// trimming and not just a copy of the description.
pub fn distinct_details<'a>(description: Option<&str>, details: Option<&'a str>) -> Option<&'a str> {
    let details = details.map(str::trim).filter(|d| !d.is_empty())?;
    let description = description.map(str::trim).unwrap_or_default();
    (details != description).then_some(details)
}
