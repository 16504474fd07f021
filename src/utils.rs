use chrono::{DateTime, Duration, Utc};
use regex::Regex;

/// Resolve a relative date like "3 weeks ago" against `now`.
///
/// Unit keywords are checked by substring containment in a fixed order
/// (day, week, month, year); the quantity is the first integer immediately
/// preceding the matched keyword. Month and year are approximated as 30 and
/// 365 days. Anything unrecognized falls back to `now`.
pub fn parse_relative_date(text: &str, now: DateTime<Utc>) -> DateTime<Utc> {
    let lower = text.to_lowercase();

    for (keyword, days) in [("day", 1), ("week", 7), ("month", 30), ("year", 365)] {
        if lower.contains(keyword) {
            let re = Regex::new(&format!(r"(\d+) {}", keyword)).unwrap();

            if let Some(quantity) = re
                .captures(&lower)
                .and_then(|caps| caps[1].parse::<i64>().ok())
            {
                return now - Duration::days(quantity * days);
            }

            tracing::debug!("Relative date {:?} names '{}' but has no quantity", text, keyword);
            return now;
        }
    }

    if !text.is_empty() {
        tracing::debug!("No recognized unit in relative date {:?}", text);
    }
    now
}

/// Parse an ISO 8601 style duration ("PT1H2M3S") into whole seconds.
///
/// Missing components contribute zero; input that does not start with the
/// pattern yields zero.
pub fn parse_duration(text: &str) -> u64 {
    let re = Regex::new(r"^PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?").unwrap();

    if let Some(caps) = re.captures(text) {
        let group = |i| {
            caps.get(i)
                .and_then(|m| m.as_str().parse::<u64>().ok())
                .unwrap_or(0)
        };

        group(1) * 3600 + group(2) * 60 + group(3)
    } else {
        tracing::debug!("Unparsable duration {:?}", text);
        0
    }
}

/// Strip every non-digit character and parse what remains.
///
/// Handles view/subscriber strings like "1,234,567 views"; an empty or
/// unparsable remainder yields zero.
pub fn extract_digits(text: &str) -> u64 {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}
