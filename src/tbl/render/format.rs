use crate::Money;

use chrono::{DateTime, Utc};

/// Formats an amount as US dollars, e.g. `$1,250.50`
pub fn format_currency(amount: Money) -> String {
    let cents = amount.to_cents();
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();

    let dollars = group_thousands(&(cents / 100).to_string());

    return format!("{sign}${dollars}.{:02}", cents % 100);
}

/// Describes how long ago `timestamp` was, falling back to a calendar date after a week
pub fn format_time(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let minutes = now.signed_duration_since(*timestamp).num_minutes();
    let hours = minutes / 60;
    let days = hours / 24;

    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    if hours < 24 {
        return format!("{hours}h ago");
    }
    if days < 7 {
        return format!("{days}d ago");
    }

    return timestamp.format("%b %-d, %I:%M %p").to_string();
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}
