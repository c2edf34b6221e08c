//! Display formatting shared by the account and tile pages.
//!
//! Dates are treated as calendar dates: only the `YYYY-MM-DD` prefix of an
//! ISO string is read, so a timestamp never shifts across a day boundary.

use crate::models::BillingInterval;
use chrono::NaiveDate;

const DISPLAY_DATE: &str = "%b %-d, %Y";
const DISPLAY_DATE_PARSE: &str = "%b %d, %Y";

fn calendar_date(iso: &str) -> Option<NaiveDate> {
    let prefix = iso.trim().get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

/// "2025-03-05" or "2025-03-05T21:35:00Z" → "Mar 5, 2025".
///
/// Unparsable input is returned unchanged.
pub fn format_date(iso: &str) -> String {
    match calendar_date(iso) {
        Some(date) => date.format(DISPLAY_DATE).to_string(),
        None => iso.to_string(),
    }
}

/// Inverse of [`format_date`]: "Mar 5, 2025" → "2025-03-05".
pub fn parse_display_date(display: &str) -> Option<String> {
    NaiveDate::parse_from_str(display.trim(), DISPLAY_DATE_PARSE)
        .ok()
        .map(|d| d.format("%Y-%m-%d").to_string())
}

fn currency_symbol(currency: &str) -> Option<&'static str> {
    match currency.to_lowercase().as_str() {
        "usd" => Some("$"),
        "eur" => Some("€"),
        "gbp" => Some("£"),
        _ => None,
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Minor currency units → "$1,234.56". Unknown currencies get a code suffix
/// ("12.00 SAR").
pub fn format_money(minor: i64, currency: &str) -> String {
    let sign = if minor < 0 { "-" } else { "" };
    let abs = minor.unsigned_abs();
    let amount = format!("{}.{:02}", group_thousands(abs / 100), abs % 100);
    match currency_symbol(currency) {
        Some(symbol) => format!("{sign}{symbol}{amount}"),
        None => format!("{sign}{amount} {}", currency.to_uppercase()),
    }
}

/// "$19.00 / month"; without an interval just the amount.
pub fn format_price(minor: i64, currency: &str, interval: Option<&BillingInterval>) -> String {
    let amount = format_money(minor, currency);
    match interval {
        Some(interval) => format!("{amount} / {}", interval.label()),
        None => amount,
    }
}

/// Convert a snake_case string to Title Case (e.g. "past_due" → "Past Due").
pub fn title_case(s: &str) -> String {
    s.split(['_', ' '])
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// "visa", "4242" → "Visa •••• 4242".
pub fn card_label(brand: &str, last4: &str) -> String {
    format!("{} •••• {}", title_case(brand), last4)
}

/// 4, 2027 → "04/27".
pub fn card_expiry(month: u32, year: u32) -> String {
    format!("{:02}/{:02}", month, year % 100)
}
