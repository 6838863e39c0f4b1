//! Display formatting helpers
//!
//! Money and timestamps follow zh-CN display conventions to match the
//! backend's audience. Values that cannot be formatted fall back to a
//! placeholder (or the raw input) instead of failing the render.

use chrono::{DateTime, NaiveDateTime};

/// Shown where a value is missing or unformattable
pub const PLACEHOLDER: &str = "--";

/// zh-CN locale timestamp layout, e.g. `2026/08/07 14:30:00`
const DISPLAY_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Format an amount with two decimal places and comma thousands grouping
///
/// `1234567.5` becomes `1,234,567.50`. Negative amounts keep their sign;
/// NaN and infinities render as the placeholder.
pub fn money(amount: f64) -> String {
    if !amount.is_finite() {
        return PLACEHOLDER.to_string();
    }

    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // -0.004 rounds to 0.00 and should not keep its sign
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

/// Format an amount as CNY, e.g. `¥5,000.50`
pub fn yuan(amount: f64) -> String {
    if amount.is_finite() {
        format!("¥{}", money(amount))
    } else {
        PLACEHOLDER.to_string()
    }
}

/// Format an ISO-like timestamp for display
///
/// Accepts RFC 3339 as well as the zoneless `datetime.isoformat()` strings
/// the backend emits. Unparseable input is returned verbatim rather than
/// rendered as an error.
pub fn timestamp(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY_FORMAT).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(DISPLAY_FORMAT).to_string();
    }
    raw.to_string()
}

/// HTML-escape payload text before interpolating it into a fragment
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
