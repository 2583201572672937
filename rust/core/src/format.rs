// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parsing and display formatting for assessment values.
//!
//! Parsers return `None` for anything they cannot read; callers treat that as
//! an absent field.

/// Parse a currency amount into whole dollars.
///
/// Accepts `$` signs, thousands separators and fractional cents (truncated).
/// Negative or malformed amounts yield `None`.
pub fn parse_currency(text: &str) -> Option<u64> {
    let cleaned: String = text
        .chars()
        .filter(|c| !matches!(c, '$' | ',') && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    if let Ok(whole) = cleaned.parse::<u64>() {
        return Some(whole);
    }
    let value = cleaned.parse::<f64>().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some(value.trunc() as u64)
}

/// Render whole dollars with a currency symbol and thousands separators.
pub fn format_currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Parse an acreage value.
pub fn parse_acreage(text: &str) -> Option<f64> {
    let value = text.trim().replace(',', "").parse::<f64>().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        None
    }
}

/// Acreage is always shown with two decimals, whatever schema it came from.
pub fn format_acreage(acres: f64) -> String {
    format!("{acres:.2}")
}

/// Parse a construction year; zero means "no building".
pub fn parse_year(text: &str) -> Option<i32> {
    let trimmed = text.trim();
    let year = trimmed
        .parse::<i32>()
        .ok()
        .or_else(|| trimmed.parse::<f64>().ok().filter(|v| v.is_finite()).map(|v| v.trunc() as i32))?;
    if year > 0 {
        Some(year)
    } else {
        None
    }
}
