//! Display formatting shared by every view.
//!
//! Rounding is decimal half-away-from-zero on the shortest decimal
//! representation of the `f64`, so `2.675` rounds to `2.68` even though its
//! binary value sits just below the midpoint. Non-finite input formats as zero.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::DataValue;

const MILLION: f64 = 1_000_000.0;
const THOUSAND: f64 = 1_000.0;
const MAX_DECIMAL_PLACES: u32 = 28;

fn to_decimal(value: f64) -> Option<Decimal> {
    let value = if value.is_finite() { value } else { 0.0 };
    // `{}` yields the shortest representation that round-trips
    Decimal::from_str(&format!("{value}")).ok()
}

/// Rounds half away from zero and renders exactly `places` fraction digits.
///
/// Past what `Decimal` can represent (more than 28 digits of scale, or a
/// value too large to rescale) the `f64` formatter takes over.
fn fixed(value: f64, places: u32) -> String {
    if let Some(d) = to_decimal(value)
        && places <= MAX_DECIMAL_PLACES
    {
        let mut d = d.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
        d.rescale(places);
        if d.scale() == places {
            return d.to_string();
        }
    }
    let value = if value.is_finite() { value } else { 0.0 };
    format!("{value:.prec$}", prec = places as usize)
}

/// Human-readable magnitude: `1.23M`, `4.5K`, `42.10`.
///
/// Negative values are never produced by the dataset; they fall through to
/// the unsuffixed branch.
#[must_use]
pub fn format_magnitude(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    if value >= MILLION {
        format!("{}M", fixed(value / MILLION, 2))
    } else if value >= THOUSAND {
        format!("{}K", fixed(value / THOUSAND, 1))
    } else {
        fixed(value, 2)
    }
}

/// Magnitude with the tCO2e unit, as shown next to every total.
#[must_use]
pub fn format_emissions(value: f64) -> String {
    format!("{} tCO2e", format_magnitude(value))
}

/// A percentage at the call site's precision, e.g. `format_percent(84.66, 1)` → `84.7%`.
#[must_use]
pub fn format_percent(value: f64, places: u32) -> String {
    format!("{}%", fixed(value, places))
}

/// Thousands-separated number with at most three fraction digits and no
/// trailing zeros: `1234567.891` → `1,234,567.891`, `1500.50` → `1,500.5`.
#[must_use]
pub fn format_grouped(value: f64) -> String {
    let text = match to_decimal(value) {
        Some(d) => d
            .round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero)
            .normalize()
            .to_string(),
        None => format!("{value:.0}"),
    };

    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Numeric data values are grouped; free text is shown as-is.
#[must_use]
pub fn format_data_value(value: &DataValue) -> String {
    match value {
        DataValue::Numeric(v) => format_grouped(*v),
        DataValue::Text(t) => t.clone(),
    }
}
