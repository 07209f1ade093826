//! Loose numeric coercion and clamping
//!
//! Callers hand the engine whatever the user typed. Instead of rejecting bad
//! input, every value is coerced to a number and clamped:
//! - Amounts and rates: non-finite -> 0, negative -> 0
//! - Month counts: fractional part dropped, then anything <= 0 -> 1
//!
//! At deserialization boundaries (scenario JSON, phase CSV) a field may be a
//! number, a numeric string, a boolean or null; see [`coerce_str`].

use log::warn;
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use std::fmt;

/// Clamp a monetary amount or rate to a finite, non-negative value.
pub fn amount(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Clamp a month count for a single-phase computation: at least one month.
pub fn month_count(value: f64) -> u32 {
    match whole_months(value) {
        0 => 1,
        n => n,
    }
}

/// Truncate a month count toward zero. Non-finite and negative values give 0.
pub fn whole_months(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    let truncated = value.trunc();
    if truncated >= u32::MAX as f64 {
        u32::MAX
    } else {
        truncated as u32
    }
}

/// Coerce text the way a form field is read: trimmed, empty means 0.
///
/// Returns `None` for text that is not a finite number.
pub fn coerce_str(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

struct LooseNumberVisitor;

/// Log a value that could not be read as a number and report it as missing
fn not_a_number(what: &dyn fmt::Display) -> Option<f64> {
    warn!("Non-numeric value {} treated as missing", what);
    None
}

impl<'de> Visitor<'de> for LooseNumberVisitor {
    type Value = Option<f64>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number, numeric string, boolean or null")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(Some(if v { 1.0 } else { 0.0 }))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Some(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Some(v as f64))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Self::Value, E> {
        Ok(Some(v as f64))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Self::Value, E> {
        Ok(Some(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        if v.is_finite() {
            Ok(Some(v))
        } else {
            Ok(not_a_number(&v))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(coerce_str(v).or_else(|| not_a_number(&format_args!("'{}'", v))))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Some(0.0))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Some(0.0))
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(not_a_number(&"(sequence)"))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(not_a_number(&"(map)"))
    }
}

/// Deserialize a loose number, keeping `None` for values that are not numbers.
pub fn deserialize_optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LooseNumberVisitor)
}

/// Deserialize a loose number; invalid values become 0. The sign is kept.
pub fn deserialize_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_optional_number(deserializer)?.unwrap_or(0.0))
}

/// Deserialize a loose month count, truncated; invalid or negative values become 0.
pub fn deserialize_months<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(whole_months(deserialize_number(deserializer)?))
}
