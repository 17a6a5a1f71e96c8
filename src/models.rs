//! Frontend Models
//!
//! Data structures matching backend responses.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Product as returned by `GET /api/products`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Price,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Row of `GET /api/cart`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CartItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Price,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Price exactly as the backend sent it.
///
/// The backend is inconsistent: numbers, numeric strings and `null` all occur.
/// The raw text is kept for display; [`Price::amount`] coerces for arithmetic.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Price {
    raw: Option<String>,
}

impl Price {
    #[cfg(test)]
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: Some(raw.into()) }
    }

    #[cfg(test)]
    pub fn missing() -> Self {
        Self { raw: None }
    }

    /// Text for per-item display, unformatted. Empty when missing.
    pub fn display(&self) -> &str {
        self.raw.as_deref().unwrap_or("")
    }

    /// Numeric value: longest leading decimal prefix, `0.0` if there is none.
    pub fn amount(&self) -> f64 {
        self.raw.as_deref().and_then(parse_leading_float).unwrap_or(0.0)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = match Value::deserialize(deserializer)? {
            Value::Null => None,
            Value::String(text) => Some(text),
            Value::Number(n) => Some(match n.as_f64() {
                Some(f) => format_number(f),
                None => n.to_string(),
            }),
            other => Some(other.to_string()),
        };
        Ok(Self { raw })
    }
}

/// Integral floats print without a fractional part (`12.0` -> `12`)
fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Parse the longest prefix of `text` that forms a decimal number.
///
/// Leading whitespace is skipped; trailing garbage is ignored (`"12 ₽"` is 12).
fn parse_leading_float(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s.get(..end)?.parse::<f64>().ok().filter(|v| v.is_finite())
}
