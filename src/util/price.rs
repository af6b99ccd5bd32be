//! Locale-aware price labels.

#[cfg(test)]
#[path = "price_test.rs"]
mod price_test;

use serde::{Deserialize, Serialize};

/// Label shown instead of a price for free courses.
pub const FREE_LABEL: &str = "Free";

/// Display currency for prices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    /// Vietnamese dong: whole numbers only.
    Vnd,
    #[default]
    Usd,
}

impl Currency {
    /// Pick the currency for a BCP 47 locale string: `vi*` is VND,
    /// everything else USD.
    pub fn from_locale(locale: &str) -> Self {
        if locale.starts_with("vi") {
            Self::Vnd
        } else {
            Self::Usd
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Self::Vnd => " VNĐ",
            Self::Usd => " $",
        }
    }
}

/// Format `raw` in `currency` without digit grouping.
///
/// VND rounds half toward positive infinity to an integer. USD prints
/// integral values without decimals and everything else with exactly two,
/// rounding cent ties away from zero. Non-finite input is treated as zero.
pub fn format_price(raw: f64, currency: Currency) -> String {
    let raw = if raw.is_finite() { raw } else { 0.0 };
    let core = match currency {
        Currency::Vnd => format!("{:.0}", normalize_zero(round_half_up(raw))),
        Currency::Usd if raw.fract() == 0.0 => format!("{:.0}", normalize_zero(raw)),
        Currency::Usd => format!("{:.2}", normalize_zero(round_to_cents(raw))),
    };
    core + currency.suffix()
}

/// Price label for a course: [`FREE_LABEL`] when free, otherwise the
/// formatted price with an absent price read as zero.
pub fn price_label(is_free: bool, price: Option<f64>, currency: Currency) -> String {
    if is_free {
        return FREE_LABEL.to_owned();
    }
    format_price(price.unwrap_or(0.0), currency)
}

/// Round to an integer with ties toward positive infinity.
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Round to two decimal places with ties away from zero.
fn round_to_cents(value: f64) -> f64 {
    let cents = (value * 100.0).round() / 100.0;
    if cents.is_finite() { cents } else { value }
}

/// Fold `-0.0` into `0.0` so it never prints with a sign.
fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}
