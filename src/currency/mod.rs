use std::{collections::HashMap, env};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("USD")
    }
}

static REGION_CURRENCIES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("GB", "GBP"),
        ("EU", "EUR"),
        ("DE", "EUR"),
        ("FR", "EUR"),
        ("IN", "INR"),
        ("JP", "JPY"),
        ("BR", "BRL"),
        ("AU", "AUD"),
        ("CA", "CAD"),
    ])
});

/// Currency for an ISO region code. Unknown regions read as USD.
pub fn currency_for_region(region: &str) -> CurrencyCode {
    let region = region.to_uppercase();
    let code = REGION_CURRENCIES
        .get(region.as_str())
        .copied()
        .unwrap_or("USD");
    CurrencyCode::new(code)
}

/// Best-effort guess from a locale tag such as `en-GB` or `de_DE.UTF-8`.
/// Tags without a region part read as US.
pub fn detect_currency(locale_tag: &str) -> CurrencyCode {
    let base = locale_tag.split('.').next().unwrap_or("");
    let region = base
        .split(|c| c == '-' || c == '_')
        .nth(1)
        .unwrap_or("US");
    currency_for_region(region)
}

/// Consults `LC_ALL`, `LC_MONETARY`, then `LANG`, falling back to USD.
pub fn detect_from_env() -> CurrencyCode {
    for name in ["LC_ALL", "LC_MONETARY", "LANG"] {
        if let Ok(value) = env::var(name) {
            if !value.trim().is_empty() {
                return detect_currency(&value);
            }
        }
    }
    CurrencyCode::default()
}

/// Plain `CODE 12.34` rendering with two decimals.
pub fn format_amount(value: f64, code: &CurrencyCode) -> String {
    format!("{} {:.2}", code.as_str(), value)
}
