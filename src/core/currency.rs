//! Static currency rates used to express budgets in USD

use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Usd,
    Gbp,
    Eur,
}

impl Currency {
    /// Picks the currency from the glyphs present in `text`. Pound (or the lira
    /// variant) wins over euro; anything else is USD.
    pub fn detect(text: &str) -> Self {
        if text.contains('£') || text.contains('₤') {
            Currency::Gbp
        } else if text.contains('€') {
            Currency::Eur
        } else {
            Currency::Usd
        }
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Currency::Usd => "usd",
                Currency::Gbp => "gbp",
                Currency::Eur => "eur",
            }
        )
    }
}

/// Fixed multipliers converting an amount in a currency to USD.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRates {
    #[serde(default = "default_usd")]
    pub usd: f64,
    #[serde(default = "default_gbp")]
    pub gbp: f64,
    #[serde(default = "default_eur")]
    pub eur: f64,
}

fn default_usd() -> f64 {
    1.0
}

fn default_gbp() -> f64 {
    1.56
}

fn default_eur() -> f64 {
    1.3
}

impl Default for CurrencyRates {
    fn default() -> Self {
        Self {
            usd: default_usd(),
            gbp: default_gbp(),
            eur: default_eur(),
        }
    }
}

impl CurrencyRates {
    pub fn rate(&self, currency: Currency) -> f64 {
        match currency {
            Currency::Usd => self.usd,
            Currency::Gbp => self.gbp,
            Currency::Eur => self.eur,
        }
    }
}
