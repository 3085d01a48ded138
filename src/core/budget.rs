//! Normalization of free-form budget text into whole USD amounts

use crate::core::currency::{Currency, CurrencyRates};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};

lazy_static! {
    // Citation markers such as "[4]" or "[approx]"
    static ref BRACKET_REGEX: Regex = Regex::new(r"\[.*?\]").unwrap();
}

/// Raw budget returned when a detail page has no budget field.
pub const MISSING_BUDGET: &str = "0.0";

const MILLION: f64 = 1_000_000.0;

/// Converts raw budget strings into USD using a fixed rate table.
///
/// The conversion is total: every input yields a value, and anything that
/// cannot be read as a budget maps to 0. A genuine zero-dollar budget is not
/// distinguishable from an unknown one.
#[derive(Debug, Clone, Default)]
pub struct BudgetNormalizer {
    rates: CurrencyRates,
}

impl BudgetNormalizer {
    pub fn new(rates: CurrencyRates) -> Self {
        Self { rates }
    }

    pub fn parse_budget_to_usd(&self, raw: Option<&str>) -> u64 {
        let Some(raw) = raw else {
            return 0;
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == MISSING_BUDGET || trimmed == "0" {
            return 0;
        }
        if raw.starts_with("Error") {
            return 0;
        }

        let cleaned = BRACKET_REGEX.replace_all(raw, "");
        let cleaned = cleaned
            .replace("US$", "")
            .replace("USD$", "")
            .replace('$', "")
            .replace('–', "-");
        let cleaned = cleaned.trim();

        let currency = Currency::detect(cleaned);
        debug!(budget = %raw, currency = %currency, "Detected budget currency");
        let cleaned = cleaned.replace(['£', '₤', '€'], "");

        let mut parts = cleaned.split_whitespace();
        let Some(amount) = parts.next() else {
            warn!(budget = %raw, "No amount left in budget text");
            return 0;
        };
        let unit = parts.next().map(str::to_lowercase).unwrap_or_default();

        let value = match parse_amount(amount) {
            Some(value) => value,
            None => {
                warn!(budget = %raw, amount = %amount, "Failed to parse budget value");
                return 0;
            }
        };

        let multiplier = if unit.starts_with("million") {
            MILLION
        } else {
            1.0
        };

        // `as` truncates toward zero and saturates negatives to 0
        (value * multiplier * self.rates.rate(currency)) as u64
    }
}

/// Reads the leading number of a budget token: thousands separators are
/// dropped, repeated decimal points are treated as grouping, and ranges keep
/// their lower bound.
fn parse_amount(token: &str) -> Option<f64> {
    let mut amount = token.replace(',', "");
    if amount.matches('.').count() > 1 {
        amount = amount.replace('.', "");
    }
    if let Some((lower, _)) = amount.split_once('-') {
        amount = lower.to_string();
    }
    amount.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Normalizes a raw budget with the default rate table.
pub fn parse_budget_to_usd(raw: Option<&str>) -> u64 {
    BudgetNormalizer::default().parse_budget_to_usd(raw)
}
