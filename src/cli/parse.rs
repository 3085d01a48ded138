use super::ui;
use crate::core::{BudgetNormalizer, config::AppConfig};

/// Prints the USD value the export would record for `budget`.
pub fn run(config: &AppConfig, budget: &str) {
    let normalizer = BudgetNormalizer::new(config.rates);
    let usd = normalizer.parse_budget_to_usd(Some(budget));
    println!("{usd}\t{}", ui::format_usd(usd));
}
