//! Core business logic abstractions

pub mod budget;
pub mod config;
pub mod currency;
pub mod detail;
pub mod film;
pub mod log;
pub mod year;

// Re-export main types for cleaner imports
pub use budget::{BudgetNormalizer, parse_budget_to_usd};
pub use currency::{Currency, CurrencyRates};
pub use detail::{BudgetProvider, FetchError, fetch_budgets};
pub use film::{FilmProvider, FilmRecord, MovieRow};
