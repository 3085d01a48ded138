//! Budget lookups against per-film detail endpoints

use async_trait::async_trait;
use futures::stream::{self, Stream, StreamExt};
use thiserror::Error;

/// Why a detail lookup produced no budget.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("{0}")]
    Request(String),
    #[error("Invalid JSON response")]
    InvalidJson,
    #[error("{0}")]
    Unexpected(String),
}

impl FetchError {
    /// Renders the error as the raw budget value carried downstream.
    pub fn into_raw_budget(self) -> String {
        format!("Error: {self}")
    }
}

#[async_trait]
pub trait BudgetProvider: Send + Sync {
    /// Returns the raw budget text for one detail URL. Never fails: missing
    /// budgets come back as `"0.0"` and failures as `"Error: ..."`.
    async fn fetch_budget(&self, url: &str) -> String;
}

/// Fetches budgets with at most `concurrency` requests in flight, yielding
/// results in the order of `urls`.
pub fn budget_stream<'a, P>(
    provider: &'a P,
    urls: &'a [String],
    concurrency: usize,
) -> impl Stream<Item = String> + 'a
where
    P: BudgetProvider + ?Sized,
{
    stream::iter(urls)
        .map(move |url| provider.fetch_budget(url))
        .buffered(concurrency.max(1))
}

pub async fn fetch_budgets<P>(provider: &P, urls: &[String], concurrency: usize) -> Vec<String>
where
    P: BudgetProvider + ?Sized,
{
    budget_stream(provider, urls, concurrency).collect().await
}
