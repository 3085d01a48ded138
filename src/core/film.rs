use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

/// One nominated film as listed in the awards feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilmRecord {
    pub film: String,
    pub wikipedia_url: String,
    pub oscar_winner: bool,
    pub detail_url: String,
    /// Award year label as published, e.g. `"1927 / 28 (1st)"`
    pub year: String,
}

/// A film enriched with its budget, ready for export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieRow {
    pub film: String,
    pub wikipedia_url: String,
    pub oscar_winner: bool,
    pub detail_url: String,
    pub year: i32,
    pub budget: String,
    pub budget_usd: u64,
    pub decade: i32,
}

#[async_trait]
pub trait FilmProvider: Send + Sync {
    async fn fetch_films(&self) -> Result<Vec<FilmRecord>>;
}
