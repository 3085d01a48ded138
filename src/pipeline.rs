//! End-to-end run: awards index, budgets, normalization, CSV.

use crate::core::{
    BudgetNormalizer, BudgetProvider, FilmProvider, FilmRecord, MovieRow,
    detail::budget_stream,
    year::{decade_of, normalize_year},
};
use crate::export;
use anyhow::Result;
use futures::StreamExt;
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const PREVIEW_ROWS: usize = 10;

/// Outcome of one export run.
#[derive(Debug)]
pub struct ExportReport {
    pub path: PathBuf,
    pub rows: Vec<MovieRow>,
}

impl ExportReport {
    pub fn with_budget(&self) -> usize {
        self.rows.iter().filter(|r| r.budget_usd > 0).count()
    }

    pub fn fetch_errors(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| r.budget.starts_with("Error"))
            .count()
    }

    pub fn total_budget_usd(&self) -> u64 {
        self.rows.iter().map(|r| r.budget_usd).sum()
    }
}

/// Joins films with their raw budgets. `budgets` must line up with `films`.
pub fn build_rows(
    films: Vec<FilmRecord>,
    budgets: Vec<String>,
    normalizer: &BudgetNormalizer,
) -> Vec<MovieRow> {
    films
        .into_iter()
        .zip(budgets)
        .map(|(film, budget)| {
            let year = normalize_year(&film.year);
            MovieRow {
                budget_usd: normalizer.parse_budget_to_usd(Some(&budget)),
                film: film.film,
                wikipedia_url: film.wikipedia_url,
                oscar_winner: film.oscar_winner,
                detail_url: film.detail_url,
                year,
                budget,
                decade: decade_of(year),
            }
        })
        .collect()
}

pub struct Pipeline<'a> {
    pub films: &'a dyn FilmProvider,
    pub budgets: &'a dyn BudgetProvider,
    pub normalizer: &'a BudgetNormalizer,
    pub concurrency: usize,
}

impl Pipeline<'_> {
    pub async fn run(&self, output_dir: &Path, pb: Option<&ProgressBar>) -> Result<ExportReport> {
        let films = self.films.fetch_films().await?;
        let urls: Vec<String> = films.iter().map(|f| f.detail_url.clone()).collect();

        info!(
            count = urls.len(),
            concurrency = self.concurrency,
            "Fetching budgets"
        );
        if let Some(pb) = pb {
            pb.set_length(urls.len() as u64);
        }
        let budgets: Vec<String> = budget_stream(self.budgets, &urls, self.concurrency)
            .inspect(|_| {
                if let Some(pb) = pb {
                    pb.inc(1);
                }
            })
            .collect()
            .await;

        let rows = build_rows(films, budgets, self.normalizer);
        debug!(
            "Row schema: film: String, wikipedia_url: String, oscar_winner: bool, detail_url: String, year: i32, budget: String, budget_usd: u64, decade: i32"
        );
        for row in rows.iter().take(PREVIEW_ROWS) {
            debug!(?row, "Preview");
        }

        let now = chrono::Local::now().naive_local();
        let path = export::write_csv(output_dir, &rows, now)?;
        info!(rows = rows.len(), "Saved films to {}", path.display());

        Ok(ExportReport { path, rows })
    }
}
