use super::util::{RetryPolicy, get_with_retry};
use crate::core::film::{FilmProvider, FilmRecord};
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, info};

const INDEX_RETRY: RetryPolicy = RetryPolicy::new(3, Duration::from_millis(500));

#[derive(Debug, Deserialize)]
struct AwardsResponse {
    results: Vec<AwardYear>,
}

// Groups and films with missing or null fields are kept and filled with
// empty values rather than failing the whole index.
#[derive(Debug, Deserialize)]
struct AwardYear {
    #[serde(default)]
    year: Option<YearLabel>,
    #[serde(default)]
    films: Option<Vec<AwardFilm>>,
}

// Some ceremonies are keyed by a plain number rather than a label
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum YearLabel {
    Text(String),
    Number(i64),
    Float(f64),
}

impl From<YearLabel> for String {
    fn from(label: YearLabel) -> Self {
        match label {
            YearLabel::Text(text) => text,
            YearLabel::Number(year) => year.to_string(),
            YearLabel::Float(year) if year.fract() == 0.0 => format!("{year:.0}"),
            YearLabel::Float(year) => year.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct AwardFilm {
    #[serde(rename = "Film", default)]
    film: Option<String>,
    #[serde(rename = "Wiki URL", default)]
    wiki_url: Option<String>,
    #[serde(rename = "Winner", default)]
    winner: Option<bool>,
    #[serde(rename = "Detail URL", default)]
    detail_url: Option<String>,
}

/// Reads the awards index: nominees grouped by ceremony year.
pub struct AwardsProvider {
    url: String,
}

impl AwardsProvider {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }
}

fn flatten(response: AwardsResponse) -> Vec<FilmRecord> {
    response
        .results
        .into_iter()
        .flat_map(|group| {
            let year = group.year.map(String::from).unwrap_or_default();
            group
                .films
                .unwrap_or_default()
                .into_iter()
                .map(move |film| FilmRecord {
                    film: film.film.unwrap_or_default(),
                    wikipedia_url: film.wiki_url.unwrap_or_default(),
                    oscar_winner: film.winner.unwrap_or_default(),
                    detail_url: film.detail_url.unwrap_or_default(),
                    year: year.clone(),
                })
        })
        .collect()
}

#[async_trait]
impl FilmProvider for AwardsProvider {
    async fn fetch_films(&self) -> Result<Vec<FilmRecord>> {
        debug!("Requesting awards index from {}", self.url);

        let client = reqwest::Client::builder()
            .user_agent("filmbudget/1.0")
            .build()?;
        let response = get_with_retry(&client, &self.url, INDEX_RETRY)
            .await
            .with_context(|| format!("Failed to fetch awards index from {}", self.url))?;

        let response_text = response
            .text()
            .await
            .context("Failed to get awards response text")?;

        let data: AwardsResponse = match serde_json::from_str(&response_text) {
            Ok(data) => data,
            Err(e) => {
                error!(error = ?e, "Failed to parse awards response");
                return Err(anyhow!("Failed to parse awards response: {}", e));
            }
        };

        let films = flatten(data);
        info!(count = films.len(), "Loaded films from awards index");
        Ok(films)
    }
}
