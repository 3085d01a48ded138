use crate::core::budget::MISSING_BUDGET;
use crate::core::detail::{BudgetProvider, FetchError};
use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, instrument};

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Request(err.to_string())
    }
}

/// Reads the `Budget` field from per-film detail endpoints.
pub struct DetailBudgetProvider {
    client: reqwest::Client,
}

impl DetailBudgetProvider {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("filmbudget/1.0")
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }

    async fn try_fetch_budget(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let text = response.text().await?;

        let body: Value = serde_json::from_str(&text).map_err(|e| {
            debug!(error = %e, response = %text, "Detail response is not JSON");
            FetchError::InvalidJson
        })?;

        let Value::Object(fields) = body else {
            return Err(FetchError::Unexpected(format!(
                "Expected a JSON object, got: {text}"
            )));
        };

        Ok(match fields.get("Budget") {
            None | Some(Value::Null) => MISSING_BUDGET.to_string(),
            Some(Value::String(budget)) => budget.clone(),
            Some(other) => other.to_string(),
        })
    }
}

#[async_trait]
impl BudgetProvider for DetailBudgetProvider {
    #[instrument(name = "DetailBudgetFetch", skip(self), fields(url = %url))]
    async fn fetch_budget(&self, url: &str) -> String {
        match self.try_fetch_budget(url).await {
            Ok(budget) => {
                debug!(budget = %budget, "Fetched budget");
                budget
            }
            Err(e) => {
                error!(error = %e, "Failed to fetch budget from {}", url);
                e.into_raw_budget()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::detail::fetch_budgets;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn create_mock_server(film_path: &str, response: ResponseTemplate) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(film_path))
            .respond_with(response)
            .mount(&mock_server)
            .await;

        mock_server
    }

    fn provider() -> DetailBudgetProvider {
        DetailBudgetProvider::new(Duration::from_secs(10)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_budget_success() {
        let mock_server = create_mock_server(
            "/films/wings",
            ResponseTemplate::new(200).set_body_string(r#"{"Budget": "US$ 100 million"}"#),
        )
        .await;

        let url = format!("{}/films/wings", mock_server.uri());
        let budget = provider().fetch_budget(&url).await;

        assert_eq!(budget, "US$ 100 million");
    }

    #[tokio::test]
    async fn test_fetch_budget_missing_field() {
        let mock_server = create_mock_server(
            "/films/wings",
            ResponseTemplate::new(200).set_body_string("{}"),
        )
        .await;

        let url = format!("{}/films/wings", mock_server.uri());
        assert_eq!(provider().fetch_budget(&url).await, "0.0");
    }

    #[tokio::test]
    async fn test_fetch_budget_null_field() {
        let mock_server = create_mock_server(
            "/films/wings",
            ResponseTemplate::new(200).set_body_string(r#"{"Budget": null, "Film": "Wings"}"#),
        )
        .await;

        let url = format!("{}/films/wings", mock_server.uri());
        assert_eq!(provider().fetch_budget(&url).await, "0.0");
    }

    #[tokio::test]
    async fn test_fetch_budget_numeric_field() {
        let mock_server = create_mock_server(
            "/films/wings",
            ResponseTemplate::new(200).set_body_string(r#"{"Budget": 2000000}"#),
        )
        .await;

        let url = format!("{}/films/wings", mock_server.uri());
        assert_eq!(provider().fetch_budget(&url).await, "2000000");
    }

    #[tokio::test]
    async fn test_fetch_budget_invalid_json() {
        let mock_server = create_mock_server(
            "/films/wings",
            ResponseTemplate::new(200).set_body_string("<html>not json</html>"),
        )
        .await;

        let url = format!("{}/films/wings", mock_server.uri());
        assert_eq!(
            provider().fetch_budget(&url).await,
            "Error: Invalid JSON response"
        );
    }

    #[tokio::test]
    async fn test_fetch_budget_non_object_json() {
        let mock_server = create_mock_server(
            "/films/wings",
            ResponseTemplate::new(200).set_body_string("[1, 2]"),
        )
        .await;

        let url = format!("{}/films/wings", mock_server.uri());
        assert_eq!(
            provider().fetch_budget(&url).await,
            "Error: Expected a JSON object, got: [1, 2]"
        );
    }

    #[tokio::test]
    async fn test_fetch_budget_http_error() {
        let mock_server =
            create_mock_server("/films/wings", ResponseTemplate::new(500)).await;

        let url = format!("{}/films/wings", mock_server.uri());
        let budget = provider().fetch_budget(&url).await;

        assert!(budget.starts_with("Error: "), "got {budget}");
        assert!(budget.contains("500"), "got {budget}");
    }

    #[tokio::test]
    async fn test_fetch_budget_connection_error() {
        // Nothing listens on port 1
        let url = "http://127.0.0.1:1/films/wings";

        let budget = provider().fetch_budget(url).await;

        assert!(budget.starts_with("Error: "), "got {budget}");
        assert_ne!(budget, "Error: Invalid JSON response");
    }

    #[tokio::test]
    async fn test_fetch_budget_timeout() {
        let mock_server = create_mock_server(
            "/films/slow",
            ResponseTemplate::new(200)
                .set_body_string(r#"{"Budget": "$1 million"}"#)
                .set_delay(Duration::from_millis(500)),
        )
        .await;

        let url = format!("{}/films/slow", mock_server.uri());
        let provider = DetailBudgetProvider::new(Duration::from_millis(50)).unwrap();
        let budget = provider.fetch_budget(&url).await;

        assert!(budget.starts_with("Error: "), "got {budget}");
    }

    #[tokio::test]
    async fn test_fetch_budgets_keeps_input_order() {
        let mock_server = MockServer::start().await;
        for (film, budget, delay) in [("a", "$1 million", 150), ("b", "£2 million", 0)] {
            Mock::given(method("GET"))
                .and(path(format!("/films/{film}")))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_string(format!(r#"{{"Budget": "{budget}"}}"#))
                        .set_delay(Duration::from_millis(delay)),
                )
                .mount(&mock_server)
                .await;
        }
        Mock::given(method("GET"))
            .and(path("/films/c"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let urls: Vec<String> = ["a", "b", "c"]
            .iter()
            .map(|film| format!("{}/films/{film}", mock_server.uri()))
            .collect();

        let budgets = fetch_budgets(&provider(), &urls, 32).await;

        assert_eq!(budgets.len(), 3);
        assert_eq!(budgets[0], "$1 million");
        assert_eq!(budgets[1], "£2 million");
        assert!(budgets[2].starts_with("Error: "));
    }
}
