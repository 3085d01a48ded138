use anyhow::Result;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::warn;

/// How often a GET is repeated before the failure is reported.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Attempts after the first one
    pub retries: usize,
    pub delay: Duration,
}

impl RetryPolicy {
    pub const fn new(retries: usize, delay: Duration) -> Self {
        Self { retries, delay }
    }
}

/// Client errors (4xx) will not change on a second try.
fn is_retryable(err: &reqwest::Error) -> bool {
    !err.status().is_some_and(|status| status.is_client_error())
}

/// GETs `url`, treating non-2xx as failure and retrying transient failures
/// (connection errors, timeouts, 5xx) according to `policy`.
pub async fn get_with_retry(client: &Client, url: &str, policy: RetryPolicy) -> Result<Response> {
    let mut attempt = 0;
    loop {
        let err = match client.get(url).send().await.and_then(Response::error_for_status) {
            Ok(response) => return Ok(response),
            Err(err) => err,
        };
        attempt += 1;
        if attempt > policy.retries || !is_retryable(&err) {
            return Err(err.into());
        }
        warn!(url, attempt, retries = policy.retries, error = %err, "GET failed, retrying");
        tokio::time::sleep(policy.delay).await;
    }
}
