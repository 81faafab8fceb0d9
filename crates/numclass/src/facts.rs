use crate::prelude::*;
use futures::future::{BoxFuture, FutureExt};
use numclass_core::fact::{fact_url, FactCategory, DEFAULT_FACT_API_URL};
use std::time::Duration;

#[derive(Debug, Clone, clap::Args)]
pub struct FactOptions {
    /// Base URL of the Numbers API
    #[arg(long, env = "NUMBERS_API_URL", default_value = DEFAULT_FACT_API_URL)]
    pub fact_api_url: String,

    /// Fact category to request (trivia, math, year, date)
    #[arg(long, env = "FACT_CATEGORY", default_value = "math")]
    pub fact_category: FactCategory,

    /// Timeout for the fact request, in milliseconds
    #[arg(long, env = "FACT_TIMEOUT_MS", default_value = "3000")]
    pub fact_timeout_ms: u64,
}

/// Source of free-form trivia about an integer.
///
/// One call per classification, never retried. Every failure is reported as
/// an [`Error`] so the caller can fall back.
pub trait FactProvider: Send + Sync {
    fn fetch(&self, number: i64) -> BoxFuture<'_, Result<String, Error>>;
}

/// Fact provider backed by the Numbers API (`{base}/{number}/{category}`)
#[derive(Debug, Clone)]
pub struct NumbersApi {
    client: reqwest::Client,
    base_url: String,
    category: FactCategory,
    timeout: Duration,
}

impl NumbersApi {
    pub fn new(
        base_url: impl Into<String>,
        category: FactCategory,
        timeout: Duration,
    ) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("numclass/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            category,
            timeout,
        })
    }

    pub fn from_options(options: &FactOptions) -> Result<Self, Error> {
        Self::new(
            options.fact_api_url.clone(),
            options.fact_category,
            Duration::from_millis(options.fact_timeout_ms),
        )
    }

    fn map_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout(self.timeout)
        } else {
            Error::Network(err.to_string())
        }
    }

    async fn fetch_text(&self, number: i64) -> Result<String, Error> {
        let url = fact_url(&self.base_url, number, self.category);
        log::debug!("Fetching fun fact from {url}");

        let response = self
            .client
            .get(&url)
            .header("Accept", "text/plain")
            .send()
            .await
            .map_err(|e| self.map_error(e))?;

        if !response.status().is_success() {
            return Err(Error::Status(response.status().as_u16()));
        }

        let text = response.text().await.map_err(|e| self.map_error(e))?;

        if text.trim().is_empty() {
            return Err(Error::EmptyBody);
        }

        Ok(text)
    }
}

impl FactProvider for NumbersApi {
    fn fetch(&self, number: i64) -> BoxFuture<'_, Result<String, Error>> {
        self.fetch_text(number).boxed()
    }
}
