use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

use crate::core::Bar;
use crate::data::DataProvider;
use crate::error::ChartResult;

pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(12);

#[derive(Debug, Deserialize)]
struct BarsDocument {
    bars: Vec<Bar>,
}

/// Decodes a `{ "bars": [...] }` JSON document into bars.
///
/// Missing or mistyped fields fail the whole decode; the provider turns
/// that into the empty-dataset failure signal instead of letting partial
/// values leak into rendering.
pub fn decode_bars(body: &str) -> ChartResult<Vec<Bar>> {
    let document: BarsDocument = serde_json::from_str(body)?;
    Ok(document.bars)
}

/// HTTP + JSON bar source.
///
/// One GET per fetch; no retry and no partial-result handling. Transport,
/// HTTP-status and decode failures all degrade to an empty dataset.
#[derive(Debug)]
pub struct JsonDataProvider {
    url: String,
    client: reqwest::blocking::Client,
}

impl JsonDataProvider {
    pub fn new(url: impl Into<String>) -> ChartResult<Self> {
        Self::with_timeout(url, DEFAULT_FETCH_TIMEOUT)
    }

    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> ChartResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fallible fetch path for hosts that want the underlying error.
    pub fn try_fetch_bars(&self) -> ChartResult<Vec<Bar>> {
        let body = self
            .client
            .get(&self.url)
            .send()?
            .error_for_status()?
            .text()?;
        decode_bars(&body)
    }
}

impl DataProvider for JsonDataProvider {
    fn fetch_bars(&self) -> Vec<Bar> {
        match self.try_fetch_bars() {
            Ok(bars) => bars,
            Err(err) => {
                warn!(url = %self.url, error = %err, "bar fetch failed, continuing with empty dataset");
                Vec::new()
            }
        }
    }
}
