use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, error};

use crate::model::config::{Category, TaskFormat, TaskSource, WeatherSource};
use crate::model::task::CategoryBucket;
use crate::parse::{parse_sheet, parse_structured};

/// Error type for fetching a remote or local source
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("could not build http client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Request { url: String, source: reqwest::Error },
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("could not parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Blocking text fetcher for HTTP(S) URLs and local files
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::blocking::Client,
}

impl Fetcher {
    pub fn new(user_agent: &str) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Fetcher { client })
    }

    /// Read a source as text.
    ///
    /// `http://` and `https://` sources are requested with `timeout`; anything
    /// else is a file path, with an optional `file://` prefix.
    pub fn get_text(&self, location: &str, timeout: Duration) -> Result<String, FetchError> {
        if !is_http(location) {
            let path = PathBuf::from(location.strip_prefix("file://").unwrap_or(location));
            debug!(path = %path.display(), "reading local source");
            return fs::read_to_string(&path).map_err(|e| FetchError::Read { path, source: e });
        }

        debug!(url = location, ?timeout, "requesting");
        let request_error = |e| FetchError::Request {
            url: location.to_string(),
            source: e,
        };
        let response = self
            .client
            .get(location)
            .timeout(timeout)
            .send()
            .map_err(request_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: location.to_string(),
                status: status.as_u16(),
            });
        }
        response.text().map_err(request_error)
    }
}

fn is_http(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Fetch and normalize the task source.
///
/// Never fails: any error is logged and every category comes back empty.
pub fn fetch_tasks(fetcher: &Fetcher, source: &TaskSource, categories: &[Category]) -> CategoryBucket {
    match try_fetch_tasks(fetcher, source, categories) {
        Ok(bucket) => bucket,
        Err(e) => {
            error!(source = %source.url, "error fetching tasks: {e}");
            CategoryBucket::empty(categories.iter().map(|c| c.key.as_str()))
        }
    }
}

fn try_fetch_tasks(
    fetcher: &Fetcher,
    source: &TaskSource,
    categories: &[Category],
) -> Result<CategoryBucket, FetchError> {
    let text = fetcher.get_text(&source.url, Duration::from_secs(source.timeout_secs))?;
    let bucket = match source.format {
        TaskFormat::Csv => parse_sheet(&text, categories)?,
        TaskFormat::Json => parse_structured(&text, categories)?,
    };
    Ok(bucket)
}

/// Fetch the weather snippet, trimmed.
///
/// Never fails: errors and empty responses yield the configured placeholder.
pub fn fetch_weather(fetcher: &Fetcher, source: &WeatherSource) -> String {
    match fetcher.get_text(&source.url, Duration::from_secs(source.timeout_secs)) {
        Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
        Ok(_) => {
            error!(source = %source.url, "error fetching weather: empty response");
            source.placeholder.clone()
        }
        Err(e) => {
            error!(source = %source.url, "error fetching weather: {e}");
            source.placeholder.clone()
        }
    }
}
