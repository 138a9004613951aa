//! HTTP transport layer shared by the provider clients

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};
use url::Url;
use zl_core::{Config, Error, Result};

/// HTTP transport for provider requests
///
/// Wraps a single `reqwest::Client` so connection pools are shared between
/// the postcode.tech and Google clients.
#[derive(Debug, Clone)]
pub struct Transport {
  client: Client,
}

/// Status and body of a completed request
#[derive(Debug, Clone)]
pub struct HttpReply {
  /// HTTP status code
  pub status: StatusCode,
  /// Raw response body
  pub body: String,
}

impl HttpReply {
  /// Whether the status is 2xx
  pub fn is_success(&self) -> bool {
    self.status.is_success()
  }

  /// Deserialize the body as JSON
  pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
    serde_json::from_str(&self.body).map_err(|e| {
      error!("Failed to parse JSON response: {}", e);
      Error::Parse(format!(
        "Failed to parse response: {}. Response: {}",
        e,
        preview(&self.body, 200)
      ))
    })
  }
}

impl Transport {
  /// Create a new transport instance
  pub fn new(config: &Config) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .user_agent(zl_core::USER_AGENT)
      .build()
      .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

    Ok(Self { client })
  }

  /// Join a base URL, an endpoint path and query parameters
  ///
  /// Parameter values are percent-encoded here and nowhere else.
  pub fn build_url(base_url: &str, path: &str, params: &[(&str, String)]) -> Result<Url> {
    let mut url = Url::parse(&format!("{}{}", base_url.trim_end_matches('/'), path))
      .map_err(|e| Error::Configuration(format!("Invalid base URL {}: {}", base_url, e)))?;

    if !params.is_empty() {
      let mut query_pairs = url.query_pairs_mut();
      for (key, value) in params {
        query_pairs.append_pair(key, value);
      }
    }

    Ok(url)
  }

  /// Make a GET request and return its status and body
  ///
  /// Non-2xx statuses are not errors here; each provider decides what a
  /// failed status means. Only transport failures are returned as `Err`.
  #[instrument(skip(self, url, bearer), fields(path = %url.path()))]
  pub async fn get(&self, url: Url, bearer: Option<&str>) -> Result<HttpReply> {
    let mut request = self.client.get(url);
    if let Some(token) = bearer {
      request = request.bearer_auth(token);
    }

    let response = request.send().await.map_err(|e| {
      warn!("Request failed: {}", e);
      Error::Http(format!("Request failed: {}", e.without_url()))
    })?;

    let status = response.status();
    let body = response
      .text()
      .await
      .map_err(|e| Error::Http(format!("Failed to read response body: {}", e.without_url())))?;

    debug!("Response status {} with {} bytes", status, body.len());

    Ok(HttpReply { status, body })
  }
}

fn preview(text: &str, max_chars: usize) -> &str {
  match text.char_indices().nth(max_chars) {
    Some((idx, _)) => &text[..idx],
    None => text,
  }
}
