//! Google Maps Geocoding and Places client

use super::GeocodingProvider;
use crate::transport::{HttpReply, Transport};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, instrument, warn};
use zl_core::{Config, Error, Result};
use zl_models::{FindPlaceResponse, GeocodeResponse, GeocodeResult};

const GEOCODE_PATH: &str = "/maps/api/geocode/json";
const FIND_PLACE_PATH: &str = "/maps/api/place/findplacefromtext/json";
const PLACE_DETAILS_PATH: &str = "/maps/api/place/details/json";
const PLACE_DETAILS_FIELDS: &str = "address_component,formatted_address,geometry";

/// Client for the Google Maps web services used by the resolver
pub struct GoogleMapsClient {
  transport: Arc<Transport>,
  base_url: String,
  api_key: String,
}

impl GoogleMapsClient {
  /// Create a new Google Maps client
  ///
  /// # Errors
  ///
  /// Returns `Error::Configuration` when no Google Maps key is configured.
  pub fn new(config: &Config, transport: Arc<Transport>) -> Result<Self> {
    let api_key = config.google_maps_key().ok_or_else(|| {
      Error::Configuration("Google Maps API key must be configured".to_string())
    })?;

    Ok(Self {
      transport,
      base_url: config.google_maps_base_url.clone(),
      api_key: api_key.to_string(),
    })
  }

  async fn request(&self, path: &str, mut params: Vec<(&str, String)>) -> Result<Option<HttpReply>> {
    params.insert(0, ("key", self.api_key.clone()));
    let url = Transport::build_url(&self.base_url, path, &params)?;
    let reply = self.transport.get(url, None).await?;

    if !reply.is_success() {
      warn!("Google Maps {} returned status {}", path, reply.status);
      return Ok(None);
    }

    Ok(Some(reply))
  }

  async fn fetch_geocode(
    &self,
    path: &str,
    params: Vec<(&str, String)>,
  ) -> Result<Option<GeocodeResult>> {
    let Some(reply) = self.request(path, params).await? else {
      return Ok(None);
    };

    let response: GeocodeResponse = match reply.json() {
      Ok(response) => response,
      Err(e) => {
        warn!("Ignoring unreadable Google Maps response: {}", e);
        return Ok(None);
      }
    };

    if !response.is_ok() {
      debug!(
        "Google Maps status {} ({})",
        response.status,
        response.error_message.as_deref().unwrap_or("no message")
      );
    }

    Ok(response.into_geocode_result())
  }
}

#[async_trait]
impl GeocodingProvider for GoogleMapsClient {
  #[instrument(skip(self))]
  async fn geocode(&self, address: &str) -> Result<Option<GeocodeResult>> {
    self.fetch_geocode(GEOCODE_PATH, vec![("address", address.to_string())]).await
  }

  #[instrument(skip(self))]
  async fn reverse_geocode(&self, lat: f64, lng: f64) -> Result<Option<GeocodeResult>> {
    self.fetch_geocode(GEOCODE_PATH, vec![("latlng", format!("{},{}", lat, lng))]).await
  }

  #[instrument(skip(self))]
  async fn find_place(&self, input: &str) -> Result<Option<String>> {
    let params = vec![
      ("input", input.to_string()),
      ("inputtype", "textquery".to_string()),
      ("fields", "place_id".to_string()),
    ];

    let Some(reply) = self.request(FIND_PLACE_PATH, params).await? else {
      return Ok(None);
    };

    let response: FindPlaceResponse = match reply.json() {
      Ok(response) => response,
      Err(e) => {
        warn!("Ignoring unreadable Find Place response: {}", e);
        return Ok(None);
      }
    };

    Ok(response.first_place_id().map(str::to_string))
  }

  #[instrument(skip(self))]
  async fn place_details(&self, place_id: &str) -> Result<Option<GeocodeResult>> {
    let params =
      vec![("place_id", place_id.to_string()), ("fields", PLACE_DETAILS_FIELDS.to_string())];
    self.fetch_geocode(PLACE_DETAILS_PATH, params).await
  }

  fn source_name(&self) -> &'static str {
    "google-maps"
  }
}

impl std::fmt::Debug for GoogleMapsClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("GoogleMapsClient")
      .field("base_url", &self.base_url)
      .field("api_key", &"***")
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_new_requires_key() {
    let mut config = Config::default_with_keys("pc", "gm");
    config.google_maps_api_key = None;
    let transport = Arc::new(Transport::new(&config).unwrap());

    let result = GoogleMapsClient::new(&config, transport);
    assert!(matches!(result, Err(Error::Configuration(_))));
  }

  #[test]
  fn test_debug_hides_key() {
    let config = Config::default_with_keys("pc", "very-secret");
    let transport = Arc::new(Transport::new(&config).unwrap());
    let client = GoogleMapsClient::new(&config, transport).unwrap();
    assert!(!format!("{:?}", client).contains("very-secret"));
  }
}
