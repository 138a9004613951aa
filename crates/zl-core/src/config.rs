//! Configuration management for the lookup client

use crate::error::{Error, Result};
use crate::types::LookupMode;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use url::Url;

/// Main configuration struct for the lookup client
#[derive(Clone, Deserialize, Serialize)]
pub struct Config {
  /// postcode.tech API key
  pub postcode_tech_api_key: String,

  /// Google Maps API key, only needed when geocoding is enabled
  pub google_maps_api_key: Option<String>,

  /// Which providers are consulted and in what order
  pub mode: LookupMode,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Base URL for postcode.tech
  pub postcode_tech_base_url: String,

  /// Base URL for the Google Maps web services
  pub google_maps_base_url: String,

  /// Country appended to free-text geocoding queries
  pub default_country: String,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();
    Self::from_vars(|name| env::var(name).ok())
  }

  /// Build configuration from an arbitrary variable source
  pub fn from_vars<F>(var: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let postcode_tech_api_key = var("POSTCODE_TECH_API_KEY").unwrap_or_default();
    let google_maps_api_key = var("GOOGLE_MAPS_API_KEY").filter(|k| !k.trim().is_empty());

    let mode = match var("ZL_LOOKUP_MODE") {
      Some(raw) => raw.parse()?,
      None => LookupMode::default(),
    };

    let timeout_secs = var("ZL_TIMEOUT_SECS")
      .unwrap_or_else(|| crate::DEFAULT_TIMEOUT_SECS.to_string())
      .parse()
      .map_err(|_| Error::Configuration("Invalid ZL_TIMEOUT_SECS".to_string()))?;

    let postcode_tech_base_url = var("ZL_POSTCODE_TECH_BASE_URL")
      .unwrap_or_else(|| crate::POSTCODE_TECH_BASE_URL.to_string());
    let google_maps_base_url =
      var("ZL_GOOGLE_MAPS_BASE_URL").unwrap_or_else(|| crate::GOOGLE_MAPS_BASE_URL.to_string());
    let default_country =
      var("ZL_DEFAULT_COUNTRY").unwrap_or_else(|| crate::DEFAULT_COUNTRY.to_string());

    let config = Config {
      postcode_tech_api_key,
      google_maps_api_key,
      mode,
      timeout_secs,
      postcode_tech_base_url,
      google_maps_base_url,
      default_country,
    };
    config.validate()?;
    Ok(config)
  }

  /// Create a config with default values (for testing)
  pub fn default_with_keys(postcode_tech_api_key: &str, google_maps_api_key: &str) -> Self {
    Config {
      postcode_tech_api_key: postcode_tech_api_key.to_string(),
      google_maps_api_key: Some(google_maps_api_key.to_string()),
      mode: LookupMode::default(),
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
      postcode_tech_base_url: crate::POSTCODE_TECH_BASE_URL.to_string(),
      google_maps_base_url: crate::GOOGLE_MAPS_BASE_URL.to_string(),
      default_country: crate::DEFAULT_COUNTRY.to_string(),
    }
  }

  /// Check that every key the selected mode needs is present
  pub fn validate(&self) -> Result<()> {
    if self.postcode_tech_api_key.trim().is_empty() {
      return Err(Error::Configuration(
        "POSTCODE_TECH_API_KEY must be set to a postcode.tech API key".to_string(),
      ));
    }

    if self.mode.uses_geocoding() && self.google_maps_key().is_none() {
      return Err(Error::Configuration(format!(
        "GOOGLE_MAPS_API_KEY must be set when lookup mode is {}",
        self.mode
      )));
    }

    if self.timeout_secs == 0 {
      return Err(Error::Configuration("ZL_TIMEOUT_SECS must be greater than zero".to_string()));
    }

    for (name, raw) in [
      ("ZL_POSTCODE_TECH_BASE_URL", &self.postcode_tech_base_url),
      ("ZL_GOOGLE_MAPS_BASE_URL", &self.google_maps_base_url),
    ] {
      Url::parse(raw).map_err(|e| Error::Configuration(format!("Invalid {}: {}", name, e)))?;
    }

    Ok(())
  }

  /// The Google Maps key, ignoring blank values
  pub fn google_maps_key(&self) -> Option<&str> {
    self.google_maps_api_key.as_deref().map(str::trim).filter(|k| !k.is_empty())
  }
}

impl std::fmt::Debug for Config {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Config")
      .field("postcode_tech_api_key", &"***")
      .field("google_maps_api_key", &self.google_maps_api_key.as_ref().map(|_| "***"))
      .field("mode", &self.mode)
      .field("timeout_secs", &self.timeout_secs)
      .field("postcode_tech_base_url", &self.postcode_tech_base_url)
      .field("google_maps_base_url", &self.google_maps_base_url)
      .field("default_country", &self.default_country)
      .finish()
  }
}
