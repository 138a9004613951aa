use anyhow::{Context, Result};
use std::env;
use zl_core::{Config, LookupMode};

/// Load the core configuration, letting a command-line mode override the environment
pub fn load(mode_override: Option<LookupMode>) -> Result<Config> {
  Config::from_vars(|name| match (name, mode_override) {
    ("ZL_LOOKUP_MODE", Some(mode)) => Some(mode.to_string()),
    _ => env::var(name).ok(),
  })
  .context("Invalid lookup configuration, check POSTCODE_TECH_API_KEY and GOOGLE_MAPS_API_KEY")
}
