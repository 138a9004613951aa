//! Provider combination modes

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which providers a lookup consults and in what order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LookupMode {
  /// Geocode directly when a house number is given, postcode.tech first otherwise
  #[default]
  GeocodeFirst,
  /// Always postcode.tech first, then geocode and merge
  Combined,
  /// postcode.tech only, geocoding disabled
  PostcodeOnly,
}

impl LookupMode {
  /// Whether Google geocoding is part of this mode
  pub fn uses_geocoding(&self) -> bool {
    !matches!(self, LookupMode::PostcodeOnly)
  }

  /// Whether postcode.tech must be queried before geocoding
  pub fn requires_postcode_provider(&self, house_number: Option<u32>) -> bool {
    match self {
      LookupMode::GeocodeFirst => house_number.is_none(),
      LookupMode::Combined | LookupMode::PostcodeOnly => true,
    }
  }
}

impl std::fmt::Display for LookupMode {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      LookupMode::GeocodeFirst => write!(f, "geocode-first"),
      LookupMode::Combined => write!(f, "combined"),
      LookupMode::PostcodeOnly => write!(f, "postcode-only"),
    }
  }
}

impl FromStr for LookupMode {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
      "geocode-first" | "geocode" => Ok(LookupMode::GeocodeFirst),
      "combined" => Ok(LookupMode::Combined),
      "postcode-only" | "postcode" => Ok(LookupMode::PostcodeOnly),
      other => Err(Error::Configuration(format!("Unknown lookup mode: {}", other))),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_mode_parsing() {
    assert_eq!("geocode-first".parse::<LookupMode>().unwrap(), LookupMode::GeocodeFirst);
    assert_eq!("COMBINED".parse::<LookupMode>().unwrap(), LookupMode::Combined);
    assert_eq!("postcode_only".parse::<LookupMode>().unwrap(), LookupMode::PostcodeOnly);
    assert!("both".parse::<LookupMode>().is_err());
  }

  #[test]
  fn test_postcode_provider_requirement() {
    assert!(!LookupMode::GeocodeFirst.requires_postcode_provider(Some(12)));
    assert!(LookupMode::GeocodeFirst.requires_postcode_provider(None));
    assert!(LookupMode::Combined.requires_postcode_provider(Some(12)));
    assert!(LookupMode::PostcodeOnly.requires_postcode_provider(Some(12)));
    assert!(!LookupMode::PostcodeOnly.uses_geocoding());
  }

  #[test]
  fn test_display_round_trips_through_from_str() {
    for mode in [LookupMode::GeocodeFirst, LookupMode::Combined, LookupMode::PostcodeOnly] {
      assert_eq!(mode.to_string().parse::<LookupMode>().unwrap(), mode);
    }
  }
}
