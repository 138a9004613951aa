//! postcode.tech response models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Address returned by `GET /v1/postcode`
///
/// Fields the lookup does not interpret are kept in `extra` so they can be
/// carried into the merged output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostcodeTechAddress {
  #[serde(default)]
  pub street: String,

  #[serde(default)]
  pub city: String,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub municipality: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub province: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub geo: Option<PostcodeGeo>,

  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

/// Coordinates as reported by postcode.tech
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PostcodeGeo {
  #[serde(default, deserialize_with = "crate::de::lenient_f64")]
  pub lat: Option<f64>,

  #[serde(default, deserialize_with = "crate::de::lenient_f64")]
  pub lon: Option<f64>,
}

impl PostcodeTechAddress {
  /// All response fields as a flat JSON object
  pub fn to_fields(&self) -> Map<String, Value> {
    match serde_json::to_value(self) {
      Ok(Value::Object(fields)) => fields,
      _ => Map::new(),
    }
  }

  /// Latitude, if postcode.tech supplied one
  pub fn latitude(&self) -> Option<f64> {
    self.geo.and_then(|g| g.lat)
  }

  /// Longitude, if postcode.tech supplied one
  pub fn longitude(&self) -> Option<f64> {
    self.geo.and_then(|g| g.lon)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_postcode_tech_response() {
    let body = r#"{
      "street": "Museumplein",
      "city": "AMSTERDAM",
      "municipality": "Amsterdam",
      "province": "Noord-Holland",
      "geo": {"lat": 52.3578, "lon": 4.8818}
    }"#;

    let address: PostcodeTechAddress = serde_json::from_str(body).unwrap();
    assert_eq!(address.street, "Museumplein");
    assert_eq!(address.city, "AMSTERDAM");
    assert_eq!(address.municipality.as_deref(), Some("Amsterdam"));
    assert_eq!(address.latitude(), Some(52.3578));
    assert_eq!(address.longitude(), Some(4.8818));
    assert!(address.extra.is_empty());
  }

  #[test]
  fn test_unknown_fields_are_kept() {
    let body = r#"{"street": "Dam", "city": "Amsterdam", "neighbourhood": "Burgwallen"}"#;
    let address: PostcodeTechAddress = serde_json::from_str(body).unwrap();

    let fields = address.to_fields();
    assert_eq!(fields.get("street"), Some(&Value::String("Dam".to_string())));
    assert_eq!(fields.get("neighbourhood"), Some(&Value::String("Burgwallen".to_string())));
    assert!(!fields.contains_key("geo"));
    assert_eq!(address.latitude(), None);
  }
}
