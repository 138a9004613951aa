/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-dot-]browne[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! The normalized address record returned by a lookup

use crate::address::GeocodeResult;
use crate::postcode_tech::PostcodeTechAddress;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use zl_core::normalize_country;

/// Output keys owned by [`NormalizedAddress`]; provider fields with these
/// names are dropped during a merge.
pub const NORMALIZED_KEYS: &[&str] =
  &["street", "houseNumber", "postcode", "city", "municipality", "province", "country", "lat", "lng"];

/// Country code used for postcode.tech-only results (Dutch addresses only)
const POSTCODE_TECH_COUNTRY: &str = "NLD";

/// Final address record
///
/// Serializes to a flat JSON object. Extra provider fields carried over from
/// a postcode.tech merge appear alongside the normalized keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedAddress {
  pub street: String,
  pub house_number: Option<u32>,
  pub postcode: String,
  pub city: String,
  pub municipality: String,
  pub province: String,
  /// ISO-3 code for the supported countries, provider value otherwise
  pub country: String,
  pub lat: Option<f64>,
  pub lng: Option<f64>,

  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

impl NormalizedAddress {
  /// Build the record from a geocoding result
  ///
  /// The requested house number wins; without one the provider's street
  /// number is used when it is purely numeric.
  pub fn from_geocode(postcode: &str, house_number: Option<u32>, geocode: &GeocodeResult) -> Self {
    let components = &geocode.components;

    NormalizedAddress {
      street: components.street_name.clone(),
      house_number: house_number.or_else(|| components.street_number.trim().parse().ok()),
      postcode: postcode.to_string(),
      city: components.city.clone(),
      municipality: components.municipality.clone(),
      province: components.province.clone(),
      country: normalize_country(&components.country),
      lat: geocode.latitude,
      lng: geocode.longitude,
      extra: Map::new(),
    }
  }

  /// Build the record from postcode.tech alone, used when geocoding is disabled
  pub fn from_postcode_tech(
    postcode: &str,
    house_number: Option<u32>,
    address: &PostcodeTechAddress,
  ) -> Self {
    NormalizedAddress {
      street: address.street.clone(),
      house_number,
      postcode: postcode.to_string(),
      city: address.city.clone(),
      municipality: address.municipality.clone().unwrap_or_default(),
      province: address.province.clone().unwrap_or_default(),
      country: POSTCODE_TECH_COUNTRY.to_string(),
      lat: address.latitude(),
      lng: address.longitude(),
      extra: Map::new(),
    }
  }

  /// Fold provider fields into this record; the record's own values win
  pub fn merged_with(mut self, provider_fields: Map<String, Value>) -> Self {
    let mut extra = merge_fields(provider_fields, std::mem::take(&mut self.extra));
    extra.retain(|key, _| !NORMALIZED_KEYS.contains(&key.as_str()));
    self.extra = extra;
    self
  }

  /// Serialize to compact JSON
  pub fn to_json(&self) -> serde_json::Result<String> {
    serde_json::to_string(self)
  }

  /// Serialize to indented JSON
  pub fn to_json_pretty(&self) -> serde_json::Result<String> {
    serde_json::to_string_pretty(self)
  }
}

/// Union of two flat records, `overlay` winning on key collisions
pub fn merge_fields(base: Map<String, Value>, overlay: Map<String, Value>) -> Map<String, Value> {
  let mut merged = base;
  merged.extend(overlay);
  merged
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::address::AddressComponents;
  use serde_json::json;

  fn object(value: Value) -> Map<String, Value> {
    match value {
      Value::Object(map) => map,
      _ => panic!("expected a JSON object"),
    }
  }

  fn dam_geocode() -> GeocodeResult {
    GeocodeResult {
      latitude: Some(52.3731),
      longitude: Some(4.8926),
      formatted_address: "Dam 1, 1012 JS Amsterdam, Netherlands".to_string(),
      components: AddressComponents {
        street_number: "1".to_string(),
        street_name: "Dam".to_string(),
        city: "Amsterdam".to_string(),
        municipality: "Amsterdam".to_string(),
        province: "Noord-Holland".to_string(),
        country: "Netherlands".to_string(),
        postal_code: "1012 JS".to_string(),
      },
    }
  }

  #[test]
  fn test_merge_fields_union_with_overlay_precedence() {
    let postcode = object(json!({"street": "DAM", "neighbourhood": "Burgwallen"}));
    let geocode = object(json!({"street": "Dam", "lat": 52.37}));

    let merged = merge_fields(postcode, geocode);
    assert_eq!(merged.len(), 3);
    assert_eq!(merged["street"], json!("Dam"));
    assert_eq!(merged["neighbourhood"], json!("Burgwallen"));
    assert_eq!(merged["lat"], json!(52.37));
  }

  #[test]
  fn test_merge_fields_disjoint_is_union() {
    let merged = merge_fields(object(json!({"a": 1})), object(json!({"b": 2})));
    assert_eq!(Value::Object(merged), json!({"a": 1, "b": 2}));
  }

  #[test]
  fn test_from_geocode_normalizes_country() {
    let address = NormalizedAddress::from_geocode("1012JS", Some(1), &dam_geocode());
    assert_eq!(address.street, "Dam");
    assert_eq!(address.house_number, Some(1));
    assert_eq!(address.postcode, "1012JS");
    assert_eq!(address.country, "NLD");
    assert_eq!(address.lat, Some(52.3731));
  }

  #[test]
  fn test_from_geocode_falls_back_to_numeric_street_number() {
    let mut geocode = dam_geocode();
    assert_eq!(NormalizedAddress::from_geocode("1012JS", None, &geocode).house_number, Some(1));

    geocode.components.street_number = "1a".to_string();
    assert_eq!(NormalizedAddress::from_geocode("1012JS", None, &geocode).house_number, None);
  }

  #[test]
  fn test_merged_with_keeps_geocode_values() {
    let provider = object(json!({
      "street": "DAM",
      "city": "AMSTERDAM",
      "neighbourhood": "Burgwallen"
    }));

    let address = NormalizedAddress::from_geocode("1012JS", Some(1), &dam_geocode()).merged_with(provider);
    assert_eq!(address.street, "Dam");
    assert_eq!(address.city, "Amsterdam");
    assert_eq!(address.extra.get("neighbourhood"), Some(&json!("Burgwallen")));
    assert!(!address.extra.contains_key("street"));
  }

  #[test]
  fn test_serializes_flat_camel_case() {
    let address = NormalizedAddress::from_geocode("1012JS", Some(1), &dam_geocode())
      .merged_with(object(json!({"neighbourhood": "Burgwallen"})));

    let value: Value = serde_json::from_str(&address.to_json().unwrap()).unwrap();
    assert_eq!(value["houseNumber"], json!(1));
    assert_eq!(value["country"], json!("NLD"));
    assert_eq!(value["lng"], json!(4.8926));
    assert_eq!(value["neighbourhood"], json!("Burgwallen"));
    assert!(value.get("extra").is_none());
  }

  #[test]
  fn test_from_postcode_tech() {
    let address: PostcodeTechAddress = serde_json::from_value(json!({
      "street": "Museumplein",
      "city": "Amsterdam",
      "municipality": "Amsterdam",
      "province": "Noord-Holland",
      "geo": {"lat": 52.3578, "lon": 4.8818}
    }))
    .unwrap();

    let normalized = NormalizedAddress::from_postcode_tech("1071DJ", Some(6), &address);
    assert_eq!(normalized.street, "Museumplein");
    assert_eq!(normalized.province, "Noord-Holland");
    assert_eq!(normalized.country, "NLD");
    assert_eq!(normalized.lat, Some(52.3578));
    assert_eq!(normalized.lng, Some(4.8818));
  }
}
