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

//! Google Maps Geocoding and Places response models

use crate::address::{AddressComponents, GeocodeResult};
use serde::{Deserialize, Serialize};

/// Status value Google returns for a successful request
pub const STATUS_OK: &str = "OK";

/// Response from the Geocoding API or the Place Details API
///
/// Geocoding puts its matches in `results`, Place Details returns a single
/// `result`. Both shapes deserialize into this struct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResponse {
  /// Request status ("OK", "ZERO_RESULTS", "REQUEST_DENIED", ...)
  #[serde(default)]
  pub status: String,

  /// Geocoding matches
  #[serde(default)]
  pub results: Vec<PlaceResult>,

  /// Place Details match
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub result: Option<PlaceResult>,

  /// Error detail for non-OK statuses
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub error_message: Option<String>,
}

impl GeocodeResponse {
  /// Whether the request succeeded
  pub fn is_ok(&self) -> bool {
    self.status == STATUS_OK
  }

  /// Normalize the first match, if the response is usable
  ///
  /// A Place Details `result` takes precedence over Geocoding `results`.
  pub fn into_geocode_result(self) -> Option<GeocodeResult> {
    if !self.is_ok() {
      return None;
    }

    let place = self.result.or_else(|| self.results.into_iter().next())?;
    Some(place.into())
  }
}

/// One geocoded place
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceResult {
  /// Address parts tagged with their component types
  #[serde(default)]
  pub address_components: Vec<AddressComponentEntry>,

  /// Human-readable address
  #[serde(default)]
  pub formatted_address: String,

  /// Location of the place
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub geometry: Option<Geometry>,

  /// Google place id
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub place_id: Option<String>,
}

impl From<PlaceResult> for GeocodeResult {
  fn from(place: PlaceResult) -> Self {
    let location = place.geometry.and_then(|g| g.location).unwrap_or_default();

    GeocodeResult {
      latitude: location.lat,
      longitude: location.lng,
      formatted_address: place.formatted_address,
      components: AddressComponents::from_entries(&place.address_components),
    }
  }
}

/// Raw address component as returned by Google
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressComponentEntry {
  /// Full text, e.g. "Netherlands"
  #[serde(default)]
  pub long_name: String,

  /// Abbreviated text, e.g. "NL"
  #[serde(default)]
  pub short_name: String,

  /// Component types; the first one decides the normalized field
  #[serde(default)]
  pub types: Vec<String>,
}

/// Geometry block of a place
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
  /// Point location, absent for some Place Details field masks
  #[serde(default)]
  pub location: Option<LatLng>,
}

/// Coordinates; either side may be missing or sent as a numeric string
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
  /// Latitude
  #[serde(default, deserialize_with = "crate::de::lenient_f64")]
  pub lat: Option<f64>,

  /// Longitude
  #[serde(default, deserialize_with = "crate::de::lenient_f64")]
  pub lng: Option<f64>,
}

/// Response from the Find Place From Text API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindPlaceResponse {
  /// Request status
  #[serde(default)]
  pub status: String,

  /// Matching places, best first
  #[serde(default)]
  pub candidates: Vec<PlaceCandidate>,

  /// Error detail for non-OK statuses
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub error_message: Option<String>,
}

impl FindPlaceResponse {
  /// Place id of the first candidate, if the search succeeded
  pub fn first_place_id(&self) -> Option<&str> {
    if self.status != STATUS_OK {
      return None;
    }

    self
      .candidates
      .first()
      .and_then(|c| c.place_id.as_deref())
      .filter(|id| !id.trim().is_empty())
  }
}

/// One Find Place candidate; only `place_id` is requested
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceCandidate {
  /// Google place id
  #[serde(default)]
  pub place_id: Option<String>,
}

#[cfg(test)]
mod tests {
  use super::*;

  const GEOCODE_OK: &str = r#"{
    "results": [{
      "address_components": [
        {"long_name": "1", "short_name": "1", "types": ["street_number"]},
        {"long_name": "Dam", "short_name": "Dam", "types": ["route"]},
        {"long_name": "Amsterdam", "short_name": "Amsterdam", "types": ["locality", "political"]},
        {"long_name": "Netherlands", "short_name": "NL", "types": ["country", "political"]},
        {"long_name": "1012 JS", "short_name": "1012 JS", "types": ["postal_code"]}
      ],
      "formatted_address": "Dam 1, 1012 JS Amsterdam, Netherlands",
      "geometry": {"location": {"lat": 52.3731, "lng": 4.8926}},
      "place_id": "ChIJ-dam"
    }],
    "status": "OK"
  }"#;

  #[test]
  fn test_geocode_results_payload() {
    let response: GeocodeResponse = serde_json::from_str(GEOCODE_OK).unwrap();
    let result = response.into_geocode_result().unwrap();

    assert_eq!(result.latitude, Some(52.3731));
    assert_eq!(result.longitude, Some(4.8926));
    assert_eq!(result.formatted_address, "Dam 1, 1012 JS Amsterdam, Netherlands");
    assert_eq!(result.components.street_name, "Dam");
    assert_eq!(result.components.country, "Netherlands");
  }

  #[test]
  fn test_place_details_payload() {
    let body = r#"{
      "result": {
        "address_components": [{"long_name": "Kerkstraat", "types": ["route"]}],
        "formatted_address": "Kerkstraat, Amsterdam",
        "geometry": {"location": {"lat": "52.36", "lng": "4.88"}}
      },
      "status": "OK"
    }"#;

    let result: GeocodeResult =
      serde_json::from_str::<GeocodeResponse>(body).unwrap().into_geocode_result().unwrap();
    assert_eq!(result.components.street_name, "Kerkstraat");
    assert_eq!(result.coordinates(), Some((52.36, 4.88)));
  }

  #[test]
  fn test_non_ok_or_empty_is_unusable() {
    let zero: GeocodeResponse =
      serde_json::from_str(r#"{"results": [], "status": "ZERO_RESULTS"}"#).unwrap();
    assert!(zero.into_geocode_result().is_none());

    let ok_but_empty: GeocodeResponse =
      serde_json::from_str(r#"{"results": [], "status": "OK"}"#).unwrap();
    assert!(ok_but_empty.into_geocode_result().is_none());

    let denied: GeocodeResponse = serde_json::from_str(
      r#"{"results": [], "status": "REQUEST_DENIED", "error_message": "The provided API key is invalid."}"#,
    )
    .unwrap();
    assert_eq!(denied.error_message.as_deref(), Some("The provided API key is invalid."));
    assert!(denied.into_geocode_result().is_none());
  }

  #[test]
  fn test_missing_geometry_leaves_coordinates_absent() {
    let body = r#"{"results": [{"formatted_address": "Somewhere"}], "status": "OK"}"#;
    let result = serde_json::from_str::<GeocodeResponse>(body).unwrap().into_geocode_result().unwrap();
    assert_eq!(result.latitude, None);
    assert_eq!(result.longitude, None);
    assert!(!result.has_coordinates());
  }

  #[test]
  fn test_find_place_first_candidate() {
    let found: FindPlaceResponse = serde_json::from_str(
      r#"{"candidates": [{"place_id": "abc"}, {"place_id": "def"}], "status": "OK"}"#,
    )
    .unwrap();
    assert_eq!(found.first_place_id(), Some("abc"));

    let none: FindPlaceResponse =
      serde_json::from_str(r#"{"candidates": [], "status": "ZERO_RESULTS"}"#).unwrap();
    assert_eq!(none.first_place_id(), None);

    let blank: FindPlaceResponse =
      serde_json::from_str(r#"{"candidates": [{"place_id": ""}], "status": "OK"}"#).unwrap();
    assert_eq!(blank.first_place_id(), None);
  }
}
