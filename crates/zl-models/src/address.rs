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

//! Provider-neutral address types produced by response normalization

use crate::google::AddressComponentEntry;
use serde::{Deserialize, Serialize};

/// Address parts extracted from a geocoding response
///
/// Every field defaults to an empty string when the provider did not
/// return a matching component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressComponents {
  /// House number as returned by the provider (may carry an addition, e.g. "12a")
  pub street_number: String,

  /// Street name (`route`)
  pub street_name: String,

  /// City (`locality`)
  pub city: String,

  /// Municipality (`administrative_area_level_2`)
  pub municipality: String,

  /// Province or state (`administrative_area_level_1`)
  pub province: String,

  /// Country long name
  pub country: String,

  /// Postal code
  pub postal_code: String,
}

impl AddressComponents {
  /// Build components by scanning each entry's first type tag.
  ///
  /// Unknown types are ignored. When a type occurs more than once the last
  /// entry wins.
  pub fn from_entries(entries: &[AddressComponentEntry]) -> Self {
    let mut address = AddressComponents::default();

    for entry in entries {
      let slot = match entry.types.first().map(String::as_str) {
        Some("street_number") => &mut address.street_number,
        Some("route") => &mut address.street_name,
        Some("locality") => &mut address.city,
        Some("administrative_area_level_2") => &mut address.municipality,
        Some("administrative_area_level_1") => &mut address.province,
        Some("country") => &mut address.country,
        Some("postal_code") => &mut address.postal_code,
        _ => continue,
      };
      *slot = entry.long_name.clone();
    }

    address
  }

  /// Whether a usable street name was found
  pub fn has_street_name(&self) -> bool {
    !self.street_name.trim().is_empty()
  }
}

/// A single geocoded location
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
  /// Latitude, absent when the provider returned no geometry
  pub latitude: Option<f64>,

  /// Longitude, absent when the provider returned no geometry
  pub longitude: Option<f64>,

  /// Provider formatted address
  pub formatted_address: String,

  /// Normalized address components
  pub components: AddressComponents,
}

impl GeocodeResult {
  /// Both coordinates, if present
  pub fn coordinates(&self) -> Option<(f64, f64)> {
    self.latitude.zip(self.longitude)
  }

  /// Whether the result carries a latitude
  pub fn has_coordinates(&self) -> bool {
    self.latitude.is_some()
  }

  /// Whether the result names a street
  pub fn has_street_name(&self) -> bool {
    self.components.has_street_name()
  }

  /// Replace only the street name, keeping coordinates and other components
  pub fn with_street_name(mut self, street_name: &str) -> Self {
    self.components.street_name = street_name.to_string();
    self
  }
}
