/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
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

//! Traits for the address data providers.

pub mod google;
pub mod postcode_tech;

use async_trait::async_trait;
use zl_core::Result;
use zl_models::{GeocodeResult, PostcodeTechAddress};

/// Postal code metadata source.
///
/// Implement this trait to add a new postcode data source.
#[async_trait]
pub trait PostcodeProvider: Send + Sync {
  /// Look up street and city data for a postal code.
  ///
  /// A non-success HTTP status is returned as `Error::Provider`.
  async fn lookup(&self, postal_code: &str, house_number: Option<u32>)
    -> Result<PostcodeTechAddress>;

  /// Get the name of this data source.
  fn source_name(&self) -> &'static str;
}

/// Geocoding and place search source.
///
/// Every method returns `Ok(None)` when the provider answered but had no
/// usable result; `Err` is reserved for transport failures.
#[async_trait]
pub trait GeocodingProvider: Send + Sync {
  /// Forward geocode a free-text address.
  async fn geocode(&self, address: &str) -> Result<Option<GeocodeResult>>;

  /// Reverse geocode a coordinate pair.
  async fn reverse_geocode(&self, lat: f64, lng: f64) -> Result<Option<GeocodeResult>>;

  /// Text search returning the first candidate's place id.
  async fn find_place(&self, input: &str) -> Result<Option<String>>;

  /// Fetch address components and geometry for a place id.
  async fn place_details(&self, place_id: &str) -> Result<Option<GeocodeResult>>;

  /// Get the name of this data source.
  fn source_name(&self) -> &'static str;
}
