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

//! Address resolution across postcode.tech and Google Maps

use crate::providers::{
  google::GoogleMapsClient, postcode_tech::PostcodeTechClient, GeocodingProvider,
  PostcodeProvider,
};
use crate::transport::Transport;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use zl_core::{postal_codes_match, AddressQuery, Config, Error, LookupMode, Result};
use zl_models::{GeocodeResult, NormalizedAddress, PostcodeTechAddress};

/// Resolves a postal code and optional house number into a normalized address
///
/// Provider calls within one `resolve` run strictly in sequence since each
/// fallback depends on the previous answer. The resolver itself holds no
/// mutable state and can be shared between tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use zl_client::AddressResolver;
/// use zl_core::Config;
///
/// # async fn run() -> zl_core::Result<()> {
/// let resolver = AddressResolver::from_config(Config::from_env()?)?;
/// let address = resolver.resolve("1012 JS", Some(1)).await?;
/// println!("{} {}, {}", address.street, address.house_number.unwrap_or_default(), address.city);
/// # Ok(())
/// # }
/// ```
pub struct AddressResolver {
  postcode: Arc<dyn PostcodeProvider>,
  geocoder: Option<Arc<dyn GeocodingProvider>>,
  mode: LookupMode,
  default_country: String,
}

impl AddressResolver {
  /// Build a resolver with the HTTP providers described by `config`
  ///
  /// # Errors
  ///
  /// Returns `Error::Configuration` when a required API key is missing.
  pub fn from_config(config: Config) -> Result<Self> {
    config.validate()?;

    let transport = Arc::new(Transport::new(&config)?);
    let postcode: Arc<dyn PostcodeProvider> =
      Arc::new(PostcodeTechClient::new(&config, transport.clone()));

    let geocoder: Option<Arc<dyn GeocodingProvider>> = if config.mode.uses_geocoding() {
      Some(Arc::new(GoogleMapsClient::new(&config, transport)?) as Arc<dyn GeocodingProvider>)
    } else {
      None
    };

    Self::new(postcode, geocoder, config.mode, &config.default_country)
  }

  /// Build a resolver from arbitrary providers
  ///
  /// A geocoder passed alongside [`LookupMode::PostcodeOnly`] is ignored.
  ///
  /// # Errors
  ///
  /// Returns `Error::Configuration` when the mode needs geocoding and no
  /// geocoder was supplied.
  pub fn new(
    postcode: Arc<dyn PostcodeProvider>,
    geocoder: Option<Arc<dyn GeocodingProvider>>,
    mode: LookupMode,
    default_country: &str,
  ) -> Result<Self> {
    let geocoder = if mode.uses_geocoding() {
      Some(geocoder.ok_or_else(|| {
        Error::Configuration(format!("Lookup mode {} requires a geocoding provider", mode))
      })?)
    } else {
      None
    };

    Ok(Self { postcode, geocoder, mode, default_country: default_country.to_string() })
  }

  /// The configured lookup mode
  pub fn mode(&self) -> LookupMode {
    self.mode
  }

  /// Resolve a postal code and optional house number
  ///
  /// # Errors
  ///
  /// * `Error::Validation` for an empty postal code, before any request is made
  /// * `Error::Provider` when postcode.tech fails and geocoding is disabled
  /// * `Error::GeocodeUnavailable` when geocoding produced no result at all
  /// * `Error::Http` on transport failures
  #[instrument(skip(self))]
  pub async fn resolve(
    &self,
    postal_code: &str,
    house_number: Option<u32>,
  ) -> Result<NormalizedAddress> {
    let query = AddressQuery::new(postal_code, house_number)?;
    self.resolve_query(&query).await
  }

  /// Resolve a query built elsewhere
  ///
  /// The query is validated again, so a deserialized query with an empty
  /// postal code fails before any request is made.
  pub async fn resolve_query(&self, query: &AddressQuery) -> Result<NormalizedAddress> {
    query.validate()?;
    match self.geocoder.as_deref() {
      Some(geocoder) if !self.mode.requires_postcode_provider(query.house_number()) => {
        self.resolve_geocode_only(geocoder, query).await
      }
      _ => self.resolve_postcode_first(query).await,
    }
  }

  async fn resolve_postcode_first(&self, query: &AddressQuery) -> Result<NormalizedAddress> {
    let address = match self.postcode.lookup(query.postal_code(), query.house_number()).await {
      Ok(address) => address,
      Err(e) => {
        return match self.geocoder.as_deref() {
          Some(geocoder) => {
            warn!(
              "{} lookup failed, falling back to geocoding only: {}",
              self.postcode.source_name(),
              e
            );
            self.resolve_geocode_only(geocoder, query).await
          }
          None => Err(e),
        };
      }
    };

    let Some(geocoder) = self.geocoder.as_deref() else {
      debug!("Geocoding disabled, using {} data only", self.postcode.source_name());
      return Ok(NormalizedAddress::from_postcode_tech(
        query.postal_code(),
        query.house_number(),
        &address,
      ));
    };

    let text = self.postcode_address_query(&address, query);
    let geocode = self.geocode_with_fallbacks(geocoder, &text, query).await?.ok_or_else(|| {
      Error::GeocodeUnavailable(format!("No geocoding result for {}", query.postal_code()))
    })?;

    info!("Resolved {} via {} and geocoding", query.postal_code(), self.postcode.source_name());
    Ok(
      NormalizedAddress::from_geocode(query.postal_code(), query.house_number(), &geocode)
        .merged_with(address.to_fields()),
    )
  }

  async fn resolve_geocode_only(
    &self,
    geocoder: &dyn GeocodingProvider,
    query: &AddressQuery,
  ) -> Result<NormalizedAddress> {
    let text = self.postal_code_query(query);
    let geocode = self.geocode_with_fallbacks(geocoder, &text, query).await?.ok_or_else(|| {
      Error::GeocodeUnavailable(format!("Unable to geocode postal code {}", query.postal_code()))
    })?;

    info!("Resolved {} via {}", query.postal_code(), geocoder.source_name());
    Ok(NormalizedAddress::from_geocode(query.postal_code(), query.house_number(), &geocode))
  }

  /// Geocode `text`, then recover a street name when the hit is a bare
  /// postcode centroid.
  async fn geocode_with_fallbacks(
    &self,
    geocoder: &dyn GeocodingProvider,
    text: &str,
    query: &AddressQuery,
  ) -> Result<Option<GeocodeResult>> {
    let Some(result) = geocoder.geocode(text).await? else {
      debug!("No geocoding result for {:?}", text);
      return Ok(None);
    };

    if result.has_street_name() {
      return Ok(Some(result));
    }

    debug!("Geocoding result for {:?} has no street name", text);

    if let Some(place) = self.place_search(geocoder, text, query).await? {
      return Ok(Some(place));
    }

    Ok(Some(self.reverse_geocode_fallback(geocoder, result, query).await?))
  }

  /// Find Place + Place Details, accepted only when the postal code matches.
  async fn place_search(
    &self,
    geocoder: &dyn GeocodingProvider,
    text: &str,
    query: &AddressQuery,
  ) -> Result<Option<GeocodeResult>> {
    let Some(place_id) = geocoder.find_place(text).await? else {
      return Ok(None);
    };

    let Some(details) = geocoder.place_details(&place_id).await? else {
      return Ok(None);
    };

    if !details.has_street_name() {
      return Ok(None);
    }

    if !postal_codes_match(&details.components.postal_code, query.postal_code()) {
      debug!(
        "Place postal code {:?} does not match {:?}",
        details.components.postal_code, query.postal_code()
      );
      return Ok(None);
    }

    let Some(number) = query.house_number() else {
      return Ok(Some(details));
    };

    if details.components.street_number.trim() == number.to_string() {
      return Ok(Some(details));
    }

    // Places snapped to a neighbouring house; geocode the requested number on that street.
    let street = street_with_number(&details.components.street_name, Some(number));
    let street_query =
      join_query(&[street.as_str(), details.components.city.as_str(), self.default_country.as_str()]);

    match geocoder.geocode(&street_query).await? {
      Some(exact) if exact.has_coordinates() => Ok(Some(exact)),
      _ => Ok(Some(details)),
    }
  }

  /// Reverse geocode the centroid to find the nearest street.
  async fn reverse_geocode_fallback(
    &self,
    geocoder: &dyn GeocodingProvider,
    original: GeocodeResult,
    query: &AddressQuery,
  ) -> Result<GeocodeResult> {
    let Some((lat, lng)) = original.coordinates() else {
      return Ok(original);
    };

    let reverse = match geocoder.reverse_geocode(lat, lng).await? {
      Some(reverse) if reverse.has_street_name() => reverse,
      _ => return Ok(original),
    };

    let street = reverse.components.street_name;
    let locality = if reverse.components.city.trim().is_empty() {
      self.default_country.as_str()
    } else {
      reverse.components.city.as_str()
    };
    let street_query =
      join_query(&[street_with_number(&street, query.house_number()).as_str(), locality]);

    match geocoder.geocode(&street_query).await? {
      Some(exact) if exact.has_coordinates() => Ok(exact),
      _ => {
        debug!("Street geocode for {:?} failed, keeping original coordinates", street_query);
        Ok(original.with_street_name(&street))
      }
    }
  }

  fn postal_code_query(&self, query: &AddressQuery) -> String {
    let head = match query.house_number() {
      Some(number) => format!("{} {}", query.postal_code(), number),
      None => query.postal_code().to_string(),
    };
    join_query(&[head.as_str(), self.default_country.as_str()])
  }

  fn postcode_address_query(&self, address: &PostcodeTechAddress, query: &AddressQuery) -> String {
    let number = query.house_number().map(|n| n.to_string()).unwrap_or_default();
    [address.street.as_str(), number.as_str(), query.postal_code(), address.city.as_str()]
      .iter()
      .map(|part| part.trim())
      .filter(|part| !part.is_empty())
      .collect::<Vec<_>>()
      .join(" ")
  }
}

impl std::fmt::Debug for AddressResolver {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("AddressResolver")
      .field("postcode", &self.postcode.source_name())
      .field("geocoder", &self.geocoder.as_ref().map(|g| g.source_name()))
      .field("mode", &self.mode)
      .field("default_country", &self.default_country)
      .finish()
  }
}

fn street_with_number(street: &str, house_number: Option<u32>) -> String {
  match house_number {
    Some(number) => format!("{} {}", street.trim(), number),
    None => street.trim().to_string(),
  }
}

/// Comma-join the non-empty parts of a free-text query
fn join_query(parts: &[&str]) -> String {
  parts.iter().map(|p| p.trim()).filter(|p| !p.is_empty()).collect::<Vec<_>>().join(", ")
}
