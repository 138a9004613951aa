//! Country name normalization

/// Countries that are rewritten to their ISO 3166-1 alpha-3 code.
const ISO3_COUNTRIES: &[(&str, &str, &str)] = &[
  ("Netherlands", "NL", "NLD"),
  ("Belgium", "BE", "BEL"),
  ("Germany", "DE", "DEU"),
  ("Luxembourg", "LU", "LUX"),
];

/// Map a provider country name or ISO-2 code to ISO-3.
///
/// Only the countries listed above are rewritten; any other value is
/// returned unchanged.
pub fn normalize_country(country: &str) -> String {
  ISO3_COUNTRIES
    .iter()
    .find(|(name, iso2, _)| country == *name || country == *iso2)
    .map(|(_, _, iso3)| (*iso3).to_string())
    .unwrap_or_else(|| country.to_string())
}
