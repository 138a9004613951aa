pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use types::{normalize_country, postal_codes_match, AddressQuery, LookupMode};

/// Base URL for the postcode.tech API
pub const POSTCODE_TECH_BASE_URL: &str = "https://postcode.tech/api";

/// Base URL for the Google Maps web services
pub const GOOGLE_MAPS_BASE_URL: &str = "https://maps.googleapis.com";

/// Country appended to free-text geocoding queries when nothing better is known
pub const DEFAULT_COUNTRY: &str = "Netherlands";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User agent sent with every outbound request
pub const USER_AGENT: &str = concat!("zipcode-lookup/", env!("CARGO_PKG_VERSION"));
