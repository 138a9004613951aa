//! Common types used across zl-* crates

pub mod country;
pub mod mode;
pub mod postal;
pub mod query;

pub use country::normalize_country;
pub use mode::LookupMode;
pub use postal::{normalize_postal_code, postal_codes_match};
pub use query::AddressQuery;
