//! # zl-models
//!
//! Data models for the providers used by the zipcode lookup.
//!
//! This crate provides strongly-typed Rust structures for the postcode.tech
//! postcode endpoint and the Google Maps Geocoding, Find Place and Place
//! Details endpoints, plus the provider-neutral address types they are
//! normalized into.
//!
//! ## Usage
//!
//! ```ignore
//! use zl_models::google::GeocodeResponse;
//!
//! let response: GeocodeResponse = serde_json::from_str(&body)?;
//! if let Some(result) = response.into_geocode_result() {
//!     println!("{}: {}", result.formatted_address, result.components.street_name);
//! }
//! ```

#![warn(clippy::all)]

pub mod address;
mod de;
pub mod google;
pub mod normalized;
pub mod postcode_tech;

pub use address::{AddressComponents, GeocodeResult};
pub use google::{AddressComponentEntry, FindPlaceResponse, GeocodeResponse};
pub use normalized::{merge_fields, NormalizedAddress};
pub use postcode_tech::PostcodeTechAddress;
