//! # zl-client
//!
//! Resolves Dutch postal codes (optionally with a house number) into a
//! normalized address using postcode.tech and the Google Maps Geocoding and
//! Places APIs.
//!
//! ## Features
//!
//! - **Fallback chain**: Places disambiguation and reverse geocoding when a
//!   geocode lands on a postcode centroid without a street
//! - **Async/Await**: Built on reqwest, cancellation follows the future
//! - **Type Safe**: Strongly typed responses using zl-models
//! - **Configurable**: Environment-based configuration via zl-core
//! - **Pluggable**: Providers sit behind traits so they can be swapped or faked
//!
//! ## Usage
//!
//! ```rust,no_run
//! use zl_client::AddressResolver;
//! use zl_core::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let resolver = AddressResolver::from_config(config)?;
//!
//!     let address = resolver.resolve("1012 JS", Some(1)).await?;
//!     println!("{}", address.to_json()?);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, zl_core::Error>` for consistent error handling
//! across the zl-* crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod providers;
pub mod resolver;
pub mod transport;

// Re-export the resolver and common types
pub use resolver::AddressResolver;
pub use zl_core::{Config, Error, LookupMode, Result};
pub use zl_models::*;

pub use providers::{
  google::GoogleMapsClient, postcode_tech::PostcodeTechClient, GeocodingProvider,
  PostcodeProvider,
};
