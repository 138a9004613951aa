use thiserror::Error;

/// The main error type for zl-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Missing API key or invalid configuration value
  #[error("Configuration error: {0}")]
  Configuration(String),

  /// Caller supplied input that cannot be looked up
  #[error("Validation error: {0}")]
  Validation(String),

  /// Non-success HTTP status from the postcode provider
  #[error("Postcode provider returned HTTP {status}: {body}")]
  Provider { status: u16, body: String },

  /// No usable geocoding result after every fallback
  #[error("Geocoding unavailable: {0}")]
  GeocodeUnavailable(String),

  /// HTTP transport error
  #[error("HTTP error: {0}")]
  Http(String),

  /// Malformed response body
  #[error("Parse error: {0}")]
  Parse(String),
}

impl Error {
  /// HTTP status carried by a provider error, if any
  pub fn status(&self) -> Option<u16> {
    match self {
      Error::Provider { status, .. } => Some(*status),
      _ => None,
    }
  }
}

/// Result type alias for zl-* crates
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_provider_error_display() {
    let err = Error::Provider { status: 404, body: "{\"message\":\"not found\"}".to_string() };
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "Postcode provider returned HTTP 404: {\"message\":\"not found\"}");
  }

  #[test]
  fn test_non_provider_error_has_no_status() {
    assert_eq!(Error::Validation("empty".to_string()).status(), None);
  }
}
