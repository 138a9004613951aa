//! Lookup request type

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A validated lookup request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddressQuery {
  postal_code: String,
  house_number: Option<u32>,
}

impl AddressQuery {
  /// Validate and build a query
  ///
  /// # Errors
  ///
  /// Returns `Error::Validation` for an empty or whitespace-only postal code.
  pub fn new(postal_code: &str, house_number: Option<u32>) -> Result<Self> {
    let query = Self { postal_code: postal_code.trim().to_string(), house_number };
    query.validate()?;
    Ok(query)
  }

  /// Check the query again, e.g. after deserialization
  ///
  /// # Errors
  ///
  /// Returns `Error::Validation` for an empty or whitespace-only postal code.
  pub fn validate(&self) -> Result<()> {
    if self.postal_code.trim().is_empty() {
      return Err(Error::Validation("Postal code cannot be empty".to_string()));
    }
    Ok(())
  }

  /// Postal code as supplied by the caller, trimmed
  pub fn postal_code(&self) -> &str {
    &self.postal_code
  }

  /// Optional house number
  pub fn house_number(&self) -> Option<u32> {
    self.house_number
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_empty_postal_code_rejected() {
    assert!(matches!(AddressQuery::new("", Some(1)), Err(Error::Validation(_))));
    assert!(matches!(AddressQuery::new("   ", None), Err(Error::Validation(_))));
  }

  #[test]
  fn test_postal_code_trimmed() {
    let query = AddressQuery::new(" 1012 JS ", Some(1)).unwrap();
    assert_eq!(query.postal_code(), "1012 JS");
    assert_eq!(query.house_number(), Some(1));
  }

  #[test]
  fn test_deserialized_empty_query_fails_validation() {
    let query: AddressQuery =
      serde_json::from_str(r#"{"postal_code":" ","house_number":null}"#).unwrap();
    assert!(matches!(query.validate(), Err(Error::Validation(_))));
  }
}
