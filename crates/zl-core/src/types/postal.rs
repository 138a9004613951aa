//! Postal code comparison helpers

/// Strip whitespace and upper-case a postal code
pub fn normalize_postal_code(postal_code: &str) -> String {
  postal_code.chars().filter(|c| !c.is_whitespace()).collect::<String>().to_uppercase()
}

/// Loose postal code match used to accept a Places result.
///
/// Whitespace and case are ignored and either side may contain the other,
/// so `"1234"` matches `"1234 AB"`. An empty side is contained in any
/// postal code and therefore matches.
pub fn postal_codes_match(returned: &str, input: &str) -> bool {
  let returned = normalize_postal_code(returned);
  let input = normalize_postal_code(input);

  returned.contains(&input) || input.contains(&returned)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_normalize_postal_code() {
    assert_eq!(normalize_postal_code(" 1234 ab "), "1234AB");
  }

  #[test]
  fn test_loose_match() {
    assert!(postal_codes_match("1234 AB", "1234ab"));
    assert!(postal_codes_match("1234", "1234 AB"));
    assert!(postal_codes_match("1234 AB", "1234"));
    assert!(!postal_codes_match("5678 CD", "1234 AB"));
  }

  #[test]
  fn test_empty_side_matches() {
    assert!(postal_codes_match("", "1234 AB"));
    assert!(postal_codes_match("1234 AB", "  "));
  }
}
