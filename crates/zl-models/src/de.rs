//! Shared serde helpers

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accept a JSON number or numeric string; anything else becomes `None`
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Option::<Value>::deserialize(deserializer)?;
  Ok(match value {
    Some(Value::Number(n)) => n.as_f64(),
    Some(Value::String(s)) => s.trim().parse().ok(),
    _ => None,
  })
}
