//! postcode.tech client

use super::PostcodeProvider;
use crate::transport::Transport;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, instrument, warn};
use zl_core::{Config, Error, Result};
use zl_models::PostcodeTechAddress;

const POSTCODE_PATH: &str = "/v1/postcode";

/// Client for the postcode.tech postcode endpoint
pub struct PostcodeTechClient {
  transport: Arc<Transport>,
  base_url: String,
  api_key: String,
}

impl PostcodeTechClient {
  /// Create a new postcode.tech client
  pub fn new(config: &Config, transport: Arc<Transport>) -> Self {
    Self {
      transport,
      base_url: config.postcode_tech_base_url.clone(),
      api_key: config.postcode_tech_api_key.clone(),
    }
  }
}

#[async_trait]
impl PostcodeProvider for PostcodeTechClient {
  #[instrument(skip(self))]
  async fn lookup(
    &self,
    postal_code: &str,
    house_number: Option<u32>,
  ) -> Result<PostcodeTechAddress> {
    let mut params = vec![("postcode", postal_code.to_string())];
    if let Some(number) = house_number {
      params.push(("number", number.to_string()));
    }

    let url = Transport::build_url(&self.base_url, POSTCODE_PATH, &params)?;
    let reply = self.transport.get(url, Some(&self.api_key)).await?;

    if !reply.is_success() {
      warn!("postcode.tech returned status {}", reply.status);
      return Err(Error::Provider { status: reply.status.as_u16(), body: reply.body });
    }

    let address: PostcodeTechAddress = reply.json()?;
    debug!("postcode.tech resolved {} to {} {}", postal_code, address.street, address.city);
    Ok(address)
  }

  fn source_name(&self) -> &'static str {
    "postcode.tech"
  }
}

impl std::fmt::Debug for PostcodeTechClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("PostcodeTechClient")
      .field("base_url", &self.base_url)
      .field("api_key", &"***")
      .finish()
  }
}
