use crate::config;
use anyhow::{Context, Result};
use clap::Args;
use tracing::info;
use zl_client::AddressResolver;
use zl_core::LookupMode;

#[derive(Args, Debug)]
pub struct LookupCommand {
  /// Postal code to resolve, e.g. "1012 JS"
  postcode: String,

  /// House number
  #[arg(short, long)]
  number: Option<u32>,

  /// Provider combination: geocode-first, combined or postcode-only
  #[arg(short, long)]
  mode: Option<LookupMode>,

  /// Pretty-print the JSON output
  #[arg(short, long)]
  pretty: bool,
}

pub async fn execute(cmd: LookupCommand) -> Result<()> {
  let config = config::load(cmd.mode)?;
  info!("Looking up {} using {} mode", cmd.postcode, config.mode);

  let resolver = AddressResolver::from_config(config)?;
  let address = resolver
    .resolve(&cmd.postcode, cmd.number)
    .await
    .with_context(|| format!("Lookup failed for {}", cmd.postcode))?;

  let json = if cmd.pretty { address.to_json_pretty()? } else { address.to_json()? };
  println!("{}", json);

  Ok(())
}
