use crate::config;
use anyhow::Result;
use clap::Args;
use zl_core::LookupMode;

#[derive(Args, Debug)]
pub struct CheckConfigCommand {
  /// Validate against this mode instead of ZL_LOOKUP_MODE
  #[arg(short, long)]
  mode: Option<LookupMode>,
}

pub fn execute(cmd: CheckConfigCommand) -> Result<()> {
  let config = config::load(cmd.mode)?;

  println!("Configuration OK");
  println!("  mode:            {}", config.mode);
  println!("  geocoding:       {}", if config.mode.uses_geocoding() { "enabled" } else { "disabled" });
  println!("  postcode.tech:   {}", config.postcode_tech_base_url);
  println!("  google maps:     {}", config.google_maps_base_url);
  println!("  timeout:         {}s", config.timeout_secs);
  println!("  default country: {}", config.default_country);

  Ok(())
}
