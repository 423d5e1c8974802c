//! `webtext config` – show where the config lives and what it says.

use anyhow::Result;
use webtext_core::config::{self, WebtextConfig};

pub fn run_config(cfg: &WebtextConfig) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    print!("{}", cfg.to_toml_string()?);
    Ok(())
}
