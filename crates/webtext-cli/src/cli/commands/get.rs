//! `webtext get [url]` – fetch a page and print its visible text.

use anyhow::{Context, Result};
use webtext_core::fetch::FetchOptions;
use webtext_core::page;

pub fn run_get(url: &str, opts: &FetchOptions, show_status: bool) -> Result<()> {
    let status = page::load(url, opts).with_context(|| format!("load {url}"))?;
    if show_status {
        eprintln!("{status}");
    }
    Ok(())
}
