//! `webtext inspect [url]` – print status line and headers.

use anyhow::{Context, Result};
use webtext_core::fetch::{self, FetchOptions};
use webtext_core::url_model;

pub fn run_inspect(url: &str, opts: &FetchOptions) -> Result<()> {
    let parsed = url_model::parse(url).with_context(|| format!("parse {url}"))?;
    let response = fetch::fetch_response(&parsed, opts).with_context(|| format!("fetch {parsed}"))?;
    println!("{}", response.status);
    for (name, value) in response.headers.sorted() {
        println!("{name}: {value}");
    }
    Ok(())
}
