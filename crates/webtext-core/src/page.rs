//! Load pipeline: URL string → parse → fetch → render.

use std::io::Write;

use crate::error::Result;
use crate::fetch::{self, FetchOptions, Response, StatusLine};
use crate::render;
use crate::url_model;

/// Fetches `raw` and prints its visible text to stdout, returning the
/// response's status line. The first failure aborts; nothing is rendered on error.
pub fn load(raw: &str, opts: &FetchOptions) -> Result<StatusLine> {
    let response = fetch_page(raw, opts)?;
    render::render(&response.body);
    Ok(response.status)
}

/// Like [`load`] but renders into `out`. A failed write to `out` is logged,
/// not returned, matching stdout rendering.
pub fn load_to<W: Write>(raw: &str, opts: &FetchOptions, out: &mut W) -> Result<StatusLine> {
    let response = fetch_page(raw, opts)?;
    if let Err(e) = render::render_to(&response.body, out) {
        tracing::warn!("writing rendered text failed: {}", e);
    }
    Ok(response.status)
}

fn fetch_page(raw: &str, opts: &FetchOptions) -> Result<Response> {
    let url = url_model::parse(raw)?;
    tracing::info!(url = %url, "loading page");
    fetch::fetch_response(&url, opts)
}
