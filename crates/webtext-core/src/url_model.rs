//! URL parsing for plain `http://` URLs.
//!
//! Only `http://host[/path]` is understood. There is no port extraction,
//! percent-decoding, query handling or IPv6 bracket handling: everything
//! between `http://` and the first `/` is taken as the host verbatim.

use std::fmt;
use std::str::FromStr;

use crate::error::{FetchError, Result};

const SCHEME: &str = "http";
const SEPARATOR: &str = "://";

/// A validated HTTP URL. Only obtainable through [`parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    scheme: String,
    host: String,
    path: String,
}

impl ParsedUrl {
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Authority as written in the URL, e.g. `example.org` or `host:8080`.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Request path; always starts with `/`.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for ParsedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}{}", self.scheme, SEPARATOR, self.host, self.path)
    }
}

impl FromStr for ParsedUrl {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

/// Parses `raw` into scheme, host and path.
///
/// # Examples
///
/// - `parse("http://example.org")` → host `example.org`, path `/`
/// - `parse("http://example.org/a/b")` → host `example.org`, path `/a/b`
/// - `parse("ftp://example.org")` → `MalformedUrl`
pub fn parse(raw: &str) -> Result<ParsedUrl> {
    if raw.is_empty() {
        return Err(FetchError::EmptyInput);
    }

    let rest = match raw.split_once(SEPARATOR) {
        Some((scheme, rest)) if scheme == SCHEME && !rest.contains(SEPARATOR) => rest,
        _ => return Err(FetchError::MalformedUrl(raw.to_string())),
    };

    let (host, path) = match rest.split_once('/') {
        Some((host, path)) => (host, format!("/{path}")),
        None => (rest, "/".to_string()),
    };

    Ok(ParsedUrl {
        scheme: SCHEME.to_string(),
        host: host.to_string(),
        path,
    })
}
