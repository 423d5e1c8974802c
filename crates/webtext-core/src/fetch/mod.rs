//! HTTP/1.0 GET over a single blocking TCP connection.
//!
//! The request is pinned to HTTP/1.0 so the server closes the connection
//! after one response; the body is everything read until that close.
//! Chunked and compressed responses are refused before the body is read.

mod lines;
mod parse;

pub use lines::LineReader;
pub use parse::{ResponseHeaders, StatusLine};

use std::io::{BufReader, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use crate::error::{FetchError, Result};
use crate::url_model::ParsedUrl;

/// Port used for every `http://` URL.
pub const DEFAULT_PORT: u16 = 80;

/// Connection knobs. The defaults match plain blocking behavior: port 80,
/// no timeouts. A zero timeout is treated as no timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    /// TCP port to connect to; the URL's host is used verbatim in front of it.
    pub port: u16,
    pub connect_timeout: Option<Duration>,
    /// Applied to every read on the socket.
    pub read_timeout: Option<Duration>,
}

/// Drops zero durations, which std socket calls reject with `InvalidInput`.
fn nonzero(timeout: Option<Duration>) -> Option<Duration> {
    timeout.filter(|d| !d.is_zero())
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            connect_timeout: None,
            read_timeout: None,
        }
    }
}

/// A fully read response.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusLine,
    pub headers: ResponseHeaders,
    pub body: String,
}

/// Fetches `url` and returns the response body.
pub fn fetch(url: &ParsedUrl, opts: &FetchOptions) -> Result<String> {
    fetch_response(url, opts).map(|r| r.body)
}

/// Fetches `url` and returns status line, headers and body.
///
/// Opens exactly one connection, which is closed when this returns.
pub fn fetch_response(url: &ParsedUrl, opts: &FetchOptions) -> Result<Response> {
    let mut stream = connect(url.host(), opts)?;
    stream
        .set_read_timeout(nonzero(opts.read_timeout))
        .map_err(FetchError::Read)?;

    write_request(&mut stream, url)?;
    tracing::debug!(url = %url, "request sent");

    let mut reader = BufReader::new(stream);
    read_response(&mut reader)
}

/// Writes `GET {path} HTTP/1.0` with a single `Host` header.
pub fn write_request<W: Write>(w: &mut W, url: &ParsedUrl) -> Result<()> {
    let request = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\n\r\n",
        url.path(),
        url.host()
    );
    w.write_all(request.as_bytes()).map_err(FetchError::Write)?;
    w.flush().map_err(FetchError::Write)
}

/// Reads status line, headers and body from `reader`.
///
/// The body is only read once the headers pass the encoding check.
pub fn read_response<L: LineReader>(reader: &mut L) -> Result<Response> {
    let status = parse::read_status_line(reader)?;
    tracing::info!("{}", status);

    let headers = parse::read_headers(reader)?;
    tracing::debug!(count = headers.len(), "headers read");
    parse::check_supported(&headers)?;

    let body = reader.read_to_end_lossy().map_err(FetchError::Read)?;
    tracing::debug!(bytes = body.len(), "body read");

    Ok(Response {
        status,
        headers,
        body,
    })
}

fn connect(host: &str, opts: &FetchOptions) -> Result<TcpStream> {
    let addr = format!("{}:{}", host, opts.port);
    let conn_err = |source| FetchError::Connection {
        addr: addr.clone(),
        source,
    };

    let stream = match nonzero(opts.connect_timeout) {
        None => TcpStream::connect(addr.as_str()).map_err(conn_err)?,
        Some(timeout) => {
            let mut last_err = None;
            let mut connected = None;
            for sock in addr.as_str().to_socket_addrs().map_err(conn_err)? {
                match TcpStream::connect_timeout(&sock, timeout) {
                    Ok(s) => {
                        connected = Some(s);
                        break;
                    }
                    Err(e) => last_err = Some(e),
                }
            }
            match connected {
                Some(s) => s,
                None => {
                    return Err(conn_err(last_err.unwrap_or_else(|| {
                        std::io::Error::new(
                            std::io::ErrorKind::NotFound,
                            "host resolved to no addresses",
                        )
                    })))
                }
            }
        }
    };
    tracing::debug!(%addr, "connected");
    Ok(stream)
}
