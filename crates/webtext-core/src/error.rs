//! Error type shared by URL parsing, fetching and the load pipeline.
//!
//! Every failure aborts the whole operation; nothing here is retried.
//! I/O variants keep the transport error as `source()` rather than in their
//! own message, so `{:#}` on an `anyhow::Error` prints it once.

use std::io;

/// Result alias for fallible webtext operations.
pub type Result<T> = std::result::Result<T, FetchError>;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The URL string was empty.
    #[error("no url provided")]
    EmptyInput,

    /// The URL lacks the `http://` prefix or repeats the `://` separator.
    #[error("malformed url: {0:?}")]
    MalformedUrl(String),

    /// TCP connect (or host resolution) failed.
    #[error("connect to {addr} failed")]
    Connection {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// Sending the request failed.
    #[error("failed to send request")]
    Write(#[source] io::Error),

    /// Status line or a header line did not have the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The response declares an encoding this tool cannot decode.
    #[error("response in unexpected format: {header} is not supported")]
    UnsupportedResponseFormat { header: String },

    /// Reading the status line, headers or body failed.
    #[error("failed to read response")]
    Read(#[source] io::Error),
}
