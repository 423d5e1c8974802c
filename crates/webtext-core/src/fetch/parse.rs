//! Parse the status line and header block of an HTTP response.

use std::collections::HashMap;
use std::fmt;
use std::io;

use super::lines::LineReader;
use crate::error::{FetchError, Result};

/// Headers whose presence means the body is not plain bytes-until-close.
const UNSUPPORTED_ENCODINGS: [&str; 2] = ["transfer-encoding", "content-encoding"];

/// Blank line separating headers from the body.
const HEADER_END: &str = "\r\n";

/// First line of a response, kept as raw text. The code is not validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub version: String,
    pub code: String,
    pub reason: String,
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.version, self.code, self.reason)
    }
}

/// Response headers keyed by lowercased name. Last duplicate wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseHeaders {
    map: HashMap<String, String>,
}

impl ResponseHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts under the lowercased `name`; `value` is trimmed of spaces.
    pub fn insert(&mut self, name: &str, value: &str) {
        self.map
            .insert(name.to_ascii_lowercase(), value.trim_matches(' ').to_string());
    }

    /// Case-insensitive lookup.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.map.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Headers sorted by name, for stable display.
    pub fn sorted(&self) -> Vec<(&str, &str)> {
        let mut v: Vec<(&str, &str)> = self
            .map
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        v.sort_unstable();
        v
    }
}

fn strip_line_end(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}

fn unexpected_eof(what: &str) -> FetchError {
    FetchError::Read(io::Error::new(
        io::ErrorKind::UnexpectedEof,
        format!("connection closed while reading {what}"),
    ))
}

/// Splits `HTTP/1.0 200 OK` on the first two spaces.
pub(crate) fn parse_status_line(line: &str) -> Result<StatusLine> {
    let mut parts = strip_line_end(line).splitn(3, ' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(version), Some(code), Some(reason)) => Ok(StatusLine {
            version: version.to_string(),
            code: code.to_string(),
            reason: reason.to_string(),
        }),
        _ => Err(FetchError::MalformedResponse(format!(
            "bad status line: {:?}",
            strip_line_end(line)
        ))),
    }
}

/// Splits `Name: value` at the first colon into `headers`.
pub(crate) fn parse_header_line(line: &str, headers: &mut ResponseHeaders) -> Result<()> {
    let line = strip_line_end(line);
    let (name, value) = line.split_once(':').ok_or_else(|| {
        FetchError::MalformedResponse(format!("header line without ':': {line:?}"))
    })?;
    headers.insert(name, value);
    Ok(())
}

/// Reads the status line. EOF before its newline is a read error.
pub(crate) fn read_status_line<L: LineReader>(reader: &mut L) -> Result<StatusLine> {
    match reader.next_line().map_err(FetchError::Read)? {
        Some(line) if line.ends_with('\n') => parse_status_line(&line),
        _ => Err(unexpected_eof("status line")),
    }
}

/// Reads header lines up to and including the blank `\r\n` line.
pub(crate) fn read_headers<L: LineReader>(reader: &mut L) -> Result<ResponseHeaders> {
    let mut headers = ResponseHeaders::new();
    loop {
        let line = match reader.next_line().map_err(FetchError::Read)? {
            Some(line) => line,
            None => return Err(unexpected_eof("headers")),
        };
        if line == HEADER_END {
            return Ok(headers);
        }
        if !line.ends_with('\n') {
            return Err(unexpected_eof("headers"));
        }
        parse_header_line(&line, &mut headers)?;
    }
}

/// Refuses chunked or compressed bodies rather than mis-decoding them.
pub(crate) fn check_supported(headers: &ResponseHeaders) -> Result<()> {
    match UNSUPPORTED_ENCODINGS.iter().find(|h| headers.contains(h)) {
        Some(header) => Err(FetchError::UnsupportedResponseFormat {
            header: header.to_string(),
        }),
        None => Ok(()),
    }
}
