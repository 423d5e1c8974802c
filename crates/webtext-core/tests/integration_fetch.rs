//! Integration test: fetch pages from a local one-shot HTTP server.
//!
//! Each test starts a server that writes a canned response and closes the
//! connection, then fetches it over a real TCP socket.

mod common;

use std::time::Duration;

use webtext_core::error::FetchError;
use webtext_core::fetch::{self, FetchOptions};
use webtext_core::render;
use webtext_core::url_model;

fn local(port: u16) -> FetchOptions {
    FetchOptions {
        port,
        read_timeout: Some(Duration::from_secs(5)),
        ..FetchOptions::default()
    }
}

#[test]
fn close_delimited_body_is_fully_captured() {
    let body: String = "<p>line</p>\n".repeat(4096);
    let mut response = b"HTTP/1.0 200 OK\r\nContent-Type: text/html\r\n\r\n".to_vec();
    response.extend_from_slice(body.as_bytes());
    let server = common::page_server::start(response);

    let url = url_model::parse("http://127.0.0.1/index.html").unwrap();
    let got = fetch::fetch(&url, &local(server.port)).expect("fetch");
    assert_eq!(got.len(), body.len());
    assert_eq!(got, body);
}

#[test]
fn request_is_http_1_0_get_with_host() {
    let server = common::page_server::start(b"HTTP/1.0 200 OK\r\n\r\nok".to_vec());
    let url = url_model::parse("http://127.0.0.1/a/b").unwrap();
    fetch::fetch(&url, &local(server.port)).expect("fetch");
    assert_eq!(
        server.request(),
        "GET /a/b HTTP/1.0\r\nHost: 127.0.0.1\r\n\r\n"
    );
}

#[test]
fn fetch_response_exposes_status_and_headers() {
    let server = common::page_server::start(
        b"HTTP/1.1 404 Not Found\r\nX-Test:   value  \r\nServer: test\r\n\r\n<h1>gone</h1>".to_vec(),
    );
    let url = url_model::parse("http://127.0.0.1").unwrap();
    let resp = fetch::fetch_response(&url, &local(server.port)).expect("fetch");
    assert_eq!(resp.status.version, "HTTP/1.1");
    assert_eq!(resp.status.code, "404");
    assert_eq!(resp.status.reason, "Not Found");
    assert_eq!(resp.headers.get("x-test"), Some("value"));
    assert_eq!(resp.headers.len(), 2);

    let mut text = Vec::new();
    render::render_to(&resp.body, &mut text).unwrap();
    assert_eq!(String::from_utf8(text).unwrap(), "gone");
}

#[test]
fn chunked_response_is_refused() {
    let server = common::page_server::start(
        b"HTTP/1.1 200 OK\r\nTransfer-Encoding: chunked\r\n\r\n4\r\nbody\r\n0\r\n\r\n".to_vec(),
    );
    let url = url_model::parse("http://127.0.0.1/").unwrap();
    match fetch::fetch(&url, &local(server.port)) {
        Err(FetchError::UnsupportedResponseFormat { header }) => {
            assert_eq!(header, "transfer-encoding")
        }
        other => panic!("expected unsupported format, got {other:?}"),
    }
}

#[test]
fn connection_closed_mid_headers_is_read_error() {
    let server = common::page_server::start(b"HTTP/1.0 200 OK\r\nContent-Type: text/ht".to_vec());
    let url = url_model::parse("http://127.0.0.1/").unwrap();
    assert!(matches!(
        fetch::fetch(&url, &local(server.port)),
        Err(FetchError::Read(_))
    ));
}

#[test]
fn refused_connection_is_connection_error() {
    let port = common::page_server::closed_port();
    let url = url_model::parse("http://127.0.0.1/").unwrap();
    for opts in [
        local(port),
        FetchOptions {
            connect_timeout: Some(Duration::from_secs(2)),
            ..local(port)
        },
    ] {
        match fetch::fetch(&url, &opts) {
            Err(FetchError::Connection { addr, .. }) => {
                assert_eq!(addr, format!("127.0.0.1:{port}"))
            }
            other => panic!("expected connection error, got {other:?}"),
        }
    }
}

#[test]
fn load_renders_fetched_page() {
    let server = common::page_server::start(b"HTTP/1.0 200 OK\r\n\r\n<p>Hello <b>World</b></p>".to_vec());
    let mut out = Vec::new();
    let status =
        webtext_core::page::load_to("http://127.0.0.1/", &local(server.port), &mut out).expect("load");
    assert_eq!(status.code, "200");
    assert_eq!(String::from_utf8(out).unwrap(), "Hello World");
}

#[test]
fn zero_timeouts_do_not_abort_fetch() {
    let server = common::page_server::start(b"HTTP/1.0 200 OK\r\n\r\n<p>ok</p>".to_vec());
    let url = url_model::parse("http://127.0.0.1/").unwrap();
    let opts = FetchOptions {
        port: server.port,
        connect_timeout: Some(Duration::ZERO),
        read_timeout: Some(Duration::ZERO),
    };
    assert_eq!(fetch::fetch(&url, &opts).expect("fetch"), "<p>ok</p>");
}
