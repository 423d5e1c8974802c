//! One-shot HTTP server for integration tests.
//!
//! Accepts a single connection, reads the request head, writes a canned
//! response and closes the socket, so the body is delimited by connection
//! close exactly as an HTTP/1.0 server would do it.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

pub struct PageServer {
    pub port: u16,
    request: mpsc::Receiver<String>,
}

impl PageServer {
    /// Raw request head the server received (up to and including the blank line).
    pub fn request(&self) -> String {
        self.request
            .recv_timeout(Duration::from_secs(5))
            .expect("server saw no request")
    }
}

/// Starts a server in a background thread that answers one request with `response`.
pub fn start(response: Vec<u8>) -> PageServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let (stream, _) = match listener.accept() {
            Ok(conn) => conn,
            Err(_) => return,
        };
        let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
        let mut reader = BufReader::new(stream);
        let mut head = String::new();
        loop {
            let mut line = String::new();
            match reader.read_line(&mut line) {
                Ok(0) | Err(_) => break,
                Ok(_) => {
                    head.push_str(&line);
                    if line == "\r\n" {
                        break;
                    }
                }
            }
        }
        let _ = tx.send(head);
        let mut stream = reader.into_inner();
        let _ = stream.write_all(&response);
        // Dropping the stream closes the connection and ends the body.
    });
    PageServer { port, request: rx }
}

/// Returns a port on 127.0.0.1 with nothing listening on it.
///
/// The listener is dropped before returning, so another process could bind
/// the port before the caller connects. The window is small and ephemeral
/// ports are not reused immediately, but a refused-connection test using it
/// can in principle see a different error.
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    listener.local_addr().unwrap().port()
}
