//! Shared test utilities for relay key integration tests

use std::sync::mpsc::{self, Receiver};
use std::thread;

use tiny_http::{Header, Response, Server};

/// A request received by the fake endpoint
#[derive(Debug)]
pub struct CapturedRequest {
    pub method: String,
    pub url: String,
    pub body: serde_json::Value,
}

/// Starts a server that answers exactly one request with `status` and
/// `body`, returning its base URL and a receiver for the captured request.
pub fn serve_once(status: u16, body: &str) -> (String, Receiver<CapturedRequest>) {
    let server = Server::http("127.0.0.1:0").expect("Failed to bind test server");
    let addr = server
        .server_addr()
        .to_ip()
        .expect("Test server has no IP address");
    let body = body.to_string();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let Ok(mut request) = server.recv() else {
            return;
        };

        let mut raw = String::new();
        request
            .as_reader()
            .read_to_string(&mut raw)
            .expect("Failed to read request body");

        let captured = CapturedRequest {
            method: request.method().to_string(),
            url: request.url().to_string(),
            body: serde_json::from_str(&raw).unwrap_or(serde_json::Value::Null),
        };

        let header = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
            .expect("Invalid header");
        let response = Response::from_string(body)
            .with_status_code(status)
            .with_header(header);
        let _ = request.respond(response);
        let _ = tx.send(captured);
    });

    (format!("http://{}/api/0", addr), rx)
}
