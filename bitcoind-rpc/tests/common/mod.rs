//! Shared fixtures: a minimal HTTP stub standing in for the node's RPC
//! endpoint. It parses each request body so replies can echo the
//! correlation id, which a canned-response mock cannot do.

// Not every test binary uses every fixture.
#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

use bitcoind_rpc::Endpoint;

/// Spawns a stub node. `respond` maps each decoded request envelope to
/// an HTTP status and response body. Serves until the process exits.
pub fn spawn_stub_node<F>(respond: F) -> SocketAddr
where
    F: Fn(&serde_json::Value) -> (u16, String) + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub node");
    let addr = listener.local_addr().expect("stub node addr");
    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { continue };
            let Some(request) = read_http_request(&mut stream) else {
                continue;
            };
            let (status, body) = respond(&request);
            let reason = match status {
                200 => "OK",
                500 => "Internal Server Error",
                _ => "Error",
            };
            let response = format!(
                "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });
    addr
}

fn read_http_request(stream: &mut TcpStream) -> Option<serde_json::Value> {
    let mut head = Vec::new();
    let mut byte = [0u8; 1];
    while !head.ends_with(b"\r\n\r\n") {
        if stream.read(&mut byte).ok()? == 0 {
            return None;
        }
        head.push(byte[0]);
    }

    let mut content_length = 0usize;
    for line in String::from_utf8_lossy(&head).lines() {
        if let Some((name, value)) = line.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap_or(0);
            }
        }
    }

    let mut body = vec![0u8; content_length];
    stream.read_exact(&mut body).ok()?;
    serde_json::from_slice(&body).ok()
}

/// A success reply echoing the request's correlation id.
pub fn result_reply(request: &serde_json::Value, result: serde_json::Value) -> (u16, String) {
    let id = request.get("id").cloned().unwrap_or(serde_json::Value::Null);
    (
        200,
        serde_json::json!({"id": id, "result": result, "error": null}).to_string(),
    )
}

/// An application-error reply echoing the correlation id, carried on the
/// node's designated 500 status.
pub fn error_reply(request: &serde_json::Value, code: i64, message: &str) -> (u16, String) {
    let id = request.get("id").cloned().unwrap_or(serde_json::Value::Null);
    (
        500,
        serde_json::json!({
            "id": id,
            "result": null,
            "error": {"code": code, "message": message}
        })
        .to_string(),
    )
}

/// Endpoint pointed at a stub node, with a short timeout for test speed.
pub fn endpoint_for(addr: SocketAddr) -> Endpoint {
    Endpoint::new("127.0.0.1", addr.port(), "testuser", "testpass")
        .expect("stub endpoint")
        .with_timeout(Duration::from_secs(5))
}

/// An address nobody listens on: bind an ephemeral port, then free it.
pub fn dead_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe");
    let addr = listener.local_addr().expect("probe addr");
    drop(listener);
    addr
}

/// Installs the test tracing subscriber once per process.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
