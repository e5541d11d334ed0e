//! Minimal HTTP/1.1 responder for client tests.
//!
//! Answers every request with one fixed status line and body, and records the
//! request heads it saw so tests can assert on method and path.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
pub struct StubResponse {
    pub status: &'static str,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl StubResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: "200 OK",
            content_type: "application/json",
            body: body.as_bytes().to_vec(),
        }
    }

    pub fn status(status: &'static str, body: &str) -> Self {
        Self {
            status,
            content_type: "text/plain",
            body: body.as_bytes().to_vec(),
        }
    }
}

pub struct Stub {
    /// Origin of the stub, e.g. "http://127.0.0.1:12345".
    pub origin: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl Stub {
    /// First line of every request received so far ("GET /path HTTP/1.1").
    pub fn request_lines(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts the stub in a background thread. It runs until the process exits.
pub fn start(response: StubResponse) -> Stub {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&requests);
    let response = Arc::new(response);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let response = Arc::clone(&response);
            let seen = Arc::clone(&seen);
            thread::spawn(move || handle(stream, &response, &seen));
        }
    });
    Stub {
        origin: format!("http://127.0.0.1:{}", port),
        requests,
    }
}

fn handle(mut stream: std::net::TcpStream, response: &StubResponse, seen: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    if let Ok(request) = std::str::from_utf8(&buf[..n]) {
        if let Some(line) = request.lines().next() {
            seen.lock().unwrap().push(line.trim().to_string());
        }
    }
    let head = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        response.status,
        response.content_type,
        response.body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&response.body);
}

/// An origin nothing listens on (bound, then closed).
pub fn closed_origin() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}
