//! Minimal HTTP/1.1 server standing in for the CDX endpoint in integration tests.
//!
//! Each request target is matched against the configured routes by substring;
//! the first match answers with its status and body, anything else gets 404.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
pub struct Route {
    /// Substring of the request target, e.g. `url=a.com/`.
    pub target: String,
    pub status: u16,
    pub body: String,
}

impl Route {
    pub fn ok(target: &str, body: &str) -> Self {
        Self {
            target: target.to_string(),
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn status(target: &str, status: u16) -> Self {
        Self {
            target: target.to_string(),
            status,
            body: String::new(),
        }
    }
}

/// Handle to a running server: base URL plus every request target seen so far.
pub struct CdxServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl CdxServer {
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Endpoint template pointing at this server.
    pub fn endpoint(&self) -> String {
        format!("{}cdx/search/cdx?url={{domain}}/*&output=txt", self.base_url)
    }
}

/// Starts a server in a background thread. It runs until the process exits.
pub fn start(routes: Vec<Route>) -> CdxServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes = Arc::new(routes);
    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            let seen = Arc::clone(&seen);
            thread::spawn(move || handle(stream, &routes, &seen));
        }
    });
    CdxServer {
        base_url: format!("http://127.0.0.1:{}/", port),
        requests,
    }
}

fn handle(mut stream: std::net::TcpStream, routes: &[Route], seen: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = String::from_utf8_lossy(&buf[..n]);
    let target = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("")
        .to_string();
    seen.lock().unwrap().push(target.clone());

    let (status, body) = routes
        .iter()
        .find(|r| target.contains(&r.target))
        .map(|r| (r.status, r.body.as_str()))
        .unwrap_or((404, ""));
    let response = format!(
        "HTTP/1.1 {} X\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
}
