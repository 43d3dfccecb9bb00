//! Minimal HTTP/1.1 server that answers GETs with canned JSON, for integration tests.
//!
//! Routes are exact request paths. Unknown paths get 404 with the API's
//! "not found" body, like the real service.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone)]
pub struct Route {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonServerOptions {
    /// If true, answer with `Connection: keep-alive` and serve further requests
    /// on the same connection; otherwise close after each response.
    pub keep_alive: bool,
}

/// Running server handle: base URL, requested paths and accepted connections.
pub struct JsonServer {
    pub base: String,
    hits: Arc<Mutex<Vec<String>>>,
    connections: Arc<AtomicUsize>,
}

impl JsonServer {
    /// Request paths in arrival order.
    pub fn hits(&self) -> Vec<String> {
        self.hits.lock().unwrap().clone()
    }

    /// Number of TCP connections accepted so far.
    pub fn connections(&self) -> usize {
        self.connections.load(Ordering::SeqCst)
    }
}

/// Starts a server in a background thread. `routes` receives the base URL
/// (e.g. "http://127.0.0.1:12345") so bodies can embed absolute links, and
/// returns `(path, status, body)` triples. The server runs until the process exits.
pub fn start<F>(routes: F) -> JsonServer
where
    F: FnOnce(&str) -> Vec<(&'static str, u16, String)>,
{
    start_with_options(routes, JsonServerOptions::default())
}

/// Like `start` but allows customizing connection handling.
pub fn start_with_options<F>(routes: F, opts: JsonServerOptions) -> JsonServer
where
    F: FnOnce(&str) -> Vec<(&'static str, u16, String)>,
{
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let base = format!("http://127.0.0.1:{}", port);
    let routes: Arc<HashMap<String, Route>> = Arc::new(
        routes(&base)
            .into_iter()
            .map(|(path, status, body)| (path.to_string(), Route { status, body }))
            .collect(),
    );
    let hits = Arc::new(Mutex::new(Vec::new()));
    let connections = Arc::new(AtomicUsize::new(0));
    let server_hits = Arc::clone(&hits);
    let server_connections = Arc::clone(&connections);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            server_connections.fetch_add(1, Ordering::SeqCst);
            let routes = Arc::clone(&routes);
            let hits = Arc::clone(&server_hits);
            thread::spawn(move || handle(stream, &routes, &hits, opts));
        }
    });
    JsonServer {
        base,
        hits,
        connections,
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    routes: &HashMap<String, Route>,
    hits: &Mutex<Vec<String>>,
    opts: JsonServerOptions,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    loop {
        let n = match stream.read(&mut buf) {
            Ok(0) => return,
            Ok(n) => n,
            Err(_) => return,
        };
        let request = match std::str::from_utf8(&buf[..n]) {
            Ok(s) => s,
            Err(_) => return,
        };
        let mut first = request.lines().next().unwrap_or("").split_whitespace();
        let method = first.next().unwrap_or("");
        let path = first.next().unwrap_or("").to_string();
        if !method.eq_ignore_ascii_case("GET") {
            let _ = stream
                .write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\n\r\n");
            return;
        }
        hits.lock().unwrap().push(path.clone());

        let (status, body) = match routes.get(&path) {
            Some(route) => (route.status, route.body.clone()),
            None => (404, r#"{"detail": "Not found"}"#.to_string()),
        };
        let reason = match status {
            200 => "OK",
            404 => "Not Found",
            500 => "Internal Server Error",
            _ => "Status",
        };
        let connection = if opts.keep_alive { "keep-alive" } else { "close" };
        let response = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: {}\r\n\r\n{}",
            status,
            reason,
            body.len(),
            connection,
            body
        );
        if stream.write_all(response.as_bytes()).is_err() || !opts.keep_alive {
            return;
        }
    }
}
