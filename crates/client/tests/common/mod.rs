use axum::Router;
use client::Client;
use std::sync::{Arc, Mutex};

/// Requests seen by a mock API, as `METHOD path?query`.
#[derive(Clone, Default)]
pub struct RequestLog(Arc<Mutex<Vec<String>>>);

impl RequestLog {
    pub fn record(&self, entry: String) {
        self.0.lock().unwrap().push(entry);
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

/// Serve `router` on an ephemeral local port and return a client pointed at it.
pub async fn spawn_mock_api(router: Router) -> Client {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock API listener");
    let addr = listener.local_addr().expect("Mock API has no local address");
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Mock API server failed");
    });
    Client::with_base_url(format!("http://{addr}/api"))
}

/// A client pointed at a port nothing listens on.
pub async fn unreachable_client() -> Client {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind a throwaway listener");
    let addr = listener.local_addr().expect("Throwaway listener has no local address");
    drop(listener);
    Client::with_base_url(format!("http://{addr}/api"))
}

/// Decode a raw query string into ordered pairs.
pub fn query_pairs(raw: &str) -> Vec<(String, String)> {
    raw.split('&')
        .filter(|p| !p.is_empty())
        .filter_map(|p| p.split_once('='))
        .map(|(k, v)| {
            let decode = |s: &str| {
                urlencoding::decode(&s.replace('+', " "))
                    .map(|c| c.into_owned())
                    .unwrap_or_else(|_| s.to_string())
            };
            (decode(k), decode(v))
        })
        .collect()
}

pub fn values_for<'a>(pairs: &'a [(String, String)], key: &str) -> Vec<&'a str> {
    pairs
        .iter()
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .collect()
}
