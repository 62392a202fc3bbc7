//! Blocking HTTP client for the search backend
//!
//! The client is cheap to clone; the TUI hands a clone to the worker thread
//! that owns each in-flight request. No timeout is configured: a request
//! runs until the backend answers or the transport gives up.

use crate::api::types::{results_from_body, HealthStatus, SearchRequest, SearchResult};
use crate::error::{DocSeekError, Result};
use crate::logging;

/// Client for the `/search` and `/health` endpoints.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl SearchClient {
    /// Build a client against a base URL such as `http://localhost:8000/api`.
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("docseek/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Run one search. The caller guards against blank queries.
    ///
    /// A non-2xx status or a transport failure is an error; a 2xx response
    /// with a missing or malformed `results` field is an empty result set.
    pub fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchResult>> {
        let url = format!("{}/search", self.base_url);
        logging::debug("API", &format!("POST {} query='{}'", url, query));

        let response = self
            .http
            .post(&url)
            .json(&SearchRequest { query, max_results })
            .send()?;

        let status = response.status();
        if !status.is_success() {
            logging::warn("API", &format!("search rejected: HTTP {}", status.as_u16()));
            return Err(DocSeekError::RequestFailed {
                status: status.as_u16(),
            });
        }

        let body: serde_json::Value = response.json()?;
        let results = results_from_body(&body);
        logging::info(
            "API",
            &format!("search '{}' returned {} results", query, results.len()),
        );
        Ok(results)
    }

    /// Best-effort liveness probe. Never fails: any transport or decode
    /// problem collapses into the fixed degraded value.
    pub fn check_health(&self) -> HealthStatus {
        let url = format!("{}/health", self.base_url);

        match self
            .http
            .get(&url)
            .send()
            .and_then(|response| response.json::<HealthStatus>())
        {
            Ok(health) => health,
            Err(err) => {
                logging::warn("API", &format!("health check failed: {}", err));
                HealthStatus::unavailable()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve exactly one canned HTTP response on a fresh local port and
    /// return the base URL to point a client at.
    fn serve_once(status_line: &str, body: &str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );

        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                read_request(&mut stream);
                let _ = stream.write_all(response.as_bytes());
            }
        });

        format!("http://{}", addr)
    }

    /// Drain one HTTP request (headers plus a Content-Length body).
    fn read_request(stream: &mut std::net::TcpStream) {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = match stream.read(&mut chunk) {
                Ok(0) | Err(_) => return,
                Ok(n) => n,
            };
            buf.extend_from_slice(&chunk[..n]);
            if let Some(header_end) = find_header_end(&buf) {
                let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
                let content_length = headers
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= header_end + 4 + content_length {
                    return;
                }
            }
        }
    }

    fn find_header_end(buf: &[u8]) -> Option<usize> {
        buf.windows(4).position(|w| w == b"\r\n\r\n")
    }

    /// A base URL nothing listens on.
    fn dead_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}", addr)
    }

    #[test]
    fn search_decodes_results_in_order() {
        let base = serve_once(
            "HTTP/1.1 200 OK",
            r#"{"query":"rust","results":[{"id":1,"score":0.873,"title":"A"},{"id":2,"score":0,"title":"B"}],"total_results":2,"execution_time":0.01}"#,
        );

        let client = SearchClient::new(&base).unwrap();
        let results = client.search("rust", 10).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, "1");
        assert_eq!(results[1].id, "2");
        assert!((results[0].score_percent() - 87.3).abs() < 1e-9);
        assert_eq!(results[1].score_percent(), 0.0);
    }

    #[test]
    fn search_treats_missing_results_field_as_empty() {
        let base = serve_once("HTTP/1.1 200 OK", r#"{"query":"rust"}"#);

        let client = SearchClient::new(&base).unwrap();
        assert!(client.search("rust", 10).unwrap().is_empty());
    }

    #[test]
    fn search_maps_http_500_to_request_failed() {
        let base = serve_once(
            "HTTP/1.1 500 Internal Server Error",
            r#"{"detail":"Search failed: index not loaded"}"#,
        );

        let client = SearchClient::new(&base).unwrap();
        let err = client.search("rust", 10).unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert!(err.is_request_error());
    }

    #[test]
    fn search_maps_unreachable_backend_to_network_error() {
        let client = SearchClient::new(&dead_url()).unwrap();
        let err = client.search("rust", 10).unwrap_err();
        assert_eq!(err.status(), None);
        assert!(err.is_request_error());
    }

    #[test]
    fn health_decodes_backend_status() {
        let base = serve_once(
            "HTTP/1.1 200 OK",
            r#"{"status":"healthy","message":"Search service is running"}"#,
        );

        let client = SearchClient::new(&base).unwrap();
        let health = client.check_health();
        assert!(health.is_healthy());
        assert_eq!(health.message.as_deref(), Some("Search service is running"));
    }

    #[test]
    fn health_never_raises_on_failure() {
        let client = SearchClient::new(&dead_url()).unwrap();
        assert_eq!(client.check_health(), HealthStatus::unavailable());

        let garbled = serve_once("HTTP/1.1 200 OK", "not json at all");
        let client = SearchClient::new(&garbled).unwrap();
        assert_eq!(client.check_health(), HealthStatus::unavailable());
    }
}
