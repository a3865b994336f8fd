//! Data sources for the country record set.
//!
//! The browser reads the whole set once at startup through a [`CountrySource`].
//! [`RestCountries`] is the real implementation; tests substitute their own.

use tracing::debug;

use crate::error::FetchError;
use crate::types::{CountryRecord, WireCountry};

/// Fixed location of the "all countries" resource.
pub const DEFAULT_ENDPOINT: &str = "https://restcountries.com/v3.1/all?fields=name,flags,cca3";

/// Anything that can produce the full record set in one call.
///
/// Implementations are blocking; async callers move them onto a worker thread.
pub trait CountrySource: Send + Sync {
    fn fetch_all(&self) -> Result<Vec<CountryRecord>, FetchError>;
}

/// HTTP source backed by the public restcountries API.
#[derive(Clone)]
pub struct RestCountries {
    endpoint: String,
    agent: ureq::Agent,
}

impl RestCountries {
    pub fn new(endpoint: impl Into<String>) -> Self {
        RestCountries {
            endpoint: endpoint.into(),
            agent: ureq::Agent::new_with_defaults(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for RestCountries {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl CountrySource for RestCountries {
    fn fetch_all(&self) -> Result<Vec<CountryRecord>, FetchError> {
        debug!(endpoint = %self.endpoint, "Requesting country list");

        let mut response = match self.agent.get(&self.endpoint).call() {
            Ok(r) => r,
            Err(ureq::Error::StatusCode(status)) => {
                return Err(FetchError::Status {
                    endpoint: self.endpoint.clone(),
                    status,
                });
            }
            Err(e) => {
                return Err(FetchError::Transport {
                    endpoint: self.endpoint.clone(),
                    message: e.to_string(),
                });
            }
        };

        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| FetchError::Body {
                endpoint: self.endpoint.clone(),
                message: e.to_string(),
            })?;

        parse_countries(&body)
    }
}

/// Decode an upstream response body into records, keeping upstream order.
pub fn parse_countries(body: &str) -> Result<Vec<CountryRecord>, FetchError> {
    let wire: Vec<WireCountry> = serde_json::from_str(body)?;
    Ok(wire.into_iter().map(CountryRecord::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread::JoinHandle;

    /// Serve exactly one HTTP response on a local port and return its URL.
    fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/v3.1/all", listener.local_addr().unwrap());
        let handle = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut line = String::new();
            // Drain the request head.
            while reader.read_line(&mut line).unwrap() > 0 && line != "\r\n" {
                line.clear();
            }
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\n\
                 Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
        });
        (url, handle)
    }

    #[test]
    fn fetch_all_decodes_success_body() {
        let (url, server) = serve_once(
            "200 OK",
            r#"[{"name":{"common":"France"},"flags":{"png":"f.png"},"cca3":"FRA"}]"#,
        );
        let records = RestCountries::new(url).fetch_all().unwrap();
        server.join().unwrap();

        assert_eq!(records, vec![CountryRecord::new("France", "f.png", "FRA")]);
    }

    #[test]
    fn fetch_all_maps_error_status() {
        let (url, server) = serve_once("503 Service Unavailable", "");
        let err = RestCountries::new(url.clone()).fetch_all().unwrap_err();
        server.join().unwrap();

        match err {
            FetchError::Status { endpoint, status } => {
                assert_eq!(status, 503);
                assert_eq!(endpoint, url);
            }
            other => panic!("expected status error, got {other}"),
        }
    }

    #[test]
    fn fetch_all_rejects_malformed_success_body() {
        let (url, server) = serve_once("200 OK", r#"{"message":"Bad Request"}"#);
        let err = RestCountries::new(url).fetch_all().unwrap_err();
        server.join().unwrap();

        assert!(matches!(err, FetchError::Decode(_)), "unexpected: {err}");
    }

    #[test]
    fn parse_keeps_upstream_order() {
        let body = r#"[
            { "name": { "common": "Germany" }, "flags": { "png": "g.png" }, "cca3": "DEU" },
            { "name": { "common": "France" }, "flags": { "png": "f.png" }, "cca3": "FRA" },
            { "name": { "common": "Austria" }, "flags": { "png": "a.png" }, "cca3": "AUT" }
        ]"#;
        let records = parse_countries(body).unwrap();
        let codes: Vec<&str> = records.iter().map(|r| r.identifier.as_str()).collect();
        assert_eq!(codes, vec!["DEU", "FRA", "AUT"]);
    }

    #[test]
    fn parse_empty_array_is_empty_set() {
        assert!(parse_countries("[]").unwrap().is_empty());
    }

    #[test]
    fn parse_rejects_non_array_body() {
        let err = parse_countries(r#"{ "status": 400, "message": "Bad Request" }"#).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn parse_rejects_element_missing_flag() {
        let body = r#"[{ "name": { "common": "France" }, "cca3": "FRA" }]"#;
        assert!(matches!(parse_countries(body), Err(FetchError::Decode(_))));
    }

    #[test]
    fn default_source_uses_fixed_endpoint() {
        assert_eq!(RestCountries::default().endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn unreachable_endpoint_is_transport_error() {
        // Discard port; nothing listens here.
        let source = RestCountries::new("http://127.0.0.1:9/v3.1/all");
        let err = source.fetch_all().unwrap_err();
        assert!(matches!(err, FetchError::Transport { .. }), "unexpected: {err}");
    }
}
