//! HTTP transport used to reach the geocoding endpoint.

use crate::error::Result;
use std::sync::Arc;

/// Performs the single GET request of a lookup.
///
/// Implementations return the raw response body; decoding happens in the
/// caller so a transport never needs to know the response shape.
pub trait Transport {
    /// Fetch `url` and return the response body.
    fn get(&self, url: &str) -> Result<String>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str) -> Result<String> {
        (**self).get(url)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn get(&self, url: &str) -> Result<String> {
        (**self).get(url)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn get(&self, url: &str) -> Result<String> {
        (**self).get(url)
    }
}

/// Blocking transport backed by `reqwest`.
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

#[cfg(feature = "http")]
impl HttpTransport {
    /// Create a transport with reqwest's default settings.
    pub fn new() -> Result<Self> {
        Self::with_timeout(None)
    }

    /// Create a transport with an optional total request timeout.
    ///
    /// `None` keeps the client's own default.
    pub fn with_timeout(timeout: Option<std::time::Duration>) -> Result<Self> {
        let client = client_builder(timeout).build().map_err(|e| {
            crate::error::Error::transport(format!("Failed to build HTTP client: {e}"))
        })?;
        Ok(Self { client })
    }

    /// Wrap an existing client.
    pub fn from_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

#[cfg(feature = "http")]
fn client_builder(timeout: Option<std::time::Duration>) -> reqwest::blocking::ClientBuilder {
    let builder = reqwest::blocking::Client::builder();
    match timeout {
        Some(timeout) => builder.timeout(timeout),
        None => builder,
    }
}

#[cfg(feature = "http")]
impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<String> {
        // The URL carries the API key, keep it out of error messages.
        let response = self.client.get(url).send().map_err(|e| {
            crate::error::Error::transport(format!(
                "Failed to send request: {}",
                e.without_url()
            ))
        })?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("Geocoding endpoint replied with status {status}");
            return Err(crate::error::Error::http_status(status.as_u16()));
        }

        response.text().map_err(|e| {
            crate::error::Error::transport(format!(
                "Failed to read response: {}",
                e.without_url()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use assert_matches::assert_matches;

    struct Echo;

    impl Transport for Echo {
        fn get(&self, url: &str) -> Result<String> {
            Ok(url.to_string())
        }
    }

    #[test]
    fn test_forwarding_impls() {
        let boxed: Box<dyn Transport> = Box::new(Echo);
        assert_eq!(boxed.get("a").unwrap(), "a");

        let shared = Arc::new(Echo);
        assert_eq!(shared.get("b").unwrap(), "b");
        assert_eq!((&Echo).get("c").unwrap(), "c");
    }

    /// Answer a single request on a loopback port with `response`.
    #[cfg(feature = "http")]
    fn serve_once(response: String) -> std::net::SocketAddr {
        use std::io::{Read, Write};

        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            stream.write_all(response.as_bytes()).unwrap();
        });
        addr
    }

    #[cfg(feature = "http")]
    fn loopback_transport(timeout: Option<std::time::Duration>) -> HttpTransport {
        HttpTransport::from_client(client_builder(timeout).no_proxy().build().unwrap())
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_success_returns_body() {
        let body = r#"{"results": [], "status": "ZERO_RESULTS"}"#;
        let addr = serve_once(format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        ));

        let transport = loopback_transport(Some(std::time::Duration::from_secs(5)));
        assert_eq!(
            transport.get(&format!("http://{addr}/geocode/json?key=SECRET&address=x")).unwrap(),
            body
        );
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_error_status_is_reported() {
        let addr = serve_once(
            "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                .to_string(),
        );

        let transport = loopback_transport(Some(std::time::Duration::from_secs(5)));
        let err = transport
            .get(&format!("http://{addr}/geocode/json?key=SECRET&address=x"))
            .unwrap_err();
        assert!(!err.to_string().contains("SECRET"));
        assert_matches!(err, Error::HttpStatus { status: 503 });
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_timeout_is_applied() {
        // Connections queue in the backlog but are never answered.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let transport = loopback_transport(Some(std::time::Duration::from_millis(200)));
        let started = std::time::Instant::now();
        let err = transport
            .get(&format!("http://{addr}/geocode/json?key=SECRET&address=x"))
            .unwrap_err();

        assert!(started.elapsed() < std::time::Duration::from_secs(5));
        assert!(!err.to_string().contains("SECRET"));
        assert_matches!(err, Error::Transport { .. });
        drop(listener);
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_unreachable_endpoint_is_a_transport_error() {
        let client = reqwest::blocking::Client::builder()
            .no_proxy()
            .timeout(std::time::Duration::from_secs(5))
            .build()
            .unwrap();
        let transport = HttpTransport::from_client(client);
        // Nothing listens on the discard port.
        assert_matches!(
            transport.get("http://127.0.0.1:9/maps/api/geocode/json"),
            Err(Error::Transport { .. })
        );
    }
}
