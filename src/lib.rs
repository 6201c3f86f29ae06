//! # gmaps-geocode
//!
//! Blocking client for the Google Maps geocoding API.
//!
//! Send a free-text address, get back the coordinates, the formatted address
//! and the administrative components (street, town, county, state, country,
//! postal code) of the best match.
//!
//! ## Features
//!
//! - **One request per lookup**: a single HTTP GET, no retries, no caching
//! - **Typed errors**: empty input, transport, HTTP status, malformed body and
//!   provider refusals are all distinct
//! - **Value results**: every lookup returns a fresh [`Location`]; the client
//!   itself holds configuration only and can be shared between threads
//! - **Pluggable transport**: swap the HTTP layer through the [`Transport`] trait
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gmaps_geocode::Geocoder;
//!
//! let geocoder = Geocoder::new("my-api-key")?;
//!
//! if let Some(location) = geocoder.lookup("1600 Amphitheatre Parkway, Mountain View, CA")? {
//!     println!("Coordinates: {:?}", location.coordinates());
//!     println!("Postal code: {}", location.postal_code().unwrap_or_default());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod error;
pub mod location;
pub mod transport;
pub mod types;

use std::time::Duration;

// Re-export main API
pub use error::{Error, Result};
pub use location::Location;
#[cfg(feature = "http")]
pub use transport::HttpTransport;
pub use transport::Transport;
pub use types::*;

/// Host serving the geocoding API.
pub const MAPS_HOST: &str = "maps.googleapis.com";

/// Environment variable holding the API key for [`GeocoderConfig::from_env`].
pub const API_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";

/// Environment variable overriding the endpoint for [`GeocoderConfig::from_env`].
pub const ENDPOINT_ENV: &str = "GOOGLE_MAPS_GEOCODE_ENDPOINT";

/// Default JSON geocoding endpoint.
pub fn default_endpoint() -> String {
    format!("https://{MAPS_HOST}/maps/api/geocode/json")
}

/// Main entry point for geocoding lookups.
///
/// The geocoder holds configuration and a transport, nothing else. Each
/// call to [`Geocoder::lookup`] is independent of the previous ones.
///
/// # Examples
///
/// ```rust,no_run
/// use gmaps_geocode::{Geocoder, GeocoderConfig, RouteMapping};
///
/// let config = GeocoderConfig::builder()
///     .api_key("my-api-key")
///     .route_mapping(RouteMapping::StreetName)
///     .build();
///
/// let geocoder = Geocoder::with_config(config)?;
/// let location = geocoder.lookup("Piazza del Colosseo, Roma")?;
/// # Ok::<(), gmaps_geocode::Error>(())
/// ```
pub struct Geocoder<T = DefaultTransport> {
    config: GeocoderConfig,
    base_url: String,
    transport: T,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Geocoder<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // base_url embeds the key
        f.debug_struct("Geocoder")
            .field("config", &self.config)
            .field("transport", &self.transport)
            .finish()
    }
}

/// Transport used when none is named.
#[cfg(feature = "http")]
pub type DefaultTransport = HttpTransport;

/// Transport used when none is named.
#[cfg(not(feature = "http"))]
pub type DefaultTransport = Box<dyn Transport + Send + Sync>;

#[cfg(feature = "http")]
impl Geocoder<HttpTransport> {
    /// Create a geocoder for `api_key` with the default configuration.
    ///
    /// The key is not validated; an empty key is accepted and simply sent
    /// along with every request.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(GeocoderConfig::new(api_key))
    }

    /// Create a geocoder with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_config(config: GeocoderConfig) -> Result<Self> {
        let transport = HttpTransport::with_timeout(config.timeout)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> Geocoder<T> {
    /// Create a geocoder that sends its requests through `transport`.
    ///
    /// The configured timeout is ignored here; it is the transport's business.
    pub fn with_transport(config: GeocoderConfig, transport: T) -> Self {
        let base_url = config.base_url();
        Self {
            config,
            base_url,
            transport,
        }
    }

    /// Geocode a free-text address.
    ///
    /// Performs exactly one request and maps the provider's best match.
    ///
    /// # Returns
    ///
    /// `Ok(Some(location))` on a match, `Ok(None)` when the provider found
    /// nothing for the address.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyAddress`] if `address` is empty; no request is made
    /// - [`Error::Transport`] or [`Error::HttpStatus`] if the request fails
    /// - [`Error::Decode`] if the body is not a geocoding response
    /// - [`Error::Provider`] if the provider refused the request
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use gmaps_geocode::Geocoder;
    ///
    /// let geocoder = Geocoder::new("my-api-key")?;
    /// match geocoder.lookup("221B Baker Street, London")? {
    ///     Some(location) => println!("Found: {:?}", location.address()),
    ///     None => println!("No match"),
    /// }
    /// # Ok::<(), gmaps_geocode::Error>(())
    /// ```
    pub fn lookup(&self, address: &str) -> Result<Option<Location>> {
        if address.is_empty() {
            return Err(Error::EmptyAddress);
        }

        let url = self.request_url(address);
        log::debug!("Geocoding '{}' via {}", address, self.config.redacted_base_url());

        let body = self.transport.get(&url)?;
        Location::from_response_body(&body, self.config.route_mapping)
    }

    /// Full request URL for `address`.
    pub fn request_url(&self, address: &str) -> String {
        let encoded: String = url::form_urlencoded::byte_serialize(address.as_bytes()).collect();
        format!("{}&address={}", self.base_url, encoded)
    }

    /// Base URL with the key already attached.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the configuration used by this instance.
    pub fn config(&self) -> &GeocoderConfig {
        &self.config
    }

    /// Get the transport used by this instance.
    pub fn transport(&self) -> &T {
        &self.transport
    }
}

/// Configuration for a [`Geocoder`].
#[derive(Clone)]
pub struct GeocoderConfig {
    /// API key appended to every request
    pub api_key: String,

    /// Geocoding endpoint, without query string
    pub endpoint: String,

    /// Total request timeout; `None` keeps the transport's default
    pub timeout: Option<Duration>,

    /// Where `route` components are stored
    pub route_mapping: RouteMapping,
}

impl std::fmt::Debug for GeocoderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocoderConfig")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .field("route_mapping", &self.route_mapping)
            .finish()
    }
}

impl GeocoderConfig {
    /// Create a configuration for `api_key` with default settings.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::builder().api_key(api_key).build()
    }

    /// Create a new configuration builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gmaps_geocode::GeocoderConfig;
    /// use std::time::Duration;
    ///
    /// let config = GeocoderConfig::builder()
    ///     .api_key("my-api-key")
    ///     .timeout(Duration::from_secs(10))
    ///     .build();
    /// ```
    pub fn builder() -> GeocoderConfigBuilder {
        GeocoderConfigBuilder::new()
    }

    /// Load the configuration from the environment.
    ///
    /// Reads the key from `GOOGLE_MAPS_API_KEY` and, if set, the endpoint
    /// from `GOOGLE_MAPS_GEOCODE_ENDPOINT`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the key variable is not set.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|e| Error::config(format!("{API_KEY_ENV}: {e}")))?;

        let mut builder = Self::builder().api_key(api_key);
        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
            log::info!("Using geocoding endpoint {endpoint} from {ENDPOINT_ENV}");
            builder = builder.endpoint(endpoint);
        }
        Ok(builder.build())
    }

    /// Endpoint URL with the key query parameter attached.
    ///
    /// The key is appended verbatim.
    pub fn base_url(&self) -> String {
        format!("{}?key={}", self.endpoint, self.api_key)
    }

    fn redacted_base_url(&self) -> String {
        format!("{}?key=<redacted>", self.endpoint)
    }
}

/// Builder for GeocoderConfig.
#[derive(Debug, Clone)]
pub struct GeocoderConfigBuilder {
    api_key: String,
    endpoint: String,
    timeout: Option<Duration>,
    route_mapping: RouteMapping,
}

impl GeocoderConfigBuilder {
    /// Create a new configuration builder with default values.
    pub fn new() -> Self {
        Self {
            api_key: String::new(),
            endpoint: default_endpoint(),
            timeout: None,
            route_mapping: RouteMapping::default(),
        }
    }

    /// Set the API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Set a custom endpoint.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the total request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set where `route` components are stored.
    pub fn route_mapping(mut self, route_mapping: RouteMapping) -> Self {
        self.route_mapping = route_mapping;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> GeocoderConfig {
        GeocoderConfig {
            api_key: self.api_key,
            endpoint: self.endpoint,
            timeout: self.timeout,
            route_mapping: self.route_mapping,
        }
    }
}

impl Default for GeocoderConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
