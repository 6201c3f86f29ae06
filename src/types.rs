//! Wire types of the geocoding API and the component tags we understand.

use serde::Deserialize;
use std::fmt;

/// Status reported when the request succeeded and matched something.
pub const STATUS_OK: &str = "OK";

/// Status reported when the request succeeded but matched nothing.
pub const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

/// Top level body returned by the geocoding endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeocodeResponse {
    /// Candidate results, best match first
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    /// Request status, e.g. `OK`, `ZERO_RESULTS` or `REQUEST_DENIED`
    #[serde(default)]
    pub status: Option<String>,
    /// Explanation that accompanies a failure status
    #[serde(default)]
    pub error_message: Option<String>,
}

impl GeocodeResponse {
    /// Whether the status denotes a provider side failure.
    ///
    /// A missing status is treated as success.
    pub fn is_error_status(&self) -> bool {
        match self.status.as_deref() {
            None | Some(STATUS_OK) | Some(STATUS_ZERO_RESULTS) => false,
            Some(_) => true,
        }
    }
}

/// A single geocoding match.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeocodeResult {
    /// Human readable address of the match
    #[serde(default)]
    pub formatted_address: Option<String>,
    /// Location of the match
    #[serde(default)]
    pub geometry: Option<Geometry>,
    /// Structured fragments of the address
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
}

/// Geometry block of a result.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Geometry {
    /// Geocoded point
    #[serde(default)]
    pub location: Option<LatLng>,
}

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LatLng {
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lng: f64,
}

/// One tagged fragment of a geocoded address.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddressComponent {
    /// Full form, e.g. "California"
    #[serde(default)]
    pub long_name: Option<String>,
    /// Abbreviated form, e.g. "CA"
    #[serde(default)]
    pub short_name: Option<String>,
    /// Type tags, most specific first
    #[serde(default)]
    pub types: Vec<String>,
}

impl AddressComponent {
    /// The component's primary tag. Only the first tag is significant.
    pub fn primary_type(&self) -> Option<ComponentType> {
        self.types.first().map(|tag| ComponentType::from_str(tag))
    }
}

/// Address component tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ComponentType {
    /// House or building number
    StreetNumber,
    /// Named route, i.e. the street
    Route,
    /// Third order civil entity, usually a town
    AdministrativeAreaLevel3,
    /// Second order civil entity, usually a county
    AdministrativeAreaLevel2,
    /// First order civil entity, usually a state
    AdministrativeAreaLevel1,
    /// National political entity
    Country,
    /// Postal code
    PostalCode,
    /// Any tag without a mapping
    Other(String),
}

impl ComponentType {
    /// Convert to the provider's tag string.
    pub fn as_str(&self) -> &str {
        match self {
            ComponentType::StreetNumber => "street_number",
            ComponentType::Route => "route",
            ComponentType::AdministrativeAreaLevel3 => "administrative_area_level_3",
            ComponentType::AdministrativeAreaLevel2 => "administrative_area_level_2",
            ComponentType::AdministrativeAreaLevel1 => "administrative_area_level_1",
            ComponentType::Country => "country",
            ComponentType::PostalCode => "postal_code",
            ComponentType::Other(tag) => tag,
        }
    }

    /// Parse from the provider's tag string.
    pub fn from_str(tag: &str) -> Self {
        match tag {
            "street_number" => ComponentType::StreetNumber,
            "route" => ComponentType::Route,
            "administrative_area_level_3" => ComponentType::AdministrativeAreaLevel3,
            "administrative_area_level_2" => ComponentType::AdministrativeAreaLevel2,
            "administrative_area_level_1" => ComponentType::AdministrativeAreaLevel1,
            "country" => ComponentType::Country,
            "postal_code" => ComponentType::PostalCode,
            _ => ComponentType::Other(tag.to_string()),
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the `route` component ends up.
///
/// The historical mapping writes the route's short name into the street
/// number, which leaves [`crate::Location::street_name`] permanently empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouteMapping {
    /// `route` overwrites the street number (historical behaviour)
    #[default]
    Compatible,
    /// `route` fills the street name
    StreetName,
}
