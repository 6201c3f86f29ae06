//! Geocoded location record and the address component mapping.

use crate::error::Result;
use crate::types::{ComponentType, GeocodeResponse, GeocodeResult, RouteMapping};
use std::collections::HashMap;

/// Structured representation of a geocoded address.
///
/// Every field is optional: it is only present when the provider's answer
/// carried the corresponding component.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    latitude: Option<f64>,
    longitude: Option<f64>,
    address: Option<String>,
    street_number: Option<String>,
    street_name: Option<String>,
    town_name: Option<String>,
    county_name: Option<String>,
    state_long_name: Option<String>,
    state_short_name: Option<String>,
    country_long_name: Option<String>,
    country_short_name: Option<String>,
    postal_code: Option<String>,
}

impl Location {
    /// Build a location from the best match of a geocoding result.
    ///
    /// Components are applied in order and only their first type tag is
    /// looked at, so a later component overwrites what an earlier one set.
    pub fn from_result(result: &GeocodeResult, route_mapping: RouteMapping) -> Self {
        let mut location = Location::default();

        if let Some(point) = result.geometry.as_ref().and_then(|g| g.location) {
            location.latitude = Some(point.lat);
            location.longitude = Some(point.lng);
        }
        location.address = result.formatted_address.clone();

        for component in &result.address_components {
            let Some(kind) = component.primary_type() else {
                continue;
            };
            let long_name = component.long_name.clone();
            let short_name = component.short_name.clone();

            match kind {
                ComponentType::StreetNumber => location.street_number = long_name,
                ComponentType::Route => match route_mapping {
                    RouteMapping::Compatible => location.street_number = short_name,
                    RouteMapping::StreetName => location.street_name = short_name,
                },
                ComponentType::AdministrativeAreaLevel3 => location.town_name = long_name,
                ComponentType::AdministrativeAreaLevel2 => location.county_name = long_name,
                ComponentType::AdministrativeAreaLevel1 => {
                    location.state_long_name = long_name;
                    location.state_short_name = short_name;
                }
                ComponentType::Country => {
                    location.country_long_name = long_name;
                    location.country_short_name = short_name;
                }
                ComponentType::PostalCode => location.postal_code = short_name,
                ComponentType::Other(_) => {}
            }
        }

        location
    }

    /// Decode a raw response body and map its first result.
    ///
    /// Returns `Ok(None)` when the provider matched nothing and an error when
    /// the body is malformed or carries a failure status.
    pub fn from_response_body(body: &str, route_mapping: RouteMapping) -> Result<Option<Self>> {
        let response: GeocodeResponse = serde_json::from_str(body)?;
        Self::from_response(&response, route_mapping)
    }

    /// Map an already decoded response.
    pub fn from_response(
        response: &GeocodeResponse,
        route_mapping: RouteMapping,
    ) -> Result<Option<Self>> {
        log::debug!(
            "Geocoding response with status {:?} and {} result(s)",
            response.status,
            response.results.len()
        );

        match response.results.first() {
            Some(best) => Ok(Some(Self::from_result(best, route_mapping))),
            None if response.is_error_status() => {
                let status = response.status.clone().unwrap_or_default();
                log::warn!(
                    "Geocoding provider rejected the request: {} {}",
                    status,
                    response.error_message.as_deref().unwrap_or_default()
                );
                Err(crate::error::Error::provider(
                    status,
                    response.error_message.clone(),
                ))
            }
            None => Ok(None),
        }
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> Option<f64> {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> Option<f64> {
        self.longitude
    }

    /// Latitude and longitude, if both are known.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }

    /// Formatted address as returned by the provider.
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Street number.
    ///
    /// With [`RouteMapping::Compatible`] this holds the route's short name
    /// whenever the route component comes after the street number.
    pub fn street_number(&self) -> Option<&str> {
        self.street_number.as_deref()
    }

    /// Street name. Only populated with [`RouteMapping::StreetName`].
    pub fn street_name(&self) -> Option<&str> {
        self.street_name.as_deref()
    }

    /// Town name.
    pub fn town_name(&self) -> Option<&str> {
        self.town_name.as_deref()
    }

    /// County name.
    pub fn county_name(&self) -> Option<&str> {
        self.county_name.as_deref()
    }

    /// Full state name.
    pub fn state_long_name(&self) -> Option<&str> {
        self.state_long_name.as_deref()
    }

    /// State abbreviation.
    pub fn state_short_name(&self) -> Option<&str> {
        self.state_short_name.as_deref()
    }

    /// Full country name.
    pub fn country_long_name(&self) -> Option<&str> {
        self.country_long_name.as_deref()
    }

    /// Country abbreviation.
    pub fn country_short_name(&self) -> Option<&str> {
        self.country_short_name.as_deref()
    }

    /// Postal code.
    pub fn postal_code(&self) -> Option<&str> {
        self.postal_code.as_deref()
    }

    /// Get all non-empty textual fields as a map.
    pub fn components(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();

        macro_rules! add_component {
            ($field:expr, $name:expr) => {
                if let Some(ref value) = $field {
                    map.insert($name.to_string(), value.clone());
                }
            };
        }

        add_component!(self.address, "address");
        add_component!(self.street_number, "street_number");
        add_component!(self.street_name, "street_name");
        add_component!(self.town_name, "town_name");
        add_component!(self.county_name, "county_name");
        add_component!(self.state_long_name, "state_long_name");
        add_component!(self.state_short_name, "state_short_name");
        add_component!(self.country_long_name, "country_long_name");
        add_component!(self.country_short_name, "country_short_name");
        add_component!(self.postal_code, "postal_code");

        map
    }

    /// Check if the location has any field set.
    pub fn is_empty(&self) -> bool {
        self.latitude.is_none() && self.longitude.is_none() && self.components().is_empty()
    }
}
