use super::types::SearchResult;
use crate::sdk::config::GeocoderConfig;
use crate::sdk::geocoding::coord::Coord;
use crate::sdk::geocoding::error::GeocodeError;
use crate::sdk::geocoding::service::Geocoder;
use reqwest::{Client, Url};

/// Geocoder backed by an OpenStreetMap Nominatim `/search` endpoint.
pub struct NominatimProvider {
    client: Client,
    base_url: String,
    country: String,
}

impl NominatimProvider {
    pub fn new(config: &GeocoderConfig) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            country: config.country.clone(),
        })
    }

    /// Single best match, restricted to the configured country.
    pub fn search_url(&self, name: &str) -> Result<Url, GeocodeError> {
        Url::parse_with_params(
            &format!("{}/search", self.base_url),
            &[
                ("format", "json"),
                ("limit", "1"),
                ("q", name),
                ("countrycodes", self.country.as_str()),
            ],
        )
        .map_err(|e| GeocodeError::Url(e.to_string()))
    }
}

impl Geocoder for NominatimProvider {
    async fn geocode(&self, name: &str) -> Result<Option<Coord>, GeocodeError> {
        let url = self.search_url(name)?;
        log::debug!("[PROVIDER] Calling nominatim search for: \"{}\"", name);

        let response = match self.client.get(url.clone()).send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::error!("Failed to send GET request. URL: {}\nError: {}", url, e);
                return Err(GeocodeError::Request(e));
            }
        };

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            log::error!(
                "API returned non-success status: {}. URL: {}\nBody: {}",
                status,
                url,
                text
            );
            return Err(GeocodeError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        parse_search_response(&text).map_err(|e| {
            log::error!(
                "Failed to parse search response. URL: {}\nError: {}. Body: {}",
                url,
                e,
                text
            );
            e
        })
    }
}

/// Takes the first record of a `/search?format=json` body, if there is one.
pub fn parse_search_response(body: &str) -> Result<Option<Coord>, GeocodeError> {
    let results: Vec<SearchResult> = serde_json::from_str(body)?;

    let Some(first) = results.into_iter().next() else {
        return Ok(None);
    };

    let lat = parse_degrees("lat", &first.lat)?;
    let lon = parse_degrees("lon", &first.lon)?;
    if let Some(label) = &first.display_name {
        log::debug!("[PROVIDER] Best match: {}", label);
    }
    Coord::new(lat, lon).map(Some)
}

fn parse_degrees(field: &'static str, value: &str) -> Result<f64, GeocodeError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| GeocodeError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}
