use serde::Deserialize;

// --- Data Structures for parsing Nominatim /search responses ---

/// One match record. Nominatim encodes the coordinates as strings.
#[derive(Deserialize, Debug)]
pub struct SearchResult {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: Option<String>,
}
