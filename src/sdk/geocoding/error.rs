use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeocodeError {
    #[error("Underlying request failed: {0}")]
    Request(#[from] reqwest::Error),

    // Non-success HTTP status, with whatever body the service sent back
    #[error("Lookup service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse JSON response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Field `{field}` is not a number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Coordinate out of range: lat={lat}, lon={lon}")]
    OutOfRange { lat: f64, lon: f64 },

    #[error("Invalid lookup URL: {0}")]
    Url(String),
}
