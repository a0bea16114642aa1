pub mod coord;
pub mod error;
pub mod provider;
pub mod service;

pub use coord::Coord;
pub use error::GeocodeError;
pub use provider::NominatimProvider;
pub use service::Geocoder;
