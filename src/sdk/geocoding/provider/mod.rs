pub mod nominatim;
pub mod types;

pub use nominatim::{parse_search_response, NominatimProvider};
