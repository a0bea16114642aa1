pub mod sdk;

pub use sdk::config::{ConfigError, GeocoderConfig, MapDefaults};
pub use sdk::geocoding::{Coord, GeocodeError, Geocoder, NominatimProvider};
pub use sdk::planner::RoutePlanner;
pub use sdk::route::{
    haversine_km, path_distance_km, Bounds, Route, RouteEngine, RouteError, RouteSummary, Waypoint,
};
pub use sdk::surface::{MapSurface, Notice, RouteView};
