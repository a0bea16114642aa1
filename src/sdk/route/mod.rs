pub mod distance;
pub mod engine;
pub mod error;
pub mod waypoint;

pub use distance::{haversine_km, path_distance_km, Bounds, EARTH_RADIUS_KM};
pub use engine::{RouteEngine, RouteSummary};
pub use error::RouteError;
pub use waypoint::{Route, Waypoint};
