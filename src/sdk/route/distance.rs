use crate::sdk::geocoding::Coord;
use serde::Serialize;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points, in kilometres.
pub fn haversine_km(from: Coord, to: Coord) -> f64 {
    let d_lat = (to.lat() - from.lat()).to_radians();
    let d_lon = (to.lon() - from.lon()).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat().to_radians().cos() * to.lat().to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Sum of consecutive segments. Order matters; fewer than 2 points is 0.
pub fn path_distance_km(path: &[Coord]) -> f64 {
    path.windows(2).map(|pair| haversine_km(pair[0], pair[1])).sum()
}

/// Axis-aligned box around a path, for fitting the map view.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south_west: Coord,
    pub north_east: Coord,
}

impl Bounds {
    pub fn from_points(points: &[Coord]) -> Option<Self> {
        let first = points.first()?;
        let (mut south, mut west) = (first.lat(), first.lon());
        let (mut north, mut east) = (south, west);

        for p in &points[1..] {
            south = south.min(p.lat());
            north = north.max(p.lat());
            west = west.min(p.lon());
            east = east.max(p.lon());
        }

        // Min/max of in-range values stays in range.
        Some(Self {
            south_west: Coord::new_unchecked(south, west),
            north_east: Coord::new_unchecked(north, east),
        })
    }
}
