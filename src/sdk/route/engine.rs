use super::distance::path_distance_km;
use super::error::RouteError;
use super::waypoint::Route;
use crate::sdk::geocoding::{Coord, Geocoder};
use serde::Serialize;

/// Result of a batch resolution.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RouteSummary {
    /// Resolved points in route order.
    pub path: Vec<Coord>,
    /// Full precision; use [`RouteSummary::rounded_km`] for display.
    pub distance_km: f64,
    /// Names that could not be resolved during this call.
    pub failed: Vec<String>,
}

impl RouteSummary {
    pub fn rounded_km(&self) -> f64 {
        (self.distance_km * 100.0).round() / 100.0
    }

    pub fn display_text(&self) -> String {
        format!("Total Air Route Distance: {:.2} km", self.distance_km)
    }
}

pub struct RouteEngine<G> {
    geocoder: G,
}

impl<G: Geocoder> RouteEngine<G> {
    pub fn new(geocoder: G) -> Self {
        Self { geocoder }
    }

    pub fn geocoder(&self) -> &G {
        &self.geocoder
    }

    /// Resolves the waypoint at `index` in place.
    ///
    /// An already-resolved waypoint is returned as-is without a lookup. On
    /// failure the waypoint stays unresolved and the error carries its name.
    pub async fn resolve_one(&self, route: &mut Route, index: usize) -> Result<Coord, RouteError> {
        let len = route.len();
        let waypoint = route
            .get_mut(index)
            .ok_or(RouteError::IndexOutOfRange { index, len })?;

        if let Some(coord) = waypoint.coord {
            log::debug!("[ENGINE] \"{}\" already resolved at {}", waypoint.name, coord);
            return Ok(coord);
        }

        match self.lookup(&waypoint.name).await {
            Some(coord) => {
                waypoint.coord = Some(coord);
                Ok(coord)
            }
            None => Err(RouteError::NotFound {
                name: waypoint.name.clone(),
            }),
        }
    }

    /// Resolves every outstanding waypoint, one lookup at a time, then sums
    /// the great-circle distance over the resolved waypoints in route order.
    pub async fn resolve_all_and_measure(&self, route: &mut Route) -> Result<RouteSummary, RouteError> {
        if route.len() < 2 {
            return Err(RouteError::InsufficientWaypoints { count: route.len() });
        }

        let mut failed = Vec::new();
        for index in 0..route.len() {
            match self.resolve_one(route, index).await {
                Ok(_) => {}
                Err(RouteError::NotFound { name }) => failed.push(name),
                Err(e) => return Err(e),
            }
        }

        let path = route.path();
        if path.len() < 2 {
            log::info!(
                "[ENGINE] Only {} of {} waypoints resolved, skipping distance",
                path.len(),
                route.len()
            );
            return Err(RouteError::InsufficientResolvedWaypoints {
                resolved: path.len(),
                failed,
            });
        }

        let distance_km = path_distance_km(&path);
        log::info!(
            "[ENGINE] Route through {} points: {:.2} km ({} unresolved)",
            path.len(),
            distance_km,
            failed.len()
        );

        Ok(RouteSummary {
            path,
            distance_km,
            failed,
        })
    }

    // Not-found and transport failures look the same to callers; only the log tells them apart.
    async fn lookup(&self, name: &str) -> Option<Coord> {
        match self.geocoder.geocode(name).await {
            Ok(Some(coord)) => {
                log::debug!("[ENGINE] Resolved \"{}\" to {}", name, coord);
                Some(coord)
            }
            Ok(None) => {
                log::info!("[ENGINE] No match for \"{}\"", name);
                None
            }
            Err(e) => {
                log::warn!("[ENGINE] Lookup for \"{}\" failed: {}", name, e);
                None
            }
        }
    }
}
