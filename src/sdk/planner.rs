// Command handlers binding the route engine to a map and a list view
use super::config::MapDefaults;
use super::geocoding::Geocoder;
use super::route::{Bounds, Route, RouteEngine, RouteError, RouteSummary};
use super::surface::{MapSurface, Notice, RouteView};

pub struct RoutePlanner<G, M, V> {
    route: Route,
    engine: RouteEngine<G>,
    map: M,
    view: V,
    defaults: MapDefaults,
}

impl<G, M, V> RoutePlanner<G, M, V>
where
    G: Geocoder,
    M: MapSurface,
    V: RouteView,
{
    pub fn new(geocoder: G, map: M, view: V, defaults: MapDefaults) -> Self {
        let mut planner = Self {
            route: Route::new(),
            engine: RouteEngine::new(geocoder),
            map,
            view,
            defaults,
        };
        planner.map.set_view(defaults.center, defaults.zoom);
        planner
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Adds a place and looks it up straight away so its marker shows up.
    ///
    /// Blank input is ignored. A failed lookup keeps the waypoint in the list
    /// and raises a notice; it will be retried by the next calculation.
    pub async fn on_append(&mut self, name: &str) -> Option<usize> {
        let index = match self.route.push(name) {
            Ok(index) => index,
            Err(RouteError::EmptyInput) => {
                log::debug!("Ignoring blank place name");
                return None;
            }
            Err(e) => {
                log::error!("Unexpected error adding {:?}: {}", name, e);
                return None;
            }
        };
        self.view.show_waypoints(self.route.waypoints());

        match self.engine.resolve_one(&mut self.route, index).await {
            Ok(_) => self.refresh_markers(),
            Err(RouteError::NotFound { name }) => {
                self.view.notify(&Notice::GeocodeFailed { name });
            }
            Err(e) => log::error!("Failed to resolve waypoint {}: {}", index, e),
        }
        Some(index)
    }

    pub fn on_list(&mut self) {
        self.view.show_waypoints(self.route.waypoints());
    }

    pub fn on_remove(&mut self, index: usize) -> Result<(), RouteError> {
        let removed = self.route.remove(index)?;
        log::debug!("Removed \"{}\" from position {}", removed.name, index);
        self.view.show_waypoints(self.route.waypoints());
        self.refresh_markers();
        Ok(())
    }

    /// Resolves whatever is still missing, draws the route and shows the total.
    pub async fn on_resolve_all(&mut self) -> Result<RouteSummary, RouteError> {
        self.map.clear_path();

        let result = self.engine.resolve_all_and_measure(&mut self.route).await;
        match &result {
            Ok(summary) => {
                self.notify_failures(&summary.failed);
                self.refresh_markers();
                self.map.draw_path(&summary.path);
                if let Some(bounds) = Bounds::from_points(&summary.path) {
                    self.map.fit_bounds(bounds, self.defaults.fit_padding_px);
                }
                self.view.show_distance(Some(&summary.display_text()));
            }
            Err(RouteError::InsufficientWaypoints { .. }) => {
                self.view.notify(&Notice::TooFewPlaces);
            }
            Err(RouteError::InsufficientResolvedWaypoints { failed, .. }) => {
                self.notify_failures(failed);
                self.refresh_markers();
                self.view.notify(&Notice::TooFewResolved);
            }
            Err(e) => log::error!("Route calculation failed: {}", e),
        }
        result
    }

    /// Discards every waypoint and puts the map back where it started.
    pub fn on_reset(&mut self) {
        self.route.clear();
        self.view.show_waypoints(self.route.waypoints());
        self.map.clear_markers();
        self.map.clear_path();
        self.view.show_distance(None);
        self.map.set_view(self.defaults.center, self.defaults.zoom);
    }

    fn notify_failures(&mut self, failed: &[String]) {
        for name in failed {
            self.view.notify(&Notice::GeocodeFailed { name: name.clone() });
        }
    }

    fn refresh_markers(&mut self) {
        self.map.clear_markers();
        for (waypoint, coord) in self.route.resolved() {
            self.map.set_marker(coord, &waypoint.name);
        }
    }
}
