use super::error::RouteError;
use crate::sdk::geocoding::Coord;
use serde::Serialize;

/// One user-entered place. `coord` is `None` until a lookup succeeds.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Waypoint {
    pub name: String,
    pub coord: Option<Coord>,
}

impl Waypoint {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            coord: None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.coord.is_some()
    }
}

/// Ordered waypoints. Insertion order is the travel order; duplicates are fine.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Route {
    waypoints: Vec<Waypoint>,
}

impl Route {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a place after trimming it. Returns the new waypoint's index.
    pub fn push(&mut self, name: &str) -> Result<usize, RouteError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RouteError::EmptyInput);
        }
        self.waypoints.push(Waypoint::new(name));
        Ok(self.waypoints.len() - 1)
    }

    pub fn remove(&mut self, index: usize) -> Result<Waypoint, RouteError> {
        if index >= self.waypoints.len() {
            return Err(RouteError::IndexOutOfRange {
                index,
                len: self.waypoints.len(),
            });
        }
        Ok(self.waypoints.remove(index))
    }

    /// Drops every waypoint, resolved or not.
    pub fn clear(&mut self) {
        self.waypoints.clear();
    }

    pub fn get(&self, index: usize) -> Option<&Waypoint> {
        self.waypoints.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Waypoint> {
        self.waypoints.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Waypoint> {
        self.waypoints.iter()
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn names(&self) -> Vec<&str> {
        self.waypoints.iter().map(|w| w.name.as_str()).collect()
    }

    /// Resolved waypoints with their coordinates, in route order.
    pub fn resolved(&self) -> impl Iterator<Item = (&Waypoint, Coord)> {
        self.waypoints
            .iter()
            .filter_map(|w| w.coord.map(|c| (w, c)))
    }

    /// Polyline through every resolved waypoint. Unresolved ones are skipped.
    pub fn path(&self) -> Vec<Coord> {
        self.resolved().map(|(_, c)| c).collect()
    }
}
